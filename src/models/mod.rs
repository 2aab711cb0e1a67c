//! Core data models for the hour engine.
//!
//! This module contains the stored facts everything else is computed from:
//! the closure configuration, hour entries, and hour adjustments.

mod closure_config;
mod hour_adjustment;
mod hour_entry;

pub use closure_config::ClosureConfig;
pub use hour_adjustment::HourAdjustment;
pub use hour_entry::HourEntry;
