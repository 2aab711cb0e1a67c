//! Closure-period calculation and goal projection engine for worked hours
//!
//! This crate resolves the monthly closure period containing a date, segments
//! it into Sunday-to-Saturday weeks, aggregates worked hours and adjustments
//! into weekly balances, and projects whether a configured weekly-hours goal
//! is still attainable. An axum HTTP layer exposes the engine for recording
//! entries and reading dashboards.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod holidays;
pub mod models;
pub mod projection;
pub mod store;
