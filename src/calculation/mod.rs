//! Pure period math for the hour engine.
//!
//! This module contains all the calculation functions for resolving closure
//! periods, cutting them into Sunday-Saturday week segments, and aggregating
//! hour entries and adjustments into balances and availability targets.
//! Everything here is pure: facts go in as slices, results come out.

mod closure_period;
mod period_balance;
mod week_segments;
mod weekly_breakdown;

pub use closure_period::{PeriodBounds, resolve_closure_period};
pub use period_balance::{PeriodBalance, compute_period_balance};
pub use week_segments::{WeekSegment, segment_by_week};
pub use weekly_breakdown::{
    PeriodCalculationResult, WeekInPeriod, compute_weekly_breakdown, full_month_max_hours,
    segment_hours_available,
};
