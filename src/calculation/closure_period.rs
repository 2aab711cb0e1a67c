//! Closure-period resolution.
//!
//! This module determines which closure period a reference date belongs to.
//! A period is configured by two days of the month: when the start day is
//! greater than the end day the period wraps a month boundary (e.g. the 21st
//! through the 20th of the following month). The calendar is the absolute
//! base: configured days that do not exist in a month are clamped to that
//! month's last day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive date bounds of a resolved closure period.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hour_engine::calculation::PeriodBounds;
///
/// let bounds = PeriodBounds::new(
///     NaiveDate::from_ymd_opt(2025, 1, 21).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
/// );
/// assert_eq!(bounds.total_days(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    /// First day of the period (inclusive).
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

impl PeriodBounds {
    /// Creates bounds from a start and end date.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`; an inverted range is always a
    /// programming error, not recoverable input.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        assert!(
            start <= end,
            "period bounds must satisfy start <= end (got {start}..{end})"
        );
        PeriodBounds { start, end }
    }

    /// Returns the number of calendar days in the period, counting both ends.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns true if `date` falls within the period (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Resolves the closure period containing the reference date.
///
/// # Arguments
///
/// * `reference_date` - The date to resolve a period for
/// * `closure_start_day` - Configured day of the month the period starts on (1-31)
/// * `closure_end_day` - Configured day of the month the period ends on (1-31)
///
/// # Behavior
///
/// - When `closure_start_day > closure_end_day` the period wraps a month
///   boundary. A reference day on or after the start day opens the period in
///   the reference month and closes it in the next; otherwise the period
///   opened in the previous month and closes in the reference month.
/// - When `closure_start_day <= closure_end_day` both bounds fall in the
///   reference month.
/// - Requested days beyond a month's length are clamped to its last day, so
///   a configuration like 31/30 stays valid in February.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hour_engine::calculation::resolve_closure_period;
///
/// let reference = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();
/// let bounds = resolve_closure_period(reference, 21, 20);
/// assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2023, 1, 21).unwrap());
/// assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2023, 2, 20).unwrap());
/// ```
pub fn resolve_closure_period(
    reference_date: NaiveDate,
    closure_start_day: u32,
    closure_end_day: u32,
) -> PeriodBounds {
    let year = reference_date.year();
    let month = reference_date.month();
    let day = reference_date.day();

    if closure_start_day > closure_end_day {
        if day >= closure_start_day {
            let (next_year, next_month) = month_after(year, month);
            PeriodBounds::new(
                clamped_date(year, month, closure_start_day),
                clamped_date(next_year, next_month, closure_end_day),
            )
        } else {
            let (prev_year, prev_month) = month_before(year, month);
            PeriodBounds::new(
                clamped_date(prev_year, prev_month, closure_start_day),
                clamped_date(year, month, closure_end_day),
            )
        }
    } else {
        PeriodBounds::new(
            clamped_date(year, month, closure_start_day),
            clamped_date(year, month, closure_end_day),
        )
    }
}

/// Builds a date in the given month, clamping the day to the month's length.
fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let clamped = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, clamped).expect("clamped day fits the month")
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = month_after(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is valid")
        .pred_opt()
        .expect("month has a last day")
        .day()
}

fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}
