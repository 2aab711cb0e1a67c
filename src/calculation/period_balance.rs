//! Period balance aggregation.
//!
//! Sums worked hours and signed adjustments over a resolved period. The
//! engine is pure: callers pass the facts in, nothing is fetched here.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::closure_period::PeriodBounds;
use crate::models::{HourAdjustment, HourEntry};

/// Aggregated hours for a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodBalance {
    /// Sum of entry hours inside the range.
    pub total_worked: Decimal,
    /// Sum of adjustment deltas inside the range.
    pub total_adjusted: Decimal,
    /// `total_worked + total_adjusted`.
    pub balance: Decimal,
}

impl PeriodBalance {
    /// Builds a balance from its two components.
    pub fn of(total_worked: Decimal, total_adjusted: Decimal) -> Self {
        PeriodBalance {
            total_worked,
            total_adjusted,
            balance: total_worked + total_adjusted,
        }
    }
}

/// Computes the balance of a period from entries and adjustments.
///
/// Records dated outside the bounds are ignored, as are records with no
/// recorded hours or delta. Values are summed exactly; no rounding is
/// applied because entries carry whatever scale they were recorded with.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use hour_engine::calculation::{PeriodBounds, compute_period_balance};
/// use hour_engine::models::{HourAdjustment, HourEntry};
///
/// let bounds = PeriodBounds::new(
///     NaiveDate::from_ymd_opt(2025, 1, 21).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
/// );
/// let entries = vec![HourEntry::new(
///     NaiveDate::from_ymd_opt(2025, 1, 22).unwrap(),
///     Decimal::from(8),
///     None,
/// )];
/// let adjustments = vec![HourAdjustment::new(
///     NaiveDate::from_ymd_opt(2025, 1, 21).unwrap(),
///     Decimal::from(-2),
///     None,
/// )];
///
/// let balance = compute_period_balance(&bounds, &entries, &adjustments);
/// assert_eq!(balance.balance, Decimal::from(6));
/// ```
pub fn compute_period_balance(
    bounds: &PeriodBounds,
    entries: &[HourEntry],
    adjustments: &[HourAdjustment],
) -> PeriodBalance {
    PeriodBalance::of(
        sum_entry_hours(entries, bounds.start, bounds.end),
        sum_adjustment_deltas(adjustments, bounds.start, bounds.end),
    )
}

/// Sums the hours of entries dated inside `start..=end`.
pub(super) fn sum_entry_hours(entries: &[HourEntry], start: NaiveDate, end: NaiveDate) -> Decimal {
    entries
        .iter()
        .filter(|entry| entry.entry_date >= start && entry.entry_date <= end)
        .filter_map(|entry| entry.hours)
        .fold(Decimal::ZERO, |total, hours| total + hours)
}

/// Sums the deltas of adjustments dated inside `start..=end`.
pub(super) fn sum_adjustment_deltas(
    adjustments: &[HourAdjustment],
    start: NaiveDate,
    end: NaiveDate,
) -> Decimal {
    adjustments
        .iter()
        .filter(|adjustment| adjustment.adjustment_date >= start && adjustment.adjustment_date <= end)
        .filter_map(|adjustment| adjustment.delta_hours)
        .fold(Decimal::ZERO, |total, delta| total + delta)
}
