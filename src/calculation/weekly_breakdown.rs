//! Week-by-week breakdown of a closure period.
//!
//! Combines week segmentation with aggregation and the availability rule:
//! the configured weekly goal is spread over the 168 hours of a full week,
//! so partial first and last segments carry a proportionally smaller target.

use rust_decimal::{Decimal, RoundingStrategy};

use super::closure_period::PeriodBounds;
use super::period_balance::{
    PeriodBalance, compute_period_balance, sum_adjustment_deltas, sum_entry_hours,
};
use super::week_segments::segment_by_week;
use crate::models::{HourAdjustment, HourEntry};

/// Scale used for hour amounts.
const SCALE: u32 = 2;

/// Scale used for the intermediate hourly rate; two extra digits keep the
/// proportional split stable before the final half-up rounding.
const RATE_SCALE: u32 = SCALE + 2;

/// Hours in a full Sunday-Saturday week.
fn hours_in_full_week() -> Decimal {
    Decimal::from(168)
}

fn hours_in_day() -> Decimal {
    Decimal::from(24)
}

/// One week segment of a period with its aggregates and availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekInPeriod {
    /// First day of the segment (inclusive).
    pub week_start: chrono::NaiveDate,
    /// Last day of the segment (inclusive).
    pub week_end: chrono::NaiveDate,
    /// Sum of entry hours inside the segment.
    pub total_worked: Decimal,
    /// Sum of adjustment deltas inside the segment.
    pub total_adjusted: Decimal,
    /// `total_worked + total_adjusted`.
    pub balance: Decimal,
    /// Share of the weekly goal available in this segment, rounded to two
    /// decimal places.
    pub hours_available: Decimal,
    /// The configured weekly goal the share was derived from (zero when the
    /// configuration has none).
    pub base_weekly_hours: Decimal,
    /// Total clock hours in the segment (24 per day).
    pub total_segment_hours: Decimal,
}

/// A period balance together with its per-week rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCalculationResult {
    /// Aggregates over the whole period.
    pub summary: PeriodBalance,
    /// One row per week segment, in chronological order.
    pub weeks: Vec<WeekInPeriod>,
}

/// Computes the full week-by-week breakdown of a period.
///
/// Each week segment gets its own worked/adjusted/balance aggregates plus
/// the availability share of the weekly goal. The summary row aggregates
/// over the whole period in one pass, so it always equals the sum of the
/// week rows.
pub fn compute_weekly_breakdown(
    bounds: &PeriodBounds,
    expected_weekly_hours: Option<Decimal>,
    entries: &[HourEntry],
    adjustments: &[HourAdjustment],
) -> PeriodCalculationResult {
    let base_weekly_hours = expected_weekly_hours.unwrap_or(Decimal::ZERO);

    let weeks = segment_by_week(bounds)
        .into_iter()
        .map(|segment| {
            let total_worked = sum_entry_hours(entries, segment.start, segment.end);
            let total_adjusted = sum_adjustment_deltas(adjustments, segment.start, segment.end);
            let total_segment_hours = hours_in_day() * Decimal::from(segment.day_count());
            WeekInPeriod {
                week_start: segment.start,
                week_end: segment.end,
                total_worked,
                total_adjusted,
                balance: total_worked + total_adjusted,
                hours_available: segment_hours_available(
                    expected_weekly_hours,
                    total_segment_hours,
                ),
                base_weekly_hours,
                total_segment_hours,
            }
        })
        .collect();

    PeriodCalculationResult {
        summary: compute_period_balance(bounds, entries, adjustments),
        weeks,
    }
}

/// Computes the share of the weekly goal available in one segment.
///
/// The goal is converted to an hourly rate over the 168 hours of a full
/// week (rounded half-up to four decimal places), then multiplied by the
/// segment's clock hours and rounded half-up to two decimal places. A full
/// seven-day segment therefore gets the goal back, modulo the rate
/// rounding; a five-day segment gets five sevenths of it.
///
/// Returns zero when no goal is configured or the goal is not positive.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use hour_engine::calculation::segment_hours_available;
///
/// let five_days = Decimal::from(120);
/// let available = segment_hours_available(Some(Decimal::from(40)), five_days);
/// assert_eq!(available, Decimal::new(2857, 2)); // 28.57
/// ```
pub fn segment_hours_available(
    expected_weekly_hours: Option<Decimal>,
    total_segment_hours: Decimal,
) -> Decimal {
    match expected_weekly_hours {
        Some(expected) if expected > Decimal::ZERO => {
            let hourly_rate = (expected / hours_in_full_week())
                .round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero);
            (hourly_rate * total_segment_hours)
                .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
        }
        _ => Decimal::ZERO,
    }
}

/// Computes the goal ceiling for a hypothetical 30-day month (720 hours).
///
/// Multiplication happens before division so the 720/168 ratio does not
/// lose precision on its own.
pub fn full_month_max_hours(expected_weekly_hours: Option<Decimal>) -> Decimal {
    match expected_weekly_hours {
        Some(expected) if expected > Decimal::ZERO => (expected * Decimal::from(720)
            / hours_in_full_week())
        .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero),
        _ => Decimal::ZERO,
    }
}
