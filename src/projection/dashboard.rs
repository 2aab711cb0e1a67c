//! Dashboard projection assembly.
//!
//! Combines the weekly breakdown, elapsed-time progress, goal projection,
//! and per-day calendar flags into the single view the dashboard renders.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::goal::{GoalProjection, project_goal};
use crate::calculation::{
    PeriodBounds, WeekInPeriod, compute_weekly_breakdown, full_month_max_hours,
};
use crate::models::{HourAdjustment, HourEntry};

/// Weekday labels indexed by days since Sunday.
const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// The fully assembled dashboard view for one closure period.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardProjection {
    /// The resolved period.
    pub period: PeriodInfo,
    /// Aggregates over the whole period.
    pub totals: TotalsInfo,
    /// How far into the period the reference date is.
    pub progress: ProgressInfo,
    /// One row per week segment, each with its day grid.
    pub weeks: Vec<WeekInfo>,
    /// Goal verdict; `null` when no positive goal or availability exists.
    pub goal_projection: Option<GoalProjection>,
}

/// Resolved period bounds with the day count.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PeriodInfo {
    /// First day of the period (inclusive).
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
    /// Calendar days in the period, counting both ends.
    pub total_days: i64,
}

/// Whole-period aggregates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TotalsInfo {
    /// Sum of entry hours in the period.
    pub total_worked: Decimal,
    /// Sum of adjustment deltas in the period.
    pub total_adjusted: Decimal,
    /// `total_worked + total_adjusted`.
    pub balance: Decimal,
    /// Goal ceiling for a hypothetical 30-day month.
    pub full_month_max_hours: Decimal,
    /// Sum of per-segment availability, rounded to two decimal places.
    pub available_hours_in_period: Decimal,
}

/// Elapsed-time progress of the reference date through the period.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressInfo {
    /// Days elapsed including the reference date; clamped to `0..=total_days`.
    pub days_elapsed: i64,
    /// Calendar days in the period.
    pub total_days: i64,
    /// `days_elapsed / total_days` as a fraction.
    pub percentage_elapsed: f64,
}

/// One week segment with aggregates and its day grid.
#[derive(Debug, Clone, Serialize)]
pub struct WeekInfo {
    /// First day of the segment (inclusive).
    pub week_start: NaiveDate,
    /// Last day of the segment (inclusive).
    pub week_end: NaiveDate,
    /// Sum of entry hours inside the segment.
    pub total_worked: Decimal,
    /// Sum of adjustment deltas inside the segment.
    pub total_adjusted: Decimal,
    /// `total_worked + total_adjusted`.
    pub balance: Decimal,
    /// Share of the weekly goal available in this segment.
    pub hours_available: Decimal,
    /// The configured weekly goal the share was derived from.
    pub base_weekly_hours: Decimal,
    /// Total clock hours in the segment (24 per day).
    pub total_segment_hours: Decimal,
    /// One element per calendar day of the segment.
    pub days: Vec<DayInfo>,
}

/// Calendar flags for a single day of the period.
#[derive(Debug, Clone, Serialize)]
pub struct DayInfo {
    /// The calendar date.
    pub date: NaiveDate,
    /// Short weekday label (Sunday = "Dom").
    pub weekday_label: &'static str,
    /// Day of the month (1-31).
    pub day_of_month: u32,
    /// True for days strictly before the reference date.
    pub past: bool,
    /// True if the day is an effective holiday after overrides.
    pub holiday: bool,
    /// True if an override exists for the day, in either direction.
    pub user_override: bool,
}

/// Assembles the dashboard view for a resolved period.
///
/// `holidays` must already have overrides merged in; `override_dates` marks
/// which days carry an override at all so the dashboard can distinguish a
/// user decision from the national calendar.
pub fn assemble_dashboard(
    bounds: &PeriodBounds,
    reference_date: NaiveDate,
    expected_weekly_hours: Option<Decimal>,
    entries: &[HourEntry],
    adjustments: &[HourAdjustment],
    holidays: &BTreeSet<NaiveDate>,
    override_dates: &BTreeSet<NaiveDate>,
) -> DashboardProjection {
    let result = compute_weekly_breakdown(bounds, expected_weekly_hours, entries, adjustments);

    let total_days = bounds.total_days();
    let days_elapsed = if reference_date < bounds.start {
        0
    } else if reference_date > bounds.end {
        total_days
    } else {
        (reference_date - bounds.start).num_days() + 1
    };
    let percentage_elapsed = if total_days > 0 {
        days_elapsed as f64 / total_days as f64
    } else {
        0.0
    };

    let total_available = result
        .weeks
        .iter()
        .fold(Decimal::ZERO, |total, week| total + week.hours_available);

    let goal_projection = project_goal(
        result.summary.balance,
        days_elapsed,
        total_days,
        total_available,
        expected_weekly_hours,
    );

    let weeks = result
        .weeks
        .iter()
        .map(|week| build_week_info(week, reference_date, holidays, override_dates))
        .collect();

    DashboardProjection {
        period: PeriodInfo {
            start: bounds.start,
            end: bounds.end,
            total_days,
        },
        totals: TotalsInfo {
            total_worked: result.summary.total_worked,
            total_adjusted: result.summary.total_adjusted,
            balance: result.summary.balance,
            full_month_max_hours: full_month_max_hours(expected_weekly_hours),
            available_hours_in_period: total_available
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        },
        progress: ProgressInfo {
            days_elapsed,
            total_days,
            percentage_elapsed,
        },
        weeks,
        goal_projection,
    }
}

fn build_week_info(
    week: &WeekInPeriod,
    reference_date: NaiveDate,
    holidays: &BTreeSet<NaiveDate>,
    override_dates: &BTreeSet<NaiveDate>,
) -> WeekInfo {
    let mut days = Vec::new();
    let mut date = week.week_start;
    while date <= week.week_end {
        days.push(DayInfo {
            date,
            weekday_label: WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize],
            day_of_month: date.day(),
            past: date < reference_date,
            holiday: holidays.contains(&date),
            user_override: override_dates.contains(&date),
        });
        date += Duration::days(1);
    }

    WeekInfo {
        week_start: week.week_start,
        week_end: week.week_end,
        total_worked: week.total_worked,
        total_adjusted: week.total_adjusted,
        balance: week.balance,
        hours_available: week.hours_available,
        base_weekly_hours: week.base_weekly_hours,
        total_segment_hours: week.total_segment_hours,
        days,
    }
}
