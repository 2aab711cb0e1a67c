//! Week segmentation of a closure period.
//!
//! A closure period rarely aligns with calendar weeks, so it is cut into
//! segments along Sunday-Saturday week boundaries. The first and last
//! segments may be partial; every segment in between spans a full week.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::closure_period::PeriodBounds;

/// A slice of a closure period covering at most one Sunday-Saturday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSegment {
    /// First day of the segment (inclusive).
    pub start: NaiveDate,
    /// Last day of the segment (inclusive).
    pub end: NaiveDate,
}

impl WeekSegment {
    /// Returns the number of calendar days in the segment, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Cuts a period into consecutive Sunday-Saturday week segments.
///
/// # Behavior
///
/// - Segments are contiguous, non-overlapping, and together cover every day
///   of the period exactly once.
/// - Each segment ends on the Saturday of its week, or on the period end if
///   that comes first.
/// - The first segment starts on the period start regardless of weekday, so
///   it (and the last segment) may span fewer than seven days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hour_engine::calculation::{PeriodBounds, segment_by_week};
///
/// let bounds = PeriodBounds::new(
///     NaiveDate::from_ymd_opt(2025, 1, 21).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
/// );
///
/// let segments = segment_by_week(&bounds);
/// assert_eq!(segments.len(), 5);
/// // Tuesday through Saturday: a partial first week.
/// assert_eq!(segments[0].end, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
/// assert_eq!(segments[0].day_count(), 5);
/// // Full Sunday-Saturday week in the middle.
/// assert_eq!(segments[1].start, NaiveDate::from_ymd_opt(2025, 1, 26).unwrap());
/// assert_eq!(segments[1].end, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// ```
pub fn segment_by_week(bounds: &PeriodBounds) -> Vec<WeekSegment> {
    let mut segments = Vec::new();
    let mut cursor = bounds.start;

    while cursor <= bounds.end {
        let mut segment_end = saturday_of_week(cursor);
        if segment_end > bounds.end {
            segment_end = bounds.end;
        }
        segments.push(WeekSegment {
            start: cursor,
            end: segment_end,
        });
        cursor = segment_end + Duration::days(1);
    }

    segments
}

/// Returns the Saturday of the Sunday-Saturday week containing `date`.
fn saturday_of_week(date: NaiveDate) -> NaiveDate {
    let days_since_sunday = i64::from(date.weekday().num_days_from_sunday());
    date - Duration::days(days_since_sunday) + Duration::days(6)
}
