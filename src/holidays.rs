//! Brazilian national holidays.
//!
//! Provides the fixed national holidays plus the three Easter-derived
//! movable ones (Carnival Tuesday, Good Friday, Corpus Christi), and the
//! merge rule for user overrides. The dashboard only flags these days; no
//! calculation treats them specially.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, NaiveDate};

/// Fixed national holidays as (month, day) pairs.
const FIXED_HOLIDAYS: [(u32, u32); 9] = [
    (1, 1),   // Confraternização Universal
    (4, 21),  // Tiradentes
    (5, 1),   // Dia do Trabalho
    (9, 7),   // Independência
    (10, 12), // Nossa Senhora Aparecida
    (11, 2),  // Finados
    (11, 15), // Proclamação da República
    (11, 20), // Consciência Negra
    (12, 25), // Natal
];

/// Returns all national holidays falling inside `start..=end` (inclusive).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hour_engine::holidays::national_holidays_between;
///
/// let start = NaiveDate::from_ymd_opt(2025, 2, 21).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
/// let holidays = national_holidays_between(start, end);
///
/// // Carnival Tuesday 2025.
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()));
/// assert_eq!(holidays.len(), 1);
/// ```
pub fn national_holidays_between(start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
    let mut result = BTreeSet::new();
    for year in start.year()..=end.year() {
        for holiday in holidays_for_year(year) {
            if holiday >= start && holiday <= end {
                result.insert(holiday);
            }
        }
    }
    result
}

fn holidays_for_year(year: i32) -> Vec<NaiveDate> {
    let mut holidays: Vec<NaiveDate> = FIXED_HOLIDAYS
        .iter()
        .map(|&(month, day)| {
            NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday date is valid")
        })
        .collect();

    let easter = easter_sunday(year);
    holidays.push(easter - Duration::days(47)); // Carnival Tuesday
    holidays.push(easter - Duration::days(2)); // Good Friday
    holidays.push(easter + Duration::days(60)); // Corpus Christi
    holidays
}

/// Computes Easter Sunday for a year using the anonymous Gregorian computus.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hour_engine::holidays::easter_sunday;
///
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).expect("computus yields a valid date")
}

/// Merges user overrides into a set of national holidays.
///
/// A `true` override adds the date as a holiday, a `false` override removes
/// it. Overrides on dates that were never holidays simply add or no-op.
pub fn effective_holidays(
    national: BTreeSet<NaiveDate>,
    overrides: &BTreeMap<NaiveDate, bool>,
) -> BTreeSet<NaiveDate> {
    let mut effective = national;
    for (&date, &is_holiday) in overrides {
        if is_holiday {
            effective.insert(date);
        } else {
            effective.remove(&date);
        }
    }
    effective
}
