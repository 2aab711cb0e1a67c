//! Closure configuration model.
//!
//! This module defines the single mutable piece of configuration the engine
//! depends on: which day of the month a closure period starts and ends on,
//! and the optional weekly-hours goal used for projections.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configuration of the recurring closure period.
///
/// `closure_start_day` and `closure_end_day` are days of the month (1-31).
/// When the start day is greater than the end day the period wraps around a
/// month boundary (e.g. 21st through the 20th of the following month). Days
/// that do not exist in a given month are clamped to that month's last day
/// at resolution time, never here.
///
/// At most one configuration is active at a time; saving a new one replaces
/// the previous values while preserving `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosureConfig {
    /// Unique identifier for the configuration.
    pub id: Uuid,
    /// Day of the month the closure period starts on (1-31).
    pub closure_start_day: u32,
    /// Day of the month the closure period ends on (1-31).
    pub closure_end_day: u32,
    /// Weekly-hours goal used for availability and goal projection.
    ///
    /// `None` disables the projection entirely.
    #[serde(default)]
    pub expected_weekly_hours: Option<Decimal>,
    /// When this configuration was first created.
    pub created_at: DateTime<Utc>,
}

impl ClosureConfig {
    /// Creates a new configuration with a fresh id and creation timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use hour_engine::models::ClosureConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let config = ClosureConfig::new(21, 20, Some(Decimal::from(40)));
    /// assert_eq!(config.closure_start_day, 21);
    /// assert_eq!(config.closure_end_day, 20);
    /// assert_eq!(config.expected_weekly_hours, Some(Decimal::from(40)));
    /// ```
    pub fn new(
        closure_start_day: u32,
        closure_end_day: u32,
        expected_weekly_hours: Option<Decimal>,
    ) -> Self {
        ClosureConfig {
            id: Uuid::new_v4(),
            closure_start_day,
            closure_end_day,
            expected_weekly_hours,
            created_at: Utc::now(),
        }
    }
}
