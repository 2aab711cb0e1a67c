//! Request types for the hour engine API.
//!
//! This module defines the JSON request payloads and query parameters,
//! together with their field validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Longest accepted free-text description.
const MAX_DESCRIPTION_LEN: usize = 500;

/// Default and fallback page size for entry listings.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Smallest accepted hour amount.
fn min_hours() -> Decimal {
    Decimal::new(1, 2)
}

fn validate_day(field: &str, day: u32) -> EngineResult<()> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(EngineError::validation(field, "must be between 1 and 31"))
    }
}

fn validate_description(description: Option<&str>) -> EngineResult<()> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => Err(EngineError::validation(
            "description",
            "must be at most 500 characters",
        )),
        _ => Ok(()),
    }
}

/// Request body for saving the closure configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosureConfigRequest {
    /// Day of the month the closure period starts on (1-31).
    pub closure_start_day: u32,
    /// Day of the month the closure period ends on (1-31).
    pub closure_end_day: u32,
    /// Optional weekly-hours goal.
    #[serde(default)]
    pub expected_weekly_hours: Option<Decimal>,
}

impl ClosureConfigRequest {
    /// Validates the day bounds and the optional goal.
    pub fn validate(&self) -> EngineResult<()> {
        validate_day("closure_start_day", self.closure_start_day)?;
        validate_day("closure_end_day", self.closure_end_day)?;
        if let Some(expected) = self.expected_weekly_hours {
            if expected < min_hours() {
                return Err(EngineError::validation(
                    "expected_weekly_hours",
                    "must be at least 0.01",
                ));
            }
        }
        Ok(())
    }
}

/// Request body for recording an hour entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourEntryRequest {
    /// The date the hours were worked on.
    pub entry_date: NaiveDate,
    /// Hours worked; must be at least 0.01.
    pub hours: Decimal,
    /// Optional free-text note, at most 500 characters.
    #[serde(default)]
    pub description: Option<String>,
}

impl HourEntryRequest {
    /// Validates the hours and description.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hours < min_hours() {
            return Err(EngineError::validation("hours", "must be at least 0.01"));
        }
        validate_description(self.description.as_deref())
    }
}

/// Request body for recording an hour adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourAdjustmentRequest {
    /// The date the delta applies to.
    pub adjustment_date: NaiveDate,
    /// Signed hours delta; must not be zero.
    pub delta_hours: Decimal,
    /// Optional free-text note, at most 500 characters.
    #[serde(default)]
    pub description: Option<String>,
}

impl HourAdjustmentRequest {
    /// Validates the delta and description.
    pub fn validate(&self) -> EngineResult<()> {
        if self.delta_hours == Decimal::ZERO {
            return Err(EngineError::validation("delta_hours", "must not be zero"));
        }
        validate_description(self.description.as_deref())
    }
}

/// Request body for setting a holiday override on a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayOverrideRequest {
    /// The date to override.
    pub date: NaiveDate,
    /// `true` marks the date as a holiday, `false` strips one.
    pub holiday: bool,
}

/// Optional reference date; handlers default it to today.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DateQuery {
    /// Reference date in ISO format.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Filters for the plain listing endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListRangeQuery {
    /// Range start (inclusive); only applied together with `end`.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Range end (inclusive); only applied together with `start`.
    #[serde(default)]
    pub end: Option<NaiveDate>,
    /// When true, lists the current closure period instead of a range.
    #[serde(default)]
    pub period_current: bool,
}

/// Parameters for the paged entry listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    /// Range start (inclusive).
    pub start: NaiveDate,
    /// Range end (inclusive).
    pub end: NaiveDate,
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Requested page size.
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl PageQuery {
    /// Returns the effective page size; requests outside 1-100 fall back to
    /// the default of 20.
    pub fn effective_size(&self) -> u32 {
        if (1..=100).contains(&self.size) {
            self.size
        } else {
            DEFAULT_PAGE_SIZE
        }
    }
}
