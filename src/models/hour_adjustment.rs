//! Hour adjustment model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed correction applied on a specific date.
///
/// Adjustments carry credits (positive deltas, e.g. a carried-over balance)
/// or debits (negative deltas, e.g. compensated time off) and are summed
/// alongside entries wherever a date range is aggregated. Like entry hours,
/// an absent delta contributes zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourAdjustment {
    /// Unique identifier for the adjustment.
    pub id: Uuid,
    /// The date the delta applies to.
    pub adjustment_date: NaiveDate,
    /// Signed hours delta, if recorded.
    #[serde(default)]
    pub delta_hours: Option<Decimal>,
    /// Optional free-text note.
    #[serde(default)]
    pub description: Option<String>,
}

impl HourAdjustment {
    /// Creates a new adjustment with a fresh id.
    pub fn new(adjustment_date: NaiveDate, delta_hours: Decimal, description: Option<String>) -> Self {
        HourAdjustment {
            id: Uuid::new_v4(),
            adjustment_date,
            delta_hours: Some(delta_hours),
            description,
        }
    }
}
