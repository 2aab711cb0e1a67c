//! Hour entry model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record of hours worked on a single date.
///
/// Multiple entries may exist for the same date; aggregation sums them all.
/// `hours` is optional so that historical records with missing values still
/// deserialize; absent hours contribute zero to every total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The date the hours were worked on.
    pub entry_date: NaiveDate,
    /// Hours worked, if recorded.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Optional free-text note.
    #[serde(default)]
    pub description: Option<String>,
}

impl HourEntry {
    /// Creates a new entry with a fresh id.
    pub fn new(entry_date: NaiveDate, hours: Decimal, description: Option<String>) -> Self {
        HourEntry {
            id: Uuid::new_v4(),
            entry_date,
            hours: Some(hours),
            description,
        }
    }
}
