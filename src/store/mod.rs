//! Storage seams for the hour engine.
//!
//! The calculation and projection modules are pure and take slices; these
//! traits are where the HTTP layer fetches and persists the underlying
//! facts. The in-memory implementations in [`memory`] back the default
//! deployment and the test suite; a database-backed deployment would
//! implement the same traits.

mod memory;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ClosureConfig, HourAdjustment, HourEntry};

pub use memory::{
    InMemoryAdjustmentStore, InMemoryConfigStore, InMemoryEntryStore, InMemoryHolidayOverrideStore,
};

/// Access to the single active closure configuration.
pub trait ConfigProvider: Send + Sync {
    /// Returns the active configuration, if one has been saved.
    fn current(&self) -> Option<ClosureConfig>;

    /// Saves the configuration, replacing the previous one.
    ///
    /// When a configuration already exists its `id` and `created_at` are
    /// preserved; only the day bounds and weekly goal change. Returns the
    /// stored value.
    fn save(&self, config: ClosureConfig) -> ClosureConfig;
}

/// Access to hour entries.
pub trait EntryProvider: Send + Sync {
    /// Stores a new entry and returns it.
    fn insert(&self, entry: HourEntry) -> HourEntry;

    /// Looks up one entry by id.
    fn find_by_id(&self, id: Uuid) -> Option<HourEntry>;

    /// Returns all entries ordered by date ascending.
    fn find_all(&self) -> Vec<HourEntry>;

    /// Returns entries dated inside `start..=end`, ordered by date ascending.
    fn find_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<HourEntry>;

    /// Returns one page of entries dated inside `start..=end`, ordered by
    /// date descending (newest first). Pages are zero-based; `size` must be
    /// at least 1.
    fn find_page_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        page: u32,
        size: u32,
    ) -> Page<HourEntry>;

    /// Deletes an entry, returning whether it existed.
    fn delete_by_id(&self, id: Uuid) -> bool;
}

/// Access to hour adjustments.
pub trait AdjustmentProvider: Send + Sync {
    /// Stores a new adjustment and returns it.
    fn insert(&self, adjustment: HourAdjustment) -> HourAdjustment;

    /// Looks up one adjustment by id.
    fn find_by_id(&self, id: Uuid) -> Option<HourAdjustment>;

    /// Returns all adjustments ordered by date ascending.
    fn find_all(&self) -> Vec<HourAdjustment>;

    /// Returns adjustments dated inside `start..=end`, ordered by date
    /// ascending.
    fn find_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<HourAdjustment>;
}

/// Access to per-day holiday overrides.
pub trait HolidayOverrideProvider: Send + Sync {
    /// Returns the overrides for dates inside `start..=end`; `true` marks a
    /// day as a holiday, `false` strips an existing holiday.
    fn overrides_between(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, bool>;

    /// Sets or replaces the override for a date.
    fn set_override(&self, date: NaiveDate, is_holiday: bool);
}

/// One page of a date-filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The records on this page.
    pub content: Vec<T>,
    /// Total records across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Zero-based index of this page.
    pub number: u32,
    /// Requested page size.
    pub size: u32,
}
