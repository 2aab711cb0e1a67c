//! In-memory store implementations.
//!
//! Backing storage is a `RwLock` around a `BTreeMap`, which keeps listing
//! order deterministic. Poisoned locks are treated as unrecoverable: a
//! panic while holding a write lock leaves no consistent state to resume
//! from.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use uuid::Uuid;

use super::{AdjustmentProvider, ConfigProvider, EntryProvider, HolidayOverrideProvider, Page};
use crate::models::{ClosureConfig, HourAdjustment, HourEntry};

/// In-memory store for the single closure configuration.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    config: RwLock<Option<ClosureConfig>>,
}

impl InMemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigProvider for InMemoryConfigStore {
    fn current(&self) -> Option<ClosureConfig> {
        self.config.read().expect("config store lock poisoned").clone()
    }

    fn save(&self, config: ClosureConfig) -> ClosureConfig {
        let mut guard = self.config.write().expect("config store lock poisoned");
        let saved = match guard.as_ref() {
            Some(existing) => ClosureConfig {
                id: existing.id,
                created_at: existing.created_at,
                ..config
            },
            None => config,
        };
        *guard = Some(saved.clone());
        saved
    }
}

/// In-memory store for hour entries.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<BTreeMap<Uuid, HourEntry>>,
}

impl InMemoryEntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryProvider for InMemoryEntryStore {
    fn insert(&self, entry: HourEntry) -> HourEntry {
        let mut guard = self.entries.write().expect("entry store lock poisoned");
        guard.insert(entry.id, entry.clone());
        entry
    }

    fn find_by_id(&self, id: Uuid) -> Option<HourEntry> {
        self.entries
            .read()
            .expect("entry store lock poisoned")
            .get(&id)
            .cloned()
    }

    fn find_all(&self) -> Vec<HourEntry> {
        let mut entries: Vec<HourEntry> = self
            .entries
            .read()
            .expect("entry store lock poisoned")
            .values()
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.entry_date);
        entries
    }

    fn find_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<HourEntry> {
        let mut entries: Vec<HourEntry> = self
            .entries
            .read()
            .expect("entry store lock poisoned")
            .values()
            .filter(|entry| entry.entry_date >= start && entry.entry_date <= end)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.entry_date);
        entries
    }

    fn find_page_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        page: u32,
        size: u32,
    ) -> Page<HourEntry> {
        let mut matching: Vec<HourEntry> = self
            .entries
            .read()
            .expect("entry store lock poisoned")
            .values()
            .filter(|entry| entry.entry_date >= start && entry.entry_date <= end)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));

        let total_elements = matching.len() as u64;
        let total_pages = (total_elements.div_ceil(u64::from(size))) as u32;
        let content: Vec<HourEntry> = matching
            .into_iter()
            .skip(page as usize * size as usize)
            .take(size as usize)
            .collect();

        Page {
            content,
            total_elements,
            total_pages,
            number: page,
            size,
        }
    }

    fn delete_by_id(&self, id: Uuid) -> bool {
        self.entries
            .write()
            .expect("entry store lock poisoned")
            .remove(&id)
            .is_some()
    }
}

/// In-memory store for hour adjustments.
#[derive(Debug, Default)]
pub struct InMemoryAdjustmentStore {
    adjustments: RwLock<BTreeMap<Uuid, HourAdjustment>>,
}

impl InMemoryAdjustmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdjustmentProvider for InMemoryAdjustmentStore {
    fn insert(&self, adjustment: HourAdjustment) -> HourAdjustment {
        let mut guard = self
            .adjustments
            .write()
            .expect("adjustment store lock poisoned");
        guard.insert(adjustment.id, adjustment.clone());
        adjustment
    }

    fn find_by_id(&self, id: Uuid) -> Option<HourAdjustment> {
        self.adjustments
            .read()
            .expect("adjustment store lock poisoned")
            .get(&id)
            .cloned()
    }

    fn find_all(&self) -> Vec<HourAdjustment> {
        let mut adjustments: Vec<HourAdjustment> = self
            .adjustments
            .read()
            .expect("adjustment store lock poisoned")
            .values()
            .cloned()
            .collect();
        adjustments.sort_by_key(|adjustment| adjustment.adjustment_date);
        adjustments
    }

    fn find_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<HourAdjustment> {
        let mut adjustments: Vec<HourAdjustment> = self
            .adjustments
            .read()
            .expect("adjustment store lock poisoned")
            .values()
            .filter(|adjustment| {
                adjustment.adjustment_date >= start && adjustment.adjustment_date <= end
            })
            .cloned()
            .collect();
        adjustments.sort_by_key(|adjustment| adjustment.adjustment_date);
        adjustments
    }
}

/// In-memory store for holiday overrides, keyed by date.
#[derive(Debug, Default)]
pub struct InMemoryHolidayOverrideStore {
    overrides: RwLock<BTreeMap<NaiveDate, bool>>,
}

impl InMemoryHolidayOverrideStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HolidayOverrideProvider for InMemoryHolidayOverrideStore {
    fn overrides_between(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, bool> {
        self.overrides
            .read()
            .expect("override store lock poisoned")
            .range(start..=end)
            .map(|(&date, &is_holiday)| (date, is_holiday))
            .collect()
    }

    fn set_override(&self, date: NaiveDate, is_holiday: bool) {
        self.overrides
            .write()
            .expect("override store lock poisoned")
            .insert(date, is_holiday);
    }
}
