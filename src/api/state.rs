//! Application state for the hour engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::{
    AdjustmentProvider, ConfigProvider, EntryProvider, HolidayOverrideProvider,
    InMemoryAdjustmentStore, InMemoryConfigStore, InMemoryEntryStore, InMemoryHolidayOverrideStore,
};

/// Shared application state.
///
/// Contains the storage backends that are shared across all request
/// handlers. Handlers only see the provider traits, so the backing
/// stores can be swapped without touching the API layer.
#[derive(Clone)]
pub struct AppState {
    /// Closure configuration storage.
    config: Arc<dyn ConfigProvider>,
    /// Hour entry storage.
    entries: Arc<dyn EntryProvider>,
    /// Hour adjustment storage.
    adjustments: Arc<dyn AdjustmentProvider>,
    /// Holiday override storage.
    holiday_overrides: Arc<dyn HolidayOverrideProvider>,
}

impl AppState {
    /// Creates a new application state from the given storage backends.
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        entries: Arc<dyn EntryProvider>,
        adjustments: Arc<dyn AdjustmentProvider>,
        holiday_overrides: Arc<dyn HolidayOverrideProvider>,
    ) -> Self {
        Self {
            config,
            entries,
            adjustments,
            holiday_overrides,
        }
    }

    /// Creates an application state backed by empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryConfigStore::new()),
            Arc::new(InMemoryEntryStore::new()),
            Arc::new(InMemoryAdjustmentStore::new()),
            Arc::new(InMemoryHolidayOverrideStore::new()),
        )
    }

    /// Returns a reference to the closure configuration storage.
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Returns a reference to the hour entry storage.
    pub fn entries(&self) -> &dyn EntryProvider {
        self.entries.as_ref()
    }

    /// Returns a reference to the hour adjustment storage.
    pub fn adjustments(&self) -> &dyn AdjustmentProvider {
        self.adjustments.as_ref()
    }

    /// Returns a reference to the holiday override storage.
    pub fn holiday_overrides(&self) -> &dyn HolidayOverrideProvider {
        self.holiday_overrides.as_ref()
    }
}
