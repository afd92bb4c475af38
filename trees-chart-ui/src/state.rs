//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the record store in a signal provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use chrono::Local;
use dioxus::prelude::*;
use trees_core::store::RecordStore;

/// Shared application state for the tree chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded records, display window and load outcome
    pub store: Signal<RecordStore>,
}

impl AppState {
    /// Create a new AppState: loading, no records, window on today.
    pub fn new() -> Self {
        Self {
            store: Signal::new(RecordStore::new(Local::now().date_naive())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
