//! Application state model.
//!
//! `RecordStore` holds the records exactly as loaded and never narrows them;
//! the visible series is always derived from the loaded records and the
//! current pair of boundaries, so widening the window works.

use crate::error::LoadError;
use crate::filter;
use crate::loader::LoadedTrees;
use crate::record::TreeRecord;
use chrono::NaiveDate;
use log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;

/// Lifecycle of the store: `Loading` until the first load settles, then
/// `Ready` for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    phase: Phase,
    records: Vec<TreeRecord>,
    range_start: NaiveDate,
    range_end: NaiveDate,
    last_error: Option<LoadError>,
}

impl RecordStore {
    /// An empty store awaiting its load, with both boundaries on `today`.
    pub fn new(today: NaiveDate) -> Self {
        RecordStore {
            phase: Phase::Loading,
            records: Vec::new(),
            range_start: today,
            range_end: today,
            last_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Mark the load as started: `Loading`, no records, no error.
    ///
    /// The store never returns to `Loading` once `Ready`, so a call after the
    /// load has settled is ignored.
    pub fn begin_load(&mut self) {
        if self.phase == Phase::Ready {
            warn!("Ignoring begin_load, store is already populated");
            return;
        }
        debug!("Loading trees");
        self.phase = Phase::Loading;
        self.records.clear();
        self.last_error = None;
    }

    /// Apply the outcome of the load and move to `Ready`.
    ///
    /// On success, records and both boundaries are replaced. On failure the
    /// records are cleared and the boundaries stay where they were. Only the
    /// first outcome is applied; later ones are ignored.
    pub fn finish_load(&mut self, outcome: Result<LoadedTrees, LoadError>) {
        if self.phase == Phase::Ready {
            warn!("Ignoring load outcome, store is already populated");
            return;
        }
        match outcome {
            Ok(loaded) => {
                self.records = loaded.records;
                self.range_start = loaded.range_start;
                self.range_end = loaded.range_end;
                self.last_error = None;
            }
            Err(e) => {
                self.records.clear();
                self.last_error = Some(e);
            }
        }
        self.phase = Phase::Ready;
    }

    /// Apply `outcome` only while `token` is live. A result arriving after the
    /// view was torn down is discarded and the store is left untouched.
    /// Returns whether the outcome was applied.
    pub fn finish_load_if_live(
        &mut self,
        token: &ScopeToken,
        outcome: Result<LoadedTrees, LoadError>,
    ) -> bool {
        if !token.is_live() {
            debug!("Scope cancelled before trees arrived; discarding result");
            return false;
        }
        self.finish_load(outcome);
        true
    }

    /// All loaded records, sorted ascending by creation time.
    pub fn records(&self) -> &[TreeRecord] {
        &self.records
    }

    pub fn range_start(&self) -> NaiveDate {
        self.range_start
    }

    pub fn range_end(&self) -> NaiveDate {
        self.range_end
    }

    pub fn set_range_start(&mut self, date: NaiveDate) {
        debug!("Range start set to {}", date);
        self.range_start = date;
    }

    pub fn set_range_end(&mut self, date: NaiveDate) {
        debug!("Range end set to {}", date);
        self.range_end = date;
    }

    /// The error from the load, if it failed.
    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    /// Records inside the current window, in load order.
    pub fn visible(&self) -> Vec<TreeRecord> {
        filter::filter_range(&self.records, self.range_start, self.range_end)
    }
}

/// Liveness flag shared between a view and the tasks it spawns.
///
/// The view cancels the token when it is torn down; a task checks
/// `is_live()` before writing its result back.
#[derive(Debug, Clone)]
pub struct ScopeToken(Rc<Cell<bool>>);

impl ScopeToken {
    pub fn new() -> Self {
        ScopeToken(Rc::new(Cell::new(true)))
    }

    pub fn cancel(&self) {
        self.0.set(false);
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

impl Default for ScopeToken {
    fn default() -> Self {
        Self::new()
    }
}
