//! Single-shot loader for the trees endpoint.
//!
//! The loader fetches the payload once, decodes it, sorts it by creation
//! time and derives the initial display window from the first and last
//! dated records. Failures are logged here and handed back to the caller
//! as a `LoadError`; there is no retry.

use crate::error::LoadError;
use crate::record::{RawTree, TreeRecord};
use chrono::NaiveDate;
use log::{debug, error, info, warn};

/// The public trees endpoint. Not configurable.
pub const TREES_API_URL: &str = "https://public.offset.earth/trees";

/// Something that can produce the raw trees response body.
///
/// The browser build implements this with the fetch API; tests use stubs.
#[allow(async_fn_in_trait)]
pub trait TreeSource {
    async fn fetch(&self) -> Result<String, LoadError>;
}

/// Result of a successful load: sorted records plus the initial window.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTrees {
    pub records: Vec<TreeRecord>,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
}

/// Fetch and normalise the trees payload from `source`.
pub async fn load<S: TreeSource>(source: &S) -> Result<LoadedTrees, LoadError> {
    info!("Fetching trees");
    let result = match source.fetch().await {
        Ok(body) => load_from_body(&body),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        error!("Failed to load trees: {}", e);
    }
    result
}

/// Decode a response body and normalise it.
pub fn load_from_body(body: &str) -> Result<LoadedTrees, LoadError> {
    let raw: Vec<RawTree> = serde_json::from_str(body)?;
    normalize(raw)
}

/// Sort raw trees ascending by creation time and derive the display window.
///
/// The sort is stable. Records without a usable timestamp are kept, after
/// every dated record, so the filters can drop them.
///
/// A payload that is empty, or in which no `createdAt` parses, is
/// `LoadError::Empty`: without a dated record there is no window to derive,
/// so undated records alone never reach the store.
pub fn normalize(raw: Vec<RawTree>) -> Result<LoadedTrees, LoadError> {
    let mut records: Vec<TreeRecord> = raw.into_iter().map(TreeRecord::from).collect();
    records.sort_by_key(|r| (r.created_at.is_none(), r.created_at));

    let range_start = records
        .first()
        .and_then(TreeRecord::day)
        .ok_or(LoadError::Empty)?;
    let range_end = records
        .iter()
        .rev()
        .find_map(TreeRecord::day)
        .ok_or(LoadError::Empty)?;

    let undated = records.iter().filter(|r| r.created_at.is_none()).count();
    if undated > 0 {
        warn!(
            "{} of {} trees have no usable createdAt and will not be charted",
            undated,
            records.len()
        );
    }
    debug!(
        "Loaded {} trees from {} to {}",
        records.len(),
        range_start,
        range_end
    );

    Ok(LoadedTrees {
        records,
        range_start,
        range_end,
    })
}
