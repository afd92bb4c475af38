//! Core types and loading logic for the tree-planting chart.
//!
//! This crate provides:
//! - `record`: `TreeRecord` and decoding of the raw trees payload
//! - `dates`: display and picker date formatting
//! - `loader`: the single-shot loader behind the `TreeSource` seam
//! - `filter`: day-granularity start/end range filters
//! - `store`: the application's record store and lifetime token
//! - `series`: projection of records into chart points

pub mod dates;
pub mod error;
pub mod filter;
pub mod loader;
pub mod record;
pub mod series;
pub mod store;

pub use error::LoadError;
pub use record::TreeRecord;
