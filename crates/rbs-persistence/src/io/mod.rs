//! File I/O for ruleset documents.
//!
//! This module handles:
//! - Exporting a collection with atomic writes
//! - Importing a collection with shape validation
//! - Async wrappers that run on the blocking thread pool

mod load;
mod save;

pub use load::{import_collection, import_collection_async};
pub use save::{DEFAULT_FILE_NAME, export_collection, export_collection_async};
