//! Ruleset document loading.

use std::fs;
use std::path::{Path, PathBuf};

use rbs_model::RulesetCollection;

use crate::codec::parse_collection;
use crate::error::{PersistenceError, Result};

/// Read and parse a ruleset document.
pub fn import_collection(path: &Path) -> Result<RulesetCollection> {
    let text = fs::read_to_string(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let collection = parse_collection(&text)?;
    tracing::info!(
        path = %path.display(),
        rulesets = collection.len(),
        "Imported rulesets"
    );
    Ok(collection)
}

/// Read and parse a ruleset document on the blocking thread pool.
pub async fn import_collection_async(path: PathBuf) -> Result<RulesetCollection> {
    tokio::task::spawn_blocking(move || import_collection(&path))
        .await
        .map_err(|e| PersistenceError::Task(e.to_string()))?
}
