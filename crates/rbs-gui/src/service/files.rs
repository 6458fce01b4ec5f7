//! Rules file service - reads and writes ruleset documents off the UI thread.
//!
//! Errors are flattened to their display text, which is what the
//! notification banner shows after the "Error loading file:" or
//! "Error downloading file:" prefix.

use std::path::PathBuf;

use rbs_model::RulesetCollection;
use rbs_persistence::{export_collection_async, import_collection_async};

/// Read and shape-check a ruleset document.
///
/// ```ignore
/// Task::perform(load_rules(path), Message::ImportCompleted)
/// ```
pub async fn load_rules(path: PathBuf) -> Result<RulesetCollection, String> {
    import_collection_async(path.clone()).await.map_err(|e| {
        tracing::error!(
            path = %path.display(),
            error = %e,
            suggestion = e.suggestion().unwrap_or_default(),
            "Failed to load rules file"
        );
        e.to_string()
    })
}

/// Write the collection, returning the path written on success.
pub async fn save_rules(collection: RulesetCollection, path: PathBuf) -> Result<PathBuf, String> {
    match export_collection_async(collection, path.clone()).await {
        Ok(()) => Ok(path),
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                suggestion = e.suggestion().unwrap_or_default(),
                "Failed to save rules file"
            );
            Err(e.to_string())
        }
    }
}
