//! Ruleset document saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use rbs_model::RulesetCollection;

use crate::codec::to_json_string;
use crate::error::{PersistenceError, Result};

/// File name suggested for exports.
pub const DEFAULT_FILE_NAME: &str = "rulesets.json";

/// Write the whole collection to `path` as pretty-printed JSON.
///
/// Uses atomic write (temp file + rename) so a failed export never leaves a
/// truncated document behind. The temp file is removed on failure.
pub fn export_collection(collection: &RulesetCollection, path: &Path) -> Result<()> {
    let text = to_json_string(collection)?;

    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if let Err(e) = write_temp(&temp_path, &text).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    }) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    tracing::info!(
        path = %path.display(),
        rulesets = collection.len(),
        "Exported rulesets"
    );
    Ok(())
}

fn write_temp(temp_path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.write_all(text.as_bytes())
        .map_err(|e| PersistenceError::Io {
            operation: "write",
            path: temp_path.to_path_buf(),
            source: e,
        })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

/// Write the collection on the blocking thread pool.
pub async fn export_collection_async(collection: RulesetCollection, path: PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || export_collection(&collection, &path))
        .await
        .map_err(|e| PersistenceError::Task(e.to_string()))?
}
