//! Persistence error types.
//!
//! The `Display` text of each variant is what the workspace shows after
//! "Error loading file:" or "Error downloading file:".

use std::path::PathBuf;
use thiserror::Error;

/// Import or export failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text is not valid JSON, or a ruleset does not match the model.
    #[error("{source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an object.
    #[error("Expected a JSON object mapping ruleset names to rulesets")]
    NotAnObject,

    /// A top-level entry lacks an array-typed `rules` property.
    #[error("Invalid ruleset structure for \"{key}\"")]
    InvalidStructure { key: String },

    /// Serialization error.
    #[error("Failed to serialize rulesets: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not be renamed over the target.
    #[error("Failed to save {}: {source}", target_path.display())]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking worker panicked or was cancelled.
    #[error("Background file task failed: {0}")]
    Task(String),
}

impl PersistenceError {
    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.")
                } else {
                    Some("Check that you have permission to write to this location.")
                }
            }
            Self::Parse { .. } | Self::NotAnObject => {
                Some("Make sure you selected a rulesets JSON file.")
            }
            Self::InvalidStructure { .. } => {
                Some("Every ruleset needs a \"rules\" list, even an empty one.")
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.")
            }
            Self::Serialization { .. } | Self::Task(_) => None,
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
