//! Error types for the hubforge library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for hubforge operations.
#[derive(Debug, Error)]
pub enum HubforgeError {
    /// The raw descriptor does not have the shape inference needs
    /// (missing `features`, non-object descriptor, non-object top level).
    #[error("Structural error in subset '{subset}': {message}")]
    Structural { subset: String, message: String },

    /// A subset was selected that the dataset does not contain.
    #[error("Unknown subset '{name}' (available: {})", .available.join(", "))]
    UnknownSubset { name: String, available: Vec<String> },

    /// Two subsets were given the same name.
    #[error("Duplicate subset '{0}'")]
    DuplicateSubset(String),

    /// Error reading a descriptor file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No subsets could be built from the descriptor.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HubforgeError {
    pub(crate) fn structural(subset: impl Into<String>, message: impl Into<String>) -> Self {
        HubforgeError::Structural {
            subset: subset.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors caused by a malformed descriptor shape.
    pub fn is_structural(&self) -> bool {
        matches!(self, HubforgeError::Structural { .. })
    }

    /// Returns true for errors caused by a rejected caller request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HubforgeError::UnknownSubset { .. } | HubforgeError::DuplicateSubset(_)
        )
    }
}

/// Result type alias for hubforge operations.
pub type Result<T> = std::result::Result<T, HubforgeError>;
