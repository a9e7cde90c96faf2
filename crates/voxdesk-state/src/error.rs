//! Error types for session state updates.

/// Errors returned by [`merge`](crate::merge).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The top-level patch was not a mapping.
    #[error("invalid patch: expected an object, found {found}")]
    InvalidPatch {
        /// JSON type of the rejected patch.
        found: &'static str,
    },
}

/// Errors returned while collecting lead details.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    /// The field is not part of the lead record.
    #[error("unknown lead field: {0}")]
    UnknownField(String),

    /// Applying the field update failed.
    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Errors returned while reading or writing an agent's JSON data file.
#[derive(Debug, thiserror::Error)]
pub enum DataFileError {
    /// The file could not be read or written.
    #[error("data file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file holds invalid JSON or an unexpected shape.
    #[error("data file serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
