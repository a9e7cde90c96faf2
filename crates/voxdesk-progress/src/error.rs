//! Error types for status flows and timestamps.

/// Errors that make a list of steps unusable as a [`StatusFlow`](crate::StatusFlow).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// The flow has no steps.
    #[error("status flow has no steps")]
    Empty,

    /// A step's threshold is not greater than the one before it.
    #[error("status flow thresholds must strictly increase: {previous}s then {next}s")]
    NotIncreasing {
        /// Threshold of the earlier step, in seconds.
        previous: u64,
        /// Threshold of the offending step, in seconds.
        next: u64,
    },

    /// The same status name appears twice.
    #[error("status flow lists {0:?} more than once")]
    DuplicateStatus(String),

    /// A step has an empty status name.
    #[error("status flow contains an empty status name")]
    EmptyStatus,
}

/// Why an entity's creation time could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// The entity has no creation time.
    #[error("creation timestamp is missing")]
    Missing,

    /// The creation time is not an ISO-8601 timestamp.
    #[error("creation timestamp is not ISO-8601: {0:?}")]
    Unparsable(String),
}
