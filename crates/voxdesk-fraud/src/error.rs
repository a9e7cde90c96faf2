use thiserror::Error;

/// Errors that can occur during a verification call or while reading and
/// writing the case file.
#[derive(Error, Debug)]
pub enum FraudError {
    /// No case is filed under this name.
    #[error("no fraud case for '{0}'")]
    UnknownUser(String),

    /// A step that needs a case ran before `identify`.
    #[error("no case has been loaded for this call")]
    NoCaseLoaded,

    /// The security answer did not match.
    #[error("security answer does not match")]
    VerificationFailed,

    /// A resolution was attempted before the caller was verified.
    #[error("caller has not been verified")]
    NotVerified,

    /// The case disappeared from the case book.
    #[error("fraud case {0} not found")]
    UnknownCase(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid case file: {0}")]
    Serialization(#[from] serde_json::Error),
}
