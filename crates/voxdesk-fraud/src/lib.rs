//! Suspicious-transaction verification for the SecureBank fraud agent.
//!
//! A call runs in three steps, each gated on the one before:
//!
//! 1. [`VerificationCall::identify`] finds the caller's case by name.
//! 2. [`VerificationCall::verify`] checks the answer to the case's security
//!    question.
//! 3. [`VerificationCall::resolve`] records whether the customer made the
//!    transaction, moving the case to `confirmed_safe` or `confirmed_fraud`.
//!
//! Cases live in a [`CaseBook`], read from and written back to a JSON file.

mod call;
mod case;
mod casebook;
mod error;

pub use call::VerificationCall;
pub use case::{FraudCase, Resolution, STATUS_PENDING_REVIEW};
pub use casebook::CaseBook;
pub use error::FraudError;
