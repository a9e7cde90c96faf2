//! One verification phone call.

use crate::case::{FraudCase, Resolution};
use crate::casebook::CaseBook;
use crate::error::FraudError;

/// State of a single call: which case it concerns and whether the caller
/// has passed the security question.
///
/// Each call owns its own state; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct VerificationCall {
    case: Option<FraudCase>,
    verified: bool,
}

impl VerificationCall {
    /// Starts a call with no case loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the caller's case by name and returns its security question.
    ///
    /// Loading a case resets verification.
    pub fn identify(&mut self, book: &CaseBook, user_name: &str) -> Result<&str, FraudError> {
        let case = book
            .find_by_user_name(user_name)
            .ok_or_else(|| FraudError::UnknownUser(user_name.to_string()))?;
        tracing::info!(case_id = case.id, "fraud case loaded for call");
        self.verified = false;
        let case = self.case.insert(case.clone());
        Ok(&case.security_question)
    }

    /// Checks the caller's answer to the security question.
    ///
    /// On success the call is verified and the case is returned so the agent
    /// can read out the charge.
    pub fn verify(&mut self, answer: &str) -> Result<&FraudCase, FraudError> {
        let case = self.case.as_ref().ok_or(FraudError::NoCaseLoaded)?;
        if !case.answer_matches(answer) {
            tracing::warn!(case_id = case.id, "security answer mismatch");
            return Err(FraudError::VerificationFailed);
        }
        self.verified = true;
        tracing::info!(case_id = case.id, "caller verified");
        Ok(case)
    }

    /// Records whether the caller made the transaction.
    ///
    /// Refused with [`FraudError::NotVerified`] until [`verify`] has
    /// succeeded. The case book is updated; saving it is up to the caller.
    ///
    /// [`verify`]: VerificationCall::verify
    pub fn resolve(
        &mut self,
        book: &mut CaseBook,
        is_legitimate: bool,
    ) -> Result<Resolution, FraudError> {
        let case = match (&mut self.case, self.verified) {
            (Some(case), true) => case,
            _ => return Err(FraudError::NotVerified),
        };
        let resolution = Resolution::from_legitimate(is_legitimate);
        let stored = book.resolve(case.id, resolution)?;
        case.status = stored.status.clone();
        Ok(resolution)
    }

    /// The agent's sign-off line.
    pub fn closing_message(&self) -> String {
        match &self.case {
            Some(case) => format!(
                "Thank you for your time. Your updated case status is {}. Have a good day.",
                case.status
            ),
            None => "Thank you. Have a good day.".to_string(),
        }
    }

    pub fn case(&self) -> Option<&FraudCase> {
        self.case.as_ref()
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}
