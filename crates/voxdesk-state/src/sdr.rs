//! Company content the SDR agent answers questions from.

use crate::error::DataFileError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use voxdesk_types::StateDocument;

/// Reply used when no FAQ entry matches.
pub const FAQ_FALLBACK: &str =
    "I'm not fully sure about that, but I can connect you with the right team.";

/// One question and its answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// The SDR content file: company facts, FAQ and the lead fields to ask for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdrContent {
    #[serde(default)]
    pub company: StateDocument,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub lead_fields: Vec<String>,
}

impl SdrContent {
    pub fn from_json(json: &str) -> Result<Self, DataFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads the content file. A missing file yields empty content and an
    /// error log, so the agent still starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataFileError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let content = Self::from_json(&json)?;
                tracing::info!(
                    path = %path.display(),
                    faq = content.faq.len(),
                    "loaded SDR content"
                );
                Ok(content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::error!(path = %path.display(), "SDR content file not found");
                Ok(Self::default())
            }
            Err(e) => Err(DataFileError::Io(e)),
        }
    }

    /// Finds the FAQ entry for a keyword.
    ///
    /// Questions are searched first, then answers; matching is a
    /// case-insensitive substring test. A blank keyword matches nothing.
    pub fn find_faq(&self, keyword: &str) -> Option<&FaqEntry> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return None;
        }
        let found = self
            .faq
            .iter()
            .find(|f| f.question.to_lowercase().contains(&keyword))
            .or_else(|| {
                self.faq
                    .iter()
                    .find(|f| f.answer.to_lowercase().contains(&keyword))
            });
        match found {
            Some(entry) => tracing::debug!(question = %entry.question, "FAQ matched"),
            None => tracing::debug!(keyword = %keyword, "no FAQ match"),
        }
        found
    }

    /// The answer to read back for `question`, or [`FAQ_FALLBACK`].
    pub fn answer(&self, question: &str) -> &str {
        match self.find_faq(question) {
            Some(entry) if !entry.answer.is_empty() => &entry.answer,
            Some(_) => "I don't have more info on that.",
            None => FAQ_FALLBACK,
        }
    }
}
