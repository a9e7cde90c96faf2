//! The set of open and closed fraud cases.

use crate::case::{FraudCase, Resolution};
use crate::error::FraudError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every fraud case known to the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseBook {
    cases: Vec<FraudCase>,
}

impl CaseBook {
    /// Wraps a list of cases, numbering any that arrive without an id.
    ///
    /// New ids continue after the highest id already present.
    pub fn new(mut cases: Vec<FraudCase>) -> Self {
        let mut next = cases.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        for case in cases.iter_mut().filter(|c| c.id == 0) {
            case.id = next;
            next += 1;
        }
        Self { cases }
    }

    /// Parses a JSON array of cases.
    pub fn from_json(json: &str) -> Result<Self, FraudError> {
        let cases: Vec<FraudCase> = serde_json::from_str(json)?;
        Ok(Self::new(cases))
    }

    /// Loads the case file. A missing file holds no cases.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FraudError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let book = Self::from_json(&json)?;
                tracing::info!(path = %path.display(), cases = book.len(), "loaded fraud cases");
                Ok(book)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "fraud case file not found");
                Ok(Self::default())
            }
            Err(e) => Err(FraudError::Io(e)),
        }
    }

    /// Writes every case back to `path`, replacing the previous file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FraudError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(&self.cases)?)?;
        std::fs::rename(&tmp, path)?;
        tracing::debug!(path = %path.display(), cases = self.len(), "saved fraud cases");
        Ok(())
    }

    /// Finds the first case filed under `name`, ignoring case.
    pub fn find_by_user_name(&self, name: &str) -> Option<&FraudCase> {
        self.cases.iter().find(|c| c.belongs_to(name))
    }

    pub fn get(&self, id: u64) -> Option<&FraudCase> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Records the customer's answer on case `id`.
    pub fn resolve(&mut self, id: u64, resolution: Resolution) -> Result<&FraudCase, FraudError> {
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(FraudError::UnknownCase(id))?;
        tracing::info!(
            case_id = id,
            from = %case.status,
            to = %resolution,
            "fraud case resolved"
        );
        case.status = resolution.as_str().to_string();
        Ok(case)
    }

    pub fn cases(&self) -> &[FraudCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
