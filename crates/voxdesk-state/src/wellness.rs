//! Daily wellness check-ins, kept as an append-only history.

use crate::error::DataFileError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One finished check-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// `HH:MM:SS`.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub energy: String,
    /// Goals the user set for the day.
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl CheckIn {
    /// Creates a check-in stamped with `now`.
    pub fn new(
        mood: impl Into<String>,
        energy: impl Into<String>,
        objectives: Vec<String>,
        summary: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            mood: mood.into(),
            energy: energy.into(),
            objectives,
            summary,
        }
    }
}

/// Splits a spoken, comma-separated goal list into objectives.
pub fn parse_objectives(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Describes the previous check-in for the agent's opening prompt.
pub fn history_context(last: Option<&CheckIn>) -> String {
    let Some(last) = last else {
        return "No previous wellness check-ins.".to_string();
    };
    let or_unknown = |value: &str| {
        if value.is_empty() {
            "Unknown".to_string()
        } else {
            value.to_string()
        }
    };
    let goals = if last.objectives.is_empty() {
        "None".to_string()
    } else {
        last.objectives.join(", ")
    };
    format!(
        "Previous check-in ({}): Mood was {}, Energy was {}, Goals were: {}",
        or_unknown(&last.date),
        or_unknown(&last.mood),
        or_unknown(&last.energy),
        goals
    )
}

/// A JSON file holding every check-in, oldest first.
#[derive(Debug, Clone)]
pub struct WellnessJournal {
    path: PathBuf,
}

impl WellnessJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full history. A missing file is an empty history.
    ///
    /// # Errors
    ///
    /// A file that exists but is not a JSON list of check-ins is an error,
    /// so a later append never overwrites history it could not read.
    pub fn history(&self) -> Result<Vec<CheckIn>, DataFileError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(DataFileError::Io(e)),
        }
    }

    /// Adds a check-in to the end of the history.
    pub fn append(&self, check_in: CheckIn) -> Result<(), DataFileError> {
        let mut history = self.history()?;
        tracing::info!(
            date = %check_in.date,
            mood = %check_in.mood,
            energy = %check_in.energy,
            "wellness check-in saved"
        );
        history.push(check_in);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(&history)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// The most recent check-in, if any.
    pub fn last(&self) -> Result<Option<CheckIn>, DataFileError> {
        Ok(self.history()?.pop())
    }

    /// [`history_context`] for the most recent check-in.
    pub fn context(&self) -> Result<String, DataFileError> {
        Ok(history_context(self.last()?.as_ref()))
    }
}
