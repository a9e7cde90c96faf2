//! Sales lead captured by the SDR agent.

use crate::error::LeadError;
use crate::merge::merge;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use voxdesk_types::StateDocument;

/// Lead fields the agent collects, in the order it asks for them.
pub const LEAD_FIELDS: [&str; 8] = [
    "name",
    "company",
    "email",
    "phone",
    "role",
    "use_case",
    "team_size",
    "timeline",
];

/// A prospective customer's details, filled in one field at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lead {
    doc: StateDocument,
}

impl Lead {
    /// Creates an empty lead stamped with `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        let stamp = now.to_rfc3339();
        let mut doc = StateDocument::new();
        doc.insert("id".to_string(), Value::String(stamp.clone()));
        for field in LEAD_FIELDS {
            doc.insert(field.to_string(), Value::Null);
        }
        doc.insert("collected_at".to_string(), Value::String(stamp));
        doc.insert("notes".to_string(), Value::Array(Vec::new()));
        Self { doc }
    }

    /// Records a value for one of the [`LEAD_FIELDS`].
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::UnknownField`] if `field` is not a lead field.
    pub fn collect(&mut self, field: &str, value: &str) -> Result<(), LeadError> {
        if !LEAD_FIELDS.contains(&field) {
            return Err(LeadError::UnknownField(field.to_string()));
        }
        merge(&mut self.doc, json!({ field: value.trim() }))?;
        tracing::info!(field, "collected lead field");
        Ok(())
    }

    /// Returns the collected value of a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.doc
            .get(field)
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The first field that has not been collected yet.
    pub fn next_missing_field(&self) -> Option<&'static str> {
        LEAD_FIELDS.into_iter().find(|f| self.get(f).is_none())
    }

    /// Whether every lead field has been collected.
    pub fn is_complete(&self) -> bool {
        self.next_missing_field().is_none()
    }

    /// Appends a free-form note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        let note = Value::String(note.into());
        match self.doc.get_mut("notes") {
            Some(Value::Array(notes)) => notes.push(note),
            _ => {
                self.doc.insert("notes".to_string(), Value::Array(vec![note]));
            }
        }
    }

    /// A spoken-friendly summary of what has been collected.
    pub fn summary(&self) -> String {
        let field_or = |field: &str, fallback: &'static str| {
            self.get(field).unwrap_or(fallback).to_string()
        };
        format!(
            "Lead Summary:\n\
             - Name: {}\n\
             - Company: {}\n\
             - Role: {}\n\
             - Use Case: {}\n\
             - Team Size: {}\n\
             - Timeline: {}",
            field_or("name", "Unknown"),
            field_or("company", "Not specified"),
            field_or("role", "Not specified"),
            field_or("use_case", "Not specified"),
            field_or("team_size", "Not specified"),
            field_or("timeline", "Not specified"),
        )
    }

    /// Borrows the underlying document.
    pub fn document(&self) -> &StateDocument {
        &self.doc
    }
}
