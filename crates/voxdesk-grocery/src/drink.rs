//! Coffee orders taken by the barista agent.

use crate::error::GroceryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single drink order, saved once the customer has given every detail.
///
/// JSON field names are camelCase (`drinkType`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkOrder {
    pub drink_type: String,
    pub size: String,
    pub milk: String,
    /// Syrups, extra shots and the like. May be empty.
    #[serde(default)]
    pub extras: Vec<String>,
    /// Name to call out when the drink is ready.
    pub name: String,
}

impl DrinkOrder {
    /// Details still missing before the order can be saved, in the order
    /// the barista asks for them. Extras are optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("drinkType", &self.drink_type),
            ("size", &self.size),
            ("milk", &self.milk),
            ("name", &self.name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// One-line recap read back before saving.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} {} with {} milk for {}",
            self.size, self.drink_type, self.milk, self.name
        );
        if !self.extras.is_empty() {
            line.push_str(&format!(", extras: {}", self.extras.join(", ")));
        }
        line
    }

    /// Writes the order to `path`, replacing the previous order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GroceryError> {
        let path = path.as_ref();
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        tracing::info!(path = %path.display(), name = %self.name, "drink order saved");
        Ok(())
    }

    /// Reads an order written by [`DrinkOrder::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GroceryError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
