//! Game world state owned by a single game-master session.

use crate::error::MergeError;
use crate::merge::merge;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use voxdesk_types::StateDocument;

const EVENTS_KEY: &str = "events";

/// The evolving world of one adventure.
///
/// Created when the session starts and dropped with it. Scene updates from
/// the game master arrive as patches through [`WorldState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldState {
    doc: StateDocument,
}

impl WorldState {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the opening world of the Eldoria adventure.
    ///
    /// The player starts as a warrior in the Village of Eldoria with one
    /// active quest. Later scene updates are merged on top of this document.
    pub fn adventure_start() -> Self {
        let start = json!({
            "characters": {
                "player": {
                    "name": "Adventurer",
                    "class": "Warrior",
                    "hp": 100,
                    "max_hp": 100,
                    "inventory": ["sword", "shield", "backpack"],
                    "traits": ["brave", "determined"],
                },
                "npcs": {},
            },
            "locations": {
                "current": "Village of Eldoria",
                "visited": ["Village of Eldoria"],
                "known_paths": {
                    "Village of Eldoria": ["Dark Forest", "Mountain Pass"],
                },
            },
            "events": [],
            "quests": {
                "active": [{
                    "id": "defeat_sorcerer",
                    "title": "Defeat the Evil Sorcerer",
                    "description": "Find and defeat the sorcerer threatening the kingdom.",
                    "objectives": [
                        "Find the sorcerer's lair",
                        "Gather allies",
                        "Confront the sorcerer",
                    ],
                    "completed_objectives": [],
                }],
                "completed": [],
            },
        });
        match start {
            Value::Object(doc) => Self { doc },
            _ => Self::default(),
        }
    }

    /// Creates a world seeded with initial defaults.
    pub fn with_defaults(defaults: StateDocument) -> Self {
        Self { doc: defaults }
    }

    /// Merges a scene update into the world.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidPatch`] if `patch` is not a JSON object.
    pub fn apply(&mut self, patch: Value) -> Result<&StateDocument, MergeError> {
        merge(&mut self.doc, patch).map(|doc| &*doc)
    }

    /// Appends an entry to the `events` log.
    ///
    /// A missing `events` key is created. A non-sequence value under that
    /// key is replaced by a fresh log.
    pub fn record_event(&mut self, event: impl Into<String>) {
        let event = Value::String(event.into());
        match self.doc.get_mut(EVENTS_KEY) {
            Some(Value::Array(log)) => log.push(event),
            Some(other) => {
                tracing::warn!(
                    found = voxdesk_types::json_kind(other),
                    "events is not a list, resetting"
                );
                self.doc.insert(EVENTS_KEY.to_string(), Value::Array(vec![event]));
            }
            None => {
                self.doc.insert(EVENTS_KEY.to_string(), Value::Array(vec![event]));
            }
        }
    }

    /// Returns the string entries of the `events` log, oldest first.
    pub fn events(&self) -> Vec<&str> {
        match self.doc.get(EVENTS_KEY) {
            Some(Value::Array(log)) => log.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Looks up a value by JSON pointer, e.g. `/player/hp`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let (first, rest) = match pointer.strip_prefix('/')?.split_once('/') {
            Some((first, rest)) => (first, Some(rest)),
            None => (pointer.strip_prefix('/')?, None),
        };
        let value = self.doc.get(&first.replace("~1", "/").replace("~0", "~"))?;
        match rest {
            Some(rest) => value.pointer(&format!("/{rest}")),
            None => Some(value),
        }
    }

    /// Borrows the underlying document.
    pub fn document(&self) -> &StateDocument {
        &self.doc
    }

    /// Consumes the world, returning the underlying document.
    pub fn into_document(self) -> StateDocument {
        self.doc
    }
}
