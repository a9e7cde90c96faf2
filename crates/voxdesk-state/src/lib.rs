//! Session state for the voxdesk agents.
//!
//! Agents keep what they learn during a conversation in a
//! [`StateDocument`]: the game master's world state, the SDR agent's lead
//! record. Tool calls report only what changed, and [`merge`] folds that
//! partial document into the session's copy.
//!
//! # Merge rules
//!
//! | base value | patch value | result |
//! |------------|-------------|--------|
//! | mapping | mapping | merged recursively |
//! | anything | anything else | patch value |
//! | absent | anything | patch value inserted |
//! | present | absent | base value kept |
//!
//! Sequences are treated as scalars and replaced whole. Callers that keep
//! an append-only log (such as [`WorldState::record_event`]) append the
//! entry themselves.
//!
//! Agents also keep a few plain data files: the wellness check-in history
//! ([`WellnessJournal`]) and the SDR agent's company FAQ ([`SdrContent`]).
//!
//! State is owned by the session that created it. Nothing here is global
//! and nothing here locks: a document must not be merged into from two
//! threads at once.
//!
//! ```rust,ignore
//! use serde_json::json;
//! use voxdesk_state::merge;
//!
//! let mut world = serde_json::Map::new();
//! merge(&mut world, json!({"player": {"hp": 10}}))?;
//! merge(&mut world, json!({"player": {"gold": 3}}))?;
//! assert_eq!(world["player"], json!({"hp": 10, "gold": 3}));
//! ```

mod error;
mod lead;
mod merge;
mod sdr;
mod wellness;
mod world;

pub use error::{DataFileError, LeadError, MergeError};
pub use lead::{Lead, LEAD_FIELDS};
pub use merge::{merge, merged};
pub use sdr::{FaqEntry, SdrContent, FAQ_FALLBACK};
pub use voxdesk_types::StateDocument;
pub use wellness::{history_context, parse_objectives, CheckIn, WellnessJournal};
pub use world::WorldState;

#[cfg(test)]
mod tests;
