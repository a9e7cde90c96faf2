//! Shared types and constants for the voxdesk voice agents.
//!
//! This crate provides the vocabulary used across every voxdesk crate: the
//! nested JSON document type that session state is stored in, the order
//! status names used by the grocery agent, tutor modes, and voice profiles.
//!
//! Nothing in here performs I/O. Crates that need a shared type depend on
//! `voxdesk-types` instead of on each other, which keeps the dependency
//! graph a tree.

use serde_json::{Map, Value};

pub mod tutor;
pub mod voice;

pub use tutor::{find_concept, Concept, ModeConfig, ParseTutorModeError, TutorMode};
pub use voice::{SpeechStyle, VoiceProfile};

/// A persistent, arbitrarily nested key-value record.
///
/// Values are JSON scalars, sequences, or nested mappings. Session state
/// (game world state, sales leads) is kept in this shape so it can be
/// persisted as JSON without a schema.
pub type StateDocument = Map<String, Value>;

/// Order status: the order has been recorded.
pub const STATUS_RECEIVED: &str = "received";
/// Order status: the store has accepted the order.
pub const STATUS_CONFIRMED: &str = "confirmed";
/// Order status: items are being picked and packed.
pub const STATUS_PREPARING: &str = "preparing";
/// Order status: a courier has the order.
pub const STATUS_OUT_FOR_DELIVERY: &str = "out_for_delivery";
/// Order status: terminal.
pub const STATUS_DELIVERED: &str = "delivered";

/// Order statuses in delivery order, paired with the number of seconds after
/// placement at which each one is reached.
pub const ORDER_STATUS_SCHEDULE: [(u64, &str); 5] = [
    (0, STATUS_RECEIVED),
    (30, STATUS_CONFIRMED),
    (60, STATUS_PREPARING),
    (90, STATUS_OUT_FOR_DELIVERY),
    (120, STATUS_DELIVERED),
];

/// Returns the JSON type name of a value, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schedule_thresholds_strictly_increase() {
        for pair in ORDER_STATUS_SCHEDULE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn schedule_ends_in_delivered() {
        assert_eq!(ORDER_STATUS_SCHEDULE[0].1, STATUS_RECEIVED);
        assert_eq!(ORDER_STATUS_SCHEDULE[4].1, STATUS_DELIVERED);
    }

    #[test]
    fn json_kind_labels() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!([1])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }
}
