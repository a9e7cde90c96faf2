//! Recursive merge of partial updates into a state document.

use crate::error::MergeError;
use serde_json::Value;
use voxdesk_types::{json_kind, StateDocument};

/// Merges `patch` into `base` in place and returns `base`.
///
/// For every key in `patch`: when both sides hold a mapping the two are
/// merged recursively, otherwise the patch value replaces the base value.
/// Keys missing from `patch` are left alone. Sequences are replaced, never
/// concatenated.
///
/// # Errors
///
/// Returns [`MergeError::InvalidPatch`] if `patch` is not a JSON object.
/// `base` is not modified in that case.
pub fn merge(base: &mut StateDocument, patch: Value) -> Result<&mut StateDocument, MergeError> {
    let patch = match patch {
        Value::Object(map) => map,
        other => {
            return Err(MergeError::InvalidPatch {
                found: json_kind(&other),
            })
        }
    };

    tracing::debug!(keys = patch.len(), "merging state patch");
    merge_maps(base, patch);
    Ok(base)
}

/// Returns a copy of `base` with `patch` merged into it.
///
/// # Errors
///
/// Returns [`MergeError::InvalidPatch`] if `patch` is not a JSON object.
pub fn merged(base: &StateDocument, patch: Value) -> Result<StateDocument, MergeError> {
    let mut copy = base.clone();
    merge(&mut copy, patch)?;
    Ok(copy)
}

fn merge_maps(base: &mut StateDocument, patch: StateDocument) {
    for (key, incoming) in patch {
        match incoming {
            Value::Object(nested) => match base.get_mut(&key) {
                Some(Value::Object(existing)) => merge_maps(existing, nested),
                _ => {
                    base.insert(key, Value::Object(nested));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}
