//! Key Derivation Module
//!
//! Derives a stable string key from a record, with a fixed precedence:
//!
//! 1. A non-empty string `id` field is used verbatim.
//! 2. Otherwise a `run_id` (or `runId`) field is used in its string form.
//! 3. Otherwise the whole record is serialized to JSON and the encoding
//!    itself becomes the key.
//!
//! Derivation is pure and deterministic: the same record always yields the
//! same key. The fallback case means two structurally identical records
//! without identity fields collide on one key; the cache treats that as an
//! ordinary overwrite rather than an error.

use serde::Serialize;
use serde_json::Value;

/// Derives the cache key for a record.
///
/// Records that cannot be serialized never abort keying; they degrade to a
/// `null` key and collide with each other, matching the engine's contract
/// of raising no errors on malformed key material.
pub fn derive<T: Serialize>(record: &T) -> String {
    let encoded = serde_json::to_value(record).unwrap_or(Value::Null);

    if let Some(Value::String(id)) = encoded.get("id") {
        if !id.is_empty() {
            return id.clone();
        }
    }

    // Accept both snake_case and the camelCase spelling used by upstream
    // orchestrator payloads.
    for field in ["run_id", "runId"] {
        if let Some(run_id) = encoded.get(field) {
            if let Some(key) = field_string(run_id) {
                return key;
            }
        }
    }

    encoded.to_string()
}

/// String form of a field value; None for null/missing semantics.
fn field_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
