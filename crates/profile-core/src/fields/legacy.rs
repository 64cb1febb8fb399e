//! Legacy extra-key normalization.
//!
//! Older connection forms stored extra fields flattened under a per-type
//! namespace (`extra__snowflake__account`). Current forms use the bare key
//! (`account`). Normalizing up front lets every lookup use bare keys.

use serde_json::{Map, Value};

use super::path::is_truthy;

/// Return a copy of `extra` with `prefix` stripped from every key that has it.
///
/// When both spellings of a key are present, the current one is kept unless
/// it is empty.
pub fn normalize_legacy_extra(extra: Map<String, Value>, prefix: &str) -> Map<String, Value> {
    if !extra.keys().any(|key| key.starts_with(prefix)) {
        return extra;
    }

    let mut normalized = Map::new();
    let mut legacy = Vec::new();
    for (key, value) in extra {
        match key.strip_prefix(prefix) {
            Some(bare) => legacy.push((bare.to_string(), value)),
            None => {
                normalized.insert(key, value);
            }
        }
    }

    for (key, value) in legacy {
        let keep_current = normalized.get(&key).is_some_and(is_truthy);
        if !keep_current {
            normalized.insert(key, value);
        }
    }

    normalized
}
