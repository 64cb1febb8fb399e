use std::collections::BTreeMap;

use serde_json::Value;

/// Caller-supplied overrides and additions, keyed by logical field name.
pub type ProfileArgs = BTreeMap<String, Value>;

/// A rendered client profile. Secret fields hold placeholders, never values.
pub type Profile = BTreeMap<String, Value>;

/// Environment variable name to secret value.
pub type EnvVarMap = BTreeMap<String, String>;
