//! Dotted path resolution against a connection record.

use serde_json::{Map, Value};

use crate::connection::ConnectionRecord;

/// Paths starting with this prefix look inside the extra attribute bag.
pub const EXTRA_PREFIX: &str = "extra.";

/// A parsed source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath<'a> {
    /// A top-level record attribute such as `login` or `host`.
    Attribute(&'a str),
    /// A key of the extra bag. Everything after `extra.` is the key, dots included.
    Extra(&'a str),
}

impl<'a> FieldPath<'a> {
    pub fn parse(path: &'a str) -> Self {
        match path.strip_prefix(EXTRA_PREFIX) {
            Some(key) => Self::Extra(key),
            None => Self::Attribute(path),
        }
    }
}

/// Resolve `path` against `record`, reading extra keys from the already
/// decoded (and normalized) `extra` map.
///
/// Never fails: unknown attributes, missing keys and empty values all
/// resolve to `None`.
pub fn resolve_path(
    record: &ConnectionRecord,
    extra: &Map<String, Value>,
    path: &str,
) -> Option<Value> {
    let value = match FieldPath::parse(path) {
        FieldPath::Attribute(name) => record.attribute(name),
        FieldPath::Extra(key) => extra.get(key).cloned(),
    };
    value.filter(is_truthy)
}

/// Whether a value counts as present.
///
/// Null, `false`, zero, and empty strings, arrays and objects are all
/// treated as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
