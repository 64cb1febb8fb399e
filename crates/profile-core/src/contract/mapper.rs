//! Per-variant declarations.

use serde_json::Value;

use crate::fields::FieldContext;

/// Source paths for one logical field, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamMapping {
    pub field: &'static str,
    pub paths: &'static [&'static str],
}

impl ParamMapping {
    pub const fn new(field: &'static str, paths: &'static [&'static str]) -> Self {
        Self { field, paths }
    }
}

/// Declarative description of a warehouse variant.
///
/// Implementors are stateless; a [`ProfileMapping`](super::ProfileMapping)
/// pairs one with a connection id and caller overrides.
pub trait ProfileMapper: Send + Sync {
    /// Connection type this variant claims (`snowflake`, `postgres`, ...).
    fn connection_type(&self) -> &'static str;

    /// The client profile `type`.
    fn profile_type(&self) -> &'static str;

    /// The client profile `method`, for clients that distinguish auth methods.
    fn profile_method(&self) -> Option<&'static str> {
        None
    }

    /// Whether the target adapter is community maintained.
    fn is_community(&self) -> bool {
        false
    }

    /// Fields that must resolve for the variant to claim a connection.
    fn required_fields(&self) -> &'static [&'static str];

    /// Fields rendered as env var placeholders instead of values.
    fn secret_fields(&self) -> &'static [&'static str] {
        &[]
    }

    fn param_mapping(&self) -> &'static [ParamMapping];

    /// Namespace of flattened legacy extra keys, e.g. `extra__snowflake__`.
    fn legacy_extra_prefix(&self) -> Option<&'static str> {
        None
    }

    /// Fixed profile entries written before mapped values.
    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        Vec::new()
    }

    /// Name of the profile object a secret's placeholder is nested in, if any.
    fn secret_container(&self, _field: &str) -> Option<&'static str> {
        None
    }

    /// Rewrite a value read from the connection. Overrides are never passed here.
    fn transform(&self, _field: &str, value: Value, _ctx: &FieldContext<'_>) -> Value {
        value
    }

    /// Extra claim condition checked after the connection type matches.
    fn accepts(&self, _ctx: &FieldContext<'_>) -> bool {
        true
    }

    fn param_paths(&self, field: &str) -> Option<&'static [&'static str]> {
        self.param_mapping()
            .iter()
            .find(|mapping| mapping.field == field)
            .map(|mapping| mapping.paths)
    }

    fn is_secret(&self, field: &str) -> bool {
        self.secret_fields().contains(&field)
    }
}
