//! Override precedence and transform application for a single mapping.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::path::{is_truthy, resolve_path};
use crate::config::MappingConfig;
use crate::connection::ConnectionRecord;
use crate::contract::{ProfileArgs, ProfileMapper};

/// Field name to resolved (non-empty) value.
pub type ResolvedFields = BTreeMap<String, Value>;

/// Everything a transform or claim guard may look at.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub record: &'a ConnectionRecord,
    /// The decoded extra bag, already stripped of legacy key prefixes.
    pub extra: &'a Map<String, Value>,
    pub profile_args: &'a ProfileArgs,
    pub config: &'a MappingConfig,
}

impl<'a> FieldContext<'a> {
    pub fn extra_str(&self, key: &str) -> Option<&'a str> {
        self.extra
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn has_extra(&self, key: &str) -> bool {
        self.extra.get(key).is_some_and(is_truthy)
    }

    pub fn arg_str(&self, field: &str) -> Option<&'a str> {
        self.profile_args
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Resolves logical fields for one variant against one connection.
pub struct FieldResolver<'a> {
    mapper: &'a dyn ProfileMapper,
    ctx: FieldContext<'a>,
}

impl<'a> FieldResolver<'a> {
    pub fn new(mapper: &'a dyn ProfileMapper, ctx: FieldContext<'a>) -> Self {
        Self { mapper, ctx }
    }

    pub fn context(&self) -> &FieldContext<'a> {
        &self.ctx
    }

    /// Resolve one field.
    ///
    /// A non-empty profile argument wins outright and is never transformed.
    /// Otherwise the variant's source paths are tried in order; the first
    /// non-empty value goes through the variant's transform.
    pub fn resolve(&self, field: &str) -> Option<Value> {
        if let Some(value) = self.ctx.profile_args.get(field).filter(|v| is_truthy(v)) {
            return Some(value.clone());
        }

        let paths = self.mapper.param_paths(field)?;
        let raw = paths
            .iter()
            .find_map(|path| resolve_path(self.ctx.record, self.ctx.extra, path))?;
        Some(self.mapper.transform(field, raw, &self.ctx)).filter(is_truthy)
    }

    /// Resolve every field in `fields`, keeping only the ones that resolved.
    pub fn resolve_all<'f>(&self, fields: impl IntoIterator<Item = &'f str>) -> ResolvedFields {
        fields
            .into_iter()
            .filter_map(|field| self.resolve(field).map(|value| (field.to_string(), value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ParamMapping;
    use serde_json::json;

    struct Upper;

    impl ProfileMapper for Upper {
        fn connection_type(&self) -> &'static str {
            "test"
        }
        fn profile_type(&self) -> &'static str {
            "test"
        }
        fn required_fields(&self) -> &'static [&'static str] {
            &["user"]
        }
        fn param_mapping(&self) -> &'static [ParamMapping] {
            const MAPPING: &[ParamMapping] = &[
                ParamMapping::new("user", &["login", "extra.user"]),
                ParamMapping::new("host", &["host"]),
            ];
            MAPPING
        }
        fn transform(&self, field: &str, value: Value, _ctx: &FieldContext<'_>) -> Value {
            match (field, value.as_str()) {
                ("user", Some(s)) => Value::String(s.to_uppercase()),
                _ => value,
            }
        }
    }

    fn resolve(record: &ConnectionRecord, args: &ProfileArgs, field: &str) -> Option<Value> {
        let extra = record.extra_dejson();
        let config = MappingConfig::default();
        let ctx = FieldContext {
            record,
            extra: &extra,
            profile_args: args,
            config: &config,
        };
        FieldResolver::new(&Upper, ctx).resolve(field)
    }

    #[test]
    fn test_paths_tried_in_order_and_transformed() {
        let record = ConnectionRecord::new("c", "test").with_extra(&json!({"user": "from_extra"}));
        let args = ProfileArgs::new();
        assert_eq!(resolve(&record, &args, "user"), Some(json!("FROM_EXTRA")));

        let record = record.with_login("from_login");
        assert_eq!(resolve(&record, &args, "user"), Some(json!("FROM_LOGIN")));
    }

    #[test]
    fn test_override_skips_transform() {
        let record = ConnectionRecord::new("c", "test").with_login("from_login");
        let mut args = ProfileArgs::new();
        args.insert("user".into(), json!("override"));
        assert_eq!(resolve(&record, &args, "user"), Some(json!("override")));
    }

    #[test]
    fn test_empty_override_falls_back() {
        let record = ConnectionRecord::new("c", "test").with_login("from_login");
        let mut args = ProfileArgs::new();
        args.insert("user".into(), json!(""));
        assert_eq!(resolve(&record, &args, "user"), Some(json!("FROM_LOGIN")));
    }

    #[test]
    fn test_context_exposes_normalized_inputs() {
        let record = ConnectionRecord::new("c", "test").with_extra(&json!({"user": "u"}));
        let extra = record.extra_dejson();
        let config = MappingConfig::default();
        let mut args = ProfileArgs::new();
        args.insert("warehouse".into(), json!("wh"));
        let ctx = FieldContext {
            record: &record,
            extra: &extra,
            profile_args: &args,
            config: &config,
        };

        let resolver = FieldResolver::new(&Upper, ctx);
        assert_eq!(resolver.context().record.conn_id, "c");
        assert_eq!(resolver.context().extra_str("user"), Some("u"));
        assert_eq!(resolver.context().arg_str("warehouse"), Some("wh"));
        assert!(!resolver.context().has_extra("missing"));
    }

    #[test]
    fn test_unmapped_field_without_override_is_none() {
        let record = ConnectionRecord::new("c", "test");
        assert_eq!(resolve(&record, &ProfileArgs::new(), "warehouse"), None);
        assert_eq!(resolve(&record, &ProfileArgs::new(), "host"), None);
    }
}
