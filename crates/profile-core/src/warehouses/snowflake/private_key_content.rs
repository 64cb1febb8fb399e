use serde_json::Value;

use super::{transform_account, CONN_TYPE, LEGACY_EXTRA_PREFIX, PROFILE_TYPE};
use crate::contract::{ParamMapping, ProfileMapper};
use crate::fields::FieldContext;

const PARAMS: &[ParamMapping] = &[
    ParamMapping::new("account", &["extra.account"]),
    ParamMapping::new("user", &["login"]),
    ParamMapping::new("database", &["extra.database"]),
    ParamMapping::new("warehouse", &["extra.warehouse"]),
    ParamMapping::new("schema", &["schema"]),
    ParamMapping::new("role", &["extra.role"]),
    ParamMapping::new("private_key", &["extra.private_key_content"]),
];

/// Snowflake key-pair auth with an unencrypted key stored in the connection.
pub struct SnowflakePrivateKeyContent;

impl ProfileMapper for SnowflakePrivateKeyContent {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["account", "user", "database", "warehouse", "schema", "private_key"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["private_key"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        PARAMS
    }

    fn legacy_extra_prefix(&self) -> Option<&'static str> {
        Some(LEGACY_EXTRA_PREFIX)
    }

    fn transform(&self, field: &str, value: Value, ctx: &FieldContext<'_>) -> Value {
        match field {
            "account" => transform_account(value, ctx),
            _ => value,
        }
    }
}
