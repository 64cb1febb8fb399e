use serde_json::Value;

use super::{transform_account, CONN_TYPE, LEGACY_EXTRA_PREFIX, PROFILE_TYPE};
use crate::contract::{ParamMapping, ProfileMapper};
use crate::fields::FieldContext;

const PARAMS: &[ParamMapping] = &[
    ParamMapping::new("account", &["extra.account"]),
    ParamMapping::new("user", &["login"]),
    ParamMapping::new("password", &["password"]),
    ParamMapping::new("database", &["extra.database"]),
    ParamMapping::new("warehouse", &["extra.warehouse"]),
    ParamMapping::new("schema", &["schema"]),
    ParamMapping::new("role", &["extra.role"]),
    ParamMapping::new("host", &["extra.host"]),
    ParamMapping::new("port", &["extra.port"]),
];

/// Snowflake with user and password.
///
/// Declines connections that carry private key material, so a key-pair
/// connection whose password is its passphrase is never mistaken for a
/// password login.
pub struct SnowflakeUserPassword;

impl ProfileMapper for SnowflakeUserPassword {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["account", "user", "database", "warehouse", "schema", "password"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["password"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        PARAMS
    }

    fn legacy_extra_prefix(&self) -> Option<&'static str> {
        Some(LEGACY_EXTRA_PREFIX)
    }

    fn accepts(&self, ctx: &FieldContext<'_>) -> bool {
        !ctx.has_extra("private_key_file") && !ctx.has_extra("private_key_content")
    }

    fn transform(&self, field: &str, value: Value, ctx: &FieldContext<'_>) -> Value {
        match field {
            "account" => transform_account(value, ctx),
            _ => value,
        }
    }
}
