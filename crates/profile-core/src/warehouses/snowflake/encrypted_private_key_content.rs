//! Snowflake key-pair auth with an encrypted key stored in the connection.

use serde_json::Value;

use super::{transform_account, CONN_TYPE, LEGACY_EXTRA_PREFIX, PROFILE_TYPE};
use crate::contract::{ParamMapping, ProfileMapper};
use crate::fields::FieldContext;
use crate::keypair::PrivateKeyNormalizer;

const PARAMS: &[ParamMapping] = &[
    ParamMapping::new("account", &["extra.account"]),
    ParamMapping::new("user", &["login"]),
    ParamMapping::new("database", &["extra.database"]),
    ParamMapping::new("warehouse", &["extra.warehouse"]),
    ParamMapping::new("schema", &["schema"]),
    ParamMapping::new("role", &["extra.role"]),
    ParamMapping::new("private_key", &["extra.private_key_content"]),
    ParamMapping::new("private_key_passphrase", &["password"]),
];

/// The key is rendered as base64 DER when it is stored as PKCS#8 PEM, and
/// passed through as stored otherwise.
pub struct SnowflakeEncryptedPrivateKeyContent;

impl ProfileMapper for SnowflakeEncryptedPrivateKeyContent {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn is_community(&self) -> bool {
        true
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "account",
            "user",
            "database",
            "warehouse",
            "schema",
            "private_key",
            "private_key_passphrase",
        ]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["private_key", "private_key_passphrase"]
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
            "private_key" => transform_private_key(value, ctx),
            _ => value,
        }
    }
}

/// The passphrase override, when given, is also the one used to decrypt
/// and re-encrypt the key, so the exported key and passphrase always match.
fn transform_private_key(value: Value, ctx: &FieldContext<'_>) -> Value {
    let Some(raw) = value.as_str() else {
        return value;
    };
    let passphrase = ctx
        .arg_str("private_key_passphrase")
        .or(ctx.record.password.as_deref());
    let normalizer = PrivateKeyNormalizer::from_config(&ctx.config.private_key);
    Value::String(normalizer.normalize(raw, passphrase).into_string())
}
