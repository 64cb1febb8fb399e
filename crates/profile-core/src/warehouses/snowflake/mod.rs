//! Snowflake variants.
//!
//! Snowflake connections used to store their extra fields flattened under
//! `extra__snowflake__`; every variant normalizes those keys first. The
//! account identifier is composed with the region when the region is
//! stored separately.

mod encrypted_private_key_content;
mod encrypted_private_key_file;
mod private_key_content;
mod user_pass;

pub use encrypted_private_key_content::SnowflakeEncryptedPrivateKeyContent;
pub use encrypted_private_key_file::SnowflakeEncryptedPrivateKeyFile;
pub use private_key_content::SnowflakePrivateKeyContent;
pub use user_pass::SnowflakeUserPassword;

use serde_json::Value;

use crate::fields::FieldContext;

pub(crate) const CONN_TYPE: &str = "snowflake";
pub(crate) const PROFILE_TYPE: &str = "snowflake";
pub const LEGACY_EXTRA_PREFIX: &str = "extra__snowflake__";

/// `{account}.{region}` unless the region is absent or already part of the
/// account.
pub fn compose_account(account: &str, region: Option<&str>) -> String {
    match region {
        Some(region) if !region.is_empty() && !account.contains(region) => {
            format!("{account}.{region}")
        }
        _ => account.to_string(),
    }
}

pub(crate) fn transform_account(value: Value, ctx: &FieldContext<'_>) -> Value {
    match value.as_str() {
        Some(account) => Value::String(compose_account(account, ctx.extra_str("region"))),
        None => value,
    }
}
