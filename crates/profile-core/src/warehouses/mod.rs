//! Warehouse variant implementations.
//!
//! Each variant is a unit struct implementing
//! [`ProfileMapper`](crate::contract::ProfileMapper): static field tables
//! plus transform hooks for the quirks of its connection type.

pub mod athena;
pub mod bigquery;
pub mod databricks;
pub mod exasol;
pub mod postgres;
pub mod redshift;
pub mod snowflake;
pub mod spark;
pub mod trino;
pub mod vertica;

use serde_json::Value;

/// Drop a leading `http://` or `https://` from a host value.
pub(crate) fn strip_url_scheme(value: Value) -> Value {
    match value.as_str() {
        Some(host) => {
            let bare = host
                .strip_prefix("https://")
                .or_else(|| host.strip_prefix("http://"))
                .unwrap_or(host);
            Value::String(bare.trim_end_matches('/').to_string())
        }
        None => value,
    }
}
