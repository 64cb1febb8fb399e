//! Exasol with user and password.

use serde_json::Value;

use crate::contract::{ParamMapping, ProfileMapper};
use crate::fields::FieldContext;

pub const DEFAULT_PORT: u16 = 8563;

const EXASOL_USER_PASSWORD_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("dsn", &["host"]),
    ParamMapping::new("user", &["login"]),
    ParamMapping::new("password", &["password"]),
    ParamMapping::new("dbname", &["schema"]),
    ParamMapping::new("encryption", &["extra.encryption"]),
    ParamMapping::new("compression", &["extra.compression"]),
    ParamMapping::new("connection_timeout", &["extra.connection_timeout"]),
    ParamMapping::new("socket_timeout", &["extra.socket_timeout"]),
    ParamMapping::new("protocol_version", &["extra.protocol_version"]),
];

pub struct ExasolUserPassword;

impl ProfileMapper for ExasolUserPassword {
    fn connection_type(&self) -> &'static str {
        "exasol"
    }

    fn profile_type(&self) -> &'static str {
        "exasol"
    }

    fn is_community(&self) -> bool {
        true
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["dsn", "user", "password", "dbname"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["password"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        EXASOL_USER_PASSWORD_PARAMS
    }

    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        vec![("threads", Value::from(1))]
    }

    fn transform(&self, field: &str, value: Value, ctx: &FieldContext<'_>) -> Value {
        match (field, value.as_str()) {
            ("dsn", Some(host)) => Value::String(compose_dsn(host, ctx.record.port)),
            _ => value,
        }
    }
}

/// `host:port`, keeping a port already present in the host.
pub fn compose_dsn(host: &str, port: Option<u16>) -> String {
    if host.contains(':') {
        return host.to_string();
    }
    format!("{}:{}", host, port.unwrap_or(DEFAULT_PORT))
}
