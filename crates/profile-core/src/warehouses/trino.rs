//! Trino with LDAP, client certificate or JWT authentication.
//!
//! All three share the connection-level fields; only the credential part
//! differs.

use serde_json::Value;

use super::strip_url_scheme;
use crate::contract::{ParamMapping, ProfileMapper};
use crate::fields::FieldContext;

const CONN_TYPE: &str = "trino";
const PROFILE_TYPE: &str = "trino";

fn transform_common(field: &str, value: Value) -> Value {
    match field {
        "host" => strip_url_scheme(value),
        _ => value,
    }
}

const TRINO_LDAP_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("port", &["port"]),
    ParamMapping::new("database", &["extra.catalog"]),
    ParamMapping::new("schema", &["schema"]),
    ParamMapping::new("session_properties", &["extra.session_properties"]),
    ParamMapping::new("user", &["login"]),
    ParamMapping::new("password", &["password"]),
];

pub struct TrinoLdap;

impl ProfileMapper for TrinoLdap {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn profile_method(&self) -> Option<&'static str> {
        Some("ldap")
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["host", "port", "database", "schema", "user", "password"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["password"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        TRINO_LDAP_PARAMS
    }

    fn transform(&self, field: &str, value: Value, _ctx: &FieldContext<'_>) -> Value {
        transform_common(field, value)
    }
}

const TRINO_CERTIFICATE_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("port", &["port"]),
    ParamMapping::new("database", &["extra.catalog"]),
    ParamMapping::new("schema", &["schema"]),
    ParamMapping::new("session_properties", &["extra.session_properties"]),
    ParamMapping::new("client_certificate", &["extra.certs__client_cert_path"]),
    ParamMapping::new("client_private_key", &["extra.certs__client_key_path"]),
];

pub struct TrinoCertificate;

impl ProfileMapper for TrinoCertificate {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn profile_method(&self) -> Option<&'static str> {
        Some("certificate")
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &[
            "host",
            "port",
            "database",
            "schema",
            "client_certificate",
            "client_private_key",
        ]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        TRINO_CERTIFICATE_PARAMS
    }

    fn transform(&self, field: &str, value: Value, _ctx: &FieldContext<'_>) -> Value {
        transform_common(field, value)
    }
}

const TRINO_JWT_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("port", &["port"]),
    ParamMapping::new("database", &["extra.catalog"]),
    ParamMapping::new("schema", &["schema"]),
    ParamMapping::new("session_properties", &["extra.session_properties"]),
    ParamMapping::new("jwt_token", &["extra.jwt__token"]),
];

pub struct TrinoJwt;

impl ProfileMapper for TrinoJwt {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn profile_method(&self) -> Option<&'static str> {
        Some("jwt")
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["host", "port", "database", "schema", "jwt_token"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["jwt_token"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        TRINO_JWT_PARAMS
    }

    fn transform(&self, field: &str, value: Value, _ctx: &FieldContext<'_>) -> Value {
        transform_common(field, value)
    }
}
