//! Postgres with user and password.

use serde_json::Value;

use crate::contract::{ParamMapping, ProfileMapper};

const POSTGRES_USER_PASSWORD_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("user", &["login"]),
    ParamMapping::new("password", &["password"]),
    ParamMapping::new("port", &["port"]),
    ParamMapping::new("dbname", &["schema"]),
    ParamMapping::new("keepalives_idle", &["extra.keepalives_idle"]),
    ParamMapping::new("sslmode", &["extra.sslmode"]),
];

pub struct PostgresUserPassword;

impl ProfileMapper for PostgresUserPassword {
    fn connection_type(&self) -> &'static str {
        "postgres"
    }

    fn profile_type(&self) -> &'static str {
        "postgres"
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["host", "user", "password", "dbname"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["password"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        POSTGRES_USER_PASSWORD_PARAMS
    }

    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        vec![("port", Value::from(5432))]
    }
}
