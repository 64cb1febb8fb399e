//! Amazon Redshift with user and password.

use serde_json::Value;

use crate::contract::{ParamMapping, ProfileMapper};

const REDSHIFT_USER_PASSWORD_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("user", &["login"]),
    ParamMapping::new("password", &["password"]),
    ParamMapping::new("port", &["port"]),
    ParamMapping::new("dbname", &["schema"]),
    ParamMapping::new("timeout", &["extra.timeout"]),
    ParamMapping::new("sslmode", &["extra.sslmode"]),
    ParamMapping::new("region", &["extra.region"]),
];

pub struct RedshiftUserPassword;

impl ProfileMapper for RedshiftUserPassword {
    fn connection_type(&self) -> &'static str {
        "redshift"
    }

    fn profile_type(&self) -> &'static str {
        "redshift"
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["host", "user", "password", "dbname"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["password"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        REDSHIFT_USER_PASSWORD_PARAMS
    }

    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        vec![("port", Value::from(5439))]
    }
}
