//! Vertica with user and password.

use serde_json::Value;

use crate::contract::{ParamMapping, ProfileMapper};

const VERTICA_USER_PASSWORD_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("username", &["login"]),
    ParamMapping::new("password", &["password"]),
    ParamMapping::new("port", &["port"]),
    ParamMapping::new("database", &["schema"]),
    ParamMapping::new("autocommit", &["extra.autocommit"]),
    ParamMapping::new("backup_server_node", &["extra.backup_server_node"]),
    ParamMapping::new("connection_load_balance", &["extra.connection_load_balance"]),
    ParamMapping::new("connection_timeout", &["extra.connection_timeout"]),
    ParamMapping::new("session_label", &["extra.session_label"]),
    ParamMapping::new("ssl", &["extra.ssl"]),
];

pub struct VerticaUserPassword;

impl ProfileMapper for VerticaUserPassword {
    fn connection_type(&self) -> &'static str {
        "vertica"
    }

    fn profile_type(&self) -> &'static str {
        "vertica"
    }

    fn is_community(&self) -> bool {
        true
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["host", "username", "password", "database"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["password"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        VERTICA_USER_PASSWORD_PARAMS
    }

    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        vec![("port", Value::from(5433))]
    }
}
