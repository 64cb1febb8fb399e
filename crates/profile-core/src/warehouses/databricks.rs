//! Databricks SQL warehouses with a personal access token.

use serde_json::Value;

use super::strip_url_scheme;
use crate::contract::{ParamMapping, ProfileMapper};
use crate::fields::FieldContext;

const DATABRICKS_TOKEN_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("host", &["host"]),
    ParamMapping::new("schema", &["schema"]),
    ParamMapping::new("token", &["password", "extra.token"]),
    ParamMapping::new("http_path", &["extra.http_path"]),
];

pub struct DatabricksToken;

impl ProfileMapper for DatabricksToken {
    fn connection_type(&self) -> &'static str {
        "databricks"
    }

    fn profile_type(&self) -> &'static str {
        "databricks"
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["host", "schema", "token", "http_path"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["token"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        DATABRICKS_TOKEN_PARAMS
    }

    fn transform(&self, field: &str, value: Value, _ctx: &FieldContext<'_>) -> Value {
        match field {
            "host" => strip_url_scheme(value),
            _ => value,
        }
    }
}
