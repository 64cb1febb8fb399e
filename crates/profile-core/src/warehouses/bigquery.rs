//! Google BigQuery, authenticated by key file path, inline key file or OAuth.

use serde_json::Value;

use crate::contract::{ParamMapping, ProfileMapper};
use crate::fields::FieldContext;

const CONN_TYPE: &str = "google_cloud_platform";
const PROFILE_TYPE: &str = "bigquery";
const LEGACY_PREFIX: &str = "extra__google_cloud_platform__";

fn default_threads() -> Vec<(&'static str, Value)> {
    vec![("threads", Value::from(1))]
}

const GOOGLE_CLOUD_SERVICE_ACCOUNT_FILE_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("project", &["extra.project"]),
    ParamMapping::new("dataset", &["extra.dataset"]),
    ParamMapping::new("keyfile", &["extra.key_path"]),
];

/// Service account key file referenced by path.
pub struct GoogleCloudServiceAccountFile;

impl ProfileMapper for GoogleCloudServiceAccountFile {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn profile_method(&self) -> Option<&'static str> {
        Some("service-account")
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["project", "dataset", "keyfile"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        GOOGLE_CLOUD_SERVICE_ACCOUNT_FILE_PARAMS
    }

    fn legacy_extra_prefix(&self) -> Option<&'static str> {
        Some(LEGACY_PREFIX)
    }

    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        default_threads()
    }
}

const GOOGLE_CLOUD_SERVICE_ACCOUNT_DICT_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("project", &["extra.project"]),
    ParamMapping::new("dataset", &["extra.dataset"]),
    ParamMapping::new("keyfile_json", &["extra.keyfile_dict"]),
    ParamMapping::new("private_key_id", &["extra.keyfile_dict"]),
    ParamMapping::new("private_key", &["extra.keyfile_dict"]),
];

/// Service account key file stored inline in the connection.
///
/// The key file is rendered as `keyfile_json`; its `private_key` and
/// `private_key_id` entries are replaced by env var placeholders.
pub struct GoogleCloudServiceAccountDict;

impl ProfileMapper for GoogleCloudServiceAccountDict {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn profile_method(&self) -> Option<&'static str> {
        Some("service-account-json")
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["project", "dataset", "keyfile_json"]
    }

    fn secret_fields(&self) -> &'static [&'static str] {
        &["private_key_id", "private_key"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        GOOGLE_CLOUD_SERVICE_ACCOUNT_DICT_PARAMS
    }

    fn legacy_extra_prefix(&self) -> Option<&'static str> {
        Some(LEGACY_PREFIX)
    }

    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        default_threads()
    }

    fn secret_container(&self, field: &str) -> Option<&'static str> {
        match field {
            "private_key_id" | "private_key" => Some("keyfile_json"),
            _ => None,
        }
    }

    fn transform(&self, field: &str, value: Value, _ctx: &FieldContext<'_>) -> Value {
        match field {
            "keyfile_json" => parse_keyfile(value),
            "private_key_id" | "private_key" => parse_keyfile(value)
                .get(field)
                .cloned()
                .unwrap_or(Value::Null),
            _ => value,
        }
    }
}

/// Key files are stored either as an object or as its JSON text.
fn parse_keyfile(value: Value) -> Value {
    match value {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(parsed @ Value::Object(_)) => parsed,
            _ => {
                tracing::debug!("keyfile_dict is not a JSON object");
                Value::Null
            }
        },
        other => other,
    }
}

const GOOGLE_CLOUD_OAUTH_PARAMS: &[ParamMapping] = &[
    ParamMapping::new("project", &["extra.project"]),
    ParamMapping::new("dataset", &["extra.dataset"]),
];

/// Application default credentials.
pub struct GoogleCloudOauth;

impl ProfileMapper for GoogleCloudOauth {
    fn connection_type(&self) -> &'static str {
        CONN_TYPE
    }

    fn profile_type(&self) -> &'static str {
        PROFILE_TYPE
    }

    fn profile_method(&self) -> Option<&'static str> {
        Some("oauth")
    }

    fn required_fields(&self) -> &'static [&'static str] {
        &["project", "dataset"]
    }

    fn param_mapping(&self) -> &'static [ParamMapping] {
        GOOGLE_CLOUD_OAUTH_PARAMS
    }

    fn legacy_extra_prefix(&self) -> Option<&'static str> {
        Some(LEGACY_PREFIX)
    }

    fn default_fields(&self) -> Vec<(&'static str, Value)> {
        default_threads()
    }
}
