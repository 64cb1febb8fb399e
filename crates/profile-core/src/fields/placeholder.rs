//! Environment variable naming and placeholder rendering.

use serde_json::Value;

/// Deterministic env var name: `<PREFIX>_<CONN_TYPE>_<FIELD>`, uppercased.
pub fn env_var_name(prefix: &str, conn_type: &str, field: &str) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        conn_type.to_uppercase(),
        field.to_uppercase()
    )
}

/// The expression the consuming tool substitutes at run time.
pub fn env_var_placeholder(env_var_name: &str) -> String {
    format!("{{{{ env_var('{env_var_name}') }}}}")
}

/// Render a resolved value as the text exported in the environment.
pub fn env_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
