//! The connection record as persisted by the connection store.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A stored credential record.
///
/// `extra` holds the raw JSON text of the free-form attribute bag. It is only
/// decoded on demand through [`ConnectionRecord::extra_dejson`], so a record
/// with a malformed bag can still be loaded and inspected.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    #[serde(default)]
    pub conn_id: String,
    pub conn_type: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default, deserialize_with = "extra_as_text")]
    pub extra: Option<String>,
}

impl ConnectionRecord {
    pub fn new(conn_id: impl Into<String>, conn_type: impl Into<String>) -> Self {
        Self {
            conn_id: conn_id.into(),
            conn_type: conn_type.into(),
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Store `extra` as JSON text, the way the connection store persists it.
    pub fn with_extra(mut self, extra: &Value) -> Self {
        self.extra = Some(extra.to_string());
        self
    }

    /// Decode the extra attribute bag.
    ///
    /// A missing, malformed or non-object bag decodes to an empty map: every
    /// `extra.*` lookup against it then resolves to nothing.
    pub fn extra_dejson(&self) -> Map<String, Value> {
        let Some(raw) = self.extra.as_deref() else {
            return Map::new();
        };
        if raw.trim().is_empty() {
            return Map::new();
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                tracing::warn!(conn_id = %self.conn_id, "extra is not a JSON object, ignoring it");
                Map::new()
            }
            Err(e) => {
                tracing::warn!(
                    conn_id = %self.conn_id,
                    line = e.line(),
                    column = e.column(),
                    "extra is not valid JSON, ignoring it"
                );
                Map::new()
            }
        }
    }

    /// Look up a top-level attribute by name. Unknown names resolve to `None`.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "conn_id" => Some(Value::String(self.conn_id.clone())),
            "conn_type" => Some(Value::String(self.conn_type.clone())),
            "host" => self.host.clone().map(Value::String),
            "port" => self.port.map(Value::from),
            "login" => self.login.clone().map(Value::String),
            "password" => self.password.clone().map(Value::String),
            "schema" => self.schema.clone().map(Value::String),
            "extra" => self.extra.clone().map(Value::String),
            _ => None,
        }
    }
}

impl fmt::Debug for ConnectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionRecord")
            .field("conn_id", &self.conn_id)
            .field("conn_type", &self.conn_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("schema", &self.schema)
            .field("extra", &self.extra.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Accept `extra` either as JSON text or as an inline object.
fn extra_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
