//! Connection store interface and two simple implementations.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::types::ConnectionRecord;
use crate::errors::StoreError;

/// Read side of the external connection store.
pub trait ConnectionStore: Send + Sync {
    /// Fetch the connection stored under `conn_id`.
    fn get_connection(&self, conn_id: &str) -> Result<ConnectionRecord, StoreError>;
}

/// Connections held in memory, keyed by `conn_id`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnectionStore {
    connections: HashMap<String, ConnectionRecord>,
}

impl InMemoryConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a connection, keyed by its `conn_id`.
    pub fn insert(&mut self, record: ConnectionRecord) {
        self.connections.insert(record.conn_id.clone(), record);
    }

    pub fn with_connection(mut self, record: ConnectionRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl FromIterator<ConnectionRecord> for InMemoryConnectionStore {
    fn from_iter<I: IntoIterator<Item = ConnectionRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl ConnectionStore for InMemoryConnectionStore {
    fn get_connection(&self, conn_id: &str) -> Result<ConnectionRecord, StoreError> {
        self.connections
            .get(conn_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                conn_id: conn_id.to_string(),
            })
    }
}

/// Connections exported to a JSON file.
///
/// The file is an object keyed by connection id:
///
/// ```json
/// {
///   "warehouse": {
///     "conn_type": "snowflake",
///     "login": "loader",
///     "extra": {"account": "xy12345", "warehouse": "compute_wh"}
///   }
/// }
/// ```
///
/// `extra` may be given inline or as JSON text. The `conn_id` inside a
/// definition, if any, is replaced by the key it is stored under.
#[derive(Debug, Clone)]
pub struct JsonFileConnectionStore {
    path: PathBuf,
    inner: InMemoryConnectionStore,
}

impl JsonFileConnectionStore {
    /// Read and parse the whole file up front.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| StoreError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let definitions: BTreeMap<String, ConnectionRecord> = serde_json::from_str(&content)
            .map_err(|e| StoreError::InvalidDefinition {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let inner = definitions
            .into_iter()
            .map(|(conn_id, mut record)| {
                record.conn_id = conn_id;
                record
            })
            .collect::<InMemoryConnectionStore>();

        tracing::debug!(path = %path.display(), connections = inner.len(), "loaded connection file");

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConnectionStore for JsonFileConnectionStore {
    fn get_connection(&self, conn_id: &str) -> Result<ConnectionRecord, StoreError> {
        self.inner.get_connection(conn_id)
    }
}
