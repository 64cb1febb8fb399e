//! Shared helpers for the integration tests.
#![allow(dead_code)]

use profile_core::{
    ConnectionRecord, EnvVarMap, InMemoryConnectionStore, Profile, ProfileArgs,
    ProfileMappingKind, REGISTRY,
};
use serde::Deserialize;
use serde_json::Value;
use test_fixtures::{list_fixtures, load_fixture};

/// A maximal connection for one variant plus the output it must produce.
#[derive(Debug, Deserialize)]
pub struct ConnectionFixture {
    pub mapping: String,
    pub connection: ConnectionRecord,
    pub profile_args: ProfileArgs,
    pub profile: Profile,
    pub env_vars: EnvVarMap,
}

impl ConnectionFixture {
    pub fn kind(&self) -> ProfileMappingKind {
        kind_named(&self.mapping)
    }

    pub fn store(&self) -> InMemoryConnectionStore {
        store_with(self.connection.clone())
    }
}

pub fn load_connection_fixture(name: &str) -> ConnectionFixture {
    load_fixture(&format!("connections/{name}.json"))
}

/// Every connection fixture, keyed by file stem.
pub fn all_connection_fixtures() -> Vec<(String, ConnectionFixture)> {
    list_fixtures("connections")
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap()
                .to_string();
            let fixture = load_connection_fixture(&stem);
            (stem, fixture)
        })
        .collect()
}

pub fn kind_named(name: &str) -> ProfileMappingKind {
    REGISTRY
        .into_iter()
        .find(|kind| kind.name() == name)
        .unwrap_or_else(|| panic!("no variant named {name}"))
}

pub fn store_with(record: ConnectionRecord) -> InMemoryConnectionStore {
    InMemoryConnectionStore::new().with_connection(record)
}

pub fn args(pairs: &[(&str, Value)]) -> ProfileArgs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Remove whatever a dotted path points at from `record`, in both the
/// current and the legacy extra key format.
pub fn remove_path(record: &mut ConnectionRecord, path: &str) {
    if let Some(key) = path.strip_prefix("extra.") {
        let mut extra = record.extra_dejson();
        extra.remove(key);
        extra.remove(&format!("extra__{}__{}", record.conn_type, key));
        record.extra = Some(Value::Object(extra).to_string());
        return;
    }
    match path {
        "host" => record.host = None,
        "port" => record.port = None,
        "login" => record.login = None,
        "password" => record.password = None,
        "schema" => record.schema = None,
        "extra" => record.extra = None,
        other => panic!("cannot remove path {other}"),
    }
}
