//! # profile-core
//!
//! Maps stored warehouse connections to client profiles.
//! A closed registry of warehouse variants is tried in order against a
//! connection; the first variant that can claim it renders a profile in
//! which every secret is an env var placeholder, plus the env vars that
//! carry the secret values.

pub mod config;
pub mod connection;
pub mod contract;
pub mod errors;
pub mod fields;
pub mod keypair;
pub mod logging;
pub mod registry;
pub mod warehouses;

// Re-export the most commonly used items at the crate root.
pub use config::MappingConfig;
pub use connection::{
    ConnectionRecord, ConnectionStore, InMemoryConnectionStore, JsonFileConnectionStore,
};
pub use contract::{EnvVarMap, Profile, ProfileArgs, ProfileMapper, ProfileMapping};
pub use errors::{MappingError, MappingResult, ProfileErrorCode, StoreError};
pub use registry::{get_automatic_profile_mapping, ProfileMappingKind, ProfileResolver, REGISTRY};
