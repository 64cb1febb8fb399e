//! Configuration for profile mapping.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod mapping_config;
pub mod private_key_config;

pub use mapping_config::MappingConfig;
pub use private_key_config::PrivateKeyConfig;
