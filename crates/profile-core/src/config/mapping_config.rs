//! Top-level mapping configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::PrivateKeyConfig;
use crate::errors::ConfigError;

/// Name of the project-level config file looked up by [`MappingConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "profile_mapping.toml";

pub const DEFAULT_ENV_VAR_PREFIX: &str = "COSMOS_CONN";
pub const DEFAULT_MOCK_VALUE: &str = "mock_value";

/// Configuration shared by every mapping instance.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PROFILE_MAPPING_*`)
/// 2. Project config (`profile_mapping.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MappingConfig {
    /// Prefix of generated environment variable names. Default: `COSMOS_CONN`.
    pub env_var_prefix: Option<String>,
    /// Value rendered for required fields in mock profiles. Default: `mock_value`.
    pub mock_value: Option<String>,
    pub private_key: PrivateKeyConfig,
}

impl MappingConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MappingConfig) -> Result<(), ConfigError> {
        if let Some(ref prefix) = config.env_var_prefix {
            let well_formed = !prefix.is_empty()
                && prefix
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
            if !well_formed {
                return Err(ConfigError::ValidationFailed {
                    field: "env_var_prefix".to_string(),
                    message: "must be a non-empty string of A-Z, 0-9 and _".to_string(),
                });
            }
        }
        if config.private_key.pbkdf2_iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "private_key.pbkdf2_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the effective environment variable prefix.
    pub fn effective_env_var_prefix(&self) -> &str {
        self.env_var_prefix
            .as_deref()
            .unwrap_or(DEFAULT_ENV_VAR_PREFIX)
    }

    /// Returns the effective mock value.
    pub fn effective_mock_value(&self) -> &str {
        self.mock_value.as_deref().unwrap_or(DEFAULT_MOCK_VALUE)
    }

    fn merge_toml_file(config: &mut MappingConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: MappingConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut MappingConfig, other: &MappingConfig) {
        if other.env_var_prefix.is_some() {
            base.env_var_prefix = other.env_var_prefix.clone();
        }
        if other.mock_value.is_some() {
            base.mock_value = other.mock_value.clone();
        }
        if other.private_key.pbkdf2_iterations.is_some() {
            base.private_key.pbkdf2_iterations = other.private_key.pbkdf2_iterations;
        }
    }

    /// Pattern: `PROFILE_MAPPING_ENV_VAR_PREFIX`, `PROFILE_MAPPING_PBKDF2_ITERATIONS`, etc.
    fn apply_env_overrides(config: &mut MappingConfig) {
        if let Ok(val) = std::env::var("PROFILE_MAPPING_ENV_VAR_PREFIX") {
            config.env_var_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("PROFILE_MAPPING_MOCK_VALUE") {
            config.mock_value = Some(val);
        }
        if let Ok(val) = std::env::var("PROFILE_MAPPING_PBKDF2_ITERATIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.private_key.pbkdf2_iterations = Some(v);
            }
        }
    }
}
