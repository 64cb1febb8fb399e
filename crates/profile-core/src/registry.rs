//! Ordered variant registry and automatic mapping selection.

use std::fmt;

use crate::config::MappingConfig;
use crate::connection::ConnectionStore;
use crate::contract::{ProfileArgs, ProfileMapper, ProfileMapping};
use crate::errors::{MappingError, MappingResult};
use crate::warehouses::{
    athena, bigquery, databricks, exasol, postgres, redshift, snowflake, spark, trino, vertica,
};

/// Every supported warehouse variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileMappingKind {
    AthenaAccessKey,
    GoogleCloudServiceAccountFile,
    GoogleCloudServiceAccountDict,
    GoogleCloudOauth,
    DatabricksToken,
    PostgresUserPassword,
    RedshiftUserPassword,
    SnowflakeEncryptedPrivateKeyContent,
    SnowflakeEncryptedPrivateKeyFile,
    SnowflakePrivateKeyContent,
    SnowflakeUserPassword,
    SparkThrift,
    ExasolUserPassword,
    TrinoLdap,
    TrinoCertificate,
    TrinoJwt,
    VerticaUserPassword,
}

/// Selection order. Within a connection type, variants that need more
/// specific fields come before the general ones.
pub const REGISTRY: [ProfileMappingKind; 17] = [
    ProfileMappingKind::AthenaAccessKey,
    ProfileMappingKind::GoogleCloudServiceAccountFile,
    ProfileMappingKind::GoogleCloudServiceAccountDict,
    ProfileMappingKind::GoogleCloudOauth,
    ProfileMappingKind::DatabricksToken,
    ProfileMappingKind::PostgresUserPassword,
    ProfileMappingKind::RedshiftUserPassword,
    ProfileMappingKind::SnowflakeEncryptedPrivateKeyContent,
    ProfileMappingKind::SnowflakeEncryptedPrivateKeyFile,
    ProfileMappingKind::SnowflakePrivateKeyContent,
    ProfileMappingKind::SnowflakeUserPassword,
    ProfileMappingKind::SparkThrift,
    ProfileMappingKind::ExasolUserPassword,
    ProfileMappingKind::TrinoLdap,
    ProfileMappingKind::TrinoCertificate,
    ProfileMappingKind::TrinoJwt,
    ProfileMappingKind::VerticaUserPassword,
];

impl ProfileMappingKind {
    pub fn mapper(self) -> &'static dyn ProfileMapper {
        match self {
            Self::AthenaAccessKey => &athena::AthenaAccessKey,
            Self::GoogleCloudServiceAccountFile => &bigquery::GoogleCloudServiceAccountFile,
            Self::GoogleCloudServiceAccountDict => &bigquery::GoogleCloudServiceAccountDict,
            Self::GoogleCloudOauth => &bigquery::GoogleCloudOauth,
            Self::DatabricksToken => &databricks::DatabricksToken,
            Self::PostgresUserPassword => &postgres::PostgresUserPassword,
            Self::RedshiftUserPassword => &redshift::RedshiftUserPassword,
            Self::SnowflakeEncryptedPrivateKeyContent => {
                &snowflake::SnowflakeEncryptedPrivateKeyContent
            }
            Self::SnowflakeEncryptedPrivateKeyFile => &snowflake::SnowflakeEncryptedPrivateKeyFile,
            Self::SnowflakePrivateKeyContent => &snowflake::SnowflakePrivateKeyContent,
            Self::SnowflakeUserPassword => &snowflake::SnowflakeUserPassword,
            Self::SparkThrift => &spark::SparkThrift,
            Self::ExasolUserPassword => &exasol::ExasolUserPassword,
            Self::TrinoLdap => &trino::TrinoLdap,
            Self::TrinoCertificate => &trino::TrinoCertificate,
            Self::TrinoJwt => &trino::TrinoJwt,
            Self::VerticaUserPassword => &vertica::VerticaUserPassword,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AthenaAccessKey => "AthenaAccessKey",
            Self::GoogleCloudServiceAccountFile => "GoogleCloudServiceAccountFile",
            Self::GoogleCloudServiceAccountDict => "GoogleCloudServiceAccountDict",
            Self::GoogleCloudOauth => "GoogleCloudOauth",
            Self::DatabricksToken => "DatabricksToken",
            Self::PostgresUserPassword => "PostgresUserPassword",
            Self::RedshiftUserPassword => "RedshiftUserPassword",
            Self::SnowflakeEncryptedPrivateKeyContent => "SnowflakeEncryptedPrivateKeyContent",
            Self::SnowflakeEncryptedPrivateKeyFile => "SnowflakeEncryptedPrivateKeyFile",
            Self::SnowflakePrivateKeyContent => "SnowflakePrivateKeyContent",
            Self::SnowflakeUserPassword => "SnowflakeUserPassword",
            Self::SparkThrift => "SparkThrift",
            Self::ExasolUserPassword => "ExasolUserPassword",
            Self::TrinoLdap => "TrinoLdap",
            Self::TrinoCertificate => "TrinoCertificate",
            Self::TrinoJwt => "TrinoJwt",
            Self::VerticaUserPassword => "VerticaUserPassword",
        }
    }
}

impl fmt::Display for ProfileMappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static DEFAULT_CONFIG: MappingConfig = MappingConfig {
    env_var_prefix: None,
    mock_value: None,
    private_key: crate::config::PrivateKeyConfig {
        pbkdf2_iterations: None,
    },
};

/// Picks the first registered variant that can claim a connection.
#[derive(Clone, Copy)]
pub struct ProfileResolver<'a> {
    store: &'a dyn ConnectionStore,
    config: &'a MappingConfig,
    registry: &'a [ProfileMappingKind],
}

impl<'a> ProfileResolver<'a> {
    /// A resolver over the full registry with compiled-in defaults.
    pub fn new(store: &'a dyn ConnectionStore) -> Self {
        Self {
            store,
            config: &DEFAULT_CONFIG,
            registry: &REGISTRY,
        }
    }

    pub fn with_config(mut self, config: &'a MappingConfig) -> Self {
        self.config = config;
        self
    }

    /// Restrict or reorder the candidates.
    pub fn with_registry(mut self, registry: &'a [ProfileMappingKind]) -> Self {
        self.registry = registry;
        self
    }

    /// Return the first variant, in registry order, that claims `conn_id`.
    ///
    /// Variants whose profile type conflicts with a `type` profile argument
    /// are skipped. Store failures abort the search.
    #[tracing::instrument(skip(self, profile_args), fields(candidates = self.registry.len()))]
    pub fn resolve(
        &self,
        conn_id: &str,
        profile_args: ProfileArgs,
    ) -> MappingResult<ProfileMapping<'a>> {
        for &kind in self.registry {
            let mapping = match ProfileMapping::new(
                kind,
                conn_id,
                profile_args.clone(),
                self.store,
                self.config,
            ) {
                Ok(mapping) => mapping,
                Err(MappingError::InvalidProfileArgs { field, message }) => {
                    tracing::debug!(mapping = kind.name(), %field, %message, "skipping variant");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if mapping.can_claim_connection()? {
                tracing::info!(mapping = kind.name(), "profile mapping selected");
                return Ok(mapping);
            }
        }

        tracing::warn!("no profile mapping claimed the connection");
        Err(MappingError::NoMatchingProfile {
            conn_id: conn_id.to_string(),
        })
    }
}

impl fmt::Debug for ProfileResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileResolver")
            .field("config", self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Resolve `conn_id` against the full registry with default configuration.
pub fn get_automatic_profile_mapping<'a>(
    store: &'a dyn ConnectionStore,
    conn_id: &str,
    profile_args: ProfileArgs,
) -> MappingResult<ProfileMapping<'a>> {
    ProfileResolver::new(store).resolve(conn_id, profile_args)
}
