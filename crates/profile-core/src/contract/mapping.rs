//! A variant bound to one connection id and one set of overrides.

use std::collections::BTreeSet;

use once_cell::unsync::OnceCell;
use serde_json::{Map, Value};

use super::types::{EnvVarMap, Profile, ProfileArgs};
use super::ProfileMapper;
use crate::config::MappingConfig;
use crate::connection::{ConnectionRecord, ConnectionStore};
use crate::errors::{MappingError, MappingResult};
use crate::fields::{
    env_value, env_var_name, env_var_placeholder, normalize_legacy_extra, FieldContext,
    FieldResolver, ResolvedFields,
};
use crate::registry::ProfileMappingKind;

struct LoadedConnection {
    record: ConnectionRecord,
    extra: Map<String, Value>,
}

/// A profile mapping instance.
///
/// The connection is fetched at most once, on first use. Field values are
/// resolved once as well, so repeated calls to [`profile`](Self::profile)
/// and [`env_vars`](Self::env_vars) agree with each other even when a
/// transform is not deterministic.
pub struct ProfileMapping<'a> {
    kind: ProfileMappingKind,
    conn_id: String,
    profile_args: ProfileArgs,
    store: &'a dyn ConnectionStore,
    config: &'a MappingConfig,
    connection: OnceCell<LoadedConnection>,
    fields: OnceCell<ResolvedFields>,
}

impl<'a> ProfileMapping<'a> {
    /// Bind `kind` to a connection id.
    ///
    /// Fails with [`MappingError::InvalidProfileArgs`] when `profile_args`
    /// carries a `type` other than the variant's profile type.
    pub fn new(
        kind: ProfileMappingKind,
        conn_id: impl Into<String>,
        profile_args: ProfileArgs,
        store: &'a dyn ConnectionStore,
        config: &'a MappingConfig,
    ) -> MappingResult<Self> {
        validate_profile_args(kind.mapper(), &profile_args)?;
        Ok(Self {
            kind,
            conn_id: conn_id.into(),
            profile_args,
            store,
            config,
            connection: OnceCell::new(),
            fields: OnceCell::new(),
        })
    }

    pub fn kind(&self) -> ProfileMappingKind {
        self.kind
    }

    pub fn conn_id(&self) -> &str {
        &self.conn_id
    }

    pub fn profile_args(&self) -> &ProfileArgs {
        &self.profile_args
    }

    pub fn profile_type(&self) -> &'static str {
        self.mapper().profile_type()
    }

    pub fn is_community(&self) -> bool {
        self.mapper().is_community()
    }

    fn mapper(&self) -> &'static dyn ProfileMapper {
        self.kind.mapper()
    }

    /// The stored connection, fetched on first access.
    pub fn connection(&self) -> MappingResult<&ConnectionRecord> {
        Ok(&self.loaded()?.record)
    }

    /// Whether this variant can render a profile for the connection.
    ///
    /// True only when the connection type matches, the variant's own guard
    /// accepts the connection, and every required field resolves.
    pub fn can_claim_connection(&self) -> MappingResult<bool> {
        let mapper = self.mapper();
        let loaded = self.loaded()?;

        if loaded.record.conn_type != mapper.connection_type() {
            return Ok(false);
        }
        if !mapper.accepts(&self.context(loaded)) {
            tracing::debug!(
                conn_id = %self.conn_id,
                mapping = self.kind.name(),
                "connection rejected by claim guard"
            );
            return Ok(false);
        }

        let fields = self.fields()?;
        let missing: Vec<&str> = mapper
            .required_fields()
            .iter()
            .copied()
            .filter(|field| !fields.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            tracing::debug!(
                conn_id = %self.conn_id,
                mapping = self.kind.name(),
                ?missing,
                "required fields missing"
            );
            return Ok(false);
        }

        Ok(true)
    }

    /// Render the client profile.
    ///
    /// Secret fields appear only as env var placeholders, and null values
    /// are dropped.
    pub fn profile(&self) -> MappingResult<Profile> {
        let mapper = self.mapper();
        let fields = self.fields()?;

        let mut profile = self.base_profile();
        for mapping in mapper.param_mapping() {
            if mapper.is_secret(mapping.field) {
                continue;
            }
            if let Some(value) = fields.get(mapping.field) {
                profile.insert(mapping.field.to_string(), value.clone());
            }
        }
        for (field, value) in &self.profile_args {
            if !mapper.is_secret(field) {
                profile.insert(field.clone(), value.clone());
            }
        }

        for secret in mapper.secret_fields() {
            if !fields.contains_key(*secret) {
                continue;
            }
            let placeholder = Value::String(self.env_var_format(secret));
            let container = mapper
                .secret_container(secret)
                .and_then(|name| profile.get_mut(name))
                .and_then(Value::as_object_mut);
            match container {
                Some(object) => {
                    object.insert(secret.to_string(), placeholder);
                }
                None => {
                    profile.insert(secret.to_string(), placeholder);
                }
            }
        }

        profile.retain(|_, value| !value.is_null());
        Ok(profile)
    }

    /// Secret values keyed by the env var names their placeholders reference.
    pub fn env_vars(&self) -> MappingResult<EnvVarMap> {
        let fields = self.fields()?;
        Ok(self
            .mapper()
            .secret_fields()
            .iter()
            .filter_map(|secret| {
                fields
                    .get(*secret)
                    .map(|value| (self.env_var_name(secret), env_value(value)))
            })
            .collect())
    }

    /// A profile with every required field set to the configured mock value.
    ///
    /// Does not touch the connection store.
    pub fn mock_profile(&self) -> Profile {
        let mock = Value::String(self.config.effective_mock_value().to_string());
        let mut profile = self.base_profile();
        for field in self.mapper().required_fields() {
            profile.insert(field.to_string(), mock.clone());
        }
        profile
    }

    /// The env var name carrying `field`'s secret value.
    pub fn env_var_name(&self, field: &str) -> String {
        env_var_name(
            self.config.effective_env_var_prefix(),
            self.mapper().connection_type(),
            field,
        )
    }

    /// The placeholder expression rendered for `field`.
    pub fn env_var_format(&self, field: &str) -> String {
        env_var_placeholder(&self.env_var_name(field))
    }

    fn base_profile(&self) -> Profile {
        let mapper = self.mapper();
        let mut profile = Profile::new();
        profile.insert("type".to_string(), Value::from(mapper.profile_type()));
        if let Some(method) = mapper.profile_method() {
            profile.insert("method".to_string(), Value::from(method));
        }
        for (field, value) in mapper.default_fields() {
            profile.insert(field.to_string(), value);
        }
        profile
    }

    fn loaded(&self) -> MappingResult<&LoadedConnection> {
        self.connection
            .get_or_try_init(|| -> MappingResult<LoadedConnection> {
                let record = self.store.get_connection(&self.conn_id)?;
                let extra = record.extra_dejson();
                let extra = match self.mapper().legacy_extra_prefix() {
                    Some(prefix) => normalize_legacy_extra(extra, prefix),
                    None => extra,
                };
                Ok(LoadedConnection { record, extra })
            })
    }

    fn fields(&self) -> MappingResult<&ResolvedFields> {
        self.fields
            .get_or_try_init(|| -> MappingResult<ResolvedFields> {
                let loaded = self.loaded()?;
                let resolver = FieldResolver::new(self.mapper(), self.context(loaded));
                Ok(resolver.resolve_all(self.field_names()))
            })
    }

    fn context<'s>(&'s self, loaded: &'s LoadedConnection) -> FieldContext<'s> {
        FieldContext {
            record: &loaded.record,
            extra: &loaded.extra,
            profile_args: &self.profile_args,
            config: self.config,
        }
    }

    fn field_names(&self) -> BTreeSet<&str> {
        let mapper = self.mapper();
        mapper
            .required_fields()
            .iter()
            .chain(mapper.secret_fields())
            .copied()
            .chain(mapper.param_mapping().iter().map(|mapping| mapping.field))
            .chain(self.profile_args.keys().map(String::as_str))
            .collect()
    }
}

impl std::fmt::Debug for ProfileMapping<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileMapping")
            .field("kind", &self.kind)
            .field("conn_id", &self.conn_id)
            .field("profile_args", &self.profile_args.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

fn validate_profile_args(
    mapper: &dyn ProfileMapper,
    profile_args: &ProfileArgs,
) -> MappingResult<()> {
    let Some(requested) = profile_args.get("type").filter(|v| !v.is_null()) else {
        return Ok(());
    };
    if requested.as_str() == Some(mapper.profile_type()) {
        return Ok(());
    }
    Err(MappingError::InvalidProfileArgs {
        field: "type".to_string(),
        message: format!(
            "expected `{}`, got {}",
            mapper.profile_type(),
            requested
        ),
    })
}
