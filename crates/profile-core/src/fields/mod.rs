//! Field mapping engine
//!
//! Turns a logical profile field into a value read from a connection record:
//! - Path: dotted lookups such as `login` or `extra.account`
//! - Legacy: flattened `extra__<type>__<key>` bags rewritten to plain keys
//! - Placeholder: env var names and the `{{ env_var('...') }}` expression
//! - Engine: override precedence and per-variant transforms

pub mod engine;
pub mod legacy;
pub mod path;
pub mod placeholder;

pub use engine::{FieldContext, FieldResolver, ResolvedFields};
pub use legacy::normalize_legacy_extra;
pub use path::{is_truthy, resolve_path, FieldPath, EXTRA_PREFIX};
pub use placeholder::{env_value, env_var_name, env_var_placeholder};
