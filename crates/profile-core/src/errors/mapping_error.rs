//! Profile mapping errors.

use super::error_code::{self, ProfileErrorCode};
use super::StoreError;

/// Errors surfaced to callers of the resolver and of a resolved mapping.
///
/// Field-level problems (missing values, keys that do not parse) never show up
/// here: they make a mapping decline the connection instead.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("Could not find a profile mapping for connection {conn_id}")]
    NoMatchingProfile { conn_id: String },

    #[error("connection lookup failed: {0}")]
    Lookup(#[from] StoreError),

    #[error("invalid profile argument `{field}`: {message}")]
    InvalidProfileArgs { field: String, message: String },
}

impl ProfileErrorCode for MappingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoMatchingProfile { .. } => error_code::NO_MATCHING_PROFILE,
            Self::Lookup(e) => e.error_code(),
            Self::InvalidProfileArgs { .. } => error_code::INVALID_PROFILE_ARGS,
        }
    }
}

pub type MappingResult<T> = Result<T, MappingError>;
