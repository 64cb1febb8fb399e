//! Connection store errors.

use super::error_code::{self, ProfileErrorCode};

/// Errors raised by a [`ConnectionStore`](crate::connection::ConnectionStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("connection not found: {conn_id}")]
    NotFound { conn_id: String },

    #[error("failed to read connections from {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("invalid connection definition in {path}: {message}")]
    InvalidDefinition { path: String, message: String },
}

impl ProfileErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::CONNECTION_NOT_FOUND,
            Self::ReadFailed { .. } | Self::InvalidDefinition { .. } => error_code::STORE_ERROR,
        }
    }
}
