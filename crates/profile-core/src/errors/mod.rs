//! Error handling for profile mapping.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod mapping_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::ProfileErrorCode;
pub use mapping_error::{MappingError, MappingResult};
pub use store_error::StoreError;
