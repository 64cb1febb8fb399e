//! Stable error codes for callers that cross a process or language boundary.

/// Every public error enum maps to a stable code string so wrappers can
/// branch on the kind of failure without parsing messages.
pub trait ProfileErrorCode {
    /// Returns the error code string (e.g., "NO_MATCHING_PROFILE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONNECTION_NOT_FOUND: &str = "CONNECTION_NOT_FOUND";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const NO_MATCHING_PROFILE: &str = "NO_MATCHING_PROFILE";
pub const INVALID_PROFILE_ARGS: &str = "INVALID_PROFILE_ARGS";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const KEY_PARSE_ERROR: &str = "KEY_PARSE_ERROR";
pub const KEY_ENCODE_ERROR: &str = "KEY_ENCODE_ERROR";
