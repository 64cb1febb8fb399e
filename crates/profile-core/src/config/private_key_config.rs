//! Private key re-encoding configuration.

use serde::{Deserialize, Serialize};

/// Parameters used when a PKCS#8 key is re-encrypted for export.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PrivateKeyConfig {
    /// PBKDF2-SHA256 iteration count for re-encryption. Default: 2048.
    pub pbkdf2_iterations: Option<u32>,
}

impl PrivateKeyConfig {
    /// Returns the effective PBKDF2 iteration count, defaulting to 2048.
    pub fn effective_pbkdf2_iterations(&self) -> u32 {
        self.pbkdf2_iterations.unwrap_or(2048)
    }
}
