//! PKCS#8 private key normalization for key-pair authentication.

pub mod private_key;

pub use private_key::{
    parse_pkcs8_pem, KeyEncodeError, KeyNormalization, KeyParseError, PrivateKeyNormalizer,
    ENCRYPTED_PRIVATE_KEY_PEM_LABEL, PRIVATE_KEY_PEM_LABEL,
};
