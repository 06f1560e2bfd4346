//! Common error types for urlseal.

use thiserror::Error;

/// Top-level error type for urlseal operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport decoding failed (malformed URL-safe base64).
    #[error("Invalid transport encoding: {0}")]
    EncodingInvalid(String),

    /// Decoded envelope has the wrong length or structure.
    #[error("Malformed envelope: {0}")]
    EnvelopeMalformed(String),

    /// Padding bytes failed validation after decryption.
    ///
    /// Typically indicates a wrong key or a tampered envelope. Never
    /// treated as success by callers.
    #[error("Decryption error: padding is invalid")]
    PaddingInvalid,

    /// Cipher configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Block-cipher primitive failed.
    #[error("Cipher error: {0}")]
    Cipher(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
