//! Secret key handling.
//!
//! Keys are opaque byte strings that zeroize their memory on drop and never
//! appear in debug output. The registry holds the process-wide default key
//! and resolves the effective key for each call.

use std::fmt;
use std::sync::RwLock;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// An opaque secret key.
///
/// # Security
/// - Memory is zeroized on drop
/// - `Debug` output is redacted
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Create a key from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Create an empty key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the key holds no bytes.
    ///
    /// This is the only equality-like check performed on keys; secret
    /// material is never compared byte-for-byte.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for SecretKey {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED])")
    }
}

/// Holds the process-wide default key and resolves per-call overrides.
///
/// Setting the default key is a rare administrative operation; it is
/// guarded by a lock so concurrent encrypt/decrypt calls can read safely.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    default: RwLock<SecretKey>,
}

impl KeyRegistry {
    /// Create a registry with no default key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with a default key.
    pub fn with_default(key: SecretKey) -> Self {
        Self {
            default: RwLock::new(key),
        }
    }

    /// Replace the default key.
    ///
    /// An empty key is a no-op: it never clears an existing default.
    pub fn set_default(&self, key: SecretKey) {
        if key.is_empty() {
            return;
        }
        let mut guard = self.default.write().unwrap_or_else(|e| e.into_inner());
        *guard = key;
    }

    /// Resolve the effective key for a call.
    ///
    /// A non-empty override wins; otherwise the default key is returned,
    /// which may itself be empty. An empty resolved key is passed through
    /// to the cipher layer as-is — callers relying on a configured key must
    /// configure one before use.
    pub fn resolve(&self, key_override: Option<&SecretKey>) -> SecretKey {
        match key_override {
            Some(key) if !key.is_empty() => key.clone(),
            _ => {
                let guard = self.default.read().unwrap_or_else(|e| e.into_inner());
                guard.clone()
            }
        }
    }
}
