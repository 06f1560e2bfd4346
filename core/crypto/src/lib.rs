//! Symmetric encryption and hashing for URL-safe transport.
//!
//! This crate provides:
//! - Block-cipher encryption in CBC mode with a random per-message IV
//! - A self-describing envelope format (`IV || ciphertext`, URL-safe base64)
//! - PKCS#7-style padding with defensive unpadding
//! - One-way hashing with algorithm name resolution and verification
//!
//! # Security Guarantees
//! - Key material is automatically zeroized on drop
//! - No plaintext or key material is ever logged
//! - A constant-time digest comparison is available for secret material
//!
//! # Limitations
//! - The envelope carries no integrity tag; a padding-validation failure is
//!   the only tamper signal and accepts roughly 1/256 of corrupted
//!   ciphertexts as structurally valid. Callers needing authenticity must
//!   layer a MAC on top.
//!
//! # Examples
//!
//! ```
//! use urlseal_crypto::{CipherConfig, Crypter, SecretKey};
//!
//! let crypter = Crypter::new(CipherConfig::default()).unwrap();
//! crypter.set_key(SecretKey::from("secret"));
//!
//! let envelope = crypter.encrypt(b"hello world", None).unwrap();
//! let plaintext = crypter.decrypt(&envelope, None).unwrap();
//! assert_eq!(plaintext, b"hello world");
//! ```

pub mod cipher;
pub mod config;
pub mod envelope;
pub mod hash;
pub mod keys;
pub(crate) mod padding;
pub mod rng;
pub mod transport;

pub use config::{BlockMode, CipherAlgo, CipherConfig};
pub use envelope::Crypter;
pub use hash::{HashAlgorithm, HashDigest, Hasher};
pub use keys::{KeyRegistry, SecretKey};
pub use rng::{generate_iv, RandomTier};
pub use transport::{decode, encode};
