//! One-way hashing with algorithm name resolution.
//!
//! Algorithm names are resolved leniently: lookup is case-insensitive, an
//! empty name selects the configured default, and an unrecognized name
//! silently falls back to SHA-256. The silent fallback is a deliberate
//! robustness trade-off and part of the contract — resolution never fails
//! outward.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Blake2s256};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::config::CipherConfig;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Blake2b256,
    Blake2s256,
}

impl HashAlgorithm {
    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Blake2b256 => "blake2b",
            HashAlgorithm::Blake2s256 => "blake2s",
        }
    }

    /// Look up an algorithm by canonical name.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sha224" => Some(HashAlgorithm::Sha224),
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            "blake2b" => Some(HashAlgorithm::Blake2b256),
            "blake2s" => Some(HashAlgorithm::Blake2s256),
            _ => None,
        }
    }

    /// Compute the digest of `data`.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            HashAlgorithm::Blake2b256 => Blake2b::<U32>::digest(data).to_vec(),
            HashAlgorithm::Blake2s256 => Blake2s256::digest(data).to_vec(),
        }
    }
}

/// A digest tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashDigest {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl HashDigest {
    /// The algorithm used to produce this digest.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the digest, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lower-case hex encoding of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Computes and verifies one-way hashes.
#[derive(Debug, Clone)]
pub struct Hasher {
    default_algo: String,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new("sha256")
    }
}

impl Hasher {
    /// Create a hasher with the given default algorithm name.
    ///
    /// The name goes through the same lenient resolution as per-call names,
    /// so an unrecognized default degrades to SHA-256 at call time.
    pub fn new(default_algo: impl Into<String>) -> Self {
        Self {
            default_algo: default_algo.into(),
        }
    }

    /// Create a hasher using the configuration's default algorithm name.
    pub fn from_config(config: &CipherConfig) -> Self {
        Self::new(config.default_hash_algo.clone())
    }

    /// Resolve an algorithm name.
    ///
    /// Lower-cases and trims the input; an empty or absent name selects the
    /// configured default, and anything unrecognized falls back to SHA-256.
    pub fn resolve_algorithm(&self, name: Option<&str>) -> HashAlgorithm {
        let requested = name.unwrap_or("").trim().to_lowercase();
        let effective = if requested.is_empty() {
            self.default_algo.trim().to_lowercase()
        } else {
            requested
        };
        HashAlgorithm::from_name(&effective).unwrap_or(HashAlgorithm::Sha256)
    }

    /// Hash `data`, returning the digest tagged with the resolved algorithm.
    pub fn hash(&self, data: &[u8], algo: Option<&str>) -> HashDigest {
        let algorithm = self.resolve_algorithm(algo);
        HashDigest {
            algorithm,
            bytes: algorithm.digest(data),
        }
    }

    /// Check whether `data` hashes to `expected` (lower-case hex).
    ///
    /// Comparison is ordinary string equality, not constant time. Use
    /// [`Hasher::check_ct`] when the digest itself is secret material
    /// (tokens, password hashes) and timing matters.
    pub fn check(&self, data: &[u8], expected: &str, algo: Option<&str>) -> bool {
        self.hash(data, algo).to_hex() == expected
    }

    /// Constant-time variant of [`Hasher::check`].
    pub fn check_ct(&self, data: &[u8], expected: &str, algo: Option<&str>) -> bool {
        let computed = self.hash(data, algo).to_hex();
        computed.as_bytes().ct_eq(expected.as_bytes()).into()
    }
}
