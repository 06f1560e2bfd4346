//! Cipher configuration.
//!
//! All parameters are fixed at construction time and validated once;
//! services hold an immutable copy, so concurrent readers need no
//! synchronization.

use serde::{Deserialize, Serialize};

use urlseal_common::{Error, Result};

/// Block-cipher algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherAlgo {
    Aes128,
    Aes192,
    Aes256,
}

impl CipherAlgo {
    /// Key length in bytes required by the cipher.
    pub fn key_len(&self) -> usize {
        match self {
            CipherAlgo::Aes128 => 16,
            CipherAlgo::Aes192 => 24,
            CipherAlgo::Aes256 => 32,
        }
    }

    /// IV length in bytes for this cipher in CBC mode.
    pub fn iv_len(&self) -> usize {
        self.block_len()
    }

    /// The cipher's native block length in bytes.
    pub fn block_len(&self) -> usize {
        // All AES variants operate on 128-bit blocks.
        16
    }
}

/// Block-cipher mode of operation.
///
/// The mode is fixed per deployment, not negotiated per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockMode {
    Cbc,
}

/// Process-wide cipher parameters, immutable after configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherConfig {
    /// The block-cipher algorithm.
    pub cipher: CipherAlgo,
    /// The mode of operation.
    pub mode: BlockMode,
    /// Padding block size in bytes. Must be a positive multiple of the
    /// cipher's block length and at most 255 (padding values are single
    /// bytes).
    pub block_size: usize,
    /// Hash algorithm name used when callers do not specify one.
    pub default_hash_algo: String,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            cipher: CipherAlgo::Aes256,
            mode: BlockMode::Cbc,
            block_size: 32,
            default_hash_algo: "sha256".to_string(),
        }
    }
}

impl CipherConfig {
    /// Check the configuration invariants.
    ///
    /// # Errors
    /// - Returns error if `block_size` is zero, exceeds 255, or is not a
    ///   multiple of the cipher's block length.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(Error::Config("Block size must be positive".to_string()));
        }
        if self.block_size > 255 {
            return Err(Error::Config(format!(
                "Block size {} exceeds the maximum padding value of 255",
                self.block_size
            )));
        }
        if self.block_size % self.cipher.block_len() != 0 {
            return Err(Error::Config(format!(
                "Block size {} is not a multiple of the cipher block length {}",
                self.block_size,
                self.cipher.block_len()
            )));
        }
        Ok(())
    }
}
