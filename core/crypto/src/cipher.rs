//! Block-cipher primitive.
//!
//! Thin seam over the AES/CBC implementation. Padding is handled by the
//! caller; this module only transforms whole blocks.
//!
//! Keys of any length are accepted: the resolved key bytes are zero-extended
//! or truncated to the cipher's key length, mirroring the behavior of
//! classic symmetric-crypto layers that treat the key as a raw salt string.
//! An empty key therefore becomes an all-zero key — insecure, but a
//! documented passthrough rather than a hard failure.

use aes::cipher::typenum::Unsigned;
use aes::cipher::{Block, BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};
use zeroize::Zeroizing;

use crate::config::CipherAlgo;
use urlseal_common::{Error, Result};

/// Fit `key` to exactly `len` bytes, zero-extending or truncating.
fn normalize_key(key: &[u8], len: usize) -> Zeroizing<Vec<u8>> {
    let mut fitted = Zeroizing::new(vec![0u8; len]);
    let take = key.len().min(len);
    fitted[..take].copy_from_slice(&key[..take]);
    fitted
}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], data: &mut [u8]) -> Result<()>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let mut enc = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| Error::Cipher(e.to_string()))?;
    for chunk in data.chunks_exact_mut(C::BlockSize::USIZE) {
        enc.encrypt_block_mut(Block::<C>::from_mut_slice(chunk));
    }
    Ok(())
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], data: &mut [u8]) -> Result<()>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let mut dec = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|e| Error::Cipher(e.to_string()))?;
    for chunk in data.chunks_exact_mut(C::BlockSize::USIZE) {
        dec.decrypt_block_mut(Block::<C>::from_mut_slice(chunk));
    }
    Ok(())
}

/// Encrypt `padded` in CBC mode.
///
/// # Preconditions
/// - `padded.len()` is a multiple of the cipher block length
/// - `iv.len()` equals the cipher's IV length
///
/// # Errors
/// - Returns error if the IV length does not match the cipher.
pub fn encrypt_blocks(
    algo: CipherAlgo,
    key: &[u8],
    iv: &[u8],
    padded: &[u8],
) -> Result<Vec<u8>> {
    let key = normalize_key(key, algo.key_len());
    let mut out = padded.to_vec();
    match algo {
        CipherAlgo::Aes128 => cbc_encrypt::<Aes128>(&key, iv, &mut out)?,
        CipherAlgo::Aes192 => cbc_encrypt::<Aes192>(&key, iv, &mut out)?,
        CipherAlgo::Aes256 => cbc_encrypt::<Aes256>(&key, iv, &mut out)?,
    }
    Ok(out)
}

/// Decrypt `ciphertext` in CBC mode.
///
/// # Preconditions
/// - `ciphertext.len()` is a multiple of the cipher block length
/// - `iv.len()` equals the cipher's IV length
///
/// # Errors
/// - Returns error if the IV length does not match the cipher.
pub fn decrypt_blocks(
    algo: CipherAlgo,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let key = normalize_key(key, algo.key_len());
    let mut out = ciphertext.to_vec();
    match algo {
        CipherAlgo::Aes128 => cbc_decrypt::<Aes128>(&key, iv, &mut out)?,
        CipherAlgo::Aes192 => cbc_decrypt::<Aes192>(&key, iv, &mut out)?,
        CipherAlgo::Aes256 => cbc_decrypt::<Aes256>(&key, iv, &mut out)?,
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let key = b"secret";
        let iv = [7u8; 16];
        let padded = [42u8; 32];

        let ct = encrypt_blocks(CipherAlgo::Aes256, key, &iv, &padded).unwrap();
        assert_ne!(ct, padded);

        let pt = decrypt_blocks(CipherAlgo::Aes256, key, &iv, &ct).unwrap();
        assert_eq!(pt, padded);
    }

    #[test]
    fn test_normalize_key_zero_extends() {
        let fitted = normalize_key(b"abc", 16);
        assert_eq!(&fitted[..3], b"abc");
        assert!(fitted[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_normalize_key_truncates() {
        let long = vec![9u8; 64];
        let fitted = normalize_key(&long, 32);
        assert_eq!(fitted.len(), 32);
    }

    #[test]
    fn test_empty_key_is_accepted() {
        let iv = [0u8; 16];
        let padded = [1u8; 16];

        let ct = encrypt_blocks(CipherAlgo::Aes256, b"", &iv, &padded).unwrap();
        let pt = decrypt_blocks(CipherAlgo::Aes256, b"", &iv, &ct).unwrap();
        assert_eq!(pt, padded);
    }

    #[test]
    fn test_wrong_iv_length_fails() {
        let iv = [0u8; 8];
        let padded = [1u8; 16];
        assert!(encrypt_blocks(CipherAlgo::Aes256, b"k", &iv, &padded).is_err());
    }

    #[test]
    fn test_all_variants_roundtrip() {
        let iv = [3u8; 16];
        let padded = [5u8; 48];
        for algo in [CipherAlgo::Aes128, CipherAlgo::Aes192, CipherAlgo::Aes256] {
            let ct = encrypt_blocks(algo, b"key material", &iv, &padded).unwrap();
            let pt = decrypt_blocks(algo, b"key material", &iv, &ct).unwrap();
            assert_eq!(pt, padded);
        }
    }
}
