//! PKCS#7-style padding.
//!
//! Plaintext is padded so its length is a multiple of the configured block
//! size; a full block of padding is appended when the input is already
//! aligned, so padding is never empty and unpadding is unambiguous for
//! round-tripped data.

use urlseal_common::{Error, Result};

/// Pad `data` to a multiple of `block_size`.
///
/// # Preconditions
/// - `block_size` is in `1..=255` (enforced by [`CipherConfig::validate`](crate::CipherConfig::validate))
///
/// # Postconditions
/// - `result.len() % block_size == 0`
/// - `result.len() > data.len()` (at least one padding byte is appended)
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let n = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + n);
    padded.extend_from_slice(data);
    padded.extend(std::iter::repeat(n as u8).take(n));
    padded
}

/// Remove padding from `data`.
///
/// Reads the last byte as the padding value `p`. If the input is empty,
/// `p == 0`, or `p > block_size`, the input is returned unchanged: it is
/// treated as carrying no valid padding rather than as an error. Otherwise
/// the last `p` bytes must all equal `p`. Valid padding values run from 1
/// up to and including `block_size`, since [`pad`] appends a full block
/// when the input is already aligned.
///
/// The validation inspects all `p` trailing bytes without short-circuiting,
/// so timing reveals only the padding value itself.
///
/// # Errors
/// - Returns [`Error::PaddingInvalid`] if the trailing bytes disagree with
///   the padding value. This usually means a wrong key or a tampered
///   envelope.
pub fn unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let Some(&last) = data.last() else {
        return Ok(Vec::new());
    };
    let p = last as usize;

    if p == 0 || p > block_size {
        return Ok(data.to_vec());
    }
    if p > data.len() {
        return Err(Error::PaddingInvalid);
    }

    let mut mismatch = 0u8;
    for &byte in &data[data.len() - p..] {
        mismatch |= byte ^ last;
    }
    if mismatch != 0 {
        return Err(Error::PaddingInvalid);
    }

    Ok(data[..data.len() - p].to_vec())
}
