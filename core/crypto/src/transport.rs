//! URL-safe transport encoding.
//!
//! Envelopes are base64 encoded with `+` and `/` replaced by `-` and `_`
//! and the trailing `=` padding removed, so they can travel in URLs and
//! headers without escaping.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use urlseal_common::{Error, Result};

/// Encode bytes as unpadded URL-safe base64.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a URL-safe base64 string.
///
/// Substitutes `-`→`+` and `_`→`/`, restores the `=` padding to a multiple
/// of four, then performs a standard base64 decode. Standard-alphabet input
/// is accepted as well, since `+` and `/` pass through the substitution.
///
/// # Errors
/// - Returns [`Error::EncodingInvalid`] if the reconstructed string is not
///   valid base64.
pub fn decode(value: &str) -> Result<Vec<u8>> {
    let mut data: String = value
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let rem = data.len() % 4;
    if rem != 0 {
        data.extend(std::iter::repeat('=').take(4 - rem));
    }

    STANDARD
        .decode(&data)
        .map_err(|e| Error::EncodingInvalid(e.to_string()))
}
