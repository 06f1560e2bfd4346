//! The ciphertext envelope.
//!
//! An envelope is `IV || ciphertext`, transport-encoded. The IV is freshly
//! generated per message, so encrypting the same plaintext twice yields
//! different envelopes. Each call is independent; no state is shared
//! between concurrent invocations beyond the configuration and the default
//! key.
//!
//! The format is unauthenticated: there is no integrity tag, and a padding
//! failure after decryption is the only tamper signal.

use crate::cipher;
use crate::config::CipherConfig;
use crate::keys::{KeyRegistry, SecretKey};
use crate::padding;
use crate::rng;
use crate::transport;
use urlseal_common::{Error, Result};

/// Encrypts and decrypts URL-safe ciphertext envelopes.
#[derive(Debug)]
pub struct Crypter {
    config: CipherConfig,
    keys: KeyRegistry,
}

impl Crypter {
    /// Create a crypter with the given configuration and no default key.
    ///
    /// # Errors
    /// - Returns error if the configuration is invalid
    ///   (see [`CipherConfig::validate`]).
    pub fn new(config: CipherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            keys: KeyRegistry::new(),
        })
    }

    /// Create a crypter seeded with a default key.
    pub fn with_key(config: CipherConfig, key: SecretKey) -> Result<Self> {
        let crypter = Self::new(config)?;
        crypter.keys.set_default(key);
        Ok(crypter)
    }

    /// The active configuration.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Set the default key. An empty key is ignored.
    pub fn set_key(&self, key: SecretKey) {
        self.keys.set_default(key);
    }

    /// Encrypt `plaintext` into a URL-safe envelope.
    ///
    /// A non-empty `key` overrides the default key for this call only.
    ///
    /// # Postconditions
    /// - The envelope decodes to `IV || ciphertext` where the ciphertext
    ///   length is a positive multiple of the configured block size
    /// - Repeated calls with identical inputs produce different envelopes
    pub fn encrypt(&self, plaintext: &[u8], key: Option<&SecretKey>) -> Result<String> {
        let (iv, _tier) = rng::generate_iv(self.config.cipher.iv_len());
        let padded = padding::pad(plaintext, self.config.block_size);
        let resolved = self.keys.resolve(key);

        let ciphertext =
            cipher::encrypt_blocks(self.config.cipher, resolved.as_bytes(), &iv, &padded)?;

        let mut envelope = Vec::with_capacity(iv.len() + ciphertext.len());
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(&ciphertext);

        Ok(transport::encode(&envelope))
    }

    /// Decrypt an envelope back into plaintext.
    ///
    /// # Errors
    /// - [`Error::EncodingInvalid`] if the envelope is not valid URL-safe
    ///   base64
    /// - [`Error::EnvelopeMalformed`] if the decoded bytes are too short or
    ///   the ciphertext is not a positive multiple of the block size
    /// - [`Error::PaddingInvalid`] if padding validation fails after
    ///   decryption (wrong key or tampering)
    pub fn decrypt(&self, envelope: &str, key: Option<&SecretKey>) -> Result<Vec<u8>> {
        let decoded = transport::decode(envelope)?;

        let iv_len = self.config.cipher.iv_len();
        if decoded.len() < iv_len {
            return Err(Error::EnvelopeMalformed(format!(
                "Envelope is {} bytes, shorter than the {}-byte IV",
                decoded.len(),
                iv_len
            )));
        }
        let (iv, ciphertext) = decoded.split_at(iv_len);

        if ciphertext.is_empty() || ciphertext.len() % self.config.block_size != 0 {
            return Err(Error::EnvelopeMalformed(format!(
                "Ciphertext length {} is not a positive multiple of the block size {}",
                ciphertext.len(),
                self.config.block_size
            )));
        }

        let resolved = self.keys.resolve(key);
        let padded =
            cipher::decrypt_blocks(self.config.cipher, resolved.as_bytes(), iv, ciphertext)?;

        padding::unpad(&padded, self.config.block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn crypter_with_key(key: &str) -> Crypter {
        Crypter::with_key(CipherConfig::default(), SecretKey::from(key)).unwrap()
    }

    #[test]
    fn test_roundtrip_with_default_key() {
        let crypter = crypter_with_key("secret");
        let envelope = crypter.encrypt(b"hello world", None).unwrap();
        assert_eq!(crypter.decrypt(&envelope, None).unwrap(), b"hello world");
    }

    #[test]
    fn test_roundtrip_with_override_key() {
        let crypter = crypter_with_key("default");
        let key = SecretKey::from("override");

        let envelope = crypter.encrypt(b"payload", Some(&key)).unwrap();
        assert_eq!(
            crypter.decrypt(&envelope, Some(&key)).unwrap(),
            b"payload"
        );
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let crypter = crypter_with_key("secret");
        let envelope = crypter.encrypt(b"", None).unwrap();
        assert!(!envelope.is_empty());
        assert_eq!(crypter.decrypt(&envelope, None).unwrap(), b"");
    }

    #[test]
    fn test_envelope_is_url_safe() {
        let crypter = crypter_with_key("secret");
        let envelope = crypter.encrypt(&[0xffu8; 100], None).unwrap();
        assert!(!envelope.contains(['+', '/', '=']));
    }

    #[test]
    fn test_fresh_iv_per_message() {
        let crypter = crypter_with_key("secret");
        let e1 = crypter.encrypt(b"same message", None).unwrap();
        let e2 = crypter.encrypt(b"same message", None).unwrap();
        assert_ne!(e1, e2);
    }

    #[test]
    fn test_wrong_key_never_returns_plaintext() {
        let crypter = crypter_with_key("secret");
        let envelope = crypter.encrypt(b"hello world", None).unwrap();

        let wrong = SecretKey::from("wrong");
        match crypter.decrypt(&envelope, Some(&wrong)) {
            Ok(recovered) => assert_ne!(recovered, b"hello world"),
            Err(Error::PaddingInvalid) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_corrupted_ciphertext_never_returns_plaintext() {
        let crypter = crypter_with_key("secret");
        let envelope = crypter.encrypt(b"hello world", None).unwrap();

        // Flip a character in the ciphertext region (past the encoded IV).
        let mut chars: Vec<char> = envelope.chars().collect();
        let idx = chars.len() - 2;
        chars[idx] = if chars[idx] == 'A' { 'B' } else { 'A' };
        let corrupted: String = chars.into_iter().collect();

        match crypter.decrypt(&corrupted, None) {
            Ok(recovered) => assert_ne!(recovered, b"hello world"),
            Err(Error::PaddingInvalid) | Err(Error::EncodingInvalid(_)) => {}
            Err(Error::EnvelopeMalformed(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_not_base64_fails() {
        let crypter = crypter_with_key("secret");
        assert!(matches!(
            crypter.decrypt("!!! not base64 !!!", None),
            Err(Error::EncodingInvalid(_))
        ));
    }

    #[test]
    fn test_too_short_envelope_fails() {
        let crypter = crypter_with_key("secret");
        let short = transport::encode(&[1, 2, 3]);
        assert!(matches!(
            crypter.decrypt(&short, None),
            Err(Error::EnvelopeMalformed(_))
        ));
    }

    #[test]
    fn test_iv_only_envelope_fails() {
        let crypter = crypter_with_key("secret");
        let iv_only = transport::encode(&[0u8; 16]);
        assert!(matches!(
            crypter.decrypt(&iv_only, None),
            Err(Error::EnvelopeMalformed(_))
        ));
    }

    #[test]
    fn test_misaligned_ciphertext_fails() {
        let crypter = crypter_with_key("secret");
        // 16-byte IV plus 20 bytes: not a multiple of the 32-byte block.
        let bad = transport::encode(&[0u8; 36]);
        assert!(matches!(
            crypter.decrypt(&bad, None),
            Err(Error::EnvelopeMalformed(_))
        ));
    }

    #[test]
    fn test_encrypt_without_any_key_still_roundtrips() {
        // No key configured: the empty key is passed through to the cipher
        // layer, which is insecure but must not fail.
        let crypter = Crypter::new(CipherConfig::default()).unwrap();
        let envelope = crypter.encrypt(b"unprotected", None).unwrap();
        assert_eq!(crypter.decrypt(&envelope, None).unwrap(), b"unprotected");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CipherConfig {
            block_size: 24,
            ..CipherConfig::default()
        };
        assert!(Crypter::new(config).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_roundtrip(
            plaintext in proptest::collection::vec(any::<u8>(), 0..512),
            key in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let crypter = Crypter::new(CipherConfig::default()).unwrap();
            let key = SecretKey::from_bytes(key);

            let envelope = crypter.encrypt(&plaintext, Some(&key)).unwrap();
            let recovered = crypter.decrypt(&envelope, Some(&key)).unwrap();
            prop_assert_eq!(recovered, plaintext);
        }
    }
}
