//! Raw AEAD seal/open over the TLS 1.2 cipher suites this core supports.
//!
//! Nonce and AAD construction live in [`crate::record`]; this module is the
//! thin dispatch over the cipher implementations. Tag verification inside
//! the AEAD backends is constant-time, and every open failure — wrong tag,
//! truncated input, anything — collapses to the same
//! [`CryptoError::AuthenticationFailed`].

use aes::Aes128;
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use ccm::Ccm;
use ccm::consts::{U12, U16};
use chacha20poly1305::ChaCha20Poly1305;
use chacha20poly1305::aead::{Aead, KeyInit, Payload};

use crate::error::CryptoError;

/// AES-128 in CCM mode with a 16-byte tag and 12-byte nonce.
type Aes128Ccm = Ccm<Aes128, U16, U12>;

/// Nonce width shared by every supported cipher.
pub const NONCE_LEN: usize = 12;

/// Authentication tag width shared by every supported cipher.
pub const TAG_LEN: usize = 16;

/// The AEAD bulk ciphers negotiable for TLS 1.2 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AeadAlgorithm {
    /// AES-128-GCM (RFC 5288).
    Aes128Gcm,
    /// AES-256-GCM (RFC 5288).
    Aes256Gcm,
    /// AES-128-CCM (RFC 6655).
    Aes128Ccm,
    /// ChaCha20-Poly1305 (RFC 7905).
    ChaCha20Poly1305,
}

impl AeadAlgorithm {
    /// Bulk key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128Gcm | Self::Aes128Ccm => 16,
            Self::Aes256Gcm | Self::ChaCha20Poly1305 => 32,
        }
    }

    /// Fixed IV (nonce salt) length carved out of the key block.
    ///
    /// The AES suites keep a 4-byte salt and fill the remaining 8 nonce
    /// bytes per record; the ChaCha20 suites keep a full 12-byte IV.
    pub const fn fixed_iv_len(self) -> usize {
        match self {
            Self::Aes128Gcm | Self::Aes256Gcm | Self::Aes128Ccm => 4,
            Self::ChaCha20Poly1305 => 12,
        }
    }

    /// Total key block length: two keys and two fixed IVs.
    pub const fn key_block_len(self) -> usize {
        2 * (self.key_len() + self.fixed_iv_len())
    }

    /// Cipher name as it appears in suite listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes128Gcm => "AES_128_GCM",
            Self::Aes256Gcm => "AES_256_GCM",
            Self::Aes128Ccm => "AES_128_CCM",
            Self::ChaCha20Poly1305 => "CHACHA20_POLY1305",
        }
    }
}

impl std::fmt::Display for AeadAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encrypt and authenticate `plaintext` with `aad`.
///
/// Returns ciphertext with the 16-byte tag appended. Deterministic: the
/// same inputs always produce the same output — nonces here are
/// sequence-derived by the record layer, never random.
pub fn seal(
    algorithm: AeadAlgorithm,
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let payload = Payload { msg: plaintext, aad };
    let sealed = match algorithm {
        AeadAlgorithm::Aes128Gcm => new_cipher::<Aes128Gcm>(algorithm, key)?
            .encrypt(nonce.into(), payload),
        AeadAlgorithm::Aes256Gcm => new_cipher::<Aes256Gcm>(algorithm, key)?
            .encrypt(nonce.into(), payload),
        AeadAlgorithm::Aes128Ccm => new_cipher::<Aes128Ccm>(algorithm, key)?
            .encrypt(nonce.into(), payload),
        AeadAlgorithm::ChaCha20Poly1305 => new_cipher::<ChaCha20Poly1305>(algorithm, key)?
            .encrypt(nonce.into(), payload),
    };
    sealed.map_err(|_| CryptoError::EncryptionFailed { algorithm })
}

/// Verify and decrypt `ciphertext` (which carries its tag) against `aad`.
///
/// # Errors
///
/// [`CryptoError::AuthenticationFailed`] on any verification failure,
/// including ciphertext shorter than the tag. The variant carries no
/// detail about where verification failed.
pub fn open(
    algorithm: AeadAlgorithm,
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let payload = Payload { msg: ciphertext, aad };
    let opened = match algorithm {
        AeadAlgorithm::Aes128Gcm => new_cipher::<Aes128Gcm>(algorithm, key)?
            .decrypt(nonce.into(), payload),
        AeadAlgorithm::Aes256Gcm => new_cipher::<Aes256Gcm>(algorithm, key)?
            .decrypt(nonce.into(), payload),
        AeadAlgorithm::Aes128Ccm => new_cipher::<Aes128Ccm>(algorithm, key)?
            .decrypt(nonce.into(), payload),
        AeadAlgorithm::ChaCha20Poly1305 => new_cipher::<ChaCha20Poly1305>(algorithm, key)?
            .decrypt(nonce.into(), payload),
    };
    opened.map_err(|_| CryptoError::AuthenticationFailed)
}

fn new_cipher<C: KeyInit>(algorithm: AeadAlgorithm, key: &[u8]) -> Result<C, CryptoError> {
    C::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength {
        algorithm,
        expected: algorithm.key_len(),
        got: key.len(),
    })
}
