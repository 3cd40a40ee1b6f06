//! TLS 1.2 AEAD record protection (RFC 5246, section 6.2.3.3).
//!
//! Per record, both sides derive the nonce and additional data from the
//! same four values — sequence number, content type, protocol version,
//! plaintext length — so a sealed record is a pure function of its inputs
//! and byte-comparable across independent implementations.
//!
//! The nonce is the per-direction fixed IV, widened to 12 bytes, XORed
//! with the sequence number left-padded to 12 bytes big-endian. For the
//! 4-byte AES salts the widening pads zeros on the right, which makes the
//! XOR form reduce to `salt ++ seq`, so one construction serves every
//! suite. A peer that pads the sequence number on the wrong side, skips
//! the XOR, or omits the sequence number from the AAD produces different
//! bytes and fails interop — there is deliberately no lenient mode here.

use zeroize::Zeroizing;

use crate::aead::{self, AeadAlgorithm, NONCE_LEN, TAG_LEN};
use crate::error::CryptoError;

/// TLS record content types, as carried in the AAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ContentType {
    /// `change_cipher_spec`
    ChangeCipherSpec = 20,
    /// `alert`
    Alert = 21,
    /// `handshake`
    Handshake = 22,
    /// `application_data`
    ApplicationData = 23,
}

impl ContentType {
    /// The wire code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a wire code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            20 => Some(Self::ChangeCipherSpec),
            21 => Some(Self::Alert),
            22 => Some(Self::Handshake),
            23 => Some(Self::ApplicationData),
            _ => None,
        }
    }
}

/// A TLS record-layer protocol version, as carried in the AAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolVersion {
    /// Major version byte.
    pub major: u8,
    /// Minor version byte.
    pub minor: u8,
}

impl ProtocolVersion {
    /// TLS 1.2, `{3, 3}` on the wire.
    pub const TLS12: Self = Self { major: 3, minor: 3 };

    /// The two wire bytes.
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.major, self.minor]
    }
}

/// Additional authenticated data for one record: exactly 13 bytes,
/// `seq(8) ++ type(1) ++ version(2) ++ length(2)`, all big-endian.
pub fn additional_data(
    sequence_number: u64,
    content_type: ContentType,
    version: ProtocolVersion,
    plaintext_len: u16,
) -> [u8; 13] {
    let mut aad = [0u8; 13];
    aad[..8].copy_from_slice(&sequence_number.to_be_bytes());
    aad[8] = content_type.code();
    aad[9..11].copy_from_slice(&version.to_bytes());
    aad[11..13].copy_from_slice(&plaintext_len.to_be_bytes());
    aad
}

/// Per-record nonce: the 12-byte nonce mask XORed with the sequence
/// number left-padded to 12 bytes big-endian.
pub fn record_nonce(nonce_mask: &[u8; NONCE_LEN], sequence_number: u64) -> [u8; NONCE_LEN] {
    let mut nonce = *nonce_mask;
    for (nonce_byte, seq_byte) in nonce[4..].iter_mut().zip(sequence_number.to_be_bytes()) {
        *nonce_byte ^= seq_byte;
    }
    nonce
}

/// Configuration check shared by the pure record functions: a key that
/// does not fit the cipher is reported as such, never as an
/// authentication failure.
fn check_key(algorithm: AeadAlgorithm, key: &[u8]) -> Result<(), CryptoError> {
    if key.len() != algorithm.key_len() {
        return Err(CryptoError::InvalidKeyLength {
            algorithm,
            expected: algorithm.key_len(),
            got: key.len(),
        });
    }
    Ok(())
}

/// Widen a per-suite fixed IV to the full nonce width.
///
/// ChaCha20 IVs are already 12 bytes; the 4-byte AES salts are padded with
/// zeros on the right so that the XOR with the left-padded sequence number
/// yields `salt ++ seq`.
fn nonce_mask(
    algorithm: AeadAlgorithm,
    fixed_iv: &[u8],
) -> Result<[u8; NONCE_LEN], CryptoError> {
    if fixed_iv.len() != algorithm.fixed_iv_len() {
        return Err(CryptoError::InvalidIvLength {
            algorithm,
            expected: algorithm.fixed_iv_len(),
            got: fixed_iv.len(),
        });
    }
    let mut mask = [0u8; NONCE_LEN];
    mask[..fixed_iv.len()].copy_from_slice(fixed_iv);
    Ok(mask)
}

/// Seal one record.
///
/// Pure: identical inputs give identical ciphertext (the tag is appended).
/// The caller owns sequence-number bookkeeping; for the stateful form use
/// [`RecordCipher`].
pub fn seal_record(
    algorithm: AeadAlgorithm,
    key: &[u8],
    fixed_iv: &[u8],
    sequence_number: u64,
    content_type: ContentType,
    version: ProtocolVersion,
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    check_key(algorithm, key)?;
    let mask = nonce_mask(algorithm, fixed_iv)?;
    let len = u16::try_from(plaintext.len())
        .map_err(|_| CryptoError::RecordTooLong { len: plaintext.len() })?;
    let nonce = record_nonce(&mask, sequence_number);
    let aad = additional_data(sequence_number, content_type, version, len);
    aead::seal(algorithm, key, &nonce, &aad, plaintext)
}

/// Open one record.
///
/// The AAD is reconstructed from the expected plaintext length
/// (ciphertext minus tag); any mismatch anywhere surfaces as the one
/// opaque [`CryptoError::AuthenticationFailed`].
pub fn open_record(
    algorithm: AeadAlgorithm,
    key: &[u8],
    fixed_iv: &[u8],
    sequence_number: u64,
    content_type: ContentType,
    version: ProtocolVersion,
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    check_key(algorithm, key)?;
    let mask = nonce_mask(algorithm, fixed_iv)?;
    let plaintext_len = ciphertext
        .len()
        .checked_sub(TAG_LEN)
        .ok_or(CryptoError::AuthenticationFailed)?;
    let len = u16::try_from(plaintext_len)
        .map_err(|_| CryptoError::RecordTooLong { len: plaintext_len })?;
    let nonce = record_nonce(&mask, sequence_number);
    let aad = additional_data(sequence_number, content_type, version, len);
    aead::open(algorithm, key, &nonce, &aad, ciphertext)
}

/// One direction of record protection: key, nonce mask, and the strictly
/// increasing sequence counter.
///
/// A connection owns two of these — send and receive — which advance
/// independently. Within a direction records must be processed in order;
/// the counter increments by exactly one per record and never wraps.
pub struct RecordCipher {
    algorithm: AeadAlgorithm,
    key: Zeroizing<Vec<u8>>,
    nonce_mask: [u8; NONCE_LEN],
    sequence_number: u64,
}

impl RecordCipher {
    /// Build a direction from its key-block slice.
    ///
    /// # Errors
    ///
    /// Configuration errors when `key` or `fixed_iv` do not match
    /// `algorithm`.
    pub fn new(
        algorithm: AeadAlgorithm,
        key: &[u8],
        fixed_iv: &[u8],
    ) -> Result<Self, CryptoError> {
        if key.len() != algorithm.key_len() {
            return Err(CryptoError::InvalidKeyLength {
                algorithm,
                expected: algorithm.key_len(),
                got: key.len(),
            });
        }
        let nonce_mask = nonce_mask(algorithm, fixed_iv)?;
        Ok(Self {
            algorithm,
            key: Zeroizing::new(key.to_vec()),
            nonce_mask,
            sequence_number: 0,
        })
    }

    /// The sequence number the next record will use.
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    /// Seal the next outgoing record and advance the counter.
    pub fn seal_next(
        &mut self,
        content_type: ContentType,
        version: ProtocolVersion,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let sequence_number = self.next_sequence_number()?;
        tracing::trace!(seq = sequence_number, len = plaintext.len(), "sealing record");
        let len = u16::try_from(plaintext.len())
            .map_err(|_| CryptoError::RecordTooLong { len: plaintext.len() })?;
        let nonce = record_nonce(&self.nonce_mask, sequence_number);
        let aad = additional_data(sequence_number, content_type, version, len);
        let sealed = aead::seal(self.algorithm, &self.key, &nonce, &aad, plaintext)?;
        self.sequence_number = sequence_number + 1;
        Ok(sealed)
    }

    /// Open the next incoming record and advance the counter.
    ///
    /// The counter does not advance on failure; a record that fails
    /// authentication is fatal to the connection anyway.
    pub fn open_next(
        &mut self,
        content_type: ContentType,
        version: ProtocolVersion,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let sequence_number = self.next_sequence_number()?;
        let plaintext_len = ciphertext
            .len()
            .checked_sub(TAG_LEN)
            .ok_or(CryptoError::AuthenticationFailed)?;
        let len = u16::try_from(plaintext_len)
            .map_err(|_| CryptoError::RecordTooLong { len: plaintext_len })?;
        let nonce = record_nonce(&self.nonce_mask, sequence_number);
        let aad = additional_data(sequence_number, content_type, version, len);
        let opened = aead::open(self.algorithm, &self.key, &nonce, &aad, ciphertext)?;
        self.sequence_number = sequence_number + 1;
        Ok(opened)
    }

    /// Current sequence number, or [`CryptoError::SequenceOverflow`] once
    /// the counter can no longer advance past this record.
    fn next_sequence_number(&self) -> Result<u64, CryptoError> {
        if self.sequence_number == u64::MAX {
            return Err(CryptoError::SequenceOverflow);
        }
        Ok(self.sequence_number)
    }
}

impl std::fmt::Debug for RecordCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordCipher")
            .field("algorithm", &self.algorithm)
            .field("sequence_number", &self.sequence_number)
            .finish()
    }
}
