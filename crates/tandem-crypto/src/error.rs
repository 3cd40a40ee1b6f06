//! Crypto core error types.

use thiserror::Error;

use crate::aead::AeadAlgorithm;
use crate::hash::HashAlgorithm;

/// Errors from the TLS 1.2 cryptographic core.
///
/// Two classes matter to callers: configuration errors (wrong lengths,
/// unsupported algorithms) and authentication failures. The latter is a
/// single opaque variant on purpose — a failed record open must not reveal
/// whether the tag, the AAD, or the ciphertext length was at fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The transcript was asked for a digest it never accumulated.
    #[error("transcript does not track {algorithm}")]
    HashNotTracked {
        /// The algorithm that was requested.
        algorithm: HashAlgorithm,
    },

    /// A hash algorithm outside the set TLS 1.2 admits for the PRF.
    #[error("{algorithm} is not a TLS 1.2 PRF hash")]
    UnsupportedPrfHash {
        /// The algorithm that was requested.
        algorithm: HashAlgorithm,
    },

    /// PRF output length of zero requested.
    #[error("PRF output length must be at least 1")]
    InvalidOutputLength,

    /// Key length does not match the negotiated cipher.
    #[error("{algorithm} key must be {expected} bytes, got {got}")]
    InvalidKeyLength {
        /// The cipher the key was meant for.
        algorithm: AeadAlgorithm,
        /// Required key length in bytes.
        expected: usize,
        /// Provided key length in bytes.
        got: usize,
    },

    /// Fixed IV length does not match the negotiated cipher.
    #[error("{algorithm} fixed IV must be {expected} bytes, got {got}")]
    InvalidIvLength {
        /// The cipher the IV was meant for.
        algorithm: AeadAlgorithm,
        /// Required fixed IV length in bytes.
        expected: usize,
        /// Provided fixed IV length in bytes.
        got: usize,
    },

    /// Record payload exceeds the 2-byte length field of the AAD.
    #[error("record payload of {len} bytes exceeds the 2-byte length field")]
    RecordTooLong {
        /// Length of the offending payload.
        len: usize,
    },

    /// Per-direction sequence number space exhausted.
    ///
    /// Sequence numbers never wrap: a repeated nonce under the same key
    /// would break the AEAD, so the connection must be torn down instead.
    #[error("record sequence number space exhausted")]
    SequenceOverflow,

    /// AEAD open failed.
    ///
    /// Covers tag mismatch and truncated ciphertext alike; the cases are
    /// deliberately indistinguishable.
    #[error("record authentication failed")]
    AuthenticationFailed,

    /// The AEAD backend rejected a seal operation.
    #[error("{algorithm} could not process the payload")]
    EncryptionFailed {
        /// The cipher that rejected the payload.
        algorithm: AeadAlgorithm,
    },

    /// Message digest length does not match the declared hash.
    #[error("{algorithm} digest must be {expected} bytes, got {got}")]
    DigestLengthMismatch {
        /// The declared hash algorithm.
        algorithm: HashAlgorithm,
        /// Required digest length in bytes.
        expected: usize,
        /// Provided digest length in bytes.
        got: usize,
    },

    /// Digest plus salt plus overhead do not fit the PSS encoding.
    ///
    /// The salt is never truncated to make an encoding fit.
    #[error("PSS digest and salt do not fit a {em_bits}-bit encoding")]
    PssDoesNotFit {
        /// Bit length of the intended encoded message.
        em_bits: usize,
    },

    /// RSA key components are inconsistent.
    #[error("invalid RSA key components: {reason}")]
    InvalidKeyComponents {
        /// What the consistency check found.
        reason: &'static str,
    },
}

impl CryptoError {
    /// True for an AEAD authentication failure, as opposed to a
    /// configuration error.
    ///
    /// The record layer maps this class to a `bad_record_mac` alert;
    /// everything else indicates a local bug or misconfiguration.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_failure_is_classified() {
        assert!(CryptoError::AuthenticationFailed.is_authentication_failure());
        assert!(!CryptoError::SequenceOverflow.is_authentication_failure());
        assert!(!CryptoError::InvalidOutputLength.is_authentication_failure());
    }

    #[test]
    fn authentication_failure_carries_no_detail() {
        // The Display output must not say where the mismatch occurred.
        let msg = CryptoError::AuthenticationFailed.to_string();
        assert_eq!(msg, "record authentication failed");
    }
}
