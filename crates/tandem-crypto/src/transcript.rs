//! Running hash over the handshake transcript.
//!
//! TLS 1.2 hashes every handshake message, in the order sent and received,
//! into the seed for the Finished-message PRF. Which hash the PRF uses is
//! decided by the negotiated cipher suite, which is not known when the
//! first messages arrive — so the accumulator runs SHA-256 (always) and
//! SHA-384 (when configured) side by side over the same byte stream.
//!
//! One accumulator belongs to exactly one handshake. It is never shared
//! across connections, and it is only ever rewound by an explicit
//! [`reset`](TranscriptHash::reset) at the start of a renegotiation.

use sha2::{Digest, Sha256, Sha384};

use crate::error::CryptoError;
use crate::hash::HashAlgorithm;

/// Incremental hash of all handshake messages exchanged so far.
///
/// Digests are snapshots: [`digest`](Self::digest) may be called at any
/// point, repeatedly, without disturbing later updates. `Clone` forks the
/// accumulator, which the caller needs when the digest-before-Finished must
/// be pinned while the transcript keeps growing.
#[derive(Clone)]
pub struct TranscriptHash {
    sha256: Sha256,
    sha384: Option<Sha384>,
}

impl TranscriptHash {
    /// New accumulator tracking SHA-256 only.
    pub fn new() -> Self {
        Self { sha256: Sha256::new(), sha384: None }
    }

    /// New accumulator tracking SHA-256 and SHA-384 simultaneously.
    ///
    /// Use this when a SHA-384 suite may be negotiated; the extra state
    /// must exist from the first `ClientHello` byte onward.
    pub fn with_sha384() -> Self {
        Self { sha256: Sha256::new(), sha384: Some(Sha384::new()) }
    }

    /// Append handshake message bytes to every tracked hash state.
    pub fn update(&mut self, message: &[u8]) {
        self.sha256.update(message);
        if let Some(sha384) = &mut self.sha384 {
            sha384.update(message);
        }
    }

    /// Snapshot digest of all bytes fed so far.
    ///
    /// Does not mutate the running state.
    ///
    /// # Errors
    ///
    /// [`CryptoError::HashNotTracked`] if `algorithm` was not configured
    /// at construction.
    pub fn digest(&self, algorithm: HashAlgorithm) -> Result<Vec<u8>, CryptoError> {
        match algorithm {
            HashAlgorithm::Sha256 => Ok(self.sha256.clone().finalize().to_vec()),
            HashAlgorithm::Sha384 => self
                .sha384
                .as_ref()
                .map(|sha384| sha384.clone().finalize().to_vec())
                .ok_or(CryptoError::HashNotTracked { algorithm }),
            HashAlgorithm::Sha1 => Err(CryptoError::HashNotTracked { algorithm }),
        }
    }

    /// True if `algorithm` is accumulated by this transcript.
    pub fn tracks(&self, algorithm: HashAlgorithm) -> bool {
        match algorithm {
            HashAlgorithm::Sha256 => true,
            HashAlgorithm::Sha384 => self.sha384.is_some(),
            HashAlgorithm::Sha1 => false,
        }
    }

    /// Rewind to the empty transcript, keeping the configured algorithm
    /// set.
    ///
    /// Only valid at the start of a new handshake.
    pub fn reset(&mut self) {
        self.sha256 = Sha256::new();
        if self.sha384.is_some() {
            self.sha384 = Some(Sha384::new());
        }
    }
}

impl Default for TranscriptHash {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TranscriptHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptHash")
            .field("tracks_sha384", &self.sha384.is_some())
            .finish()
    }
}
