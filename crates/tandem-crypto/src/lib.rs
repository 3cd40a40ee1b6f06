//! Tandem Cryptographic Core
//!
//! This crate provides the TLS 1.2 cryptographic transforms that two
//! independent protocol stacks must compute byte-identically: PRF key
//! derivation, AEAD record protection, and RSA-PSS signature encoding.
//!
//! # Design
//!
//! All functions in this crate are pure — they have no side effects and
//! produce deterministic outputs given the same inputs. Salt and nonce
//! material is always passed in by the caller, never drawn from a global
//! source, enabling:
//!
//! - Byte-for-byte conformance comparison against other implementations
//! - Deterministic testing with pinned inputs
//! - No coupling to transport or handshake-state abstractions
//!
//! The only stateful types are [`TranscriptHash`] (the running handshake
//! hash, one per handshake) and [`RecordCipher`] (one per direction,
//! strictly ordered sequence numbers).
//!
//! # Security Properties
//!
//! - Nonce uniqueness: record nonces are sequence-derived; the sequence
//!   counter never wraps under a key
//! - Oracle resistance: all AEAD open failures collapse to one opaque
//!   error; verify-data comparison is constant-time
//! - Hygiene: derived keys and secrets are zeroized on drop and redacted
//!   from `Debug` output

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aead;
pub mod error;
pub mod hash;
pub mod prf;
pub mod pss;
pub mod record;
pub mod rsa;
pub mod transcript;

pub use aead::{AeadAlgorithm, NONCE_LEN, TAG_LEN};
pub use error::CryptoError;
pub use hash::HashAlgorithm;
pub use prf::{
    FinishedLabel, KeyBlock, MASTER_SECRET_LEN, MasterSecret, RANDOM_LEN, VERIFY_DATA_LEN,
    derive_key_block, derive_master_secret, prf, verify_data, verify_data_matches,
};
pub use pss::encode_pss;
pub use record::{
    ContentType, ProtocolVersion, RecordCipher, additional_data, open_record, record_nonce,
    seal_record,
};
pub use rsa::RsaPrivateKey;
pub use transcript::TranscriptHash;
