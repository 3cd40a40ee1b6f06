//! Conformance harness for the TLS 1.2 cryptographic core.
//!
//! Two independent TLS stacks must produce byte-identical keys,
//! ciphertexts, and signatures from identical inputs, or a handshake
//! between them fails — sometimes loudly at the Finished check, sometimes
//! as an undiagnosable `bad_record_mac`. This crate holds the material
//! for pinning that equality:
//!
//! - [`vectors`] — inputs and expected outputs captured from interop
//!   debugging sessions, plus published reference vectors
//! - [`fixture`] — a full derived session (key block and all four record
//!   cipher directions) for exercising the pipeline end to end
//!
//! The integration tests under `tests/` are the actual conformance
//! suite.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixture;
pub mod vectors;

pub use fixture::{DirectionPair, SessionFixture};
