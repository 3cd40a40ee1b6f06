//! Fuzz target for [`open_record`] on hostile input
//!
//! The record-open path faces attacker-controlled bytes directly.
//!
//! # Strategy
//!
//! - Arbitrary ciphertext, including empty and shorter-than-tag
//! - Arbitrary key and IV lengths, valid and invalid
//! - Arbitrary sequence numbers, content types, versions
//!
//! # Invariants
//!
//! - NEVER panic, whatever the input shape
//! - Wrong key/IV lengths report configuration errors, not
//!   authentication failures
//! - Random ciphertext never opens (forging a 16-byte tag by chance is
//!   not a case worth modeling)

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tandem_crypto::{AeadAlgorithm, ContentType, ProtocolVersion, open_record};

#[derive(Debug, Arbitrary)]
struct OpenInput {
    algorithm_selector: u8,
    key: Vec<u8>,
    fixed_iv: Vec<u8>,
    sequence_number: u64,
    content_type_selector: u8,
    version: (u8, u8),
    ciphertext: Vec<u8>,
}

fuzz_target!(|input: OpenInput| {
    let algorithm = match input.algorithm_selector % 4 {
        0 => AeadAlgorithm::Aes128Gcm,
        1 => AeadAlgorithm::Aes256Gcm,
        2 => AeadAlgorithm::Aes128Ccm,
        _ => AeadAlgorithm::ChaCha20Poly1305,
    };
    let content_type = match input.content_type_selector % 4 {
        0 => ContentType::ChangeCipherSpec,
        1 => ContentType::Alert,
        2 => ContentType::Handshake,
        _ => ContentType::ApplicationData,
    };
    let version = ProtocolVersion { major: input.version.0, minor: input.version.1 };

    let result = open_record(
        algorithm,
        &input.key,
        &input.fixed_iv,
        input.sequence_number,
        content_type,
        version,
        &input.ciphertext,
    );

    if let Err(error) = &result {
        if error.is_authentication_failure() {
            // Authentication failures only arise once the key and IV
            // actually fit the cipher.
            assert_eq!(input.key.len(), algorithm.key_len());
            assert_eq!(input.fixed_iv.len(), algorithm.fixed_iv_len());
        }
    } else {
        // A random tag verifying would be a miracle worth crashing on.
        panic!("arbitrary ciphertext opened successfully");
    }
});
