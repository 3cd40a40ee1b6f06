//! Fuzz target for seal/open symmetry
//!
//! # Strategy
//!
//! - Correctly sized keys and IVs, arbitrary contents
//! - Arbitrary plaintexts and sequence numbers
//! - One tamper bit applied to a copy of the sealed record
//!
//! # Invariants
//!
//! - `open(seal(x)) == x` for every well-formed input
//! - Any single flipped bit fails authentication
//! - Sealed length is always plaintext length plus the tag

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tandem_crypto::{AeadAlgorithm, ContentType, ProtocolVersion, open_record, seal_record};

#[derive(Debug, Arbitrary)]
struct RoundTripInput {
    algorithm_selector: u8,
    key_seed: [u8; 32],
    iv_seed: [u8; 12],
    sequence_number: u64,
    plaintext: Vec<u8>,
    tamper_bit: usize,
}

fuzz_target!(|input: RoundTripInput| {
    let algorithm = match input.algorithm_selector % 4 {
        0 => AeadAlgorithm::Aes128Gcm,
        1 => AeadAlgorithm::Aes256Gcm,
        2 => AeadAlgorithm::Aes128Ccm,
        _ => AeadAlgorithm::ChaCha20Poly1305,
    };
    if input.plaintext.len() > usize::from(u16::MAX) {
        return;
    }
    let key = &input.key_seed[..algorithm.key_len()];
    let fixed_iv = &input.iv_seed[..algorithm.fixed_iv_len()];

    let sealed = seal_record(
        algorithm,
        key,
        fixed_iv,
        input.sequence_number,
        ContentType::ApplicationData,
        ProtocolVersion::TLS12,
        &input.plaintext,
    )
    .expect("well-formed seal must succeed");
    assert_eq!(sealed.len(), input.plaintext.len() + 16);

    let opened = open_record(
        algorithm,
        key,
        fixed_iv,
        input.sequence_number,
        ContentType::ApplicationData,
        ProtocolVersion::TLS12,
        &sealed,
    )
    .expect("untampered record must open");
    assert_eq!(opened, input.plaintext);

    let mut tampered = sealed;
    let bit = input.tamper_bit % (tampered.len() * 8);
    tampered[bit / 8] ^= 1 << (bit % 8);
    let result = open_record(
        algorithm,
        key,
        fixed_iv,
        input.sequence_number,
        ContentType::ApplicationData,
        ProtocolVersion::TLS12,
        &tampered,
    );
    assert!(result.is_err(), "tampered record must not open");
});
