//! Fuzz target for the EMSA-PSS encoder
//!
//! # Strategy
//!
//! - Arbitrary digest and salt lengths, including mismatched and
//!   oversized ones
//! - Bit lengths from degenerate to oversized
//!
//! # Invariants
//!
//! - NEVER panic
//! - Successful encodings are exactly `ceil(emBits / 8)` bytes and end
//!   with the 0xBC trailer
//! - A salt that does not fit is an error, never truncated

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tandem_crypto::{HashAlgorithm, encode_pss};

#[derive(Debug, Arbitrary)]
struct EncodeInput {
    hash_selector: u8,
    digest: Vec<u8>,
    em_bits: u16,
    salt: Vec<u8>,
}

fuzz_target!(|input: EncodeInput| {
    let hash = match input.hash_selector % 3 {
        0 => HashAlgorithm::Sha1,
        1 => HashAlgorithm::Sha256,
        _ => HashAlgorithm::Sha384,
    };
    let em_bits = usize::from(input.em_bits);

    match encode_pss(&input.digest, em_bits, hash, &input.salt) {
        Ok(encoded) => {
            assert_eq!(encoded.len(), em_bits.div_ceil(8));
            assert_eq!(encoded.last().copied(), Some(0xBC));
            assert_eq!(input.digest.len(), hash.output_len());
            assert!(encoded.len() >= hash.output_len() + input.salt.len() + 2);
        }
        Err(error) => {
            assert!(!error.is_authentication_failure());
        }
    }
});
