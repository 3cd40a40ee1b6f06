//! Property-based tests for record protection.
//!
//! Three properties hold for every suite, key, sequence number, and
//! payload: sealing then opening is the identity, identical inputs give
//! identical bytes, and flipping any single bit of the ciphertext or any
//! field of the additional data makes the open fail authentication.

use proptest::prelude::*;
use tandem_crypto::{
    AeadAlgorithm, ContentType, CryptoError, ProtocolVersion, open_record, seal_record,
};

fn algorithm() -> impl Strategy<Value = AeadAlgorithm> {
    prop_oneof![
        Just(AeadAlgorithm::Aes128Gcm),
        Just(AeadAlgorithm::Aes256Gcm),
        Just(AeadAlgorithm::Aes128Ccm),
        Just(AeadAlgorithm::ChaCha20Poly1305),
    ]
}

fn content_type() -> impl Strategy<Value = ContentType> {
    prop_oneof![
        Just(ContentType::ChangeCipherSpec),
        Just(ContentType::Alert),
        Just(ContentType::Handshake),
        Just(ContentType::ApplicationData),
    ]
}

/// An algorithm with a correctly sized key and fixed IV.
fn keyed_algorithm() -> impl Strategy<Value = (AeadAlgorithm, Vec<u8>, Vec<u8>)> {
    algorithm().prop_flat_map(|algorithm| {
        (
            Just(algorithm),
            proptest::collection::vec(any::<u8>(), algorithm.key_len()),
            proptest::collection::vec(any::<u8>(), algorithm.fixed_iv_len()),
        )
    })
}

proptest! {
    #[test]
    fn seal_open_round_trip(
        (algorithm, key, iv) in keyed_algorithm(),
        seq in any::<u64>(),
        content_type in content_type(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let sealed = seal_record(
            algorithm, &key, &iv, seq, content_type, ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");
        prop_assert_eq!(sealed.len(), plaintext.len() + 16);

        let opened = open_record(
            algorithm, &key, &iv, seq, content_type, ProtocolVersion::TLS12, &sealed,
        ).expect("open");
        prop_assert_eq!(opened, plaintext);
    }

    #[test]
    fn seal_is_deterministic(
        (algorithm, key, iv) in keyed_algorithm(),
        seq in any::<u64>(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let first = seal_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");
        let second = seal_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn any_flipped_ciphertext_bit_fails_authentication(
        (algorithm, key, iv) in keyed_algorithm(),
        seq in any::<u64>(),
        plaintext in proptest::collection::vec(any::<u8>(), 1..256),
        bit in any::<usize>(),
    ) {
        let mut sealed = seal_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");

        let bit = bit % (sealed.len() * 8);
        sealed[bit / 8] ^= 1 << (bit % 8);

        let result = open_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &sealed,
        );
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn wrong_sequence_number_fails_authentication(
        (algorithm, key, iv) in keyed_algorithm(),
        seq in 0..u64::MAX - 1,
        offset in 1..1000u64,
        plaintext in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let sealed = seal_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");

        let result = open_record(
            algorithm, &key, &iv, seq.wrapping_add(offset), ContentType::ApplicationData,
            ProtocolVersion::TLS12, &sealed,
        );
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn wrong_content_type_fails_authentication(
        (algorithm, key, iv) in keyed_algorithm(),
        seq in any::<u64>(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let sealed = seal_record(
            algorithm, &key, &iv, seq, ContentType::Handshake,
            ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");

        let result = open_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &sealed,
        );
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn wrong_version_fails_authentication(
        (algorithm, key, iv) in keyed_algorithm(),
        seq in any::<u64>(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let sealed = seal_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");

        // TLS 1.1 in the AAD.
        let result = open_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion { major: 3, minor: 2 }, &sealed,
        );
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn wrong_key_fails_authentication(
        (algorithm, key, iv) in keyed_algorithm(),
        seq in any::<u64>(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..128),
        flip in any::<u8>(),
    ) {
        let sealed = seal_record(
            algorithm, &key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &plaintext,
        ).expect("seal");

        let mut wrong_key = key.clone();
        wrong_key[0] ^= flip | 1;

        let result = open_record(
            algorithm, &wrong_key, &iv, seq, ContentType::ApplicationData,
            ProtocolVersion::TLS12, &sealed,
        );
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }
}
