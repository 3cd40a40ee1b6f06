//! Known-answer conformance tests.
//!
//! Every expected value here was cross-checked against an independent
//! TLS 1.2 implementation before being pinned. These are the tests that
//! catch a construction drifting — a nonce padded on the wrong side, a
//! sequence number left out of the AAD — which otherwise surfaces only as
//! an unexplained handshake failure against a conformant peer.

use hex_literal::hex;
use num_bigint::BigUint;
use tandem_crypto::{
    AeadAlgorithm, ContentType, CryptoError, FinishedLabel, HashAlgorithm, MasterSecret,
    ProtocolVersion, aead, open_record, seal_record, verify_data,
};
use tandem_harness::vectors;

#[test]
fn client_finished_verify_data() {
    let master = MasterSecret::from_bytes(vectors::MASTER_SECRET);
    let computed = verify_data(
        &master,
        FinishedLabel::Client,
        &vectors::HANDSHAKE_HASH,
        HashAlgorithm::Sha256,
    )
    .expect("verify data");
    assert_eq!(computed, vectors::CLIENT_VERIFY_DATA);
}

#[test]
fn server_finished_verify_data() {
    let master = MasterSecret::from_bytes(vectors::MASTER_SECRET);
    let computed = verify_data(
        &master,
        FinishedLabel::Server,
        &vectors::HANDSHAKE_HASH,
        HashAlgorithm::Sha256,
    )
    .expect("verify data");
    assert_eq!(computed, vectors::SERVER_VERIFY_DATA);
}

#[test]
fn chacha_record_seal_reproduces_capture() {
    let sealed = seal_record(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY,
        &vectors::CHACHA_CLIENT_IV,
        0,
        ContentType::Handshake,
        ProtocolVersion::TLS12,
        &vectors::CHACHA_RECORD_PLAINTEXT,
    )
    .expect("seal");
    assert_eq!(sealed, vectors::CHACHA_RECORD_CIPHERTEXT);
}

#[test]
fn chacha_record_open_recovers_capture() {
    let opened = open_record(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY,
        &vectors::CHACHA_CLIENT_IV,
        0,
        ContentType::Handshake,
        ProtocolVersion::TLS12,
        &vectors::CHACHA_RECORD_CIPHERTEXT,
    )
    .expect("open");
    assert_eq!(opened, vectors::CHACHA_RECORD_PLAINTEXT);
}

/// An AAD built without the sequence number (just type, version, length)
/// must not reproduce the captured record.
#[test]
fn chacha_record_rejects_aad_without_sequence() {
    let truncated_aad = [
        ContentType::Handshake.code(),
        3,
        3,
        0,
        vectors::CHACHA_RECORD_PLAINTEXT.len() as u8,
    ];
    // Sequence 0 leaves the nonce equal to the fixed IV, so only the AAD
    // differs between the constructions here.
    let sealed = aead::seal(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY,
        &vectors::CHACHA_CLIENT_IV,
        &truncated_aad,
        &vectors::CHACHA_RECORD_PLAINTEXT,
    )
    .expect("seal");
    assert_ne!(sealed, vectors::CHACHA_RECORD_CIPHERTEXT);
}

/// Skipping the fixed-IV XOR (reusing the raw IV as the nonce for every
/// record) coincides with the correct construction at sequence 0 but
/// diverges from sequence 1 onward.
#[test]
fn chacha_record_rejects_unxored_nonce() {
    let aad_seq1 = tandem_crypto::additional_data(
        1,
        ContentType::Handshake,
        ProtocolVersion::TLS12,
        vectors::CHACHA_RECORD_PLAINTEXT.len() as u16,
    );
    let unxored = aead::seal(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY,
        &vectors::CHACHA_CLIENT_IV,
        &aad_seq1,
        &vectors::CHACHA_RECORD_PLAINTEXT,
    )
    .expect("seal");

    let correct = seal_record(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY,
        &vectors::CHACHA_CLIENT_IV,
        1,
        ContentType::Handshake,
        ProtocolVersion::TLS12,
        &vectors::CHACHA_RECORD_PLAINTEXT,
    )
    .expect("seal");

    assert_ne!(unxored, correct);
}

#[test]
fn aes_ccm_seal_reproduces_vector() {
    let sealed = aead::seal(
        AeadAlgorithm::Aes128Ccm,
        &vectors::CCM_KEY,
        &vectors::CCM_NONCE,
        &vectors::CCM_AAD,
        &vectors::CCM_PLAINTEXT,
    )
    .expect("seal");
    assert_eq!(sealed, vectors::CCM_CIPHERTEXT);
}

#[test]
fn aes_ccm_open_recovers_vector() {
    let opened = aead::open(
        AeadAlgorithm::Aes128Ccm,
        &vectors::CCM_KEY,
        &vectors::CCM_NONCE,
        &vectors::CCM_AAD,
        &vectors::CCM_CIPHERTEXT,
    )
    .expect("open");
    assert_eq!(opened, vectors::CCM_PLAINTEXT);
}

/// The AES salt path: a 4-byte salt widens so the record nonce becomes
/// `salt ++ seq`.
#[test]
fn aes_gcm_record_vector() {
    let sealed = seal_record(
        AeadAlgorithm::Aes128Gcm,
        &hex!("0102030405060708090a0b0c0d0e0f10"),
        &hex!("a1a2a3a4"),
        1,
        ContentType::ApplicationData,
        ProtocolVersion::TLS12,
        b"hello",
    )
    .expect("seal");
    assert_eq!(sealed, hex!("420f82b30d467583ff037dd559587a5958fd9e1d49"));
}

#[test]
fn pss_encode_reproduces_vector() {
    let encoded = tandem_crypto::encode_pss(
        &vectors::PSS_DIGEST,
        vectors::PSS_EM_BITS,
        vectors::PSS_HASH,
        &vectors::PSS_SALT,
    )
    .expect("encode");
    assert_eq!(encoded, vectors::PSS_ENCODED);
}

#[test]
fn pss_sign_reproduces_vector() {
    let key = vectors::signing_key().expect("captured key is consistent");
    let signature = key
        .sign_pss(&vectors::PSS_DIGEST, vectors::PSS_HASH, &vectors::PSS_SALT)
        .expect("sign");
    assert_eq!(signature, vectors::PSS_SIGNATURE);
}

/// The signature must verify as `s^e mod n == EM`, tying the CRT private
/// operation back to the plain RSA equation.
#[test]
fn pss_signature_verifies_against_public_key() {
    let key = vectors::signing_key().expect("captured key is consistent");
    let signature = BigUint::from_bytes_be(&vectors::PSS_SIGNATURE);
    let recovered = signature.modpow(key.public_exponent(), key.modulus());
    assert_eq!(recovered, BigUint::from_bytes_be(&vectors::PSS_ENCODED));
}

#[test]
fn seal_is_deterministic() {
    let once = seal_record(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY,
        &vectors::CHACHA_CLIENT_IV,
        7,
        ContentType::ApplicationData,
        ProtocolVersion::TLS12,
        b"identical inputs, identical bytes",
    )
    .expect("seal");
    let twice = seal_record(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY,
        &vectors::CHACHA_CLIENT_IV,
        7,
        ContentType::ApplicationData,
        ProtocolVersion::TLS12,
        b"identical inputs, identical bytes",
    )
    .expect("seal");
    assert_eq!(once, twice);
}

#[test]
fn verify_data_mismatch_is_detected() {
    let master = MasterSecret::from_bytes(vectors::MASTER_SECRET);
    let computed = verify_data(
        &master,
        FinishedLabel::Client,
        &vectors::HANDSHAKE_HASH,
        HashAlgorithm::Sha256,
    )
    .expect("verify data");

    let mut tampered = vectors::CLIENT_VERIFY_DATA;
    tampered[0] ^= 0x01;
    assert!(tandem_crypto::verify_data_matches(&computed, &vectors::CLIENT_VERIFY_DATA));
    assert!(!tandem_crypto::verify_data_matches(&computed, &tampered));
}

#[test]
fn configuration_errors_are_distinct_from_authentication() {
    let err = seal_record(
        AeadAlgorithm::ChaCha20Poly1305,
        &vectors::CHACHA_CLIENT_KEY[..16],
        &vectors::CHACHA_CLIENT_IV,
        0,
        ContentType::Handshake,
        ProtocolVersion::TLS12,
        b"x",
    )
    .unwrap_err();
    assert!(!err.is_authentication_failure());
    assert!(matches!(err, CryptoError::InvalidKeyLength { .. }));
}
