//! Pinned inputs and expected outputs for conformance checks.
//!
//! The interop vectors were captured while debugging a TLS 1.2 handshake
//! between two unrelated stacks: every input byte here was observed on a
//! real session, and the expected outputs were confirmed against an
//! independent implementation before being pinned. A conformant core must
//! reproduce them exactly; a peer that disagrees is the party in error.

use hex_literal::hex;
use num_bigint::BigUint;
use tandem_crypto::{CryptoError, HashAlgorithm, RsaPrivateKey};

/// Master secret from a captured ECDHE-RSA-CHACHA20-POLY1305 session.
pub const MASTER_SECRET: [u8; 48] = hex!(
    "0d36cc66603f174aa02ac40bc0b9409c"
    "0d36cc66603f174aa02ac40bc0b9409c"
    "0d36cc66603f174aa02ac40bc0b9409c"
);

/// SHA-256 handshake hash at the point the client Finished was computed.
pub const HANDSHAKE_HASH: [u8; 32] =
    hex!("c9aa1a577adc995f6ceac734fa496a69dcc3dc26840725071101a82705142421");

/// Expected `"client finished"` verify data for the session above.
pub const CLIENT_VERIFY_DATA: [u8; 12] = hex!("19c4bb77418c53a177b75046");

/// Expected `"server finished"` verify data for the session above.
pub const SERVER_VERIFY_DATA: [u8; 12] = hex!("3a82a37e9073447d0001104d");

/// Client write key from the same captured session.
pub const CHACHA_CLIENT_KEY: [u8; 32] =
    hex!("ec05072843de41459c435ff241b367045950d210a1d32d74a1089d862c9985a8");

/// Client write IV (fixed nonce) from the same captured session.
pub const CHACHA_CLIENT_IV: [u8; 12] = hex!("3dfa0141ec769e5b7fef64c4");

/// The client Finished handshake message, in the clear.
pub const CHACHA_RECORD_PLAINTEXT: [u8; 16] = hex!("1400000c31bbf9d6680e909120cdbfd2");

/// Sealed client Finished record: sequence 0, content type handshake,
/// version (3, 3). Ciphertext with the 16-byte tag appended.
pub const CHACHA_RECORD_CIPHERTEXT: [u8; 32] =
    hex!("2c717d02ff6fd05bd69c892268ff8b7ba2899e526a996c7e791e0fe11b56d88b");

/// AES-128-CCM key for the raw AEAD vector.
pub const CCM_KEY: [u8; 16] = hex!("feffe9928665731c6d6a8f9467308308");

/// Nonce for the raw AES-CCM vector.
pub const CCM_NONCE: [u8; 12] = hex!("cafebabefacedbaddecaf888");

/// Associated data for the raw AES-CCM vector.
pub const CCM_AAD: [u8; 20] = hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2");

/// Plaintext for the raw AES-CCM vector.
pub const CCM_PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52eff69f2445df4f9b17ad2b4179e66c3710"
);

/// Expected AES-CCM ciphertext plus tag.
pub const CCM_CIPHERTEXT: [u8; 80] = hex!(
    "ba63658c478c1969bc9343f277d63f8c8c11d39972955a61171046b735170114"
    "ab0b12034b456c79426f4adaaac0a927b3d512a21f462c8e04f57bfafd4efee2"
    "4fe5a05a438e82ef7f914a7592cbb3db"
);

/// Message whose SHA-1 digest feeds the PSS encoding vector.
pub const PSS_MESSAGE: [u8; 129] = hex!(
    "c7f5270fca72725f9bd19f519a8d7cca3cc5c079024029f3bae510f9b02140fe"
    "238908e4f6c18f07a89c687c8684669b1f1db2baf9251a3c829faccb493084e1"
    "6ec9e28d58868074a5d6221667dd6e528d16fe2c9f3db4cfaf6c4dce8c8439af"
    "38ceaaaa9ce2ecae7bc8f4a5a55e3bf96df9cd575c4f9cb327951b8cdfe40871"
    "68"
);

/// `SHA-1(PSS_MESSAGE)`, the digest actually fed to the encoder.
pub const PSS_DIGEST: [u8; 20] = hex!("c3feeccb90905924e59268aaf65a287443db038c");

/// Pinned 10-byte salt for the PSS vectors.
pub const PSS_SALT: [u8; 10] = hex!("11223344555432167890");

/// Encoded-message bit length for the PSS vectors (modulus bits minus 1).
pub const PSS_EM_BITS: usize = 1023;

/// Expected EMSA-PSS encoding of `SHA-1(PSS_MESSAGE)` with the pinned
/// salt.
pub const PSS_ENCODED: [u8; 128] = hex!(
    "48e1169c28ca5c9ee0b75d46fc4aa3976e43eb99dd7ad1c769bdc7f8439241e9"
    "7e5f6bf83cf66c791f53ec516189ff2a6a94a5a52b1a40941ff7151a129eb6b8"
    "81324f7b0910591012684751d7ceb04cf91a59123d97f0cfde9785c74b778572"
    "40d294a0e03915ac7e63767082ce7297c8d326b57c6ec1257b05669f4fb9edbc"
);

/// Expected RSASSA-PSS signature over the encoding above, produced with
/// [`signing_key`].
pub const PSS_SIGNATURE: [u8; 128] = hex!(
    "375957b8c06e5e2480d85a7f64cc5f8135c8c160c2acaba7145022c8385542c6"
    "e211331b9250dd8cfe160663c001dad57af51f2b2a1964b02fbcddfe7a277f51"
    "d6ca2abfd4900364fc991b9e4b995dd2e40bff3a41a6fdb849c8162fd0015f87"
    "7e7be857284609dea026879b45f2ad9d7101b1b107815d9818d162ab6816eefc"
);

/// The captured 1024-bit signing key, assembled from its components.
pub fn signing_key() -> Result<RsaPrivateKey, CryptoError> {
    let n = BigUint::parse_bytes(
        b"a8d68acd413c5e195d5ef04e1b4faaf242365cb450196755e92e1215ba59802a\
          afbadbf2564dd550956abb54f8b1c917844e5f36195d1088c600e07cada5c080\
          ede679f50b3de32cf4026e514542495c54b1903768791aae9e36f082cd38e941\
          ada89baecada61ab0dd37ad536bcb0a0946271594836e92ab5517301d45176b5",
        16,
    );
    let d = BigUint::parse_bytes(
        b"1c23c1cce034ba598f8fd2b7af37f1d30b090f7362aee68e5187adae49b9955c\
          729f24a863b7a38d6e3c748e2972f6d940b7ba89043a2d6c2100256a1cf0f56a\
          8cd35fc6ee205244876642f6f9c3820a3d9d2c8921df7d82aaadcaf2d7334d39\
          8931ddbba553190b3a416099f3aa07fd5b26214645a828419e122cfb857ad73b",
        16,
    );
    let p = BigUint::parse_bytes(
        b"c107a2fe924b76e206cb9bc4af2ab7008547c00846bf6d0680b3eac3ebcbd0c7\
          fd7a54c2b9899b08f80cde1d3691eaaa2816b1eb11822d6be7beaf4e30977c49",
        16,
    );
    let q = BigUint::parse_bytes(
        b"dfea984ce4307eafc0d140c2bb82861e5dbac4f8567cbc981d70440dd6394920\
          79031486315e305eb83e591c4a2e96064966f7c894c3ca351925b5ce82d8ef0d",
        16,
    );
    let (Some(n), Some(d), Some(p), Some(q)) = (n, d, p, q) else {
        return Err(CryptoError::InvalidKeyComponents { reason: "malformed hex component" });
    };
    RsaPrivateKey::from_components(n, BigUint::from(3u8), d, p, q)
}

/// The hash algorithm the PSS vectors were captured with.
pub const PSS_HASH: HashAlgorithm = HashAlgorithm::Sha1;
