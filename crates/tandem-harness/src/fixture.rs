//! Full derived session for pipeline tests.
//!
//! Builds everything a live connection would hold after `ChangeCipherSpec`:
//! the key block expanded from the master secret and both record cipher
//! directions, each instantiated twice (the sender's copy and the
//! receiver's copy) so tests can push records across an imaginary wire.

use tandem_crypto::{
    AeadAlgorithm, CryptoError, HashAlgorithm, KeyBlock, MasterSecret, RANDOM_LEN, RecordCipher,
    derive_key_block,
};

/// A sealer and an opener over the same key and fixed IV — the two ends of
/// one direction of a connection.
pub struct DirectionPair {
    /// The sending side's cipher.
    pub sealer: RecordCipher,
    /// The receiving side's cipher.
    pub opener: RecordCipher,
}

/// Both directions of a derived session.
pub struct SessionFixture {
    /// Key block the directions were sliced from.
    pub key_block: KeyBlock,
    /// Client-to-server direction (client write key and IV).
    pub client_to_server: DirectionPair,
    /// Server-to-client direction (server write key and IV).
    pub server_to_client: DirectionPair,
}

impl SessionFixture {
    /// Derive a session exactly as both endpoints would.
    pub fn derive(
        master_secret: &MasterSecret,
        client_random: &[u8; RANDOM_LEN],
        server_random: &[u8; RANDOM_LEN],
        algorithm: AeadAlgorithm,
        prf_hash: HashAlgorithm,
    ) -> Result<Self, CryptoError> {
        let key_block =
            derive_key_block(master_secret, client_random, server_random, algorithm, prf_hash)?;

        let client_to_server = DirectionPair {
            sealer: RecordCipher::new(
                algorithm,
                &key_block.client_write_key,
                &key_block.client_write_iv,
            )?,
            opener: RecordCipher::new(
                algorithm,
                &key_block.client_write_key,
                &key_block.client_write_iv,
            )?,
        };
        let server_to_client = DirectionPair {
            sealer: RecordCipher::new(
                algorithm,
                &key_block.server_write_key,
                &key_block.server_write_iv,
            )?,
            opener: RecordCipher::new(
                algorithm,
                &key_block.server_write_key,
                &key_block.server_write_iv,
            )?,
        };

        Ok(Self { key_block, client_to_server, server_to_client })
    }
}
