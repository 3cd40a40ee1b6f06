//! TLS 1.2 PRF and key derivation (RFC 5246, section 5).
//!
//! The PRF is `P_hash(secret, label ++ seed)` where `P_hash` is an
//! HMAC-based expansion over a single hash — SHA-256 or SHA-384 depending
//! on the cipher suite, never the MD5/SHA-1 mix of earlier TLS versions:
//!
//! ```text
//! A(0) = label ++ seed
//! A(i) = HMAC(secret, A(i-1))
//! P_hash = HMAC(secret, A(1) ++ label ++ seed) ++
//!          HMAC(secret, A(2) ++ label ++ seed) ++ ...
//! ```
//!
//! Everything in this module is a pure function of its byte inputs. Given
//! the same master secret, randoms, and hash, two independent stacks must
//! derive bit-identical key blocks — that equality is the interoperability
//! contract, and there is no error signal when it is violated: mismatched
//! sizing silently yields wrong keys and a failed Finished check later.

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::aead::AeadAlgorithm;
use crate::error::CryptoError;
use crate::hash::HashAlgorithm;

/// Master secret length fixed by the protocol.
pub const MASTER_SECRET_LEN: usize = 48;

/// Length of the client and server hello randoms.
pub const RANDOM_LEN: usize = 32;

/// Finished-message verify data length for TLS 1.2.
pub const VERIFY_DATA_LEN: usize = 12;

/// The 48-byte TLS 1.2 master secret.
///
/// Opaque to this core: the key exchange producing it lives elsewhere.
/// Zeroed on drop; `Debug` never prints the bytes; equality is
/// constant-time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterSecret([u8; MASTER_SECRET_LEN]);

impl PartialEq for MasterSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for MasterSecret {}

impl MasterSecret {
    /// Wrap an established master secret.
    pub fn from_bytes(bytes: [u8; MASTER_SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw secret, for use as PRF input.
    pub fn as_bytes(&self) -> &[u8; MASTER_SECRET_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MasterSecret(<redacted 48 bytes>)")
    }
}

/// Key material expanded from the master secret, in derivation order.
///
/// AEAD suites carry no MAC keys: the block is
/// `client_write_key ++ server_write_key ++ client_write_iv ++
/// server_write_iv`, sized per suite.
#[derive(Clone)]
pub struct KeyBlock {
    /// Key protecting client-to-server records.
    pub client_write_key: Zeroizing<Vec<u8>>,
    /// Key protecting server-to-client records.
    pub server_write_key: Zeroizing<Vec<u8>>,
    /// Fixed IV (nonce salt) for the client-to-server direction.
    pub client_write_iv: Zeroizing<Vec<u8>>,
    /// Fixed IV (nonce salt) for the server-to-client direction.
    pub server_write_iv: Zeroizing<Vec<u8>>,
}

impl std::fmt::Debug for KeyBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBlock")
            .field("client_write_key", &format!("<redacted {} bytes>", self.client_write_key.len()))
            .field("server_write_key", &format!("<redacted {} bytes>", self.server_write_key.len()))
            .field("client_write_iv", &format!("<redacted {} bytes>", self.client_write_iv.len()))
            .field("server_write_iv", &format!("<redacted {} bytes>", self.server_write_iv.len()))
            .finish()
    }
}

/// Which side's Finished message a verify-data computation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishedLabel {
    /// `"client finished"`
    Client,
    /// `"server finished"`
    Server,
}

impl FinishedLabel {
    /// The ASCII label, no terminator.
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Client => b"client finished",
            Self::Server => b"server finished",
        }
    }
}

/// The TLS 1.2 PRF.
///
/// Returns exactly `output_len` bytes, truncating the final HMAC block.
///
/// # Errors
///
/// - [`CryptoError::UnsupportedPrfHash`] unless `hash` is SHA-256 or
///   SHA-384
/// - [`CryptoError::InvalidOutputLength`] for `output_len == 0`
pub fn prf(
    secret: &[u8],
    label: &[u8],
    seed: &[u8],
    output_len: usize,
    hash: HashAlgorithm,
) -> Result<Vec<u8>, CryptoError> {
    if !hash.is_prf_hash() {
        return Err(CryptoError::UnsupportedPrfHash { algorithm: hash });
    }
    if output_len == 0 {
        return Err(CryptoError::InvalidOutputLength);
    }

    let mut label_seed = Vec::with_capacity(label.len() + seed.len());
    label_seed.extend_from_slice(label);
    label_seed.extend_from_slice(seed);

    // A(1) = HMAC(secret, A(0)), A(0) = label ++ seed
    let mut a = hash.hmac_parts(secret, &[&label_seed]);

    let mut output = Vec::with_capacity(output_len.next_multiple_of(hash.output_len()));
    while output.len() < output_len {
        output.extend_from_slice(&hash.hmac_parts(secret, &[&a, &label_seed]));
        a = hash.hmac_parts(secret, &[&a]);
    }
    a.zeroize();
    output.truncate(output_len);
    Ok(output)
}

/// Derive the master secret from the premaster secret.
///
/// `PRF(premaster, "master secret", client_random ++ server_random)[0..48]`
pub fn derive_master_secret(
    premaster_secret: &[u8],
    client_random: &[u8; RANDOM_LEN],
    server_random: &[u8; RANDOM_LEN],
    hash: HashAlgorithm,
) -> Result<MasterSecret, CryptoError> {
    let mut seed = [0u8; 2 * RANDOM_LEN];
    seed[..RANDOM_LEN].copy_from_slice(client_random);
    seed[RANDOM_LEN..].copy_from_slice(server_random);

    let expanded = Zeroizing::new(prf(
        premaster_secret,
        b"master secret",
        &seed,
        MASTER_SECRET_LEN,
        hash,
    )?);
    let mut bytes = [0u8; MASTER_SECRET_LEN];
    bytes.copy_from_slice(&expanded);
    Ok(MasterSecret::from_bytes(bytes))
}

/// Expand the master secret into per-direction keys and fixed IVs.
///
/// Label `"key expansion"`; the seed is `server_random ++ client_random` —
/// reversed relative to master-secret derivation, a protocol quirk both
/// sides must reproduce exactly.
pub fn derive_key_block(
    master_secret: &MasterSecret,
    client_random: &[u8; RANDOM_LEN],
    server_random: &[u8; RANDOM_LEN],
    algorithm: AeadAlgorithm,
    hash: HashAlgorithm,
) -> Result<KeyBlock, CryptoError> {
    let mut seed = [0u8; 2 * RANDOM_LEN];
    seed[..RANDOM_LEN].copy_from_slice(server_random);
    seed[RANDOM_LEN..].copy_from_slice(client_random);

    let key_len = algorithm.key_len();
    let iv_len = algorithm.fixed_iv_len();
    let block = Zeroizing::new(prf(
        master_secret.as_bytes(),
        b"key expansion",
        &seed,
        2 * (key_len + iv_len),
        hash,
    )?);

    let (keys, ivs) = block.split_at(2 * key_len);
    let (client_key, server_key) = keys.split_at(key_len);
    let (client_iv, server_iv) = ivs.split_at(iv_len);

    tracing::debug!(cipher = %algorithm, prf = %hash, "derived key block");

    Ok(KeyBlock {
        client_write_key: Zeroizing::new(client_key.to_vec()),
        server_write_key: Zeroizing::new(server_key.to_vec()),
        client_write_iv: Zeroizing::new(client_iv.to_vec()),
        server_write_iv: Zeroizing::new(server_iv.to_vec()),
    })
}

/// Compute Finished-message verify data.
///
/// `transcript_digest` is the handshake hash up to, but not including, the
/// Finished message being computed. The peer's copy of the result either
/// matches bit-for-bit or the handshake is dead.
pub fn verify_data(
    master_secret: &MasterSecret,
    label: FinishedLabel,
    transcript_digest: &[u8],
    hash: HashAlgorithm,
) -> Result<[u8; VERIFY_DATA_LEN], CryptoError> {
    let expanded = prf(
        master_secret.as_bytes(),
        label.as_bytes(),
        transcript_digest,
        VERIFY_DATA_LEN,
        hash,
    )?;
    let mut out = [0u8; VERIFY_DATA_LEN];
    out.copy_from_slice(&expanded);
    Ok(out)
}

/// Constant-time comparison of verify data (or any two byte strings).
///
/// Unequal lengths compare unequal without leaking a timing difference on
/// the contents.
pub fn verify_data_matches(ours: &[u8], theirs: &[u8]) -> bool {
    ours.ct_eq(theirs).into()
}
