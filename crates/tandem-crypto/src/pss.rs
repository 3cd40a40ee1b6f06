//! EMSA-PSS encoding (RFC 8017, section 9.1.1).
//!
//! The salt is always caller-supplied. Production signing draws it from a
//! CSPRNG at the call site; conformance tests pin it, which makes the
//! whole encoding — and therefore the RSA signature over it — a
//! reproducible function of its inputs. There is no process-wide hook to
//! swap randomness sources.

use crate::error::CryptoError;
use crate::hash::HashAlgorithm;

/// PSS trailer byte.
const TRAILER: u8 = 0xBC;

/// Encode a message digest into an `emBits`-bit EMSA-PSS block.
///
/// ```text
/// M' = 0x00 * 8 ++ mHash ++ salt
/// H  = Hash(M')
/// DB = PS ++ 0x01 ++ salt          (PS = zero padding)
/// EM = (DB xor MGF1(H)) ++ H ++ 0xBC,  top (8*emLen - emBits) bits cleared
/// ```
///
/// # Errors
///
/// - [`CryptoError::DigestLengthMismatch`] if `message_digest` is not the
///   output length of `hash`
/// - [`CryptoError::PssDoesNotFit`] if `emLen < hLen + saltLen + 2`; the
///   salt is never truncated to fit
pub fn encode_pss(
    message_digest: &[u8],
    em_bits: usize,
    hash: HashAlgorithm,
    salt: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let h_len = hash.output_len();
    if message_digest.len() != h_len {
        return Err(CryptoError::DigestLengthMismatch {
            algorithm: hash,
            expected: h_len,
            got: message_digest.len(),
        });
    }

    let em_len = em_bits.div_ceil(8);
    if em_len < h_len + salt.len() + 2 {
        return Err(CryptoError::PssDoesNotFit { em_bits });
    }

    let h = hash.digest_parts(&[&[0u8; 8], message_digest, salt]);

    // DB = PS ++ 0x01 ++ salt, masked by MGF1(H).
    let db_len = em_len - h_len - 1;
    let mut db = vec![0u8; db_len];
    let ps_len = db_len - salt.len() - 1;
    db[ps_len] = 0x01;
    db[ps_len + 1..].copy_from_slice(salt);

    for (db_byte, mask_byte) in db.iter_mut().zip(mgf1(hash, &h, db_len)) {
        *db_byte ^= mask_byte;
    }

    // Clear the bits that overhang emBits.
    db[0] &= 0xFF >> (8 * em_len - em_bits);

    let mut em = db;
    em.extend_from_slice(&h);
    em.push(TRAILER);
    Ok(em)
}

/// MGF1: counter-mode expansion of `seed` with the given hash.
fn mgf1(hash: HashAlgorithm, seed: &[u8], mask_len: usize) -> Vec<u8> {
    let h_len = hash.output_len();
    let mut mask = Vec::with_capacity(mask_len.next_multiple_of(h_len));
    for counter in 0..mask_len.div_ceil(h_len) {
        let counter = u32::try_from(counter).unwrap_or(u32::MAX).to_be_bytes();
        mask.extend_from_slice(&hash.digest_parts(&[seed, &counter]));
    }
    mask.truncate(mask_len);
    mask
}
