//! RSA private-key operation and PSS signing.
//!
//! Just enough RSA for a TLS 1.2 `CertificateVerify`: the private
//! exponentiation, CRT-accelerated from the prime factors, applied to an
//! EMSA-PSS block from [`crate::pss`]. Key generation, public-key
//! encryption, and PKCS#1 v1.5 live elsewhere.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::CryptoError;
use crate::hash::HashAlgorithm;
use crate::pss::encode_pss;

/// An RSA private key held as its multi-precision components.
///
/// Immutable for the signer's lifetime. `p` and `q` must be the prime
/// factors of `n`; the CRT exponents and inverse are precomputed at
/// construction. `Debug` prints only the modulus size.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    n: BigUint,
    e: BigUint,
    d: BigUint,
    p: BigUint,
    q: BigUint,
    d_p: BigUint,
    d_q: BigUint,
    q_inv: BigUint,
}

impl RsaPrivateKey {
    /// Assemble a key from its components, validating consistency.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKeyComponents`] when `p * q != n`, a factor
    /// is too small, or `p` fails the inverse check (e.g. `p == q` or a
    /// composite slipped in).
    pub fn from_components(
        n: BigUint,
        e: BigUint,
        d: BigUint,
        p: BigUint,
        q: BigUint,
    ) -> Result<Self, CryptoError> {
        let two = BigUint::from(2u8);
        if p < two || q < two {
            return Err(CryptoError::InvalidKeyComponents { reason: "prime factor too small" });
        }
        if &p * &q != n {
            return Err(CryptoError::InvalidKeyComponents { reason: "p * q != n" });
        }

        let one = BigUint::one();
        let d_p = &d % (&p - &one);
        let d_q = &d % (&q - &one);
        // p prime: q^(p-2) mod p is the inverse of q mod p.
        let q_inv = q.modpow(&(&p - &two), &p);
        if (&q_inv * &q) % &p != one {
            return Err(CryptoError::InvalidKeyComponents { reason: "q has no inverse mod p" });
        }

        Ok(Self { n, e, d, p, q, d_p, d_q, q_inv })
    }

    /// Modulus size in bits.
    pub fn modulus_bits(&self) -> usize {
        usize::try_from(self.n.bits()).unwrap_or(usize::MAX)
    }

    /// Modulus size in bytes; signatures are exactly this long.
    pub fn modulus_len(&self) -> usize {
        self.modulus_bits().div_ceil(8)
    }

    /// Public exponent, for signature verification by tests and peers.
    pub fn public_exponent(&self) -> &BigUint {
        &self.e
    }

    /// Modulus, for signature verification by tests and peers.
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// Sign a message digest under RSASSA-PSS with an explicit salt.
    ///
    /// Encodes at `emBits = modulus_bits - 1` and applies the private
    /// operation. Deterministic for a pinned salt; callers wanting the
    /// probabilistic scheme pass fresh random salt per signature.
    pub fn sign_pss(
        &self,
        message_digest: &[u8],
        hash: HashAlgorithm,
        salt: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let em = encode_pss(message_digest, self.modulus_bits() - 1, hash, salt)?;
        let signature = self.private_op(&BigUint::from_bytes_be(&em));

        // Left-pad to the modulus length.
        let bytes = signature.to_bytes_be();
        let mut out = vec![0u8; self.modulus_len() - bytes.len()];
        out.extend_from_slice(&bytes);
        Ok(out)
    }

    /// `m^d mod n` via the Chinese remainder theorem.
    fn private_op(&self, m: &BigUint) -> BigUint {
        let m1 = (m % &self.p).modpow(&self.d_p, &self.p);
        let m2 = (m % &self.q).modpow(&self.d_q, &self.q);
        // h = qInv * (m1 - m2) mod p, kept non-negative for BigUint.
        let h = (&self.q_inv * ((&m1 + &self.p) - (&m2 % &self.p))) % &self.p;
        &m2 + &self.q * &h
    }
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("modulus_bits", &self.modulus_bits())
            .finish_non_exhaustive()
    }
}
