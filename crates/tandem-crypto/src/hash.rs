//! Digest and HMAC dispatch over the hash algorithms this core uses.

use std::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384};

/// Hash algorithms used by the PRF, the transcript, and the PSS encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1 (20-byte output). Legacy signature hashing only; never a PRF
    /// hash.
    Sha1,
    /// SHA-256 (32-byte output).
    Sha256,
    /// SHA-384 (48-byte output).
    Sha384,
}

/// HMAC dispatch. A macro rather than a generic function: spelling out the
/// `Hmac<D>` trait bounds is noisier than three monomorphic arms.
macro_rules! hmac_parts {
    ($digest:ty, $key:expr, $parts:expr) => {{
        let Ok(mut mac) = <Hmac<$digest> as Mac>::new_from_slice($key) else {
            // HMAC accepts keys of any length.
            unreachable!()
        };
        for part in $parts {
            mac.update(part);
        }
        mac.finalize().into_bytes().to_vec()
    }};
}

impl HashAlgorithm {
    /// Digest output size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
        }
    }

    /// Canonical algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
        }
    }

    /// True for the hashes TLS 1.2 admits as PRF hashes.
    pub const fn is_prf_hash(self) -> bool {
        matches!(self, Self::Sha256 | Self::Sha384)
    }

    /// Hash the concatenation of `parts`.
    pub(crate) fn digest_parts(self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            Self::Sha1 => digest_parts::<Sha1>(parts),
            Self::Sha256 => digest_parts::<Sha256>(parts),
            Self::Sha384 => digest_parts::<Sha384>(parts),
        }
    }

    /// HMAC over the concatenation of `parts`.
    pub(crate) fn hmac_parts(self, key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
        match self {
            Self::Sha1 => hmac_parts!(Sha1, key, parts),
            Self::Sha256 => hmac_parts!(Sha256, key, parts),
            Self::Sha384 => hmac_parts!(Sha384, key, parts),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn digest_parts<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().to_vec()
}
