use sha1::{Digest, Sha1};
use zeroize::Zeroize;

use crate::secret::Secret;
use crate::{PREFIX_LEN, SUFFIX_LEN};

/// Hex lookup table for digest rendering.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// The split SHA1 digest of a secret: a 5-character prefix that may be
/// disclosed to the range API, and a 35-character suffix that never leaves
/// the process.
pub struct SplitDigest {
    prefix: [u8; PREFIX_LEN],
    suffix: [u8; SUFFIX_LEN],
}

impl SplitDigest {
    /// The disclosable prefix, uppercase hex.
    pub fn prefix(&self) -> &str {
        // Written by `split`, always ASCII hex.
        std::str::from_utf8(&self.prefix).unwrap()
    }

    /// The withheld suffix, uppercase hex.
    pub fn suffix(&self) -> &str {
        std::str::from_utf8(&self.suffix).unwrap()
    }
}

/// Computes the uppercase-hex SHA1 digest of `secret` and splits it into
/// the disclosable prefix and the withheld suffix.
///
/// Total over all inputs; the empty secret hashes like any other byte
/// sequence. Deterministic, and retains no reference to the secret. The
/// intermediate contiguous digest is zeroized before this returns, so the
/// full 40-character hash never outlives the call.
pub fn split(secret: &Secret) -> SplitDigest {
    let mut hasher = Sha1::new();
    hasher.update(secret.as_bytes());
    let mut hash: [u8; 20] = hasher.finalize().into();

    let mut hex = [0u8; PREFIX_LEN + SUFFIX_LEN];
    for (i, byte) in hash.iter().enumerate() {
        hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0F) as usize];
    }

    let mut prefix = [0u8; PREFIX_LEN];
    let mut suffix = [0u8; SUFFIX_LEN];
    prefix.copy_from_slice(&hex[..PREFIX_LEN]);
    suffix.copy_from_slice(&hex[PREFIX_LEN..]);

    hash.zeroize();
    hex.zeroize();

    SplitDigest { prefix, suffix }
}
