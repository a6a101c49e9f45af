use std::fmt;

use zeroize::Zeroize;

/// An owned secret buffer that is zeroized when released.
///
/// `Secret` is deliberately not `Clone`, and its `Debug` output is redacted
/// so the password can never leak through logging or error formatting.
///
/// Zeroize-on-drop shrinks the window the secret spends in addressable
/// memory; it cannot reach copies made before construction (terminal
/// buffers, allocator reallocation, swap).
pub struct Secret {
    bytes: Vec<u8>,
    #[cfg(test)]
    wipe_witness: Option<std::sync::Arc<std::sync::atomic::AtomicBool>>,
}

impl Secret {
    /// Takes ownership of the secret string, reusing its allocation.
    pub fn new(secret: String) -> Self {
        Self::from_bytes(secret.into_bytes())
    }

    /// Takes ownership of a raw secret buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            #[cfg(test)]
            wipe_witness: None,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Builds a secret whose drop sets `witness`, letting tests observe
    /// when the buffer was wiped relative to other events.
    #[cfg(test)]
    pub(crate) fn with_wipe_witness(
        secret: &str,
        witness: std::sync::Arc<std::sync::atomic::AtomicBool>,
    ) -> Self {
        Self {
            bytes: secret.as_bytes().to_vec(),
            wipe_witness: Some(witness),
        }
    }
}

impl From<String> for Secret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.bytes.zeroize();

        #[cfg(test)]
        if let Some(witness) = &self.wipe_witness {
            witness.store(true, std::sync::atomic::Ordering::SeqCst);
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}
