//! Passphrase wrapper type.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum passphrase length, in bytes, expected when creating new
/// ciphertext. The engine does not reject shorter passphrases so that
/// values encrypted under legacy passphrases stay readable; the CLI
/// enforces the minimum at the prompt instead.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// An immutable passphrase, held for the lifetime of a [`Pbe`] engine.
///
/// The bytes are wiped from memory on drop and never shown by `Debug`.
///
/// [`Pbe`]: crate::pbe::Pbe
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase {
    bytes: Vec<u8>,
}

impl Passphrase {
    /// Wrap passphrase text.
    pub fn new(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// Access the raw passphrase bytes (e.g. to feed the KDF).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl From<&str> for Passphrase {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_bytes() {
        let p = Passphrase::new("hunter2hunter2");
        let rendered = format!("{p:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("REDACTED"));
    }
}
