//! Passphrase-based encryption of configuration values.
//!
//! This module ties the crypto primitives together:
//! - [`envelope`] packs `salt || iv || ciphertext` into a base64 string
//! - [`Pbe`] is an engine instance owning one [`Passphrase`]
//! - the module-level [`init`] / [`encrypt`] / [`decrypt`] /
//!   [`try_decrypt`] functions serve callers that configure a single
//!   process-wide passphrase at startup
//!
//! Encrypted values travel inside otherwise plain configuration wrapped
//! as `ENC(<envelope>)`; [`try_decrypt`] unwraps that form and passes
//! every other string through untouched.

pub mod envelope;
mod passphrase;

pub use passphrase::{Passphrase, MIN_PASSPHRASE_LEN};

use std::sync::OnceLock;

use crate::errors::{EncBoxError, Result};

/// Marker that introduces an encrypted value inside plain configuration.
pub const ENC_PREFIX: &str = "ENC(";

/// Closing marker of an encrypted value.
pub const ENC_SUFFIX: &str = ")";

/// A passphrase-based encryption engine.
///
/// Owns its passphrase for the lifetime of the instance. All operations
/// are pure functions over the passphrase, their input, and OS
/// randomness, so a `Pbe` can be shared across threads freely.
pub struct Pbe {
    passphrase: Passphrase,
}

impl Pbe {
    /// Build an engine around a passphrase.
    pub fn new(passphrase: impl Into<Passphrase>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// Encrypt `plaintext` into a base64 envelope.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        envelope::seal(plaintext, self.passphrase.as_bytes())
    }

    /// Decrypt a base64 envelope back into plaintext.
    pub fn decrypt(&self, sealed: &str) -> Result<String> {
        envelope::open(sealed, self.passphrase.as_bytes())
    }

    /// Decrypt `value` when it is wrapped as `ENC(...)`; return it
    /// unchanged otherwise.
    ///
    /// Lets callers keep a mixture of plain and encrypted values behind
    /// one access path.
    pub fn try_decrypt(&self, value: &str) -> Result<String> {
        match value
            .strip_prefix(ENC_PREFIX)
            .and_then(|inner| inner.strip_suffix(ENC_SUFFIX))
        {
            Some(inner) => self.decrypt(inner),
            None => Ok(value.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Process-wide engine
// ---------------------------------------------------------------------------

static ENGINE: OnceLock<Pbe> = OnceLock::new();

/// Register the process-wide passphrase.
///
/// Call once at startup, before any other operation. The cell is
/// write-once: a second call fails with `AlreadyInitialized` rather
/// than racing concurrent readers.
pub fn init(passphrase: &str) -> Result<()> {
    ENGINE
        .set(Pbe::new(passphrase))
        .map_err(|_| EncBoxError::AlreadyInitialized)
}

fn engine() -> Result<&'static Pbe> {
    ENGINE.get().ok_or(EncBoxError::NotInitialized)
}

/// Encrypt with the process-wide passphrase. See [`Pbe::encrypt`].
pub fn encrypt(plaintext: &str) -> Result<String> {
    engine()?.encrypt(plaintext)
}

/// Decrypt with the process-wide passphrase. See [`Pbe::decrypt`].
pub fn decrypt(sealed: &str) -> Result<String> {
    engine()?.decrypt(sealed)
}

/// Opportunistically decrypt with the process-wide passphrase. See
/// [`Pbe::try_decrypt`].
pub fn try_decrypt(value: &str) -> Result<String> {
    engine()?.try_decrypt(value)
}
