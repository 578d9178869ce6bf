//! Portable base64 envelope packing.
//!
//! An envelope is the only artifact this crate persists or transmits:
//!
//! ```text
//! base64( [salt: 16 bytes][iv: 16 bytes][ciphertext: n * 16 bytes] )
//! ```
//!
//! The salt and IV ride along with the ciphertext, so an envelope is
//! self-describing except for the passphrase, which the caller supplies
//! out-of-band.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroizing;

use crate::crypto::{cipher, kdf};
use crate::errors::{EncBoxError, Result};

/// Fixed prefix ahead of the ciphertext: 16-byte salt + 16-byte IV.
const HEADER_LEN: usize = kdf::SALT_LEN + cipher::IV_LEN;

/// Encrypt `plaintext` under `passphrase` into a base64 envelope.
///
/// Every call draws a fresh random salt and IV, so sealing the same
/// plaintext twice yields two different envelopes.
pub fn seal(plaintext: &str, passphrase: &[u8]) -> Result<String> {
    let salt = kdf::generate_salt();
    let iv = cipher::generate_iv();

    let key = Zeroizing::new(kdf::derive_key(passphrase, &salt)?);
    let ciphertext = cipher::encrypt(plaintext.as_bytes(), key.as_ref(), &iv)?;

    let mut blob = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(blob))
}

/// Decrypt an envelope produced by [`seal`] back into plaintext.
///
/// The salt and IV are read back out of the envelope, never assumed,
/// which also keeps ciphertexts from older fixed-IV writers readable.
pub fn open(envelope: &str, passphrase: &[u8]) -> Result<String> {
    let blob = BASE64.decode(envelope)?;
    if blob.len() <= HEADER_LEN {
        return Err(EncBoxError::InvalidEnvelopeLength(blob.len()));
    }

    let (salt, rest) = blob.split_at(kdf::SALT_LEN);
    let (iv, ciphertext) = rest.split_at(cipher::IV_LEN);

    let key = Zeroizing::new(kdf::derive_key(passphrase, salt)?);
    let plaintext = cipher::decrypt(ciphertext, key.as_ref(), iv)?;
    Ok(String::from_utf8(plaintext)?)
}
