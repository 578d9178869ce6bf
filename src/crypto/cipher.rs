//! AES-256-CBC encryption with PKCS#7 padding.
//!
//! `encrypt` pads the plaintext to the 16-byte AES block size before
//! chaining, so the ciphertext length is always a block multiple.
//! `decrypt` rejects malformed padding outright instead of returning
//! the still-padded bytes: with CBC there is no authentication tag, and
//! a padding mismatch is the only deterministic signal that the key was
//! wrong or the ciphertext was altered.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{EncBoxError, Result};

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Size of the CBC initialization vector in bytes (one AES block).
pub const IV_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext` with a 32-byte `key` and 16-byte `iv`.
///
/// Returns the padded ciphertext; its length is
/// `plaintext.len() + (16 - plaintext.len() % 16)`.
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let enc = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| EncBoxError::CipherParams(format!("invalid key or IV length: {e}")))?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt data that was produced by `encrypt`.
///
/// Fails with `MisalignedCiphertext` when the input is not a whole
/// number of AES blocks and with `InvalidPadding` when the decrypted
/// tail is not valid PKCS#7 padding.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(EncBoxError::MisalignedCiphertext(ciphertext.len()));
    }

    let dec = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| EncBoxError::CipherParams(format!("invalid key or IV length: {e}")))?;

    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| EncBoxError::InvalidPadding)
}

/// Generate a cryptographically random 16-byte IV.
///
/// A fresh IV per encryption keeps equal plaintexts from producing
/// equal ciphertext prefixes under the same key.
pub fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    iv
}
