//! Cryptographic primitives for encbox.
//!
//! This module provides:
//! - AES-256-CBC encryption and decryption with PKCS#7 padding (`cipher`)
//! - Iterated HMAC-SHA512 password-based key derivation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_key, generate_salt, ...};
pub use cipher::{decrypt, encrypt, generate_iv};
pub use kdf::{derive_key, generate_salt};
