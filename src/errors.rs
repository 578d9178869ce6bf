use thiserror::Error;

/// All errors that can occur in encbox.
#[derive(Debug, Error)]
pub enum EncBoxError {
    // --- Envelope errors ---
    #[error("Invalid base64 envelope: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid envelope length: {0} bytes (need more than 32)")]
    InvalidEnvelopeLength(usize),

    #[error("Decrypted value is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    // --- Cipher errors ---
    #[error("Cipher parameter error: {0}")]
    CipherParams(String),

    #[error("Ciphertext length {0} is not a multiple of the AES block size")]
    MisalignedCiphertext(usize),

    #[error("Invalid padding — wrong passphrase or corrupted data")]
    InvalidPadding,

    // --- Key derivation errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Process-wide engine errors ---
    #[error("Passphrase already initialized")]
    AlreadyInitialized,

    #[error("Passphrase not initialized — call init() first")]
    NotInitialized,

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for encbox results.
pub type Result<T> = std::result::Result<T, EncBoxError>;
