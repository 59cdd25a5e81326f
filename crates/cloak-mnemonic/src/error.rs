//! Codec error types.

use thiserror::Error;

/// Errors that can occur when encoding, decoding, or sealing a phrase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Generator called with a strength outside the allowed set.
    #[error("invalid strength: {strength} (expected 128, 160, 192, 224, or 256)")]
    InvalidStrength {
        /// The rejected entropy bit-length.
        strength: usize,
    },

    /// Phrase failed decoding: bad word count, unknown word, or checksum mismatch.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Encryption failure.
    #[error("encryption: {0}")]
    Encryption(String),

    /// Decryption failure.
    #[error("decryption: {0}")]
    Decryption(String),

    /// Wrong passphrase for an encrypted phrase (authentication tag mismatch).
    #[error("invalid passphrase")]
    InvalidPassphrase,

    /// Encrypted payload is truncated or has an invalid format.
    #[error("corrupted blob: {0}")]
    CorruptedBlob(String),
}
