//! # cloak-mnemonic — recovery-phrase codec for Cloak credentials.
//!
//! Converts cryptographically random entropy into a human-writable phrase
//! drawn from a fixed 2048-word dictionary, and converts such a phrase back
//! into entropy while verifying an embedded checksum. The encoding is
//! BIP-39 compatible (English wordlist, SHA-256 checksum), so phrases
//! interoperate with other implementations of that format. A passphrase
//! layer seals the resulting phrase for at-rest backup.
//!
//! # Modules
//!
//! - [`error`] — `MnemonicError` enum
//! - [`wordlist`] — embedded English dictionary with index lookup
//! - [`bits`] — MSB-first byte/bit-string conversions
//! - [`mnemonic`] — phrase generation, entropy decoding, validation
//! - [`encryption`] — Argon2id + AES-256-GCM phrase encryption

pub mod bits;
pub mod encryption;
pub mod error;
pub mod mnemonic;
pub mod wordlist;

// Re-exports for convenient access
pub use encryption::{decrypt, encrypt};
pub use error::MnemonicError;
pub use mnemonic::{
    generate_mnemonic, mnemonic_from_entropy, mnemonic_to_entropy, validate_mnemonic,
    DEFAULT_STRENGTH, VALID_STRENGTHS, VALID_WORD_COUNTS,
};
pub use wordlist::WORDLIST_SIZE;
