//! Passphrase encryption for phrase backups.
//!
//! Derives an AES-256-GCM key from the passphrase with Argon2id and seals
//! the phrase string. Only the phrase ever goes through here, never raw
//! entropy; anyone holding the blob without the passphrase learns nothing,
//! and a wrong passphrase is detected by the authentication tag.
//!
//! # Wire format
//! ```text
//! salt (16 bytes) || nonce (12 bytes) || ciphertext + auth_tag
//! ```

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use crate::error::MnemonicError;

/// Argon2id salt length in bytes.
const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes.
const NONCE_LEN: usize = 12;

/// Minimum encrypted payload size (salt + nonce + auth tag).
const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN + 16;

/// Derive a 256-bit encryption key from a passphrase and salt using
/// Argon2id with the crate-default parameters.
fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; 32]>, argon2::Error> {
    let mut key = Zeroizing::new([0u8; 32]);
    argon2::Argon2::default().hash_password_into(passphrase, salt, &mut key[..])?;
    Ok(key)
}

/// Encrypt a plaintext with a passphrase using AES-256-GCM.
///
/// Generates a random 16-byte salt and 12-byte nonce per call. Returns
/// `salt || nonce || ciphertext+tag`.
pub fn encrypt(plaintext: &[u8], passphrase: &[u8]) -> Result<Vec<u8>, MnemonicError> {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LEN];
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(passphrase, &salt)
        .map_err(|e| MnemonicError::Encryption(e.to_string()))?;
    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|e| MnemonicError::Encryption(e.to_string()))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| MnemonicError::Encryption(e.to_string()))?;

    let mut blob = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt a blob that was produced by [`encrypt`].
///
/// Parses the salt and nonce from the header, re-derives the key, and
/// opens the ciphertext. A wrong passphrase surfaces as
/// [`MnemonicError::InvalidPassphrase`] (authentication tag mismatch).
/// The returned plaintext is zeroized on drop.
pub fn decrypt(blob: &[u8], passphrase: &[u8]) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    if blob.len() < MIN_BLOB_LEN {
        return Err(MnemonicError::CorruptedBlob(format!(
            "encrypted data too short: {} < {MIN_BLOB_LEN}",
            blob.len()
        )));
    }

    let salt = &blob[..SALT_LEN];
    let nonce_bytes = &blob[SALT_LEN..SALT_LEN + NONCE_LEN];
    let ciphertext = &blob[SALT_LEN + NONCE_LEN..];

    let key = derive_key(passphrase, salt)
        .map_err(|e| MnemonicError::Decryption(e.to_string()))?;
    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|e| MnemonicError::Decryption(e.to_string()))?;
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| MnemonicError::InvalidPassphrase)
}
