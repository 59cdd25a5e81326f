//! Phrase generation, entropy decoding, and validation.
//!
//! Entropy of 128 to 256 bits is checksummed with the leading bits of its
//! SHA-256 digest, and the combined bit string is split into 11-bit
//! codewords indexing the English dictionary. Decoding runs the same
//! transform in reverse and recomputes the checksum, so the two paths
//! cannot disagree about what a well-formed phrase looks like.

use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::error::MnemonicError;
use crate::wordlist;

/// Entropy bit-lengths accepted by the generator.
pub const VALID_STRENGTHS: [usize; 5] = [128, 160, 192, 224, 256];

/// Word counts of well-formed phrases, one per strength.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Strength used when the caller has no reason to pick another.
pub const DEFAULT_STRENGTH: usize = 256;

/// Bits per codeword: 2048 = 2^11 dictionary entries.
const BITS_PER_WORD: usize = 11;

/// First `entropy_bits / 32` bits of the SHA-256 digest of `entropy`.
///
/// Both the generator and the validator derive checksums through this one
/// function. The digest algorithm is part of the wire contract: a phrase
/// produced here must verify against any other implementation of the
/// format, and vice versa.
fn derive_checksum_bits(entropy: &[u8]) -> String {
    let checksum_len = entropy.len() * 8 / 32;
    let digest = Sha256::digest(entropy);
    let mut bits = bytes_to_bits(&digest);
    bits.truncate(checksum_len);
    bits
}

/// Generate a phrase from `strength` bits of fresh OS randomness.
///
/// `strength` must be one of [`VALID_STRENGTHS`]. Entropy comes from the
/// operating system CSPRNG; a predictable source would void every security
/// property of the output, so there is no fallback source and no retry.
pub fn generate_mnemonic(strength: usize) -> Result<String, MnemonicError> {
    if !VALID_STRENGTHS.contains(&strength) {
        return Err(MnemonicError::InvalidStrength { strength });
    }
    let mut entropy = Zeroizing::new(vec![0u8; strength / 8]);
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let phrase = mnemonic_from_entropy(&entropy)?;
    debug!(strength, words = phrase.split(' ').count(), "generated phrase");
    Ok(phrase)
}

/// Encode an entropy buffer as a phrase.
///
/// The buffer's bit-length must be one of [`VALID_STRENGTHS`]. Output is
/// lowercase, single-space separated, and always passes
/// [`validate_mnemonic`] since the checksum is recomputed from the same
/// entropy on both sides.
pub fn mnemonic_from_entropy(entropy: &[u8]) -> Result<String, MnemonicError> {
    let strength = entropy.len() * 8;
    if !VALID_STRENGTHS.contains(&strength) {
        return Err(MnemonicError::InvalidStrength { strength });
    }

    let mut bits = bytes_to_bits(entropy);
    bits.push_str(&derive_checksum_bits(entropy));
    // 132/165/198/231/264 bits: an exact multiple of 11 for every strength
    debug_assert_eq!(bits.len() % BITS_PER_WORD, 0);

    let words: Vec<&str> = bits
        .as_bytes()
        .chunks(BITS_PER_WORD)
        .map(|chunk| {
            let index = chunk
                .iter()
                .fold(0usize, |acc, &digit| (acc << 1) | usize::from(digit == b'1'));
            wordlist::word_at(index)
        })
        .collect();
    Ok(words.join(" "))
}

/// Decode a phrase back to its entropy bytes.
///
/// Input is normalized first (lowercased, split on whitespace runs), so
/// mixed case and irregular spacing are accepted. Rejects phrases with a
/// bad word count, a word outside the dictionary, or a checksum that does
/// not match the one recomputed from the decoded entropy. The returned
/// buffer is zeroized on drop.
pub fn mnemonic_to_entropy(phrase: &str) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    let normalized = phrase.to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    if !VALID_WORD_COUNTS.contains(&words.len()) {
        return Err(MnemonicError::InvalidMnemonic(format!(
            "bad word count: {}",
            words.len()
        )));
    }

    let mut bits = String::with_capacity(words.len() * BITS_PER_WORD);
    for (position, word) in words.iter().enumerate() {
        // Report the position, not the word: phrases are secrets and error
        // strings end up in logs.
        let index = wordlist::index_of(word).ok_or_else(|| {
            MnemonicError::InvalidMnemonic(format!("unknown word at position {}", position + 1))
        })?;
        bits.push_str(&format!("{index:011b}"));
    }

    let checksum_len = words.len() / 3;
    let entropy_len = bits.len() - checksum_len;
    // word_count / 3 equals entropy_bits / 32 exactly for the five accepted
    // counts; the invariant is asserted rather than silently assumed.
    debug_assert_eq!(checksum_len, entropy_len / 32);

    let (entropy_bits, claimed_checksum) = bits.split_at(entropy_len);
    let entropy = Zeroizing::new(bits_to_bytes(entropy_bits));
    let expected_checksum = derive_checksum_bits(&entropy);

    if expected_checksum != claimed_checksum {
        return Err(MnemonicError::InvalidMnemonic("checksum mismatch".into()));
    }
    Ok(entropy)
}

/// Whether a phrase is well-formed with a consistent checksum.
///
/// Total over arbitrary input: a malformed phrase is an ordinary `false`,
/// never an error or a panic. Callers wanting finer-grained reasons can use
/// [`mnemonic_to_entropy`] directly.
pub fn validate_mnemonic(phrase: &str) -> bool {
    match mnemonic_to_entropy(phrase) {
        Ok(_) => true,
        Err(e) => {
            debug!(reason = %e, "phrase rejected");
            false
        }
    }
}
