//! MSB-first conversions between byte buffers and binary-digit strings.
//!
//! The codec carries entropy and checksum material as strings of ASCII
//! '0'/'1' so the 11-bit splits and checksum comparisons stay transparent.
//! Both directions are big-endian, most-significant-bit first. Any other
//! ordering breaks interoperability with external implementations of the
//! phrase format and is a correctness bug, not a design choice.

/// Expand each byte to its 8-bit zero-padded binary form, MSB first,
/// concatenated in buffer order.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:08b}")).collect()
}

/// Pack a binary-digit string into bytes, 8 bits per byte, MSB first.
///
/// A trailing group shorter than 8 bits is right-padded with zero bits.
/// That only happens for entropy-only substrings during validation; the
/// full codeword string is always byte-aligned.
pub fn bits_to_bytes(bits: &str) -> Vec<u8> {
    bits.as_bytes()
        .chunks(8)
        .map(|group| {
            let byte = group
                .iter()
                .fold(0u8, |acc, &digit| (acc << 1) | u8::from(digit == b'1'));
            byte << (8 - group.len())
        })
        .collect()
}
