//! Byte/word conversion for the scratch buffer
//!
//! The scratch buffer is a plain byte sequence. When its contents are
//! extracted into a word sequence, each group of 8 consecutive bytes becomes
//! one `u64` in **little-endian** order. This convention is fixed: it decides
//! every reference vector the generator produces, on every platform.

/// Number of bytes in one extracted word
pub const WORD_SIZE: usize = 8;

/// Decode a byte slice into little-endian 64-bit words
///
/// # Panics
/// Panics if `bytes.len()` is not a multiple of [`WORD_SIZE`].
///
/// # Example
/// ```
/// use hashmix_prng_core_rs::core::words_from_le_bytes;
///
/// let words = words_from_le_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(words, vec![1, 256]);
/// ```
pub fn words_from_le_bytes(bytes: &[u8]) -> Vec<u64> {
    assert!(
        bytes.len() % WORD_SIZE == 0,
        "byte length must be a multiple of the word size"
    );

    bytes
        .chunks_exact(WORD_SIZE)
        .map(|chunk| {
            let mut word = [0u8; WORD_SIZE];
            word.copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect()
}

/// Encode 64-bit words into bytes, little-endian (inverse of [`words_from_le_bytes`])
pub fn words_to_le_bytes(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}
