//! Texture data packing utilities
//!
//! Raw channel bytes are stored in VMOD texture blocks as 32-bit words:
//! four consecutive bytes become one big-endian signed integer.
//!
//! When the byte count is not a multiple of 4 the last word is zero-padded
//! on the right, so `[0xAA, 0xBB]` packs to `0xAABB0000`.
//!
//! Used by both `vmod-export` (asset pipeline) and engine-side loaders.

/// Bytes stored in one packed texture word
pub const BYTES_PER_WORD: usize = 4;

/// Number of words needed to hold `byte_len` channel bytes
#[inline]
pub const fn packed_word_count(byte_len: usize) -> usize {
    byte_len.div_ceil(BYTES_PER_WORD)
}

/// Pack channel bytes into big-endian signed 32-bit words
///
/// The final group is zero-padded when `bytes.len()` is not a multiple of 4.
pub fn pack_texture_words(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks(BYTES_PER_WORD)
        .map(|chunk| {
            let mut word = [0u8; BYTES_PER_WORD];
            word[..chunk.len()].copy_from_slice(chunk);
            i32::from_be_bytes(word)
        })
        .collect()
}

/// Unpack words back into `byte_len` channel bytes, dropping the tail padding
///
/// If the words hold fewer than `byte_len` bytes, the result is shorter.
pub fn unpack_texture_words(words: &[i32], byte_len: usize) -> Vec<u8> {
    let mut bytes: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
    bytes.truncate(byte_len);
    bytes
}
