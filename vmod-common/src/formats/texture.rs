//! Texture blocks embedded in the textured VMOD variant
//!
//! # Layout
//! ```text
//! 0x00: width i32
//! 0x04: height i32
//! 0x08: channels i32
//! 0x0C: words i32[ceil(width * height * channels / 4)]
//! ```

use crate::error::VmodError;
use crate::packing::{pack_texture_words, packed_word_count, unpack_texture_words};

/// Texture block header (12 bytes, big-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct TextureBlockHeader {
    pub width: i32,
    pub height: i32,
    pub channels: i32,
}

impl TextureBlockHeader {
    pub const SIZE: usize = 12;

    pub fn new(width: i32, height: i32, channels: i32) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Raw channel byte count (`width * height * channels`)
    ///
    /// Negative dimensions count as zero; the product saturates.
    pub fn byte_len(&self) -> usize {
        let dim = |v: i32| usize::try_from(v).unwrap_or(0);
        dim(self.width)
            .saturating_mul(dim(self.height))
            .saturating_mul(dim(self.channels))
    }

    /// Number of packed words following the header
    pub fn word_count(&self) -> usize {
        packed_word_count(self.byte_len())
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.width.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.height.to_be_bytes());
        bytes[8..12].copy_from_slice(&self.channels.to_be_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            width: i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            height: i32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            channels: i32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        })
    }
}

/// A packed texture: dimensions plus channel bytes packed four per word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBlock {
    pub header: TextureBlockHeader,
    pub words: Vec<i32>,
}

impl TextureBlock {
    /// Pack row-major, channel-minor pixel bytes into a texture block
    ///
    /// `bytes` must hold exactly `width * height * channels` values.
    pub fn from_pixels(
        width: u32,
        height: u32,
        channels: u8,
        bytes: &[u8],
    ) -> Result<Self, VmodError> {
        let dim = |section: &'static str, v: u32| {
            i32::try_from(v).map_err(|_| VmodError::CountOverflow {
                section,
                count: v as usize,
            })
        };
        let header = TextureBlockHeader::new(
            dim("texture width", width)?,
            dim("texture height", height)?,
            i32::from(channels),
        );

        if bytes.len() != header.byte_len() {
            return Err(VmodError::TextureSize {
                width: header.width,
                height: header.height,
                channels: header.channels,
                expected: header.word_count(),
                found: packed_word_count(bytes.len()),
            });
        }

        Ok(Self {
            header,
            words: pack_texture_words(bytes),
        })
    }

    /// Build a block from already-packed words, checking the word count
    pub fn from_words(header: TextureBlockHeader, words: Vec<i32>) -> Result<Self, VmodError> {
        if words.len() != header.word_count() {
            return Err(VmodError::TextureSize {
                width: header.width,
                height: header.height,
                channels: header.channels,
                expected: header.word_count(),
                found: words.len(),
            });
        }
        Ok(Self { header, words })
    }

    /// Channel bytes with the tail padding removed
    pub fn pixels(&self) -> Vec<u8> {
        unpack_texture_words(&self.words, self.header.byte_len())
    }

    /// Encoded size in bytes (header + words)
    pub fn encoded_len(&self) -> usize {
        TextureBlockHeader::SIZE + self.words.len() * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_size() {
        assert_eq!(TextureBlockHeader::SIZE, 12);
    }

    #[test]
    fn test_header_is_big_endian() {
        let bytes = TextureBlockHeader::new(64, 32, 4).to_bytes();
        assert_eq!(bytes, [0, 0, 0, 64, 0, 0, 0, 32, 0, 0, 0, 4]);

        let parsed = TextureBlockHeader::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, TextureBlockHeader::new(64, 32, 4));
    }

    #[test]
    fn test_rgb_block_pads_tail() {
        // 1x1 RGB = 3 bytes -> one word with one padding byte
        let block = TextureBlock::from_pixels(1, 1, 3, &[0x11, 0x22, 0x33]).unwrap();
        assert_eq!(block.words, vec![0x1122_3300]);
        assert_eq!(block.pixels(), vec![0x11, 0x22, 0x33]);
        assert_eq!(block.encoded_len(), 16);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let err = TextureBlock::from_pixels(2, 2, 4, &[0; 15]).unwrap_err();
        assert!(matches!(err, VmodError::TextureSize { expected: 4, .. }));
    }

    #[test]
    fn test_from_words_checks_count() {
        let header = TextureBlockHeader::new(2, 1, 3); // 6 bytes -> 2 words
        assert!(TextureBlock::from_words(header, vec![0, 0]).is_ok());
        assert!(TextureBlock::from_words(header, vec![0]).is_err());
    }

    #[test]
    fn test_negative_dimensions_have_no_payload() {
        let header = TextureBlockHeader::new(-1, 4, 4);
        assert_eq!(header.byte_len(), 0);
        assert_eq!(header.word_count(), 0);
    }
}
