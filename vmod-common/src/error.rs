//! Errors raised while encoding or decoding VMOD data.

use std::io;

/// Error produced by the VMOD writer or reader.
#[derive(Debug, thiserror::Error)]
pub enum VmodError {
    /// A count does not fit in the signed 32-bit field the format uses.
    #[error("{section} count {count} does not fit in an int32 field")]
    CountOverflow { section: &'static str, count: usize },

    /// A flat attribute sequence is not a whole number of elements.
    #[error("{section} has {len} scalars, not a multiple of {components}")]
    RaggedSection {
        section: &'static str,
        len: usize,
        components: usize,
    },

    /// Texture block payload does not match its header dimensions.
    #[error("texture {width}x{height}x{channels} expects {expected} words, found {found}")]
    TextureSize {
        width: i32,
        height: i32,
        channels: i32,
        expected: usize,
        found: usize,
    },

    /// Input ended in the middle of a section.
    #[error("unexpected end of data while reading {section}")]
    Truncated { section: &'static str },

    /// A count field holds a negative value.
    #[error("{section} count is negative ({count})")]
    NegativeCount { section: &'static str, count: i32 },

    /// Data remains after the face section.
    #[error("{0} trailing bytes after face section")]
    TrailingBytes(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}
