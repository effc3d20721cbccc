//! Shared types and utilities for the VMOD model container
//!
//! This crate provides everything needed to produce or consume `.vmod` files:
//! - `vmod-export` (asset pipeline) writes them
//! - engine-side loaders read them back
//!
//! # Modules
//!
//! - [`formats`] - VMOD header, section layout, writer and reader
//! - [`packing`] - Texture byte → 32-bit word packing
//! - [`error`] - Encode/decode errors

pub mod error;
pub mod formats;
pub mod packing;

pub use error::VmodError;

// Re-export commonly used packing items
pub use packing::{pack_texture_words, packed_word_count, unpack_texture_words};

// Re-export commonly used format items
pub use formats::{
    ExtraSection,
    // Section component counts
    COLOR_COMPONENTS,
    FACE_COMPONENTS,
    NORMAL_COMPONENTS,
    POSITION_COMPONENTS,
    TEX_COORD_COMPONENTS,
    // File constants
    VMOD_EXT,
    VMOD_HEADER_SIZE,
    TextureBlock,
    TextureBlockHeader,
    VmodHeader,
    VmodModel,
    VmodVariant,
    read_vmod,
    write_vmod,
};
