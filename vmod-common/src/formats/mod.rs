//! VMOD binary model format (.vmod)
//!
//! Fixed-layout, big-endian container for a whole model: attribute streams,
//! an optional texture section (or per-vertex colors) and the face indices.
//! No magic bytes - the 16-byte header is reserved and written as zeros.
//!
//! # Layout
//! ```text
//! 0x00: reserved header (16 bytes, zero)
//! i32:  position count (vertices)      f32[3 * n] positions
//! i32:  tex coord count (vertices)     f32[2 * n] tex coords
//! i32:  normal count (vertices)        f32[3 * n] normals
//! -- textured variant --
//! i32:  texture count
//!       per texture: i32 width, i32 height, i32 channels,
//!                    i32[ceil(width * height * channels / 4)] packed words
//! -- colored variant --
//! i32:  color count (vertices)         f32[3 * n] colors
//! -- common tail --
//! i32:  triangle count                 i32[3 * n] face indices
//! ```
//!
//! Every count field is a logical count (vertices, textures, triangles),
//! never a raw scalar count.

mod header;
mod model;
mod reader;
mod texture;
mod writer;

pub use header::{VMOD_HEADER_SIZE, VmodHeader};
pub use model::{ExtraSection, VmodModel, VmodVariant};
pub use reader::{VmodReader, read_vmod};
pub use texture::{TextureBlock, TextureBlockHeader};
pub use writer::{VmodWriter, write_vmod};

/// File extension for VMOD models
pub const VMOD_EXT: &str = "vmod";

/// Scalars per position
pub const POSITION_COMPONENTS: usize = 3;
/// Scalars per texture coordinate
pub const TEX_COORD_COMPONENTS: usize = 2;
/// Scalars per normal
pub const NORMAL_COMPONENTS: usize = 3;
/// Scalars per vertex color
pub const COLOR_COMPONENTS: usize = 3;
/// Indices per triangle
pub const FACE_COMPONENTS: usize = 3;
