//! vmod-export library
//!
//! Converts parsed model scenes into VMOD files. Exposed as a library so other
//! tools can convert models without going through the CLI.

pub mod convert;
pub mod error;
pub mod manifest;
pub mod mesh;
pub mod scene;
pub mod texture;

// Re-export the container format
pub use vmod_common::{ExtraSection, TextureBlock, VmodModel, VmodVariant};

// Re-export key types for model conversion
pub use convert::{
    ConvertStats, ExportOptions, VariantChoice, convert_obj, convert_obj_to_memory,
    convert_scene, export_scene, output_path_for,
};
pub use error::{DescriptorError, ExportError};
pub use mesh::{AttributeTag, VertexFormat, extract_attributes, extract_faces};
pub use scene::{Material, Mesh, Scene, load_obj};
pub use texture::{extract_textures, load_texture, load_textures, pack_image};
