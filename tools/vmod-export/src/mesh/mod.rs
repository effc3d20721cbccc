//! Mesh data extraction (descriptor parsing, de-interleaving, faces)

mod attributes;
mod faces;
mod format;

// Re-export public API
pub use attributes::{extract_attributes, extract_material_attribute};
pub use faces::extract_faces;
pub use format::{Attribute, AttributeTag, VertexFormat};
