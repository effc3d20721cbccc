//! Parsed scene handed to the export core

use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::mesh::{Attribute, VertexFormat};

/// A material and the interleaved vertices drawn with it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    pub name: String,
    /// Vertex format descriptor, e.g. `T2F_N3F_V3F`
    pub format: String,
    /// Interleaved scalars, `stride * vertex_count` long
    pub vertices: Vec<f32>,
    /// Primary (diffuse) texture
    pub texture: Option<PathBuf>,
    pub ambient_texture: Option<PathBuf>,
}

impl Material {
    pub fn new(name: impl Into<String>, format: impl Into<String>, vertices: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
            vertices,
            ..Default::default()
        }
    }

    pub fn with_texture(mut self, path: impl Into<PathBuf>) -> Self {
        self.texture = Some(path.into());
        self
    }

    pub fn with_ambient_texture(mut self, path: impl Into<PathBuf>) -> Self {
        self.ambient_texture = Some(path.into());
        self
    }

    /// Parse this material's descriptor
    pub fn vertex_format(&self) -> Result<VertexFormat, ExportError> {
        VertexFormat::parse(&self.format).map_err(|source| ExportError::MalformedDescriptor {
            material: self.name.clone(),
            descriptor: self.format.clone(),
            source,
        })
    }

    pub fn has_uvs(&self) -> Result<bool, ExportError> {
        Ok(self.vertex_format()?.contains(Attribute::TexCoord))
    }

    /// Texture used for this material: primary first, then ambient
    pub fn texture_source(&self) -> Option<&Path> {
        self.texture
            .as_deref()
            .or(self.ambient_texture.as_deref())
    }
}

/// A named group of triangles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mesh {
    pub name: String,
    /// Vertex index triples into the scene-wide position sequence
    pub faces: Vec<[i32; 3]>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, faces: Vec<[i32; 3]>) -> Self {
        Self {
            name: name.into(),
            faces,
        }
    }
}

/// Everything the exporter needs from a parsed model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub materials: Vec<Material>,
    pub meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new(materials: Vec<Material>, meshes: Vec<Mesh>) -> Self {
        Self { materials, meshes }
    }
}
