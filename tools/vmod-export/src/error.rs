//! Typed errors for the export pipeline
//!
//! Library functions return [`ExportError`]; the CLI and batch layers wrap
//! them in `anyhow` with file-level context.

use std::path::PathBuf;
use vmod_common::VmodError;

/// Why a vertex format descriptor was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("descriptor is empty")]
    Empty,

    #[error("segment {index} is empty")]
    EmptySegment { index: usize },

    #[error("unknown attribute letter '{letter}' in segment \"{segment}\"")]
    UnknownAttribute { letter: char, segment: String },

    #[error("component count in segment \"{segment}\" must be a digit 1-9")]
    InvalidComponentCount { segment: String },

    #[error("unsupported scalar type in segment \"{segment}\" (only F is supported)")]
    UnsupportedScalarType { segment: String },
}

/// Error raised while converting a scene to VMOD
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A material's vertex format descriptor could not be parsed
    #[error("malformed vertex format \"{descriptor}\" in material '{material}'")]
    MalformedDescriptor {
        material: String,
        descriptor: String,
        #[source]
        source: DescriptorError,
    },

    /// The requested attribute kind itself is malformed (e.g. "X3", "V")
    #[error("invalid attribute kind \"{0}\"")]
    InvalidAttributeKind(String),

    /// The material stores fewer components than were requested
    #[error(
        "material '{material}' stores {found} components for '{attribute}', {requested} requested"
    )]
    ComponentMismatch {
        material: String,
        attribute: char,
        requested: u8,
        found: u8,
    },

    /// A textured material has no texture coordinates to map it with
    #[error("textured material '{material}' does not have UV coordinates")]
    MissingTexCoords { material: String },

    /// A texture image could not be decoded
    #[error("failed to load texture {path:?}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Encode(#[from] VmodError),
}
