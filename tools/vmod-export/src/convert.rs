//! Scene -> VMOD conversion pipeline
//!
//! Everything is materialized in memory and validated before the output
//! file is created, so a failed conversion never leaves a partial file.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::mesh::{Attribute, AttributeTag, extract_attributes, extract_faces};
use crate::scene::{Scene, load_obj};
use crate::texture::{load_textures, texture_sources};
use vmod_common::{ExtraSection, VMOD_EXT, VmodModel, VmodVariant};

/// How to pick the section written after the normals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VariantChoice {
    /// Textured if any material has a texture, colored otherwise
    #[default]
    Auto,
    Textured,
    Colored,
}

impl VariantChoice {
    pub fn resolve(self, has_textures: bool) -> VmodVariant {
        match self {
            VariantChoice::Auto if has_textures => VmodVariant::Textured,
            VariantChoice::Auto => VmodVariant::Colored,
            VariantChoice::Textured => VmodVariant::Textured,
            VariantChoice::Colored => VmodVariant::Colored,
        }
    }
}

/// Options for a single conversion
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub variant: VariantChoice,
}

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    pub variant: VmodVariant,
    pub vertices: usize,
    pub triangles: usize,
    pub textures: usize,
    pub bytes: usize,
}

impl ConvertStats {
    fn of(model: &VmodModel, bytes: usize) -> Self {
        Self {
            variant: model.variant(),
            vertices: model.vertex_count(),
            triangles: model.triangle_count(),
            textures: model.textures().len(),
            bytes,
        }
    }
}

/// Output path for an input model: same directory, `.vmod` extension
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(VMOD_EXT)
}

/// Convert a parsed scene into a VMOD model
///
/// Textured materials are checked for UVs before anything is extracted.
/// Attribute kinds are de-interleaved in parallel and joined before the
/// variant section is built.
pub fn convert_scene(scene: &Scene, options: &ExportOptions) -> Result<VmodModel, ExportError> {
    let sources = texture_sources(scene)?;
    let variant = options.variant.resolve(!sources.is_empty());

    let materials = &scene.materials;
    let (positions, (tex_coords, normals)) = rayon::join(
        || extract_attributes(materials, AttributeTag::POSITION),
        || {
            rayon::join(
                || extract_attributes(materials, AttributeTag::TEX_COORD),
                || extract_attributes(materials, AttributeTag::NORMAL),
            )
        },
    );
    let (positions, tex_coords, normals) = (positions?, tex_coords?, normals?);

    let extra = match variant {
        VmodVariant::Textured => {
            if sources.is_empty() {
                tracing::warn!("Textured output requested but no material has a texture");
            }
            if has_attribute(scene, Attribute::Color)? {
                tracing::warn!("Scene has vertex colors, dropped in textured output");
            }
            ExtraSection::Textures(load_textures(&sources)?)
        }
        VmodVariant::Colored => {
            if !sources.is_empty() {
                tracing::warn!(
                    "Dropping {} material texture(s) in colored output",
                    sources.len()
                );
            }
            ExtraSection::Colors(extract_attributes(materials, AttributeTag::COLOR)?)
        }
    };

    let model = VmodModel {
        positions,
        tex_coords,
        normals,
        extra,
        faces: extract_faces(scene),
    };
    model.validate()?;
    Ok(model)
}

fn has_attribute(scene: &Scene, attribute: Attribute) -> Result<bool, ExportError> {
    for material in &scene.materials {
        if material.vertex_format()?.contains(attribute) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Convert an OBJ file to an in-memory VMOD model
pub fn convert_obj_to_memory(input: &Path, options: &ExportOptions) -> Result<VmodModel> {
    let scene = load_obj(input)?;
    let model = convert_scene(&scene, options)
        .with_context(|| format!("Failed to convert {:?}", input))?;
    Ok(model)
}

/// Convert a scene and write it to `output`
///
/// The output file is only created once the full byte stream is encoded.
pub fn export_scene(scene: &Scene, output: &Path, options: &ExportOptions) -> Result<ConvertStats> {
    let model = convert_scene(scene, options)?;
    let bytes = model.encode()?;

    fs::write(output, &bytes).with_context(|| format!("Failed to write output: {:?}", output))?;

    let stats = ConvertStats::of(&model, bytes.len());
    tracing::info!(
        "Converted model: {} vertices, {} triangles, {} textures, variant={:?}, {} bytes",
        stats.vertices,
        stats.triangles,
        stats.textures,
        stats.variant,
        stats.bytes
    );
    Ok(stats)
}

/// Convert an OBJ file to a VMOD file
pub fn convert_obj(input: &Path, output: &Path, options: &ExportOptions) -> Result<ConvertStats> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    if ext != "obj" {
        bail!("Unsupported model format: {:?} (use .obj)", input);
    }

    let scene = load_obj(input)?;
    export_scene(&scene, output, options).with_context(|| format!("Failed to convert {:?}", input))
}
