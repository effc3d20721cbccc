//! Texture packing (PNG/JPG -> VMOD texture blocks)

use image::{DynamicImage, GenericImageView};
use rayon::prelude::*;
use std::path::Path;

use crate::error::ExportError;
use crate::scene::{Material, Scene};
use vmod_common::TextureBlock;

/// Pack a decoded image, keeping its channel count
///
/// Grayscale, grayscale+alpha, RGB and RGBA images keep 1, 2, 3 and 4
/// channels. Wider sample types are reduced to 8 bits per channel.
pub fn pack_image(img: &DynamicImage) -> Result<TextureBlock, ExportError> {
    let (width, height) = img.dimensions();

    let (channels, bytes) = match img.color().channel_count() {
        1 => (1, img.to_luma8().into_raw()),
        2 => (2, img.to_luma_alpha8().into_raw()),
        3 => (3, img.to_rgb8().into_raw()),
        _ => (4, img.to_rgba8().into_raw()),
    };

    Ok(TextureBlock::from_pixels(width, height, channels, &bytes)?)
}

/// Decode an image file and pack it into a texture block
pub fn load_texture(path: &Path) -> Result<TextureBlock, ExportError> {
    let img = image::open(path).map_err(|source| ExportError::Texture {
        path: path.to_path_buf(),
        source,
    })?;

    let block = pack_image(&img)?;
    tracing::debug!(
        "Packed texture {:?}: {}x{}x{}, {} words",
        path,
        block.header.width,
        block.header.height,
        block.header.channels,
        block.words.len()
    );
    Ok(block)
}

/// Textured materials in scene order, paired with their texture file
///
/// Fails on the first textured material that has no UV coordinates, before
/// any image is decoded.
pub fn texture_sources(scene: &Scene) -> Result<Vec<(&Material, &Path)>, ExportError> {
    let mut sources = Vec::new();
    for material in &scene.materials {
        let Some(path) = material.texture_source() else {
            continue;
        };
        if !material.has_uvs()? {
            return Err(ExportError::MissingTexCoords {
                material: material.name.clone(),
            });
        }
        sources.push((material, path));
    }
    Ok(sources)
}

/// Decode and pack the given sources in parallel, keeping their order
pub fn load_textures(sources: &[(&Material, &Path)]) -> Result<Vec<TextureBlock>, ExportError> {
    sources
        .par_iter()
        .map(|(_, path)| load_texture(path))
        .collect()
}

/// Load and pack every material texture in scene order
pub fn extract_textures(scene: &Scene) -> Result<Vec<TextureBlock>, ExportError> {
    load_textures(&texture_sources(scene)?)
}
