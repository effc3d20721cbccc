//! Test asset generation
//!
//! Writes small OBJ/MTL models and PNG textures for integration testing.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

/// Generate a 3x1 RGB PNG (9 channel bytes, not a multiple of 4)
pub fn generate_rgb_strip_png(path: &Path) -> std::io::Result<()> {
    let pixels: Vec<u8> = vec![
        255, 0, 0, // Red
        0, 255, 0, // Green
        0, 0, 255, // Blue
    ];

    image::save_buffer(path, &pixels, 3, 1, image::ColorType::Rgb8)
        .map_err(std::io::Error::other)
}

/// Generate a 2x2 RGBA checkerboard PNG
pub fn generate_checkerboard_png(path: &Path) -> std::io::Result<()> {
    #[rustfmt::skip]
    let pixels: Vec<u8> = vec![
        255, 255, 255, 255,   128, 64, 192, 255,
        128, 64, 192, 255,    255, 255, 255, 255,
    ];

    image::save_buffer(path, &pixels, 2, 2, image::ColorType::Rgba8)
        .map_err(std::io::Error::other)
}

/// Generate a single triangle OBJ (positions only)
pub fn generate_triangle_obj(path: &Path) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;

    writeln!(file, "# Single triangle")?;
    writeln!(file, "v 0 0 0")?;
    writeln!(file, "v 1 0 0")?;
    writeln!(file, "v 0 1 0")?;
    writeln!(file, "f 1 2 3")?;

    Ok(())
}

/// Generate a unit cube OBJ with UVs and normals (12 triangles, no material)
pub fn generate_cube_obj(path: &Path) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;

    writeln!(file, "# Simple cube for testing")?;
    writeln!(file)?;

    // Vertices (8 corners of unit cube)
    writeln!(file, "v -0.5 -0.5  0.5")?;
    writeln!(file, "v  0.5 -0.5  0.5")?;
    writeln!(file, "v  0.5  0.5  0.5")?;
    writeln!(file, "v -0.5  0.5  0.5")?;
    writeln!(file, "v -0.5 -0.5 -0.5")?;
    writeln!(file, "v  0.5 -0.5 -0.5")?;
    writeln!(file, "v  0.5  0.5 -0.5")?;
    writeln!(file, "v -0.5  0.5 -0.5")?;
    writeln!(file)?;

    // Normals (6 face normals)
    writeln!(file, "vn  0  0  1")?;
    writeln!(file, "vn  0  0 -1")?;
    writeln!(file, "vn  1  0  0")?;
    writeln!(file, "vn -1  0  0")?;
    writeln!(file, "vn  0  1  0")?;
    writeln!(file, "vn  0 -1  0")?;
    writeln!(file)?;

    writeln!(file, "vt 0 0")?;
    writeln!(file, "vt 1 0")?;
    writeln!(file, "vt 1 1")?;
    writeln!(file, "vt 0 1")?;
    writeln!(file)?;

    // Faces as quads, triangulated on load
    writeln!(file, "f 1/1/1 2/2/1 3/3/1 4/4/1")?; // +Z
    writeln!(file, "f 6/1/2 5/2/2 8/3/2 7/4/2")?; // -Z
    writeln!(file, "f 2/1/3 6/2/3 7/3/3 3/4/3")?; // +X
    writeln!(file, "f 5/1/4 1/2/4 4/3/4 8/4/4")?; // -X
    writeln!(file, "f 4/1/5 3/2/5 7/3/5 8/4/5")?; // +Y
    writeln!(file, "f 5/1/6 6/2/6 2/3/6 1/4/6")?; // -Y

    Ok(())
}

/// Generate a triangle with per-vertex colors (`v x y z r g b`)
pub fn generate_colored_triangle_obj(path: &Path) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;

    writeln!(file, "v 0 0 0 1 0 0")?;
    writeln!(file, "v 1 0 0 0 1 0")?;
    writeln!(file, "v 0 1 0 0 0 1")?;
    writeln!(file, "f 1 2 3")?;

    Ok(())
}

/// Generate a textured quad: OBJ + MTL referencing `texture` via map_Kd
///
/// `texture` is written into the MTL as given (relative to the OBJ).
pub fn generate_textured_quad(obj_path: &Path, texture: &str) -> std::io::Result<()> {
    let mtl_path = obj_path.with_extension("mtl");
    let mtl_name = mtl_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("quad.mtl")
        .to_string();

    let mut mtl = fs::File::create(&mtl_path)?;
    writeln!(mtl, "newmtl painted")?;
    writeln!(mtl, "Kd 1 1 1")?;
    writeln!(mtl, "map_Kd {}", texture)?;

    let mut file = fs::File::create(obj_path)?;
    writeln!(file, "mtllib {}", mtl_name)?;
    writeln!(file, "v 0 0 0")?;
    writeln!(file, "v 1 0 0")?;
    writeln!(file, "v 1 1 0")?;
    writeln!(file, "v 0 1 0")?;
    writeln!(file, "vt 0 0")?;
    writeln!(file, "vt 1 0")?;
    writeln!(file, "vt 1 1")?;
    writeln!(file, "vt 0 1")?;
    writeln!(file, "usemtl painted")?;
    writeln!(file, "f 1/1 2/2 3/3")?;
    writeln!(file, "f 1/1 3/3 4/4")?;

    Ok(())
}

/// Generate a textured triangle that has no `vt` coordinates
pub fn generate_textured_without_uvs(obj_path: &Path, texture: &str) -> std::io::Result<()> {
    let mtl_path = obj_path.with_extension("mtl");
    let mtl_name = mtl_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("bad.mtl")
        .to_string();

    let mut mtl = fs::File::create(&mtl_path)?;
    writeln!(mtl, "newmtl painted")?;
    writeln!(mtl, "map_Kd {}", texture)?;

    let mut file = fs::File::create(obj_path)?;
    writeln!(file, "mtllib {}", mtl_name)?;
    writeln!(file, "v 0 0 0")?;
    writeln!(file, "v 1 0 0")?;
    writeln!(file, "v 0 1 0")?;
    writeln!(file, "usemtl painted")?;
    writeln!(file, "f 1 2 3")?;

    Ok(())
}
