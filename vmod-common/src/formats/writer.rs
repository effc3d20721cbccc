//! VMOD writer
//!
//! Streams a validated [`VmodModel`] to any `Write` sink in section order.
//! Counts are known up front, so nothing is ever back-patched.

use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

use super::header::VmodHeader;
use super::model::{ExtraSection, VmodModel, check_section, count_field};
use super::texture::TextureBlock;
use super::{
    COLOR_COMPONENTS, FACE_COMPONENTS, NORMAL_COMPONENTS, POSITION_COMPONENTS,
    TEX_COORD_COMPONENTS,
};
use crate::error::VmodError;

/// Writer for the VMOD container
pub struct VmodWriter<W: Write> {
    writer: W,
}

impl<W: Write> VmodWriter<W> {
    /// Create a new VMOD writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a complete model
    ///
    /// The model is validated before the first byte is written.
    pub fn write_model(&mut self, model: &VmodModel) -> Result<(), VmodError> {
        model.validate()?;

        self.writer.write_all(&VmodHeader::new().to_bytes())?;

        self.write_floats("positions", &model.positions, POSITION_COMPONENTS)?;
        self.write_floats("tex coords", &model.tex_coords, TEX_COORD_COMPONENTS)?;
        self.write_floats("normals", &model.normals, NORMAL_COMPONENTS)?;

        match &model.extra {
            ExtraSection::Textures(textures) => {
                self.writer
                    .write_i32::<BigEndian>(count_field("textures", textures.len())?)?;
                for texture in textures {
                    self.write_texture(texture)?;
                }
            }
            ExtraSection::Colors(colors) => {
                self.write_floats("colors", colors, COLOR_COMPONENTS)?;
            }
        }

        let triangles = check_section("faces", model.faces.len(), FACE_COMPONENTS)?;
        self.writer.write_i32::<BigEndian>(triangles)?;
        for &index in &model.faces {
            self.writer.write_i32::<BigEndian>(index)?;
        }

        Ok(())
    }

    /// Write `(count, f32 payload)` for one attribute section
    fn write_floats(
        &mut self,
        section: &'static str,
        data: &[f32],
        components: usize,
    ) -> Result<(), VmodError> {
        let count = check_section(section, data.len(), components)?;
        self.writer.write_i32::<BigEndian>(count)?;
        for &value in data {
            self.writer.write_f32::<BigEndian>(value)?;
        }
        Ok(())
    }

    fn write_texture(&mut self, texture: &TextureBlock) -> Result<(), VmodError> {
        self.writer.write_all(&texture.header.to_bytes())?;
        for &word in &texture.words {
            self.writer.write_i32::<BigEndian>(word)?;
        }
        Ok(())
    }
}

/// Write a complete VMOD file
pub fn write_vmod<W: Write>(w: &mut W, model: &VmodModel) -> Result<(), VmodError> {
    VmodWriter::new(w).write_model(model)
}
