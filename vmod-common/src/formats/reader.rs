//! VMOD reader
//!
//! Parses a VMOD byte stream back into a [`VmodModel`].

use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};

use super::header::VmodHeader;
use super::model::{ExtraSection, VmodModel, VmodVariant};
use super::texture::{TextureBlock, TextureBlockHeader};
use super::{
    COLOR_COMPONENTS, FACE_COMPONENTS, NORMAL_COMPONENTS, POSITION_COMPONENTS,
    TEX_COORD_COMPONENTS,
};
use crate::error::VmodError;

/// Upper bound for speculative allocations driven by count fields
const MAX_PREALLOC: usize = 1 << 16;

/// Reader for the VMOD container
pub struct VmodReader<R: Read> {
    reader: R,
}

impl<R: Read> VmodReader<R> {
    /// Create a new VMOD reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read a complete model, treating the variant section as `variant`
    ///
    /// Fails if any data follows the face section.
    pub fn read_model(&mut self, variant: VmodVariant) -> Result<VmodModel, VmodError> {
        let mut header = [0u8; VmodHeader::SIZE];
        self.reader
            .read_exact(&mut header)
            .map_err(|e| truncated(e, "header"))?;

        let positions = self.read_floats("positions", POSITION_COMPONENTS)?;
        let tex_coords = self.read_floats("tex coords", TEX_COORD_COMPONENTS)?;
        let normals = self.read_floats("normals", NORMAL_COMPONENTS)?;

        let extra = match variant {
            VmodVariant::Textured => {
                let count = self.read_count("textures")?;
                let mut textures = Vec::with_capacity(count.min(MAX_PREALLOC));
                for _ in 0..count {
                    textures.push(self.read_texture()?);
                }
                ExtraSection::Textures(textures)
            }
            VmodVariant::Colored => {
                ExtraSection::Colors(self.read_floats("colors", COLOR_COMPONENTS)?)
            }
        };

        let triangles = self.read_count("faces")?;
        let index_count = triangles.saturating_mul(FACE_COMPONENTS);
        let mut faces = Vec::with_capacity(index_count.min(MAX_PREALLOC));
        for _ in 0..index_count {
            faces.push(
                self.reader
                    .read_i32::<BigEndian>()
                    .map_err(|e| truncated(e, "faces"))?,
            );
        }

        let mut rest = Vec::new();
        self.reader.read_to_end(&mut rest)?;
        if !rest.is_empty() {
            return Err(VmodError::TrailingBytes(rest.len()));
        }

        Ok(VmodModel {
            positions,
            tex_coords,
            normals,
            extra,
            faces,
        })
    }

    fn read_count(&mut self, section: &'static str) -> Result<usize, VmodError> {
        let count = self
            .reader
            .read_i32::<BigEndian>()
            .map_err(|e| truncated(e, section))?;
        usize::try_from(count).map_err(|_| VmodError::NegativeCount { section, count })
    }

    fn read_floats(
        &mut self,
        section: &'static str,
        components: usize,
    ) -> Result<Vec<f32>, VmodError> {
        let len = self.read_count(section)?.saturating_mul(components);
        let mut data = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            data.push(
                self.reader
                    .read_f32::<BigEndian>()
                    .map_err(|e| truncated(e, section))?,
            );
        }
        Ok(data)
    }

    fn read_texture(&mut self) -> Result<TextureBlock, VmodError> {
        let mut bytes = [0u8; TextureBlockHeader::SIZE];
        self.reader
            .read_exact(&mut bytes)
            .map_err(|e| truncated(e, "texture header"))?;
        // from_bytes only fails on short input, which read_exact rules out
        let header = TextureBlockHeader::from_bytes(&bytes).ok_or(VmodError::Truncated {
            section: "texture header",
        })?;
        for (section, count) in [
            ("texture width", header.width),
            ("texture height", header.height),
            ("texture channels", header.channels),
        ] {
            if count < 0 {
                return Err(VmodError::NegativeCount { section, count });
            }
        }

        let word_count = header.word_count();
        let mut words = Vec::with_capacity(word_count.min(MAX_PREALLOC));
        for _ in 0..word_count {
            words.push(
                self.reader
                    .read_i32::<BigEndian>()
                    .map_err(|e| truncated(e, "texture words"))?,
            );
        }
        TextureBlock::from_words(header, words)
    }
}

fn truncated(err: io::Error, section: &'static str) -> VmodError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        VmodError::Truncated { section }
    } else {
        VmodError::Io(err)
    }
}

/// Read a complete VMOD file from memory
pub fn read_vmod(bytes: &[u8], variant: VmodVariant) -> Result<VmodModel, VmodError> {
    VmodReader::new(bytes).read_model(variant)
}
