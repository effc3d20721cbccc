//! In-memory representation of a whole VMOD file

use super::texture::TextureBlock;
use super::{
    COLOR_COMPONENTS, FACE_COMPONENTS, NORMAL_COMPONENTS, POSITION_COMPONENTS,
    TEX_COORD_COMPONENTS, VMOD_HEADER_SIZE,
};
use crate::error::VmodError;

/// Which variant-specific section follows the normals
///
/// The two variants are mutually exclusive and not self-describing, so a
/// reader must know which one it is decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmodVariant {
    /// Texture count followed by texture blocks
    Textured,
    /// Per-vertex color section
    Colored,
}

/// Section written between the normals and the faces
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraSection {
    /// Embedded textures, in scene order
    Textures(Vec<TextureBlock>),
    /// Flat RGB color scalars, 3 per vertex
    Colors(Vec<f32>),
}

impl ExtraSection {
    pub fn variant(&self) -> VmodVariant {
        match self {
            ExtraSection::Textures(_) => VmodVariant::Textured,
            ExtraSection::Colors(_) => VmodVariant::Colored,
        }
    }
}

impl Default for ExtraSection {
    fn default() -> Self {
        ExtraSection::Colors(Vec::new())
    }
}

/// A fully materialized VMOD model
///
/// Attribute sequences are flat scalar lists (3 per position, 2 per tex
/// coord, ...). Face indices are stored exactly as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VmodModel {
    pub positions: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub normals: Vec<f32>,
    pub extra: ExtraSection,
    pub faces: Vec<i32>,
}

impl VmodModel {
    pub fn variant(&self) -> VmodVariant {
        self.extra.variant()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_COMPONENTS
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len() / FACE_COMPONENTS
    }

    pub fn textures(&self) -> &[TextureBlock] {
        match &self.extra {
            ExtraSection::Textures(textures) => textures,
            ExtraSection::Colors(_) => &[],
        }
    }

    pub fn colors(&self) -> &[f32] {
        match &self.extra {
            ExtraSection::Colors(colors) => colors,
            ExtraSection::Textures(_) => &[],
        }
    }

    /// Check every section can be written with logical int32 counts
    pub fn validate(&self) -> Result<(), VmodError> {
        check_section("positions", self.positions.len(), POSITION_COMPONENTS)?;
        check_section("tex coords", self.tex_coords.len(), TEX_COORD_COMPONENTS)?;
        check_section("normals", self.normals.len(), NORMAL_COMPONENTS)?;
        match &self.extra {
            ExtraSection::Textures(textures) => {
                count_field("textures", textures.len())?;
                for texture in textures {
                    if texture.words.len() != texture.header.word_count() {
                        return Err(VmodError::TextureSize {
                            width: texture.header.width,
                            height: texture.header.height,
                            channels: texture.header.channels,
                            expected: texture.header.word_count(),
                            found: texture.words.len(),
                        });
                    }
                }
            }
            ExtraSection::Colors(colors) => {
                check_section("colors", colors.len(), COLOR_COMPONENTS)?;
            }
        }
        check_section("faces", self.faces.len(), FACE_COMPONENTS)?;
        Ok(())
    }

    /// Total encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        let section = |len: usize| 4 + len * 4;
        let extra = match &self.extra {
            ExtraSection::Textures(textures) => {
                4 + textures.iter().map(TextureBlock::encoded_len).sum::<usize>()
            }
            ExtraSection::Colors(colors) => section(colors.len()),
        };
        VMOD_HEADER_SIZE
            + section(self.positions.len())
            + section(self.tex_coords.len())
            + section(self.normals.len())
            + extra
            + section(self.faces.len())
    }

    /// Encode the model into a new byte buffer
    pub fn encode(&self) -> Result<Vec<u8>, VmodError> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        super::write_vmod(&mut bytes, self)?;
        Ok(bytes)
    }

    /// Decode a model, reading the variant section as `variant`
    pub fn decode(bytes: &[u8], variant: VmodVariant) -> Result<Self, VmodError> {
        super::read_vmod(bytes, variant)
    }
}

/// Convert a length into an int32 count field
pub(crate) fn count_field(section: &'static str, count: usize) -> Result<i32, VmodError> {
    i32::try_from(count).map_err(|_| VmodError::CountOverflow { section, count })
}

/// Logical element count of a flat section
pub(crate) fn check_section(
    section: &'static str,
    len: usize,
    components: usize,
) -> Result<i32, VmodError> {
    if len % components != 0 {
        return Err(VmodError::RaggedSection {
            section,
            len,
            components,
        });
    }
    count_field(section, len / components)
}
