//! Vertex format descriptors
//!
//! A descriptor such as `T2F_C3F_N3F_V3F` lists the attributes of an
//! interleaved vertex buffer in storage order. Each `_`-separated segment is
//! an attribute letter, a single-digit component count and an optional `F`
//! scalar type.

use std::fmt;
use std::str::FromStr;

use crate::error::{DescriptorError, ExportError};

/// Attribute identity carried by a descriptor tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    TexCoord,
    Color,
    Normal,
    Position,
}

impl Attribute {
    pub const fn letter(self) -> char {
        match self {
            Attribute::TexCoord => 'T',
            Attribute::Color => 'C',
            Attribute::Normal => 'N',
            Attribute::Position => 'V',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(Attribute::TexCoord),
            'C' => Some(Attribute::Color),
            'N' => Some(Attribute::Normal),
            'V' => Some(Attribute::Position),
            _ => None,
        }
    }
}

/// One typed attribute: identity plus component count
///
/// Used both for the tags of a descriptor and for the attribute kind
/// requested from the de-interleaver (`V3`, `T2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeTag {
    pub attribute: Attribute,
    pub components: u8,
}

impl AttributeTag {
    pub const POSITION: Self = Self::new(Attribute::Position, 3);
    pub const TEX_COORD: Self = Self::new(Attribute::TexCoord, 2);
    pub const NORMAL: Self = Self::new(Attribute::Normal, 3);
    pub const COLOR: Self = Self::new(Attribute::Color, 3);

    pub const fn new(attribute: Attribute, components: u8) -> Self {
        Self {
            attribute,
            components,
        }
    }

    /// Parse a single segment like `V3F` or `T2`
    pub fn parse_segment(segment: &str) -> Result<Self, DescriptorError> {
        let mut chars = segment.chars();
        let letter = chars.next().ok_or(DescriptorError::EmptySegment { index: 0 })?;
        let attribute =
            Attribute::from_letter(letter).ok_or_else(|| DescriptorError::UnknownAttribute {
                letter,
                segment: segment.to_string(),
            })?;

        let components = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|&n| n > 0)
            .ok_or_else(|| DescriptorError::InvalidComponentCount {
                segment: segment.to_string(),
            })?;

        match chars.as_str() {
            "" | "F" => Ok(Self::new(attribute, components as u8)),
            rest if rest.starts_with(|c: char| c.is_ascii_digit()) => {
                Err(DescriptorError::InvalidComponentCount {
                    segment: segment.to_string(),
                })
            }
            _ => Err(DescriptorError::UnsupportedScalarType {
                segment: segment.to_string(),
            }),
        }
    }

    /// Parse a requested attribute kind (`"V3"`, `"T2F"`, ...)
    pub fn parse_kind(kind: &str) -> Result<Self, ExportError> {
        Self::parse_segment(kind).map_err(|_| ExportError::InvalidAttributeKind(kind.to_string()))
    }
}

impl fmt::Display for AttributeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}F", self.attribute.letter(), self.components)
    }
}

/// Parsed vertex format descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexFormat {
    tags: Vec<AttributeTag>,
}

impl VertexFormat {
    pub fn new(tags: Vec<AttributeTag>) -> Self {
        Self { tags }
    }

    /// Parse a descriptor, validating every segment eagerly
    pub fn parse(descriptor: &str) -> Result<Self, DescriptorError> {
        if descriptor.is_empty() {
            return Err(DescriptorError::Empty);
        }
        let tags = descriptor
            .split('_')
            .enumerate()
            .map(|(index, segment)| {
                if segment.is_empty() {
                    return Err(DescriptorError::EmptySegment { index });
                }
                AttributeTag::parse_segment(segment)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tags })
    }

    pub fn tags(&self) -> &[AttributeTag] {
        &self.tags
    }

    /// Scalars per vertex
    pub fn stride(&self) -> usize {
        self.tags.iter().map(|t| t.components as usize).sum()
    }

    /// Offset (in scalars) and tag of the first occurrence of `attribute`
    pub fn locate(&self, attribute: Attribute) -> Option<(usize, AttributeTag)> {
        let mut offset = 0;
        for tag in &self.tags {
            if tag.attribute == attribute {
                return Some((offset, *tag));
            }
            offset += tag.components as usize;
        }
        None
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.tags.iter().any(|t| t.attribute == attribute)
    }
}

impl FromStr for VertexFormat {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VertexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str("_")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let format = VertexFormat::parse("T2F_C3F_N3F_V3F").unwrap();
        assert_eq!(format.tags().len(), 4);
        assert_eq!(format.stride(), 11);
        assert_eq!(format.locate(Attribute::TexCoord), Some((0, AttributeTag::TEX_COORD)));
        assert_eq!(format.locate(Attribute::Color), Some((2, AttributeTag::COLOR)));
        assert_eq!(format.locate(Attribute::Normal), Some((5, AttributeTag::NORMAL)));
        assert_eq!(format.locate(Attribute::Position), Some((8, AttributeTag::POSITION)));
    }

    #[test]
    fn test_missing_attribute() {
        let format = VertexFormat::parse("N3F_V3F").unwrap();
        assert_eq!(format.locate(Attribute::TexCoord), None);
        assert!(!format.contains(Attribute::Color));
    }

    #[test]
    fn test_type_letter_optional() {
        let format: VertexFormat = "T2_V3".parse().unwrap();
        assert_eq!(format.stride(), 5);
        assert_eq!(format.to_string(), "T2F_V3F");
    }

    #[test]
    fn test_first_match_wins() {
        let format = VertexFormat::parse("V3F_V4F").unwrap();
        assert_eq!(format.locate(Attribute::Position), Some((0, AttributeTag::POSITION)));
        assert_eq!(format.stride(), 7);
    }

    #[test]
    fn test_non_digit_count() {
        assert_eq!(
            VertexFormat::parse("T2F_VxF"),
            Err(DescriptorError::InvalidComponentCount {
                segment: "VxF".into()
            })
        );
    }

    #[test]
    fn test_zero_and_multi_digit_counts() {
        assert!(matches!(
            VertexFormat::parse("V0F"),
            Err(DescriptorError::InvalidComponentCount { .. })
        ));
        assert!(matches!(
            VertexFormat::parse("V12F"),
            Err(DescriptorError::InvalidComponentCount { .. })
        ));
        assert!(matches!(
            VertexFormat::parse("V"),
            Err(DescriptorError::InvalidComponentCount { .. })
        ));
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(VertexFormat::parse(""), Err(DescriptorError::Empty));
        assert_eq!(
            VertexFormat::parse("T2F__V3F"),
            Err(DescriptorError::EmptySegment { index: 1 })
        );
        assert_eq!(
            VertexFormat::parse("V3F_"),
            Err(DescriptorError::EmptySegment { index: 1 })
        );
    }

    #[test]
    fn test_unknown_letter_and_type() {
        assert!(matches!(
            VertexFormat::parse("X3F"),
            Err(DescriptorError::UnknownAttribute { letter: 'X', .. })
        ));
        assert!(matches!(
            VertexFormat::parse("V3D"),
            Err(DescriptorError::UnsupportedScalarType { .. })
        ));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(AttributeTag::parse_kind("V3").unwrap(), AttributeTag::POSITION);
        assert_eq!(AttributeTag::parse_kind("T2F").unwrap(), AttributeTag::TEX_COORD);
        assert!(matches!(
            AttributeTag::parse_kind("Q3"),
            Err(ExportError::InvalidAttributeKind(_))
        ));
    }
}
