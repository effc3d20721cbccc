//! Attribute de-interleaving
//!
//! Pulls one attribute kind out of every material's interleaved buffer and
//! concatenates the results in scene order.

use super::format::AttributeTag;
use crate::error::ExportError;
use crate::scene::Material;

/// Extract `kind` from all materials, in material order
///
/// Materials whose descriptor lacks the attribute contribute nothing.
pub fn extract_attributes(
    materials: &[Material],
    kind: AttributeTag,
) -> Result<Vec<f32>, ExportError> {
    let mut result = Vec::new();
    for material in materials {
        result.extend(extract_material_attribute(material, kind)?);
    }
    Ok(result)
}

/// Extract `kind` from a single material's buffer
pub fn extract_material_attribute(
    material: &Material,
    kind: AttributeTag,
) -> Result<Vec<f32>, ExportError> {
    let format = material.vertex_format()?;

    let Some((offset, tag)) = format.locate(kind.attribute) else {
        tracing::debug!(
            "Material '{}' ({}) has no '{}' attribute",
            material.name,
            material.format,
            kind.attribute.letter()
        );
        return Ok(Vec::new());
    };

    if tag.components < kind.components {
        return Err(ExportError::ComponentMismatch {
            material: material.name.clone(),
            attribute: kind.attribute.letter(),
            requested: kind.components,
            found: tag.components,
        });
    }

    // Descriptors always have at least one non-zero tag
    let stride = format.stride();
    let size = kind.components as usize;
    let vertex_count = material.vertices.len() / stride;

    let leftover = material.vertices.len() % stride;
    if leftover != 0 {
        tracing::warn!(
            "Material '{}' buffer has {} trailing scalars (stride {}), ignoring partial vertex",
            material.name,
            leftover,
            stride
        );
    }

    let mut result = Vec::with_capacity(vertex_count * size);
    for vertex in material.vertices.chunks_exact(stride) {
        result.extend_from_slice(&vertex[offset..offset + size]);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_leading_tex_coords() {
        let material = Material::new("m", "T2F_V3F", vec![0.5, 0.5, 1.0, 2.0, 3.0]);
        let materials = [material];

        assert_eq!(
            extract_attributes(&materials, AttributeTag::TEX_COORD).unwrap(),
            vec![0.5, 0.5]
        );
        assert_eq!(
            extract_attributes(&materials, AttributeTag::POSITION).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_full_interleaved_layout() {
        #[rustfmt::skip]
        let vertices = vec![
            // T          C              N              V
            0.0, 1.0,  0.1, 0.2, 0.3,  0.0, 0.0, 1.0,  1.0, 2.0, 3.0,
            1.0, 0.0,  0.4, 0.5, 0.6,  0.0, 1.0, 0.0,  4.0, 5.0, 6.0,
        ];
        let materials = [Material::new("m", "T2F_C3F_N3F_V3F", vertices)];

        assert_eq!(
            extract_attributes(&materials, AttributeTag::COLOR).unwrap(),
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]
        );
        assert_eq!(
            extract_attributes(&materials, AttributeTag::NORMAL).unwrap(),
            vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(
            extract_attributes(&materials, AttributeTag::POSITION).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_missing_attribute_contributes_nothing() {
        let materials = [
            Material::new("plain", "V3F", vec![1.0, 1.0, 1.0]),
            Material::new("uv", "T2F_V3F", vec![0.25, 0.75, 2.0, 2.0, 2.0]),
        ];
        assert_eq!(
            extract_attributes(&materials, AttributeTag::TEX_COORD).unwrap(),
            vec![0.25, 0.75]
        );
        assert!(
            extract_attributes(&materials, AttributeTag::NORMAL)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_concatenates_in_material_order() {
        let materials = [
            Material::new("a", "N3F_V3F", vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
            Material::new("b", "V3F", vec![2.0, 2.0, 2.0, 3.0, 3.0, 3.0]),
            Material::new("c", "T2F_V3F", vec![0.0, 0.0, 4.0, 4.0, 4.0]),
        ];
        let positions = extract_attributes(&materials, AttributeTag::POSITION).unwrap();
        assert_eq!(
            positions,
            vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0]
        );
        // 1 + 2 + 1 vertices
        assert_eq!(positions.len(), (1 + 2 + 1) * 3);
    }

    #[test]
    fn test_partial_vertex_ignored() {
        let materials = [Material::new("m", "V3F", vec![1.0, 2.0, 3.0, 4.0])];
        assert_eq!(
            extract_attributes(&materials, AttributeTag::POSITION).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_malformed_descriptor_propagates() {
        let materials = [
            Material::new("ok", "V3F", vec![0.0; 3]),
            Material::new("broken", "T2F_VxF", vec![0.0; 5]),
        ];
        let err = extract_attributes(&materials, AttributeTag::POSITION).unwrap_err();
        match err {
            ExportError::MalformedDescriptor { material, .. } => assert_eq!(material, "broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_descriptor_fails_even_without_match() {
        // The descriptor is invalid regardless of which kind is requested
        let materials = [Material::new("broken", "C3F_", vec![0.0; 3])];
        assert!(extract_attributes(&materials, AttributeTag::POSITION).is_err());
    }

    #[test]
    fn test_component_mismatch() {
        let materials = [Material::new("m", "T1F_V3F", vec![0.0; 4])];
        let err = extract_attributes(&materials, AttributeTag::TEX_COORD).unwrap_err();
        assert!(matches!(
            err,
            ExportError::ComponentMismatch {
                requested: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_wider_tag_copies_requested_components() {
        // 4-component positions, 3 requested: the w component is dropped
        let materials = [Material::new("m", "V4F", vec![1.0, 2.0, 3.0, 9.0])];
        assert_eq!(
            extract_attributes(&materials, AttributeTag::POSITION).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
    }
}
