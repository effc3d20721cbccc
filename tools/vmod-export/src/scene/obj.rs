//! OBJ scene loading
//!
//! Loads a Wavefront OBJ (and its MTL library) with `tobj` and regroups the
//! geometry per material: every face corner becomes one interleaved vertex in
//! `T2F_C3F_N3F_V3F` order, restricted to the attributes all of that
//! material's faces provide.

use anyhow::{Context, Result, bail};
use hashbrown::HashMap;
use std::path::Path;

use super::types::{Material, Mesh, Scene};
use crate::mesh::{Attribute, AttributeTag, VertexFormat};

/// Name given to geometry that has no `usemtl`
pub const DEFAULT_MATERIAL: &str = "default";

/// Attributes a model supplies for every face corner
#[derive(Debug, Clone, Copy)]
struct Channels {
    tex_coords: bool,
    colors: bool,
    normals: bool,
}

impl Channels {
    fn of(mesh: &tobj::Mesh) -> Self {
        let corners = mesh.indices.len();
        Self {
            tex_coords: !mesh.texcoords.is_empty() && mesh.texcoord_indices.len() == corners,
            colors: !mesh.vertex_color.is_empty()
                && mesh.vertex_color.len() == mesh.positions.len(),
            normals: !mesh.normals.is_empty() && mesh.normal_indices.len() == corners,
        }
    }

    fn intersect(self, other: Self) -> Self {
        Self {
            tex_coords: self.tex_coords && other.tex_coords,
            colors: self.colors && other.colors,
            normals: self.normals && other.normals,
        }
    }

    fn format(self) -> VertexFormat {
        let mut tags = Vec::with_capacity(4);
        if self.tex_coords {
            tags.push(AttributeTag::TEX_COORD);
        }
        if self.colors {
            tags.push(AttributeTag::COLOR);
        }
        if self.normals {
            tags.push(AttributeTag::NORMAL);
        }
        tags.push(AttributeTag::POSITION);
        VertexFormat::new(tags)
    }
}

/// Material being assembled while walking the models
struct MaterialSlot {
    material: Material,
    channels: Channels,
    vertex_count: usize,
}

/// Load an OBJ file into a [`Scene`]
///
/// Polygons are triangulated. Texture paths from the MTL file are resolved
/// relative to the OBJ file's directory. Face indices address the
/// concatenation of all materials' vertices, in material order.
pub fn load_obj(input: &Path) -> Result<Scene> {
    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };

    let (models, obj_materials) = tobj::load_obj(input, &load_options)
        .with_context(|| format!("Failed to parse OBJ: {:?}", input))?;
    let obj_materials = obj_materials
        .with_context(|| format!("Failed to load MTL materials for OBJ: {:?}", input))?;

    let base_dir = input.parent().unwrap_or(Path::new(""));

    // First pass: material order (first use) and shared attribute channels
    let mut slots: Vec<MaterialSlot> = Vec::new();
    let mut slot_of: HashMap<Option<usize>, usize> = HashMap::new();

    for model in &models {
        if model.mesh.indices.is_empty() {
            continue;
        }
        let channels = Channels::of(&model.mesh);
        let key = slot_key(model.mesh.material_id, obj_materials.len());

        match slot_of.get(&key) {
            Some(&slot) => {
                let slot = &mut slots[slot];
                slot.channels = slot.channels.intersect(channels);
            }
            None => {
                let material = match key.and_then(|id| obj_materials.get(id)) {
                    Some(m) => Material {
                        name: m.name.clone(),
                        texture: m.diffuse_texture.as_ref().map(|t| base_dir.join(t)),
                        ambient_texture: m.ambient_texture.as_ref().map(|t| base_dir.join(t)),
                        ..Default::default()
                    },
                    None => Material {
                        name: DEFAULT_MATERIAL.to_string(),
                        ..Default::default()
                    },
                };
                slot_of.insert(key, slots.len());
                slots.push(MaterialSlot {
                    material,
                    channels,
                    vertex_count: 0,
                });
            }
        }
    }

    for slot in &mut slots {
        slot.material.format = slot.channels.format().to_string();
    }

    // Second pass: interleave vertices, remembering faces as (slot, local index)
    let mut pending: Vec<(String, Vec<(usize, [usize; 3])>)> = Vec::with_capacity(models.len());

    for model in &models {
        let mesh = &model.mesh;
        if mesh.indices.is_empty() {
            continue;
        }
        let slot_index = slot_of[&slot_key(mesh.material_id, obj_materials.len())];
        let slot = &mut slots[slot_index];

        let own = Channels::of(mesh);
        if (own.tex_coords && !slot.channels.tex_coords)
            || (own.colors && !slot.channels.colors)
            || (own.normals && !slot.channels.normals)
        {
            tracing::warn!(
                "Model '{}' has attributes not shared by all users of material '{}', dropping them",
                model.name,
                slot.material.name
            );
        }

        let first_local = slot.vertex_count;
        for corner in 0..mesh.indices.len() {
            push_corner(&mut slot.material.vertices, mesh, corner, slot.channels)
                .with_context(|| format!("Invalid face data in object '{}'", model.name))?;
        }
        slot.vertex_count += mesh.indices.len();

        let faces = (0..mesh.indices.len() / 3)
            .map(|tri| {
                let base = first_local + tri * 3;
                (slot_index, [base, base + 1, base + 2])
            })
            .collect();
        pending.push((model.name.clone(), faces));
    }

    // Global numbering: materials are concatenated in slot order
    let mut bases = Vec::with_capacity(slots.len());
    let mut total = 0usize;
    for slot in &slots {
        bases.push(total);
        total += slot.vertex_count;
    }
    if i32::try_from(total).is_err() {
        bail!(
            "OBJ has {} face vertices, exceeds the int32 index range of the VMOD format",
            total
        );
    }

    let meshes = pending
        .into_iter()
        .map(|(name, faces)| {
            let faces = faces
                .into_iter()
                .map(|(slot, local)| local.map(|i| (bases[slot] + i) as i32))
                .collect();
            Mesh::new(name, faces)
        })
        .collect();

    let materials: Vec<Material> = slots.into_iter().map(|slot| slot.material).collect();

    for material in &materials {
        tracing::debug!(
            "Material '{}': format={}, {} scalars",
            material.name,
            material.format,
            material.vertices.len()
        );
    }

    Ok(Scene::new(materials, meshes))
}

/// Material slot for a mesh; ids without an MTL entry share the default slot
fn slot_key(material_id: Option<usize>, material_count: usize) -> Option<usize> {
    material_id.filter(|&id| id < material_count)
}

/// Append one face corner to an interleaved buffer
fn push_corner(
    out: &mut Vec<f32>,
    mesh: &tobj::Mesh,
    corner: usize,
    channels: Channels,
) -> Result<()> {
    let vi = mesh.indices[corner] as usize;

    if channels.tex_coords {
        let ti = mesh.texcoord_indices[corner] as usize;
        push_element(out, &mesh.texcoords, ti, Attribute::TexCoord, 2)?;
    }
    if channels.colors {
        push_element(out, &mesh.vertex_color, vi, Attribute::Color, 3)?;
    }
    if channels.normals {
        let ni = mesh.normal_indices[corner] as usize;
        push_element(out, &mesh.normals, ni, Attribute::Normal, 3)?;
    }
    push_element(out, &mesh.positions, vi, Attribute::Position, 3)
}

fn push_element(
    out: &mut Vec<f32>,
    source: &[f32],
    index: usize,
    attribute: Attribute,
    size: usize,
) -> Result<()> {
    let element = source
        .get(index * size..(index + 1) * size)
        .with_context(|| format!("'{}' index {} out of range", attribute.letter(), index))?;
    out.extend_from_slice(element);
    Ok(())
}
