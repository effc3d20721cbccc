//! Face index flattening

use crate::scene::Scene;

/// Flatten every mesh's triangles into one index list
///
/// Meshes in scene order, faces in mesh order, indices as given. Values are
/// not checked against the vertex count.
pub fn extract_faces(scene: &Scene) -> Vec<i32> {
    scene
        .meshes
        .iter()
        .flat_map(|mesh| mesh.faces.iter())
        .flat_map(|face| face.iter().copied())
        .collect()
}
