use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use constants::placement::DIE_FACES;

use super::ecs_scene::SceneNode;
use crate::tools::placement::services::NodeKind;

/// Pip count of the face with the given outward local normal.
///
/// +Z 1, +X 2, +Y 3, -Y 4, -X 5, -Z 6: opposite faces sum to seven.
pub fn face_value(normal: Vec3) -> u32 {
    let a = normal.abs();
    if a.x >= a.y && a.x >= a.z {
        if normal.x >= 0.0 { 2 } else { 5 }
    } else if a.y >= a.z {
        if normal.y >= 0.0 { 3 } else { 4 }
    } else if normal.z >= 0.0 {
        1
    } else {
        6
    }
}

/// Value showing on top of a die with this orientation.
pub fn face_up(rotation: Quat) -> u32 {
    face_value(rotation.inverse() * Vec3::Y)
}

/// 1.0 when a face points straight up, down to 1/√3 balanced on a corner.
pub fn face_alignment(rotation: Quat) -> f32 {
    (rotation.inverse() * Vec3::Y).abs().max_element()
}

/// Maps a face-local UV into that face's cell of the horizontal pip atlas.
pub fn atlas_uv(uv: [f32; 2], value: u32) -> [f32; 2] {
    let cell = value.clamp(1, DIE_FACES) - 1;
    [(cell as f32 + uv[0]) / DIE_FACES as f32, uv[1]]
}

/// Cube mesh whose faces sample their own cell of the pip atlas.
pub fn die_mesh(size: f32) -> Mesh {
    let mut mesh = Mesh::from(Cuboid::new(size, size, size));
    let Some(VertexAttributeValues::Float32x3(normals)) =
        mesh.attribute(Mesh::ATTRIBUTE_NORMAL).cloned()
    else {
        return mesh;
    };
    if let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute_mut(Mesh::ATTRIBUTE_UV_0) {
        for (uv, normal) in uvs.iter_mut().zip(&normals) {
            *uv = atlas_uv(*uv, face_value(Vec3::from_array(*normal)));
        }
    }
    mesh
}

// Reports the result once a rolled die falls asleep
pub fn log_settled_dice(
    dice: Query<(Entity, &SceneNode, &RigidBody, &Transform), Added<Sleeping>>,
) {
    for (entity, node, body, transform) in &dice {
        if node.0 != NodeKind::Die || !body.is_dynamic() {
            continue;
        }
        info!(
            "Die {entity} settled showing {} (alignment {:.3})",
            face_up(transform.rotation),
            face_alignment(transform.rotation)
        );
    }
}
