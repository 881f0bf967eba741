use bevy::prelude::*;
use constants::placement::{DIE_MASS, DIE_SIZE, FLOOR_SIZE, INDICATOR_SIZE};

use super::die_faces::die_mesh;
use super::textures::{die_atlas_image, reticle_image};

/// Shared meshes and materials for the nodes the placement flow spawns.
#[derive(Resource, Debug, Clone)]
pub struct SceneAssets {
    pub indicator_mesh: Handle<Mesh>,
    pub indicator_material: Handle<StandardMaterial>,
    pub die_mesh: Handle<Mesh>,
    pub die_material: Handle<StandardMaterial>,
    pub die_size: f32,
    pub die_mass: f32,
    pub floor_size: f32,
}

impl Default for SceneAssets {
    fn default() -> Self {
        Self {
            indicator_mesh: Handle::default(),
            indicator_material: Handle::default(),
            die_mesh: Handle::default(),
            die_material: Handle::default(),
            die_size: DIE_SIZE,
            die_mass: DIE_MASS,
            floor_size: FLOOR_SIZE,
        }
    }
}

pub fn create_scene_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    // Authored in the XY plane, laid flat by the node's pose.
    let indicator_mesh = meshes.add(Rectangle::new(INDICATOR_SIZE, INDICATOR_SIZE));
    let indicator_material = materials.add(StandardMaterial {
        base_color_texture: Some(images.add(reticle_image())),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let die_mesh = meshes.add(die_mesh(DIE_SIZE));
    let die_material = materials.add(StandardMaterial {
        base_color_texture: Some(images.add(die_atlas_image())),
        perceptual_roughness: 0.35,
        ..default()
    });

    commands.insert_resource(SceneAssets {
        indicator_mesh,
        indicator_material,
        die_mesh,
        die_material,
        ..default()
    });
}
