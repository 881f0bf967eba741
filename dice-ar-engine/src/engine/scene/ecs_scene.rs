use avian3d::prelude::*;
use bevy::prelude::*;

use super::scene_assets::SceneAssets;
use crate::engine::physics::actions::{MoveBy, RotateBy};
use crate::engine::physics::body::{die_collider, die_surface, floor_collider};
use crate::tools::placement::pose::Pose;
use crate::tools::placement::services::{NodeId, NodeKind, ScenePhysics};

/// Tags every entity created through `EcsScene`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneNode(pub NodeKind);

/// Removed from the scene but kept for a later restore. Holds the node's
/// collider while detached.
#[derive(Component)]
pub struct Detached {
    collider: Option<Collider>,
}

/// Scene/physics service over deferred `Commands`.
///
/// Node ids are entities. Commands against an entity that no longer exists
/// are skipped.
pub struct EcsScene<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    assets: &'a SceneAssets,
}

impl<'a, 'w, 's> EcsScene<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, assets: &'a SceneAssets) -> Self {
        Self { commands, assets }
    }

    fn set_translation(&mut self, node: NodeId, position: Vec3) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.queue(move |mut entity: EntityWorldMut| {
                if let Some(mut transform) = entity.get_mut::<Transform>() {
                    transform.translation = position;
                }
            });
        }
    }
}

impl ScenePhysics for EcsScene<'_, '_, '_> {
    fn add_node(&mut self, kind: NodeKind, pose: Pose) -> NodeId {
        let transform = Transform::from(pose);
        match kind {
            NodeKind::Indicator => self
                .commands
                .spawn((
                    SceneNode(kind),
                    Name::new("SurfaceIndicator"),
                    Mesh3d(self.assets.indicator_mesh.clone()),
                    MeshMaterial3d(self.assets.indicator_material.clone()),
                    transform,
                ))
                .id(),
            NodeKind::Die => self
                .commands
                .spawn((
                    SceneNode(kind),
                    Name::new("Die"),
                    Mesh3d(self.assets.die_mesh.clone()),
                    MeshMaterial3d(self.assets.die_material.clone()),
                    die_collider(self.assets.die_size),
                    die_surface(),
                    transform,
                ))
                .id(),
            NodeKind::Floor => self
                .commands
                .spawn((
                    SceneNode(kind),
                    Name::new("FloorFixture"),
                    floor_collider(self.assets.floor_size),
                    transform,
                    Visibility::Hidden,
                ))
                .id(),
        }
    }

    fn remove_node(&mut self, node: NodeId) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.queue(|mut entity: EntityWorldMut| {
                if entity.contains::<Detached>() {
                    return;
                }
                let collider = entity.take::<Collider>();
                entity
                    .remove::<(RigidBody, Sleeping, MoveBy, RotateBy)>()
                    .insert((Detached { collider }, Visibility::Hidden));
            });
        }
    }

    fn destroy_node(&mut self, node: NodeId) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.try_despawn();
        }
    }

    fn restore_node(&mut self, node: NodeId, position: Vec3) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.queue(|mut entity: EntityWorldMut| {
                if let Some(collider) = entity.take::<Detached>().and_then(|d| d.collider) {
                    entity.insert(collider);
                }
                entity.insert(Visibility::Inherited);
            });
        }
        self.set_translation(node, position);
    }

    fn set_position(&mut self, node: NodeId, position: Vec3) {
        self.set_translation(node, position);
    }

    fn attach_static_body(&mut self, node: NodeId) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.insert((RigidBody::Static, LinearVelocity::ZERO, AngularVelocity::ZERO));
        }
    }

    fn attach_dynamic_body(&mut self, node: NodeId) {
        let mass = self.assets.die_mass;
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity
                .insert((RigidBody::Dynamic, Mass(mass)))
                .remove::<Sleeping>();
        }
    }

    fn apply_impulse(&mut self, node: NodeId, impulse: Vec3) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.queue(move |mut entity: EntityWorldMut| {
                if let Some(mut pending) = entity.get_mut::<ExternalImpulse>() {
                    pending.apply_impulse(impulse);
                } else {
                    entity.insert(ExternalImpulse::new(impulse));
                }
            });
        }
    }

    fn animate_rotation(&mut self, node: NodeId, angles: Vec3, duration: f32) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.insert(RotateBy::new(angles, duration));
        }
    }

    fn animate_translation(&mut self, node: NodeId, delta: Vec3, duration: f32) {
        if let Ok(mut entity) = self.commands.get_entity(node) {
            entity.insert(MoveBy::new(delta, duration));
        }
    }
}
