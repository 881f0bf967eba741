//! Rigid-body physics for the die, backed by avian3d.
//!
//! Avian owns the simulation: gravity, contacts between the die and the
//! invisible floor slabs, impulses and sleeping. This module adds the collider
//! shapes the scene uses and the timed move/rotate actions that drive a roll.

/// Timed `MoveBy` and `RotateBy` actions.
pub mod actions;

/// Collider shapes and surface parameters for dice and floors.
pub mod body;

use avian3d::prelude::*;
use bevy::prelude::*;
use constants::placement::GRAVITY;

use crate::engine::core::app_state::AppState;
use actions::advance_actions;

pub struct DicePhysicsPlugin;

impl Plugin for DicePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default())
            .insert_resource(Gravity(Vec3::Y * GRAVITY))
            .add_systems(
                Update,
                advance_actions.run_if(in_state(AppState::Running)),
            );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use avian3d::prelude::*;
    use bevy::prelude::*;
    use bevy::time::TimeUpdateStrategy;
    use constants::placement::GRAVITY;
    use std::time::Duration;

    use super::actions::advance_actions;

    /// Headless app stepping one fixed physics tick per update.
    pub fn physics_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, TransformPlugin, PhysicsPlugins::default()))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_micros(15625)))
            .insert_resource(Gravity(Vec3::Y * GRAVITY))
            .add_systems(Update, advance_actions);
        app.finish();
        app.cleanup();
        app
    }

    /// World height of the lowest corner of a cube with the given half extent.
    pub fn lowest_corner(transform: &Transform, half: f32) -> f32 {
        let mut lowest = f32::INFINITY;
        for x in [-half, half] {
            for y in [-half, half] {
                for z in [-half, half] {
                    let corner = transform.transform_point(Vec3::new(x, y, z));
                    lowest = lowest.min(corner.y);
                }
            }
        }
        lowest
    }
}
