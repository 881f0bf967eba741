use avian3d::prelude::*;
use bevy::prelude::*;
use constants::placement::{
    DIE_ANGULAR_DAMPING, DIE_FRICTION, DIE_RESTITUTION, FLOOR_THICKNESS,
};

/// Box collider for a cube die.
pub fn die_collider(size: f32) -> Collider {
    Collider::cuboid(size, size, size)
}

/// Contact and damping parameters of a die.
pub fn die_surface() -> (Friction, Restitution, AngularDamping) {
    (
        Friction::new(DIE_FRICTION),
        Restitution::new(DIE_RESTITUTION),
        AngularDamping(DIE_ANGULAR_DAMPING),
    )
}

/// Slab collider for a flat floor node.
///
/// Floor nodes are authored in the local XY plane and laid flat by their
/// pose, so local +Z is the surface normal. The slab hangs below that plane,
/// which keeps the contact surface at the node's position.
pub fn floor_collider(size: f32) -> Collider {
    Collider::compound(vec![(
        Vec3::new(0.0, 0.0, -FLOOR_THICKNESS * 0.5),
        Quat::IDENTITY,
        Collider::cuboid(size, size, FLOOR_THICKNESS),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::testing::{lowest_corner, physics_app};
    use crate::tools::placement::pose::Pose;

    const FLOOR_Y: f32 = 0.75;
    const DIE: f32 = 0.1;

    fn spawn_floor(app: &mut App) {
        let floor: Transform = Pose::at(Vec3::new(0.0, FLOOR_Y, 0.0)).flat().into();
        app.world_mut()
            .spawn((RigidBody::Static, floor_collider(50.0), floor));
    }

    fn spawn_die(app: &mut App, transform: Transform) -> Entity {
        app.world_mut()
            .spawn((RigidBody::Dynamic, die_collider(DIE), die_surface(), transform))
            .id()
    }

    #[test]
    fn falling_die_comes_to_rest_on_the_floor_surface() {
        let mut app = physics_app();
        spawn_floor(&mut app);
        let die = spawn_die(&mut app, Transform::from_xyz(0.0, 1.5, 0.0));

        for _ in 0..300 {
            app.update();
        }

        let transform = *app.world().get::<Transform>(die).unwrap();
        assert!((transform.translation.y - (FLOOR_Y + DIE * 0.5)).abs() < 5e-3);
        assert!(lowest_corner(&transform, DIE * 0.5) > FLOOR_Y - 5e-3);
    }

    #[test]
    fn tilted_die_tips_onto_a_face() {
        let mut app = physics_app();
        spawn_floor(&mut app);
        let tilted = Transform::from_xyz(0.0, 0.9, 0.0)
            .with_rotation(Quat::from_euler(EulerRot::XYZ, 0.4, 0.3, 0.2));
        let die = spawn_die(&mut app, tilted);

        for _ in 0..400 {
            app.update();
        }

        let transform = *app.world().get::<Transform>(die).unwrap();
        let local_up = transform.rotation.inverse() * Vec3::Y;
        assert!(local_up.abs().max_element() > 0.99, "local up {local_up}");
        assert!(lowest_corner(&transform, DIE * 0.5) > FLOOR_Y - 5e-3);
    }

    #[test]
    fn static_bodies_stay_put() {
        let mut app = physics_app();
        let fixed = app
            .world_mut()
            .spawn((RigidBody::Static, die_collider(DIE), Transform::from_xyz(1.0, 2.0, 0.0)))
            .id();

        for _ in 0..30 {
            app.update();
        }

        assert_eq!(app.world().get::<Transform>(fixed).unwrap().translation.y, 2.0);
    }

    #[test]
    fn floor_surface_sits_at_the_node_position() {
        let floor = floor_collider(2.0);
        let pose: Transform = Pose::at(Vec3::new(0.0, FLOOR_Y, 0.0)).flat().into();

        let aabb = floor.aabb(pose.translation, pose.rotation);

        assert!((aabb.max.y - FLOOR_Y).abs() < 1e-4);
        assert!((aabb.min.y - (FLOOR_Y - FLOOR_THICKNESS)).abs() < 1e-4);
    }
}
