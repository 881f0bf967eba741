use bevy::prelude::*;
use constants::coordinate_system::FLAT_ON_SURFACE_X;

/// World-space position and orientation of a scene node, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Same position, with XY-plane geometry laid flat on a horizontal surface.
    pub fn flat(self) -> Self {
        Self {
            rotation: Quat::from_rotation_x(FLAT_ON_SURFACE_X),
            ..self
        }
    }

    pub fn raised(self, height: f32) -> Self {
        Self {
            position: self.position + Vec3::Y * height,
            ..self
        }
    }
}

impl From<Pose> for Transform {
    fn from(pose: Pose) -> Self {
        Transform::from_translation(pose.position).with_rotation(pose.rotation)
    }
}

/// Camera state handed to the surface tracker on every frame tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub transform: Transform,
    /// Logical viewport size in pixels.
    pub viewport_size: Vec2,
    /// Vertical field of view in radians.
    pub vertical_fov: f32,
}

impl CameraPose {
    /// Build from a perspective Bevy camera. Orthographic cameras are not supported.
    pub fn from_camera(
        camera: &Camera,
        camera_transform: &GlobalTransform,
        projection: &Projection,
    ) -> Option<Self> {
        let Projection::Perspective(perspective) = projection else {
            return None;
        };
        let viewport_size = camera.logical_viewport_size()?;

        Some(Self {
            transform: camera_transform.compute_transform(),
            viewport_size,
            vertical_fov: perspective.fov,
        })
    }

    pub fn screen_centre(&self) -> Vec2 {
        self.viewport_size * 0.5
    }

    /// Ray through a viewport point (logical pixels, origin top-left) using a pinhole model.
    pub fn ray_through(&self, screen_point: Vec2) -> Option<Ray3d> {
        if self.viewport_size.x <= 0.0 || self.viewport_size.y <= 0.0 {
            return None;
        }

        let ndc = Vec2::new(
            screen_point.x / self.viewport_size.x * 2.0 - 1.0,
            1.0 - screen_point.y / self.viewport_size.y * 2.0,
        );
        let half_height = (self.vertical_fov * 0.5).tan();
        let aspect = self.viewport_size.x / self.viewport_size.y;
        let local = Vec3::new(ndc.x * half_height * aspect, ndc.y * half_height, -1.0);
        let direction = Dir3::new(self.transform.rotation * local).ok()?;

        Some(Ray3d::new(self.transform.translation, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(transform: Transform) -> CameraPose {
        CameraPose {
            transform,
            viewport_size: Vec2::new(800.0, 600.0),
            vertical_fov: std::f32::consts::FRAC_PI_4,
        }
    }

    #[test]
    fn centre_ray_follows_camera_forward() {
        let transform = Transform::from_xyz(0.0, 1.5, 2.0).looking_at(Vec3::ZERO, Vec3::Y);
        let camera = camera_at(transform);

        let ray = camera.ray_through(camera.screen_centre()).unwrap();

        assert_eq!(ray.origin, transform.translation);
        assert!((*ray.direction - *transform.forward()).length() < 1e-5);
    }

    #[test]
    fn top_of_screen_ray_points_upwards_of_centre() {
        let camera = camera_at(Transform::IDENTITY);

        let top = camera.ray_through(Vec2::new(400.0, 0.0)).unwrap();

        assert!(top.direction.y > 0.0);
        assert!(top.direction.z < 0.0);
    }

    #[test]
    fn degenerate_viewport_has_no_ray() {
        let mut camera = camera_at(Transform::IDENTITY);
        camera.viewport_size = Vec2::ZERO;

        assert!(camera.ray_through(Vec2::ZERO).is_none());
    }

    #[test]
    fn flat_pose_keeps_position_and_faces_up() {
        let pose = Pose::at(Vec3::new(1.0, 2.0, 3.0)).flat();

        assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
        // XY-plane geometry has +Z as its normal; laid flat it should point up.
        let normal = pose.rotation * Vec3::Z;
        assert!((normal - Vec3::Y).length() < 1e-5);
    }
}
