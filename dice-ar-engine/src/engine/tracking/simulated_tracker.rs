use bevy::prelude::*;
use constants::placement::FEATURE_POINT_TOLERANCE;

use crate::tools::placement::pose::{CameraPose, Pose};
use crate::tools::placement::services::{HitTestKind, SurfaceTracker};

/// Finite horizontal plane, e.g. a table top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedPlane {
    pub centre: Vec3,
    /// Half size along X and Z.
    pub half_extents: Vec2,
    pub discovered_after: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturePoint {
    pub position: Vec3,
    pub discovered_after: f32,
}

/// Unbounded horizontal plane guessed from the camera height, e.g. the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedPlane {
    pub height: f32,
    pub discovered_after: f32,
}

/// Stand-in AR session. Surfaces become visible one source at a time as the
/// scan clock passes each `discovered_after`.
#[derive(Resource, Debug, Clone)]
pub struct SimulatedSurfaceTracker {
    planes: Vec<TrackedPlane>,
    feature_points: Vec<FeaturePoint>,
    estimated_plane: Option<EstimatedPlane>,
    feature_tolerance: f32,
    scan_time: f32,
}

impl Default for SimulatedSurfaceTracker {
    fn default() -> Self {
        Self {
            planes: Vec::new(),
            feature_points: Vec::new(),
            estimated_plane: None,
            feature_tolerance: FEATURE_POINT_TOLERANCE,
            scan_time: 0.0,
        }
    }
}

impl SimulatedSurfaceTracker {
    pub fn with_plane(mut self, plane: TrackedPlane) -> Self {
        self.planes.push(plane);
        self
    }

    pub fn with_feature_point(mut self, point: FeaturePoint) -> Self {
        self.feature_points.push(point);
        self
    }

    pub fn with_estimated_plane(mut self, plane: EstimatedPlane) -> Self {
        self.estimated_plane = Some(plane);
        self
    }

    pub fn with_feature_tolerance(mut self, tolerance: f32) -> Self {
        self.feature_tolerance = tolerance;
        self
    }

    pub fn advance(&mut self, seconds: f32) {
        self.scan_time += seconds;
    }

    pub fn scan_time(&self) -> f32 {
        self.scan_time
    }

    fn discovered(&self, after: f32) -> bool {
        self.scan_time >= after
    }

    fn hit(&self, kind: HitTestKind, ray: &Ray3d) -> Option<Vec3> {
        match kind {
            HitTestKind::ExistingPlane => self.hit_planes(ray),
            HitTestKind::FeaturePoint => self.hit_feature_points(ray),
            HitTestKind::EstimatedHorizontalPlane => self
                .estimated_plane
                .filter(|plane| self.discovered(plane.discovered_after))
                .and_then(|plane| horizontal_plane_distance(ray, plane.height))
                .map(|t| ray.get_point(t)),
        }
    }

    fn hit_planes(&self, ray: &Ray3d) -> Option<Vec3> {
        self.planes
            .iter()
            .filter(|plane| self.discovered(plane.discovered_after))
            .filter_map(|plane| {
                let t = horizontal_plane_distance(ray, plane.centre.y)?;
                let point = ray.get_point(t);
                let inside = (point.x - plane.centre.x).abs() <= plane.half_extents.x
                    && (point.z - plane.centre.z).abs() <= plane.half_extents.y;
                inside.then_some((t, point))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, point)| point)
    }

    fn hit_feature_points(&self, ray: &Ray3d) -> Option<Vec3> {
        self.feature_points
            .iter()
            .filter(|point| self.discovered(point.discovered_after))
            .filter_map(|point| {
                let t = (point.position - ray.origin).dot(*ray.direction);
                let miss = (ray.get_point(t) - point.position).length();
                (t > 0.0 && miss <= self.feature_tolerance).then_some((t, point.position))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, position)| position)
    }
}

impl SurfaceTracker for SimulatedSurfaceTracker {
    fn query_pose(
        &self,
        screen_point: Vec2,
        camera: &CameraPose,
        priority: &[HitTestKind],
    ) -> Option<Pose> {
        let ray = camera.ray_through(screen_point)?;
        priority
            .iter()
            .find_map(|kind| self.hit(*kind, &ray))
            .map(Pose::at)
    }
}

/// Distance along the ray to the plane `y = height`, in front of the origin only.
fn horizontal_plane_distance(ray: &Ray3d, height: f32) -> Option<f32> {
    if ray.direction.y.abs() < 0.001 {
        return None;
    }
    let t = (height - ray.origin.y) / ray.direction.y;
    (t > 0.0).then_some(t)
}

pub fn advance_scan_clock(time: Res<Time>, mut tracker: ResMut<SimulatedSurfaceTracker>) {
    tracker.advance(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::placement::services::SURFACE_PRIORITY;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    const TABLE: TrackedPlane = TrackedPlane {
        centre: Vec3::new(0.0, 0.75, -1.5),
        half_extents: Vec2::new(0.6, 0.4),
        discovered_after: 1.5,
    };

    fn looking_at(target: Vec3) -> CameraPose {
        CameraPose {
            transform: Transform::from_xyz(0.0, 1.4, 0.0).looking_at(target, Vec3::Y),
            viewport_size: Vec2::new(800.0, 600.0),
            vertical_fov: std::f32::consts::FRAC_PI_4,
        }
    }

    fn query(tracker: &SimulatedSurfaceTracker, camera: &CameraPose) -> Option<Vec3> {
        tracker
            .query_pose(camera.screen_centre(), camera, &SURFACE_PRIORITY)
            .map(|pose| pose.position)
    }

    fn room() -> SimulatedSurfaceTracker {
        SimulatedSurfaceTracker::default()
            .with_plane(TABLE)
            .with_estimated_plane(EstimatedPlane {
                height: 0.0,
                discovered_after: 3.0,
            })
    }

    #[test]
    fn nothing_is_found_before_discovery() {
        let tracker = room();

        assert_eq!(query(&tracker, &looking_at(TABLE.centre)), None);
    }

    #[test]
    fn table_is_hit_once_discovered() {
        let mut tracker = room();
        tracker.advance(2.0);

        let hit = query(&tracker, &looking_at(TABLE.centre)).unwrap();

        assert!((hit - TABLE.centre).length() < 1e-4);
    }

    #[test]
    fn existing_plane_wins_over_estimated_plane() {
        let mut tracker = room();
        tracker.advance(10.0);

        let hit = query(&tracker, &looking_at(TABLE.centre)).unwrap();

        assert!((hit.y - 0.75).abs() < 1e-4);
    }

    #[test]
    fn rays_past_the_table_edge_fall_through_to_the_ground() {
        let mut tracker = room();
        tracker.advance(10.0);
        let beside_table = Vec3::new(2.0, 0.0, -1.5);

        let hit = query(&tracker, &looking_at(beside_table)).unwrap();

        assert!(hit.y.abs() < 1e-4);
        assert!((hit - beside_table).length() < 1e-3);
    }

    #[test]
    fn feature_points_need_the_ray_to_pass_close_by() {
        let point = Vec3::new(0.5, 0.4, -1.0);
        let mut tracker = SimulatedSurfaceTracker::default().with_feature_point(FeaturePoint {
            position: point,
            discovered_after: 0.0,
        });
        tracker.advance(0.1);

        assert_eq!(query(&tracker, &looking_at(point)), Some(point));
        assert_eq!(query(&tracker, &looking_at(point + Vec3::X * 0.2)), None);
    }

    #[test]
    fn looking_up_finds_nothing() {
        let mut tracker = room();
        tracker.advance(10.0);

        assert_eq!(query(&tracker, &looking_at(Vec3::new(0.0, 3.0, -1.0))), None);
    }

    #[test]
    fn scan_clock_follows_time() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(room())
            .add_systems(Update, advance_scan_clock);

        app.update();
        app.update();

        // The very first frame may report a zero delta.
        assert!(app.world().resource::<SimulatedSurfaceTracker>().scan_time() >= 0.099);
    }
}
