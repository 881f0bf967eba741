use bevy::prelude::*;
use constants::render_settings::{
    FEATURE_POINT_COLOUR, FEATURE_POINT_SIZE, GROUND_COLOUR, TABLE_COLOUR,
};

use crate::engine::config::placement_config::{PlacementConfig, ScanConfig};
use crate::engine::tracking::simulated_tracker::{
    EstimatedPlane, FeaturePoint, SimulatedSurfaceTracker, TrackedPlane,
};

const TABLE_TOP_CENTRE: Vec3 = Vec3::new(0.0, 0.75, -1.5);
const TABLE_TOP_SIZE: Vec2 = Vec2::new(1.2, 0.8);
const TABLE_TOP_THICKNESS: f32 = 0.04;
const TABLE_LEG_WIDTH: f32 = 0.05;

/// Storage box beside the table; only sparse feature points are found on it.
const BOX_CENTRE: Vec3 = Vec3::new(1.0, 0.2, -1.0);
const BOX_SIZE: Vec3 = Vec3::new(0.3, 0.4, 0.3);

const GROUND_SIZE: f32 = 20.0;

#[derive(Component)]
pub struct FeaturePointMarker {
    pub discovered_after: f32,
}

/// Tracker matching the room `spawn_environment` builds.
pub fn room_tracker(scan: &ScanConfig) -> SimulatedSurfaceTracker {
    let mut tracker = SimulatedSurfaceTracker::default()
        .with_feature_tolerance(scan.feature_tolerance)
        .with_plane(TrackedPlane {
            centre: TABLE_TOP_CENTRE,
            half_extents: TABLE_TOP_SIZE * 0.5,
            discovered_after: scan.planes_after,
        })
        .with_estimated_plane(EstimatedPlane {
            height: 0.0,
            discovered_after: scan.estimated_plane_after,
        });

    for position in box_feature_points() {
        tracker = tracker.with_feature_point(FeaturePoint {
            position,
            discovered_after: scan.feature_points_after,
        });
    }

    tracker
}

/// 3x3 grid over the box lid.
fn box_feature_points() -> impl Iterator<Item = Vec3> {
    let top = BOX_CENTRE + Vec3::Y * BOX_SIZE.y * 0.5;
    (-1..=1).flat_map(move |i| {
        (-1..=1).map(move |j| {
            top + Vec3::new(i as f32 * BOX_SIZE.x * 0.3, 0.0, j as f32 * BOX_SIZE.z * 0.3)
        })
    })
}

// Spawns the room the simulated session scans and inserts its tracker
pub fn spawn_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<PlacementConfig>,
) {
    commands.insert_resource(room_tracker(&config.scan));

    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOUR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    let table_material = materials.add(StandardMaterial {
        base_color: TABLE_COLOUR,
        perceptual_roughness: 0.6,
        ..default()
    });
    commands.spawn((
        Name::new("TableTop"),
        Mesh3d(meshes.add(Cuboid::new(
            TABLE_TOP_SIZE.x,
            TABLE_TOP_THICKNESS,
            TABLE_TOP_SIZE.y,
        ))),
        MeshMaterial3d(table_material.clone()),
        Transform::from_translation(TABLE_TOP_CENTRE - Vec3::Y * TABLE_TOP_THICKNESS * 0.5),
    ));

    let leg_height = TABLE_TOP_CENTRE.y - TABLE_TOP_THICKNESS;
    let leg_mesh = meshes.add(Cuboid::new(TABLE_LEG_WIDTH, leg_height, TABLE_LEG_WIDTH));
    let inset = TABLE_TOP_SIZE * 0.5 - Vec2::splat(TABLE_LEG_WIDTH);
    for (x, z) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
        commands.spawn((
            Name::new("TableLeg"),
            Mesh3d(leg_mesh.clone()),
            MeshMaterial3d(table_material.clone()),
            Transform::from_xyz(
                TABLE_TOP_CENTRE.x + x * inset.x,
                leg_height * 0.5,
                TABLE_TOP_CENTRE.z + z * inset.y,
            ),
        ));
    }

    commands.spawn((
        Name::new("StorageBox"),
        Mesh3d(meshes.add(Cuboid::from_size(BOX_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.5, 0.42),
            ..default()
        })),
        Transform::from_translation(BOX_CENTRE),
    ));

    let point_mesh = meshes.add(Sphere::new(FEATURE_POINT_SIZE));
    let point_material = materials.add(StandardMaterial {
        base_color: FEATURE_POINT_COLOUR,
        unlit: true,
        ..default()
    });
    for position in box_feature_points() {
        commands.spawn((
            FeaturePointMarker {
                discovered_after: config.scan.feature_points_after,
            },
            Mesh3d(point_mesh.clone()),
            MeshMaterial3d(point_material.clone()),
            Transform::from_translation(position),
            Visibility::Hidden,
        ));
    }

    info!("Environment spawned, scanning for surfaces");
}

// Shows feature points once the scan has found them
pub fn reveal_feature_points(
    tracker: Res<SimulatedSurfaceTracker>,
    mut markers: Query<(&FeaturePointMarker, &mut Visibility)>,
) {
    for (marker, mut visibility) in &mut markers {
        if tracker.scan_time() >= marker.discovered_after {
            visibility.set_if_neq(Visibility::Inherited);
        }
    }
}
