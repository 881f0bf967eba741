use bevy::prelude::*;

use super::controller::{FrameOutcome, PlacementController, TapOutcome};
use super::interactions::{ResetRequestEvent, ScreenTapEvent};
use super::pose::CameraPose;
use super::state::DisplayState;
use crate::engine::scene::ecs_scene::EcsScene;
use crate::engine::scene::scene_assets::SceneAssets;
use crate::engine::tracking::simulated_tracker::SimulatedSurfaceTracker;

// Queries the tracker through the screen centre every frame
pub fn track_surface_each_frame(
    mut commands: Commands,
    mut controller: ResMut<PlacementController>,
    mut display: ResMut<DisplayState>,
    tracker: Res<SimulatedSurfaceTracker>,
    scene_assets: Res<SceneAssets>,
    cameras: Query<(&Camera, &GlobalTransform, &Projection), With<Camera3d>>,
) {
    let Ok((camera, camera_transform, projection)) = cameras.single() else {
        return;
    };
    let Some(camera_pose) = CameraPose::from_camera(camera, camera_transform, projection) else {
        return;
    };

    let mut scene = EcsScene::new(&mut commands, &scene_assets);
    let outcome = controller.on_frame_tick(
        camera_pose.screen_centre(),
        camera_pose,
        &*tracker,
        &mut scene,
        &mut *display,
    );

    if let FrameOutcome::SurfaceFound { indicator } = outcome {
        debug!("Indicator {indicator} spawned");
    }
}

pub fn handle_screen_taps(
    mut taps: EventReader<ScreenTapEvent>,
    mut commands: Commands,
    mut controller: ResMut<PlacementController>,
    mut display: ResMut<DisplayState>,
    scene_assets: Res<SceneAssets>,
) {
    for tap in taps.read() {
        let mut scene = EcsScene::new(&mut commands, &scene_assets);
        match controller.on_tap(&mut scene, &mut *display) {
            TapOutcome::Placed { die, origin } => {
                info!("Tap ({:?}) placed die {die} ({origin:?})", tap.source);
            }
            TapOutcome::Rolled { die, roll } => {
                info!("Rolling die {die}, rotation {:?}", roll.rotation);
            }
            TapOutcome::NoSurfaceYet => {
                debug!("Tap at {:?} ignored while scanning", tap.position);
            }
        }
    }
}

pub fn handle_reset_requests(
    mut resets: EventReader<ResetRequestEvent>,
    mut commands: Commands,
    mut controller: ResMut<PlacementController>,
    mut display: ResMut<DisplayState>,
    tracker: Res<SimulatedSurfaceTracker>,
    scene_assets: Res<SceneAssets>,
) {
    for reset in resets.read() {
        let mut scene = EcsScene::new(&mut commands, &scene_assets);
        let outcome = controller.on_reset_tapped(&*tracker, &mut scene, &mut *display);
        debug!("Reset from {:?}: {:?}", reset.source, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::testing::physics_app;
    use crate::engine::scene::ecs_scene::SceneNode;
    use crate::engine::tracking::simulated_tracker::TrackedPlane;
    use crate::tools::placement::controller::PlacementSettings;
    use crate::tools::placement::interactions::InputSource;
    use crate::tools::placement::services::NodeKind;
    use crate::tools::placement::state::PlacementPhase;
    use bevy::ecs::system::RunSystemOnce;

    fn placement_app() -> App {
        let mut app = physics_app();
        app.add_event::<ScreenTapEvent>()
            .add_event::<ResetRequestEvent>()
            .init_resource::<DisplayState>()
            .init_resource::<SceneAssets>()
            .insert_resource(PlacementController::new(PlacementSettings {
                roll_seed: Some(11),
                ..default()
            }))
            .insert_resource(SimulatedSurfaceTracker::default().with_plane(TrackedPlane {
                centre: Vec3::new(0.0, 0.75, -1.5),
                half_extents: Vec2::new(0.6, 0.4),
                discovered_after: 0.0,
            }))
            .add_systems(Update, (handle_screen_taps, handle_reset_requests).chain());
        app
    }

    // Same work as track_surface_each_frame, with a fixed camera instead of a rendered one.
    fn tick(app: &mut App) {
        let camera = CameraPose {
            transform: Transform::from_xyz(0.0, 1.4, 0.0)
                .looking_at(Vec3::new(0.0, 0.75, -1.5), Vec3::Y),
            viewport_size: Vec2::new(800.0, 600.0),
            vertical_fov: std::f32::consts::FRAC_PI_4,
        };
        app.world_mut()
            .run_system_once(
                move |mut commands: Commands,
                      mut controller: ResMut<PlacementController>,
                      mut display: ResMut<DisplayState>,
                      tracker: Res<SimulatedSurfaceTracker>,
                      scene_assets: Res<SceneAssets>| {
                    let mut scene = EcsScene::new(&mut commands, &scene_assets);
                    controller.on_frame_tick(
                        camera.screen_centre(),
                        camera,
                        &*tracker,
                        &mut scene,
                        &mut *display,
                    );
                },
            )
            .expect("frame tick");
    }

    fn nodes(app: &mut App, kind: NodeKind) -> usize {
        let world = app.world_mut();
        world
            .query::<&SceneNode>()
            .iter(world)
            .filter(|node| node.0 == kind)
            .count()
    }

    #[test]
    fn frame_tick_spawns_indicator_over_the_table() {
        let mut app = placement_app();

        tick(&mut app);

        let controller = app.world().resource::<PlacementController>();
        assert_eq!(controller.phase(), PlacementPhase::Tracking);
        let tracked = controller.tracked_pose().expect("table hit");
        assert!((tracked.position.y - 0.75).abs() < 1e-4);
        assert_eq!(nodes(&mut app, NodeKind::Indicator), 1);
    }

    #[test]
    fn tap_then_reset_round_trip_through_events() {
        let mut app = placement_app();
        tick(&mut app);

        app.world_mut().send_event(ScreenTapEvent {
            position: None,
            source: InputSource::Keyboard,
        });
        app.update();

        assert_eq!(
            app.world().resource::<PlacementController>().phase(),
            PlacementPhase::Placed
        );
        assert_eq!(nodes(&mut app, NodeKind::Indicator), 0);
        assert_eq!(nodes(&mut app, NodeKind::Die), 1);
        assert_eq!(nodes(&mut app, NodeKind::Floor), 1);
        assert!(app.world().resource::<DisplayState>().reset_button_visible);

        app.world_mut().send_event(ResetRequestEvent {
            source: InputSource::Button,
        });
        app.update();

        let display = app.world().resource::<DisplayState>();
        assert!(!display.reset_button_visible);
        assert!(display.status_visible);
        // The table is still under the crosshair, so tracking resumes straight away.
        assert_eq!(
            app.world().resource::<PlacementController>().phase(),
            PlacementPhase::Tracking
        );
        // The die is detached, not despawned.
        assert_eq!(nodes(&mut app, NodeKind::Die), 1);
        assert_eq!(nodes(&mut app, NodeKind::Indicator), 1);
        assert_eq!(nodes(&mut app, NodeKind::Floor), 1);
    }
}
