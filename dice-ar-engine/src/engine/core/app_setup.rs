use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::FPS_FONT_SIZE;

// Crate engine modules
use crate::engine::camera::device_camera::{DeviceCamera, device_camera_controller};
use crate::engine::config::config_loader::{
    ConfigLoader, apply_loaded_config, start_config_loading,
};
use crate::engine::config::placement_config::PlacementConfig;
use crate::engine::core::app_state::{AppState, log_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::physics::DicePhysicsPlugin;
use crate::engine::scene::die_faces::log_settled_dice;
use crate::engine::scene::environment::{reveal_feature_points, spawn_environment};
use crate::engine::scene::scene_assets::create_scene_assets;
use crate::engine::systems::fps_tracking::{FpsText, fps_text_update_system};
use crate::engine::tracking::simulated_tracker::advance_scan_clock;
// Crate tools modules
use crate::tools::placement::PlacementPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers PlacementConfig as a loadable asset type from *.placement.json files.
        .add_plugins(JsonAssetPlugin::<PlacementConfig>::new(&["placement.json"]))
        .add_plugins(DicePhysicsPlugin)
        .add_plugins(PlacementPlugin);

    app.init_resource::<ConfigLoader>()
        .init_resource::<DeviceCamera>();

    app.add_systems(Startup, (setup, create_scene_assets, start_config_loading))
        .add_systems(
            Update,
            apply_loaded_config.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), (spawn_environment, log_running));

    let runtime_systems = (
        advance_scan_clock,
        reveal_feature_points,
        device_camera_controller,
        log_settled_dice,
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_device_camera(commands: &mut Commands, device: &DeviceCamera) {
    commands.spawn((Camera3d::default(), device.transform()));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, device: Res<DeviceCamera>) {
    println!("=== DICE AR ===");

    spawn_lighting(&mut commands);
    spawn_device_camera(&mut commands, &device);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: FPS_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
