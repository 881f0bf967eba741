use bevy::asset::LoadState;
use bevy::prelude::*;

use super::PLACEMENT_CONFIG_PATH;
use super::error::ConfigError;
use super::placement_config::PlacementConfig;
use crate::engine::core::app_state::AppState;
use crate::tools::placement::PlacementController;
use crate::tools::placement::controller::PlacementSettings;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<PlacementConfig>>,
}

// Start loading the placement config
pub fn start_config_loading(mut loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    println!("Loading placement config from: {}", PLACEMENT_CONFIG_PATH);
    loader.handle = Some(asset_server.load(PLACEMENT_CONFIG_PATH));
}

/// Waits for the config asset, validates it and builds the controller.
///
/// A missing, malformed or invalid config is not fatal: a warning is logged
/// and the built-in defaults are used instead.
pub fn apply_loaded_config(
    loader: Res<ConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<PlacementConfig>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    let loaded = match configs.get(handle) {
        Some(config) => Ok(config.clone()),
        None => match asset_server.load_state(handle.id()) {
            LoadState::Failed(err) => Err(ConfigError::from(err.as_ref())),
            _ => return,
        },
    };

    let (config, settings) = resolve_config(loaded);

    info!(
        "✓ Placement config ready (restore policy {:?}, seed {:?})",
        settings.restore_policy, settings.roll_seed
    );
    commands.insert_resource(PlacementController::new(settings));
    commands.insert_resource(config);
    next_state.set(AppState::Running);
}

/// Keep a loaded config only if it validates; otherwise warn and fall back to defaults.
pub fn resolve_config(
    loaded: Result<PlacementConfig, ConfigError>,
) -> (PlacementConfig, PlacementSettings) {
    let resolved = loaded.and_then(|config| {
        let settings = config.placement_settings()?;
        Ok((config, settings))
    });

    match resolved {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!("{err}, using default placement config");
            (PlacementConfig::default(), PlacementSettings::default())
        }
    }
}
