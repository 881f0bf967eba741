//! Placement configuration loaded as a JSON asset.
//!
//! `assets/dice.placement.json` is registered through `JsonAssetPlugin` and
//! read once during `AppState::Loading`. Every field is optional and falls
//! back to the values in the `constants` crate. Once the config is resolved
//! the `PlacementController` is inserted and the app moves to `Running`.

/// Config loading systems and fallback to defaults.
pub mod config_loader;

/// `ConfigError` for load and validation failures.
pub mod error;

/// `PlacementConfig` asset, its sections and validation.
pub mod placement_config;

pub const PLACEMENT_CONFIG_PATH: &str = "dice.placement.json";
