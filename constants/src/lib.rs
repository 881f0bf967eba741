//! Shared constants for the dice AR engine.
//!
//! Values here are compile-time defaults. Anything tunable at runtime is also
//! exposed through the placement config asset, which falls back to these.

pub mod coordinate_system;
pub mod placement;
pub mod render_settings;
pub mod ui_text;
