//! Die placement flow: scan for a surface, place the die, roll it, reset.
//!
//! ## Architecture
//!
//! `PlacementController` owns the flow and talks to three narrow services
//! instead of the ECS:
//!
//! - `SurfaceTracker`: world pose of the surface under a screen point
//! - `ScenePhysics`: nodes, static/dynamic bodies, impulses, timed actions
//! - `StatusDisplay`: status label and reset button chrome
//!
//! In the running app these are backed by `SimulatedSurfaceTracker`,
//! `EcsScene` (a thin wrapper over `Commands`) and the `DisplayState`
//! resource. Tests swap in the recording doubles from `testing`.
//!
//! ## State Flow
//!
//! ```text
//! Scanning ──surface found──> Tracking ──tap──> Placed ──tap──> Placed (roll)
//!    ^                           │                 │
//!    └──────────reset────────────┴─────────────────┘
//! ```
//!
//! - **Scanning**: every frame the tracker is queried through the screen centre.
//!   Nothing is shown except "Scanning please wait...".
//! - **Tracking**: a flat indicator follows the tracked surface. Losing the
//!   surface is not a transition; the indicator just stops moving.
//! - **Placed**: the indicator is gone, an invisible static floor sits at the
//!   tracked pose and the die hovers just above it. Frame ticks stop querying
//!   the tracker. Each further tap rolls the die: dynamic body, upward impulse,
//!   randomised spin and a short lift.
//! - **Reset**: removes the die and indicator, keeps every floor, shows the
//!   scanning label again and immediately re-queries the tracker so the
//!   indicator reappears without waiting a frame.
//!
//! After the first reset the die is restored rather than respawned, keeping
//! its last orientation (see `DieRestorePolicy`).
//!
//! ## Input
//!
//! - Left click or touch anywhere outside a button: `ScreenTapEvent`
//! - Reset button: `ResetRequestEvent`
//! - Native only: `Space` taps, `R` resets
//!
//! ## System Order
//!
//! ```text
//! detect_screen_taps ─> handle_placement_keyboard_shortcuts ─> reset_button_interaction
//!   ─> track_surface_each_frame ─> handle_screen_taps ─> handle_reset_requests
//!   ─> reflect_display_state
//! ```

/// Placement state machine driving the scan, place, roll and reset flow.
pub mod controller;

/// Tap, reset button and keyboard input turned into placement events.
pub mod interactions;

/// Poses and the pinhole camera model used for surface queries.
pub mod pose;

/// Random spin, impulse and lift for a single roll.
pub mod roll;

/// Service traits the controller drives: surface tracking, scene/physics and status display.
pub mod services;

/// Placement states, restore policy and display state.
pub mod state;

/// Bevy systems feeding frame ticks and input into the controller.
pub mod systems;

/// UI spawning and reflection for the status label and reset button.
pub mod ui;

#[cfg(test)]
pub mod testing;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

pub use controller::PlacementController;
pub use state::DisplayState;

use interactions::{
    ResetRequestEvent, ScreenTapEvent, detect_screen_taps, handle_placement_keyboard_shortcuts,
    reset_button_interaction,
};
use systems::{handle_reset_requests, handle_screen_taps, track_surface_each_frame};
use ui::{reflect_display_state, spawn_placement_ui};

// Registers placement events, display state, UI and the per-frame flow.
pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DisplayState>()
            .add_event::<ScreenTapEvent>()
            .add_event::<ResetRequestEvent>()
            .add_systems(Startup, spawn_placement_ui)
            .add_systems(
                Update,
                (
                    // Input
                    detect_screen_taps,
                    handle_placement_keyboard_shortcuts, // Native shortcuts or no-op for WASM
                    reset_button_interaction,
                    // Flow
                    track_surface_each_frame,
                    handle_screen_taps,
                    handle_reset_requests,
                    // Chrome
                    reflect_display_state,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}
