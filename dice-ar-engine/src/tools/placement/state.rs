use bevy::prelude::*;
use constants::ui_text::STATUS_SCANNING;

use super::services::{NodeId, StatusDisplay};

/// Where the placement flow currently is. Rolling is a momentary part of `Placed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    Scanning,
    /// The indicator exists and follows the tracked surface.
    Tracking { indicator: NodeId },
    /// The die is in the scene; the surface is no longer tracked.
    Placed { die: NodeId, rolls: u32 },
}

impl PlacementState {
    pub fn phase(&self) -> PlacementPhase {
        match self {
            PlacementState::Scanning => PlacementPhase::Scanning,
            PlacementState::Tracking { .. } => PlacementPhase::Tracking,
            PlacementState::Placed { .. } => PlacementPhase::Placed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementPhase {
    Scanning,
    Tracking,
    Placed,
}

/// What to do with the die when the user places it again after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieRestorePolicy {
    /// Keep the removed die and put it back, with its last orientation.
    #[default]
    RestorePrevious,
    /// Destroy the die on reset and instantiate a new one each time.
    AlwaysFresh,
}

/// Desired status chrome; `reflect_display_state` pushes it onto the UI entities.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub status_text: String,
    pub status_visible: bool,
    pub reset_button_visible: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            status_text: STATUS_SCANNING.to_string(),
            status_visible: true,
            reset_button_visible: false,
        }
    }
}

impl StatusDisplay for DisplayState {
    fn set_status_text(&mut self, text: &str) {
        if self.status_text != text {
            self.status_text = text.to_string();
        }
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.status_visible = visible;
    }

    fn set_reset_button_visible(&mut self, visible: bool) {
        self.reset_button_visible = visible;
    }
}

#[derive(Component)]
pub struct StatusLabel;

#[derive(Component)]
pub struct ResetButton;
