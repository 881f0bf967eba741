use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the placement config asset.
    #[default]
    Loading,
    Running,
}

pub fn log_running() {
    println!("→ Placement config resolved, transitioning to Running state");
}
