use bevy::prelude::*;
use constants::placement::DIE_HOVER_OFFSET;
use constants::ui_text::{STATUS_SCANNING, STATUS_TAP_TO_PLACE};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::pose::{CameraPose, Pose};
use super::roll::{Roll, RollSettings};
use super::services::{
    NodeId, NodeKind, SURFACE_PRIORITY, ScenePhysics, StatusDisplay, SurfaceTracker,
};
use super::state::{DieRestorePolicy, PlacementPhase, PlacementState};

/// Validated tuning for the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSettings {
    /// Height of the die above the tracked surface when placed.
    pub die_hover_offset: f32,
    pub roll: RollSettings,
    pub restore_policy: DieRestorePolicy,
    /// Fixed RNG seed for reproducible rolls. Unseeded when `None`.
    pub roll_seed: Option<u64>,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            die_hover_offset: DIE_HOVER_OFFSET,
            roll: RollSettings::default(),
            restore_policy: DieRestorePolicy::default(),
            roll_seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The die is placed; the tracker was not queried.
    Suppressed,
    NoSurface,
    SurfaceFound { indicator: NodeId },
    IndicatorMoved { position: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieOrigin {
    Fresh,
    Restored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    Placed { die: NodeId, origin: DieOrigin },
    Rolled { die: NodeId, roll: Roll },
    /// Nothing has been tracked yet, so there is no spot to place on.
    NoSurfaceYet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetOutcome {
    pub removed_die: bool,
    pub removed_indicator: bool,
    /// The immediate re-query found a surface and recreated the indicator.
    pub resumed_tracking: bool,
}

#[derive(Debug, Clone, Copy)]
struct SurfaceQuery {
    anchor: Vec2,
    camera: CameraPose,
}

/// Scanning → tracking → placed flow for the die.
///
/// The controller never touches the ECS directly; every side effect goes
/// through the [`SurfaceTracker`], [`ScenePhysics`] and [`StatusDisplay`]
/// services passed into each call.
#[derive(Resource)]
pub struct PlacementController {
    state: PlacementState,
    tracked_pose: Option<Pose>,
    reset_ever_happened: bool,
    /// Die removed by the last reset, waiting to be restored.
    retained_die: Option<NodeId>,
    /// Anchor and camera of the latest frame tick, reused by reset.
    last_query: Option<SurfaceQuery>,
    settings: PlacementSettings,
    rng: StdRng,
}

impl PlacementController {
    pub fn new(settings: PlacementSettings) -> Self {
        let rng = match settings.roll_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            state: PlacementState::Scanning,
            tracked_pose: None,
            reset_ever_happened: false,
            retained_die: None,
            last_query: None,
            settings,
            rng,
        }
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn phase(&self) -> PlacementPhase {
        self.state.phase()
    }

    pub fn tracked_pose(&self) -> Option<Pose> {
        self.tracked_pose
    }

    pub fn reset_ever_happened(&self) -> bool {
        self.reset_ever_happened
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    pub fn on_frame_tick(
        &mut self,
        anchor: Vec2,
        camera: CameraPose,
        tracker: &impl SurfaceTracker,
        scene: &mut impl ScenePhysics,
        display: &mut impl StatusDisplay,
    ) -> FrameOutcome {
        self.last_query = Some(SurfaceQuery { anchor, camera });

        if matches!(self.state, PlacementState::Placed { .. }) {
            return FrameOutcome::Suppressed;
        }

        self.track_surface(anchor, &camera, tracker, scene, display)
    }

    fn track_surface(
        &mut self,
        anchor: Vec2,
        camera: &CameraPose,
        tracker: &impl SurfaceTracker,
        scene: &mut impl ScenePhysics,
        display: &mut impl StatusDisplay,
    ) -> FrameOutcome {
        let Some(pose) = tracker.query_pose(anchor, camera, &SURFACE_PRIORITY) else {
            return FrameOutcome::NoSurface;
        };
        self.tracked_pose = Some(pose);

        match self.state {
            PlacementState::Scanning => {
                let indicator = scene.add_node(NodeKind::Indicator, Pose::at(pose.position).flat());
                self.state = PlacementState::Tracking { indicator };
                display.set_status_text(STATUS_TAP_TO_PLACE);
                info!("Surface found at {:?}, tracking", pose.position);
                FrameOutcome::SurfaceFound { indicator }
            }
            PlacementState::Tracking { indicator } => {
                scene.set_position(indicator, pose.position);
                FrameOutcome::IndicatorMoved {
                    position: pose.position,
                }
            }
            PlacementState::Placed { .. } => FrameOutcome::Suppressed,
        }
    }

    pub fn on_tap(
        &mut self,
        scene: &mut impl ScenePhysics,
        display: &mut impl StatusDisplay,
    ) -> TapOutcome {
        match self.state {
            PlacementState::Placed { die, rolls } => {
                let roll = self.settings.roll.draw(&mut self.rng);
                scene.attach_dynamic_body(die);
                scene.apply_impulse(die, roll.impulse);
                scene.animate_rotation(die, roll.rotation, roll.rotation_duration);
                scene.animate_translation(die, roll.lift, roll.lift_duration);
                self.state = PlacementState::Placed {
                    die,
                    rolls: rolls + 1,
                };
                TapOutcome::Rolled { die, roll }
            }
            PlacementState::Scanning | PlacementState::Tracking { .. } => {
                self.place_die(scene, display)
            }
        }
    }

    fn place_die(
        &mut self,
        scene: &mut impl ScenePhysics,
        display: &mut impl StatusDisplay,
    ) -> TapOutcome {
        let Some(surface) = self.tracked_pose else {
            debug!("Tap ignored, no surface tracked yet");
            return TapOutcome::NoSurfaceYet;
        };

        if let PlacementState::Tracking { indicator } = self.state {
            scene.destroy_node(indicator);
        }

        let floor = scene.add_node(NodeKind::Floor, Pose::at(surface.position).flat());
        scene.attach_static_body(floor);

        let spawn = Pose::at(surface.position).raised(self.settings.die_hover_offset);
        let (die, origin) = match (self.reset_ever_happened, self.retained_die.take()) {
            (true, Some(die)) => {
                scene.restore_node(die, spawn.position);
                scene.attach_static_body(die);
                (die, DieOrigin::Restored)
            }
            _ => (scene.add_node(NodeKind::Die, spawn), DieOrigin::Fresh),
        };

        self.state = PlacementState::Placed { die, rolls: 0 };
        display.set_status_visible(false);
        display.set_reset_button_visible(true);
        info!("Die placed at {:?} ({:?})", spawn.position, origin);

        TapOutcome::Placed { die, origin }
    }

    pub fn on_reset_tapped(
        &mut self,
        tracker: &impl SurfaceTracker,
        scene: &mut impl ScenePhysics,
        display: &mut impl StatusDisplay,
    ) -> ResetOutcome {
        let mut outcome = ResetOutcome::default();

        match std::mem::replace(&mut self.state, PlacementState::Scanning) {
            PlacementState::Scanning => {}
            PlacementState::Tracking { indicator } => {
                scene.destroy_node(indicator);
                outcome.removed_indicator = true;
            }
            PlacementState::Placed { die, .. } => {
                match self.settings.restore_policy {
                    DieRestorePolicy::RestorePrevious => {
                        scene.remove_node(die);
                        self.retained_die = Some(die);
                    }
                    DieRestorePolicy::AlwaysFresh => scene.destroy_node(die),
                }
                outcome.removed_die = true;
            }
        }

        self.reset_ever_happened = true;
        display.set_status_text(STATUS_SCANNING);
        display.set_status_visible(true);
        display.set_reset_button_visible(false);

        if let Some(query) = self.last_query {
            let frame = self.track_surface(query.anchor, &query.camera, tracker, scene, display);
            outcome.resumed_tracking = matches!(frame, FrameOutcome::SurfaceFound { .. });
        }

        info!("Placement reset: {:?}", outcome);
        outcome
    }
}
