use bevy::prelude::*;

use super::pose::{CameraPose, Pose};

/// Handle to a node owned by the scene service.
pub type NodeId = Entity;

/// The three kinds of node the placement flow creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Marker showing where the die would land.
    Indicator,
    Die,
    /// Invisible static plane the die rests on. Never removed.
    Floor,
}

/// Surface sources a tracker can hit, in the order they should be tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTestKind {
    ExistingPlane,
    FeaturePoint,
    EstimatedHorizontalPlane,
}

pub const SURFACE_PRIORITY: [HitTestKind; 3] = [
    HitTestKind::ExistingPlane,
    HitTestKind::FeaturePoint,
    HitTestKind::EstimatedHorizontalPlane,
];

/// Estimates physical surfaces from the camera.
pub trait SurfaceTracker {
    /// World pose of the best surface beneath `screen_point`, trying each kind
    /// in `priority` order. `None` when nothing has been found yet.
    fn query_pose(
        &self,
        screen_point: Vec2,
        camera: &CameraPose,
        priority: &[HitTestKind],
    ) -> Option<Pose>;
}

/// Scene graph and rigid-body simulation.
///
/// Every operation on a node that no longer exists must be a no-op.
pub trait ScenePhysics {
    fn add_node(&mut self, kind: NodeKind, pose: Pose) -> NodeId;

    /// Take a node out of the scene while keeping it around for `restore_node`.
    fn remove_node(&mut self, node: NodeId);

    /// Remove a node for good.
    fn destroy_node(&mut self, node: NodeId);

    /// Put a removed node back at `position`, keeping its last orientation.
    fn restore_node(&mut self, node: NodeId, position: Vec3);

    fn set_position(&mut self, node: NodeId, position: Vec3);

    fn attach_static_body(&mut self, node: NodeId);

    fn attach_dynamic_body(&mut self, node: NodeId);

    fn apply_impulse(&mut self, node: NodeId, impulse: Vec3);

    /// Rotate by the given euler angles (radians) over `duration` seconds.
    fn animate_rotation(&mut self, node: NodeId, angles: Vec3, duration: f32);

    fn animate_translation(&mut self, node: NodeId, delta: Vec3, duration: f32);
}

/// Status label and reset button chrome.
pub trait StatusDisplay {
    fn set_status_text(&mut self, text: &str);

    fn set_status_visible(&mut self, visible: bool);

    fn set_reset_button_visible(&mut self, visible: bool);
}
