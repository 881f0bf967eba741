//! Recording doubles for the placement services.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use bevy::prelude::*;

use super::pose::{CameraPose, Pose};
use super::services::{HitTestKind, NodeId, NodeKind, ScenePhysics, StatusDisplay, SurfaceTracker};

/// Returns queued answers in order, then `fallback` forever.
#[derive(Default)]
pub struct ScriptedTracker {
    queued: RefCell<VecDeque<Option<Pose>>>,
    pub fallback: Option<Pose>,
    pub queries: RefCell<Vec<(Vec2, Vec<HitTestKind>)>>,
}

impl ScriptedTracker {
    pub fn always(pose: Option<Pose>) -> Self {
        Self {
            fallback: pose,
            ..Default::default()
        }
    }

    pub fn then(self, answer: Option<Pose>) -> Self {
        self.queued.borrow_mut().push_back(answer);
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl SurfaceTracker for ScriptedTracker {
    fn query_pose(
        &self,
        screen_point: Vec2,
        _camera: &CameraPose,
        priority: &[HitTestKind],
    ) -> Option<Pose> {
        self.queries
            .borrow_mut()
            .push((screen_point, priority.to_vec()));
        self.queued
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    Add { node: NodeId, kind: NodeKind, pose: Pose },
    Remove(NodeId),
    Destroy(NodeId),
    Restore { node: NodeId, position: Vec3 },
    SetPosition { node: NodeId, position: Vec3 },
    StaticBody(NodeId),
    DynamicBody(NodeId),
    Impulse { node: NodeId, impulse: Vec3 },
    Rotate { node: NodeId, angles: Vec3, duration: f32 },
    Translate { node: NodeId, delta: Vec3, duration: f32 },
}

/// Keeps a log of every command plus which nodes are currently in the scene.
pub struct RecordingScene {
    pub calls: Vec<SceneCall>,
    pub live: HashMap<NodeId, NodeKind>,
    detached: HashMap<NodeId, NodeKind>,
    next_index: u32,
}

impl Default for RecordingScene {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            live: HashMap::new(),
            detached: HashMap::new(),
            next_index: 1,
        }
    }
}

impl RecordingScene {
    pub fn live_of(&self, kind: NodeKind) -> Vec<NodeId> {
        let mut nodes: Vec<_> = self
            .live
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(node, _)| *node)
            .collect();
        nodes.sort();
        nodes
    }

    pub fn count(&self, matches: impl Fn(&SceneCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }

    pub fn added(&self, kind: NodeKind) -> Vec<(NodeId, Pose)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SceneCall::Add { node, kind: k, pose } if *k == kind => Some((*node, *pose)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ScenePhysics for RecordingScene {
    fn add_node(&mut self, kind: NodeKind, pose: Pose) -> NodeId {
        let node = Entity::from_raw(self.next_index);
        self.next_index += 1;
        self.live.insert(node, kind);
        self.calls.push(SceneCall::Add { node, kind, pose });
        node
    }

    fn remove_node(&mut self, node: NodeId) {
        if let Some(kind) = self.live.remove(&node) {
            self.detached.insert(node, kind);
        }
        self.calls.push(SceneCall::Remove(node));
    }

    fn destroy_node(&mut self, node: NodeId) {
        self.live.remove(&node);
        self.detached.remove(&node);
        self.calls.push(SceneCall::Destroy(node));
    }

    fn restore_node(&mut self, node: NodeId, position: Vec3) {
        if let Some(kind) = self.detached.remove(&node) {
            self.live.insert(node, kind);
        }
        self.calls.push(SceneCall::Restore { node, position });
    }

    fn set_position(&mut self, node: NodeId, position: Vec3) {
        self.calls.push(SceneCall::SetPosition { node, position });
    }

    fn attach_static_body(&mut self, node: NodeId) {
        self.calls.push(SceneCall::StaticBody(node));
    }

    fn attach_dynamic_body(&mut self, node: NodeId) {
        self.calls.push(SceneCall::DynamicBody(node));
    }

    fn apply_impulse(&mut self, node: NodeId, impulse: Vec3) {
        self.calls.push(SceneCall::Impulse { node, impulse });
    }

    fn animate_rotation(&mut self, node: NodeId, angles: Vec3, duration: f32) {
        self.calls.push(SceneCall::Rotate {
            node,
            angles,
            duration,
        });
    }

    fn animate_translation(&mut self, node: NodeId, delta: Vec3, duration: f32) {
        self.calls.push(SceneCall::Translate {
            node,
            delta,
            duration,
        });
    }
}

#[derive(Debug)]
pub struct RecordingDisplay {
    pub status_text: String,
    pub status_visible: bool,
    pub reset_button_visible: bool,
    pub texts_shown: Vec<String>,
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self {
            status_text: String::new(),
            status_visible: true,
            reset_button_visible: false,
            texts_shown: Vec::new(),
        }
    }
}

impl StatusDisplay for RecordingDisplay {
    fn set_status_text(&mut self, text: &str) {
        self.status_text = text.to_string();
        self.texts_shown.push(text.to_string());
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.status_visible = visible;
    }

    fn set_reset_button_visible(&mut self, visible: bool) {
        self.reset_button_visible = visible;
    }
}

pub fn test_camera() -> CameraPose {
    CameraPose {
        transform: Transform::from_xyz(0.0, 1.4, 0.0),
        viewport_size: Vec2::new(390.0, 844.0),
        vertical_fov: std::f32::consts::FRAC_PI_3,
    }
}
