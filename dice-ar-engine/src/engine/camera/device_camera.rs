use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

/// Eye height of someone holding a phone, looking towards the table.
const START_POSITION: Vec3 = Vec3::new(0.0, 1.4, 0.4);
const START_PITCH: f32 = -0.45;

/// Free-fly camera standing in for the phone held by the user.
#[derive(Resource, Debug, Clone)]
pub struct DeviceCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub yaw_sensitivity: f32,
    pub pitch_sensitivity: f32,
    pub smoothing: f32,
}

impl Default for DeviceCamera {
    fn default() -> Self {
        Self {
            position: START_POSITION,
            yaw: 0.0,
            pitch: START_PITCH,
            move_speed: 0.8,
            yaw_sensitivity: 0.0035,
            pitch_sensitivity: 0.0030,
            smoothing: 12.0,
        }
    }
}

impl DeviceCamera {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }

    /// Turn by a mouse delta in pixels.
    pub fn look(&mut self, mouse_delta: Vec2) {
        self.yaw -= mouse_delta.x * self.yaw_sensitivity;
        self.pitch -= mouse_delta.y * self.pitch_sensitivity;
        self.pitch = self.pitch.clamp(-1.55, 1.55);
    }

    /// Move in view space: x right, y world up, z backwards.
    pub fn walk(&mut self, input: Vec3, seconds: f32) {
        if input == Vec3::ZERO {
            return;
        }
        let rotation = self.rotation();
        let forward = rotation * Vec3::Z;
        let right = rotation * Vec3::X;
        let world_delta = right * input.x + Vec3::Y * input.y + forward * input.z;
        self.position += world_delta.normalize() * self.move_speed * seconds;
    }
}

pub fn device_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut device: ResMut<DeviceCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        device.look(mouse_delta);
    }

    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) { move_input.z -= 1.0; }
    if keyboard.pressed(KeyCode::KeyS) { move_input.z += 1.0; }
    if keyboard.pressed(KeyCode::KeyD) { move_input.x += 1.0; }
    if keyboard.pressed(KeyCode::KeyA) { move_input.x -= 1.0; }
    if keyboard.pressed(KeyCode::KeyE) { move_input.y += 1.0; } // Up
    if keyboard.pressed(KeyCode::KeyQ) { move_input.y -= 1.0; } // Down

    // Shift = faster, ctrl = slower
    let mut seconds = time.delta_secs();
    if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) { seconds *= 3.0; }
    if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) { seconds *= 0.25; }
    device.walk(move_input, seconds);

    let target = device.transform();
    let lerp_speed = (device.smoothing * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
