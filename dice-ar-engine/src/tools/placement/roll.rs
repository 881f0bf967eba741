use bevy::prelude::*;
use constants::placement::{
    ROLL_IMPULSE, ROLL_LIFT, ROLL_LIFT_DURATION, ROLL_MULTIPLIERS, ROLL_ROTATION_DURATION,
    ROLL_X_RANGE, ROLL_Y_RANGE, ROLL_Z_RANGE,
};
use rand::Rng;

/// Inclusive integer ranges and scaling used to randomise a roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollSettings {
    pub x_range: (u32, u32),
    pub y_range: (u32, u32),
    pub z_range: (u32, u32),
    pub multipliers: Vec3,
    pub rotation_duration: f32,
    pub impulse: Vec3,
    pub lift: f32,
    pub lift_duration: f32,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            x_range: ROLL_X_RANGE,
            y_range: ROLL_Y_RANGE,
            z_range: ROLL_Z_RANGE,
            multipliers: Vec3::from_array(ROLL_MULTIPLIERS),
            rotation_duration: ROLL_ROTATION_DURATION,
            impulse: Vec3::from_array(ROLL_IMPULSE),
            lift: ROLL_LIFT,
            lift_duration: ROLL_LIFT_DURATION,
        }
    }
}

/// Everything the scene needs to perform one roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roll {
    /// Euler angles in radians.
    pub rotation: Vec3,
    pub rotation_duration: f32,
    pub impulse: Vec3,
    pub lift: Vec3,
    pub lift_duration: f32,
}

impl RollSettings {
    /// Ranges must be non-empty (`min <= max`).
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Roll {
        let x = rng.random_range(self.x_range.0..=self.x_range.1) as f32;
        let y = rng.random_range(self.y_range.0..=self.y_range.1) as f32;
        let z = rng.random_range(self.z_range.0..=self.z_range.1) as f32;

        Roll {
            rotation: Vec3::new(x, y, z) * self.multipliers,
            rotation_duration: self.rotation_duration,
            impulse: self.impulse,
            lift: Vec3::Y * self.lift,
            lift_duration: self.lift_duration,
        }
    }

    /// Smallest and largest rotation `draw` can produce.
    pub fn rotation_bounds(&self) -> (Vec3, Vec3) {
        let min = Vec3::new(
            self.x_range.0 as f32,
            self.y_range.0 as f32,
            self.z_range.0 as f32,
        );
        let max = Vec3::new(
            self.x_range.1 as f32,
            self.y_range.1 as f32,
            self.z_range.1 as f32,
        );
        (min * self.multipliers, max * self.multipliers)
    }
}
