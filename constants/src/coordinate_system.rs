use std::f32::consts::FRAC_PI_2;

/// Rotation about X that lays geometry authored in the local XY plane flat
/// on a horizontal surface (minus 90 degrees).
pub const FLAT_ON_SURFACE_X: f32 = -FRAC_PI_2;

/// World up axis. Tracked surfaces are horizontal planes with this normal.
pub const WORLD_UP: [f32; 3] = [0.0, 1.0, 0.0];
