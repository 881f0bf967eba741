/// Height above the tracked surface at which the die is spawned (metres).
pub const DIE_HOVER_OFFSET: f32 = 0.05;

/// Edge length of the die cube (metres).
pub const DIE_SIZE: f32 = 0.1;

/// Die mass (kg).
pub const DIE_MASS: f32 = 1.0;

/// Side length of the square surface indicator (metres).
pub const INDICATOR_SIZE: f32 = 0.2;

/// Side length of the invisible floor fixture that catches the die (metres).
pub const FLOOR_SIZE: f32 = 50.0;

/// Upward impulse applied on every roll.
pub const ROLL_IMPULSE: [f32; 3] = [0.0, 3.0, 0.0];

/// Inclusive integer draw range per rotation axis (x, y, z).
pub const ROLL_X_RANGE: (u32, u32) = (1, 2);
pub const ROLL_Y_RANGE: (u32, u32) = (1, 4);
pub const ROLL_Z_RANGE: (u32, u32) = (1, 3);

/// Multipliers applied to the drawn integers to get rotation angles (radians).
pub const ROLL_MULTIPLIERS: [f32; 3] = [3.0, 5.0, 5.0];

/// Duration of the roll rotation action (seconds).
pub const ROLL_ROTATION_DURATION: f32 = 0.5;

/// Vertical lift applied alongside the roll and its duration (metres, seconds).
pub const ROLL_LIFT: f32 = 1.0;
pub const ROLL_LIFT_DURATION: f32 = 1.0;

/// Gravity along world Y (m/s²).
pub const GRAVITY: f32 = -9.8;

/// Contact response of the die against floors.
pub const DIE_RESTITUTION: f32 = 0.35;
pub const DIE_FRICTION: f32 = 0.6;

/// Angular damping of a rolling die.
pub const DIE_ANGULAR_DAMPING: f32 = 0.4;

/// Thickness of the floor slab hanging below the tracked surface (metres).
pub const FLOOR_THICKNESS: f32 = 0.2;

/// Number of faces on the die; values run 1..=DIE_FACES and opposite faces sum to DIE_FACES + 1.
pub const DIE_FACES: u32 = 6;

/// Simulated scan: seconds before each surface source is discovered.
pub const SCAN_FEATURE_POINTS_AFTER: f32 = 0.8;
pub const SCAN_PLANES_AFTER: f32 = 1.5;
pub const SCAN_ESTIMATED_PLANE_AFTER: f32 = 3.0;

/// A ray hits a feature point when it passes this close to it (metres).
pub const FEATURE_POINT_TOLERANCE: f32 = 0.02;
