use bevy::prelude::*;

/// Status label font size and offset below the safe area top (px).
pub const STATUS_FONT_SIZE: f32 = 25.0;
pub const STATUS_TOP_OFFSET: f32 = 60.0;
pub const STATUS_SIDE_MARGIN: f32 = 10.0;
pub const STATUS_CORNER_RADIUS: f32 = 15.0;

/// Reset button layout (px).
pub const RESET_FONT_SIZE: f32 = 15.0;
pub const RESET_TOP_OFFSET: f32 = 10.0;
pub const RESET_RIGHT_MARGIN: f32 = 10.0;
pub const RESET_WIDTH: f32 = 100.0;
pub const RESET_HEIGHT: f32 = 40.0;
pub const RESET_CORNER_RADIUS: f32 = 7.0;

pub const PANEL_BACKGROUND: Color = Color::WHITE;
pub const PANEL_TEXT: Color = Color::BLACK;
pub const RESET_HOVERED: Color = Color::srgb(0.88, 0.88, 0.90);
pub const RESET_PRESSED: Color = Color::srgb(0.75, 0.75, 0.78);

/// Procedural textures, as sRGB RGBA8 texels.
pub const RETICLE_TEXTURE_SIZE: u32 = 128;
pub const RETICLE_RGBA: [u8; 4] = [255, 217, 51, 255];
pub const DIE_FACE_TEXTURE_SIZE: u32 = 64;
pub const DIE_FACE_RGBA: [u8; 4] = [235, 31, 31, 255];
pub const DIE_PIP_RGBA: [u8; 4] = [250, 250, 245, 255];
/// Pip radius as a fraction of the face edge.
pub const DIE_PIP_RADIUS: f32 = 0.1;
pub const TABLE_COLOUR: Color = Color::srgb(0.45, 0.30, 0.18);
pub const GROUND_COLOUR: Color = Color::srgb(0.32, 0.34, 0.36);
pub const FEATURE_POINT_COLOUR: Color = Color::srgb(0.2, 0.9, 1.0);
pub const FEATURE_POINT_SIZE: f32 = 0.01;

pub const FPS_FONT_SIZE: f32 = 16.0;
