//! Runtime diagnostics.

/// FPS overlay for native builds.
///
/// Mirrors the frame statistics the device build shows on screen.
pub mod fps_tracking;
