//! Device camera emulation.
//!
//! On desktop there is no phone to move around, so a free-fly camera
//! (right-drag to look, WASD/QE to move) plays the part of the AR device.

/// Device camera resource and controller system.
pub mod device_camera;
