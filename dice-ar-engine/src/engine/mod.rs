pub mod camera;
pub mod config;
pub mod core;
pub mod physics;
pub mod scene;
pub mod systems;
pub mod tracking;
