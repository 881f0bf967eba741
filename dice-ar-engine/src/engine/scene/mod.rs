//! Scene content and the ECS-backed scene/physics service.
//!
//! Spawns the simulated room, owns the shared meshes and materials for
//! placement nodes, and implements `ScenePhysics` over `Commands`.

/// Die face numbering, the atlas-mapped die mesh and the settled-face report.
pub mod die_faces;

/// `EcsScene`: placement nodes and physics commands as entity commands.
pub mod ecs_scene;

/// Room geometry (table, box, ground) and its matching surface tracker.
pub mod environment;

/// Shared meshes and materials for the indicator and die.
pub mod scene_assets;

/// Procedural pip atlas and surface reticle textures.
pub mod textures;
