//! jumping-lamp
//!
//! A jointed desk lamp hopping along a circular path inside a textured room.
//! The scene is described on the CPU as an ordered list of draw calls built
//! with a GL-style matrix stack, and rendered with a single Phong pipeline
//! lit by a ceiling point light and the lamp's own spotlight.
//!
//! High-level modules
//! - `animation`: the jump cycle of the lamp and the fireplace frames
//! - `camera`: orbit camera, lamp-follow camera, projection and uniforms
//! - `config`: command line options
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `controls`: keyboard commands and mouse drag
//! - `data_structures`: meshes, materials, lights, instances, textures and the matrix stack
//! - `flow`: window event loop
//! - `lamp`: the lamp model and its spotlight
//! - `pipelines`: the Phong pipeline and the light uniforms
//! - `render`: draw calls and the renderer that issues them
//! - `resources`: texture loading
//! - `scene`: the room, its furniture and the scene state
//!

pub mod animation;
pub mod camera;
pub mod config;
pub mod context;
pub mod controls;
pub mod data_structures;
pub mod flow;
pub mod lamp;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use config::AppConfig;
