//! Scene data structures: meshes, transforms, materials, lights and textures.
//!
//! - `mesh` holds the procedural CPU-side primitives
//! - `transform` is the hierarchical model matrix stack
//! - `material` and `light` describe the fixed lighting model
//! - `instance` packs a posed primitive for the GPU
//! - `texture` contains GPU texture wrapper and creation utilities

pub mod instance;
pub mod light;
pub mod material;
pub mod mesh;
pub mod texture;
pub mod transform;
