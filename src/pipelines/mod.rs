//! Render pipelines and their uniform resources.
//!
//! - `basic` builds the lit phong pipeline and the shared pipeline factory
//! - `light` holds the light uniform and its bind group

pub mod basic;
pub mod light;
