//! Tessellation of shapes into triangle meshes, and mesh export.

mod to_trimesh;
pub mod utils;

#[cfg(feature = "wavefront")]
pub mod wavefront;
