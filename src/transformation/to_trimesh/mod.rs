//! Conversion of the primitive shapes into closed, outward-facing triangle meshes.

mod cuboid_to_trimesh;
mod cylinder_to_trimesh;
mod sphere_to_trimesh;
