//! Shapes supported by inertia3d.

pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::sphere::Sphere;
pub use self::tetrahedron::Tetrahedron;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

pub(crate) use self::trimesh::aabb_extents;

mod cuboid;
mod cylinder;
mod sphere;
mod tetrahedron;
mod trimesh;
