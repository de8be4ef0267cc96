//! Mass properties (mass, volume, center-of-mass, inertia tensor) of shapes.

pub use self::mass_properties::MassProperties;
pub use self::mass_properties_trimesh::GeometryError;

mod mass_properties;
mod mass_properties_cuboid;
mod mass_properties_cylinder;
mod mass_properties_sphere;
mod mass_properties_trimesh;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties::parallel_axis_shift;
    pub use super::mass_properties_trimesh::{
        tetrahedron_unit_inertia_tensor_wrt_point, trimesh_signed_volume_and_center_of_mass,
    };
}
