/*!
inertia3d
=========

**inertia3d** computes the mass properties and geometry descriptors of rigid
bodies described either by a canonical primitive (sphere, box, cylinder) or
by an arbitrary closed triangle mesh.

The result of every builder is a [`builder::RigidBodyDescriptor`] holding the
body name, its mass, its centroidal inertia tensor and a description of its
geometry, ready to be embedded into a link description (URDF, SDF, MJCF…).

```
use inertia3d::builder::{BoxBuilder, PrimitiveBuilder};

let body = BoxBuilder::new("base_link", 6.0, 1.0, 2.0, 3.0)?.build()?;
assert!((body.inertia.ixx - 6.5).abs() < 1.0e-12);
assert!((body.inertia.iyy - 5.0).abs() < 1.0e-12);
assert!((body.inertia.izz - 2.5).abs() < 1.0e-12);
# Ok::<(), inertia3d::builder::BuilderError>(())
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/inertia3d/0.1.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod builder;
pub mod loader;
pub mod mass_properties;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point3, UnitQuaternion, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The principal angular inertia of a rigid body.
    pub type PrincipalAngularInertia<N> = Vector3<N>;
}
