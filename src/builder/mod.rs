//! Builders turning a shape description and a mass into a [`RigidBodyDescriptor`].
//!
//! Every builder validates its parameters at construction time, and then
//! answers the pure queries of the [`PrimitiveBuilder`] trait. The
//! [`ShapeBuilder`] enum dispatches these queries over the four shape kinds.

pub use self::descriptor::{GeometryDescriptor, InertiaTensor, RigidBodyDescriptor};
pub use self::error::{BuilderError, ValidationError};
pub use self::mesh_builder::MeshBuilder;
pub use self::primitive_builder::{PrimitiveBuilder, ShapeBuilder, ShapeParameters};
pub use self::primitives::{BoxBuilder, CylinderBuilder, SphereBuilder};

mod descriptor;
mod error;
mod mesh_builder;
mod primitive_builder;
mod primitives;
