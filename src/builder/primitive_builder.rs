use crate::builder::{
    BoxBuilder, BuilderError, CylinderBuilder, GeometryDescriptor, InertiaTensor, MeshBuilder,
    RigidBodyDescriptor, SphereBuilder,
};
use crate::loader::{FileMeshLoader, MeshLoader};
use crate::mass_properties::{GeometryError, MassProperties};
use crate::math::Real;
use crate::shape::{Cuboid, Cylinder, Sphere};
use std::path::PathBuf;

/// The interface shared by every rigid body builder.
///
/// All the queries are pure: calling them several times yields equal results.
pub trait PrimitiveBuilder {
    /// The name of the rigid body.
    fn name(&self) -> &str;

    /// The total mass of the rigid body.
    fn mass(&self) -> Real;

    /// The mass properties of the rigid body, including its full inertia tensor.
    ///
    /// Only mesh builders can fail, if their mesh encloses no volume.
    fn mass_properties(&self) -> Result<MassProperties, GeometryError>;

    /// The geometry descriptor of the rigid body. Independent of its mass.
    fn geometry(&self) -> GeometryDescriptor;

    /// The inertia tensor of the rigid body about its center of mass.
    fn inertia(&self) -> Result<InertiaTensor, GeometryError> {
        self.mass_properties()
            .map(|mprops| InertiaTensor::from(&mprops))
    }

    /// Assembles the name, mass, inertia and geometry of the rigid body.
    fn build(&self) -> Result<RigidBodyDescriptor, GeometryError> {
        Ok(RigidBodyDescriptor {
            name: self.name().to_string(),
            mass: self.mass(),
            inertia: self.inertia()?,
            geometry: self.geometry(),
        })
    }
}

/// The parameters of a rigid body shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeParameters {
    /// A solid sphere.
    Sphere(Sphere),
    /// A solid box.
    Box(Cuboid),
    /// A solid cylinder aligned with the local `z` axis.
    Cylinder(Cylinder),
    /// A closed triangle mesh stored in a mesh resource.
    Mesh {
        /// The location of the mesh resource.
        uri: PathBuf,
        /// The scale applied to the mesh. Must have exactly three components.
        scale: Vec<Real>,
    },
}

/// A rigid body builder for any kind of shape.
#[derive(Clone, Debug)]
pub enum ShapeBuilder {
    /// A sphere builder.
    Sphere(SphereBuilder),
    /// A box builder.
    Box(BoxBuilder),
    /// A cylinder builder.
    Cylinder(CylinderBuilder),
    /// A triangle mesh builder.
    Mesh(MeshBuilder),
}

impl ShapeBuilder {
    /// Validates the parameters and creates the matching builder.
    ///
    /// Mesh resources are read with a [`FileMeshLoader`].
    pub fn new(
        name: impl Into<String>,
        mass: Real,
        params: ShapeParameters,
    ) -> Result<Self, BuilderError> {
        Self::with_loader(name, mass, params, &FileMeshLoader)
    }

    /// Validates the parameters and creates the matching builder, reading
    /// mesh resources with the given `loader`.
    pub fn with_loader<L: MeshLoader + ?Sized>(
        name: impl Into<String>,
        mass: Real,
        params: ShapeParameters,
        loader: &L,
    ) -> Result<Self, BuilderError> {
        let builder = match params {
            ShapeParameters::Sphere(sphere) => {
                Self::Sphere(SphereBuilder::new(name, mass, sphere.radius)?)
            }
            ShapeParameters::Box(cuboid) => {
                let size = cuboid.size;
                Self::Box(BoxBuilder::new(name, mass, size.x, size.y, size.z)?)
            }
            ShapeParameters::Cylinder(cylinder) => Self::Cylinder(CylinderBuilder::new(
                name,
                mass,
                cylinder.radius,
                cylinder.length,
            )?),
            ShapeParameters::Mesh { uri, scale } => {
                Self::Mesh(MeshBuilder::with_loader(name, mass, uri, &scale, loader)?)
            }
        };

        Ok(builder)
    }

    fn as_dyn(&self) -> &dyn PrimitiveBuilder {
        match self {
            Self::Sphere(b) => b,
            Self::Box(b) => b,
            Self::Cylinder(b) => b,
            Self::Mesh(b) => b,
        }
    }
}

impl PrimitiveBuilder for ShapeBuilder {
    fn name(&self) -> &str {
        self.as_dyn().name()
    }

    fn mass(&self) -> Real {
        self.as_dyn().mass()
    }

    fn mass_properties(&self) -> Result<MassProperties, GeometryError> {
        self.as_dyn().mass_properties()
    }

    fn geometry(&self) -> GeometryDescriptor {
        self.as_dyn().geometry()
    }
}

impl From<SphereBuilder> for ShapeBuilder {
    fn from(builder: SphereBuilder) -> Self {
        Self::Sphere(builder)
    }
}

impl From<BoxBuilder> for ShapeBuilder {
    fn from(builder: BoxBuilder) -> Self {
        Self::Box(builder)
    }
}

impl From<CylinderBuilder> for ShapeBuilder {
    fn from(builder: CylinderBuilder) -> Self {
        Self::Cylinder(builder)
    }
}

impl From<MeshBuilder> for ShapeBuilder {
    fn from(builder: MeshBuilder) -> Self {
        Self::Mesh(builder)
    }
}
