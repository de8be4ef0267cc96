use crate::builder::error::{validate_dimension, validate_mass, validate_name};
use crate::builder::{GeometryDescriptor, PrimitiveBuilder, ValidationError};
use crate::mass_properties::{GeometryError, MassProperties};
use crate::math::{Real, Vector};
use crate::shape::{Cuboid, Cylinder, Sphere};

/// Builds the rigid body of a solid sphere of uniform density.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereBuilder {
    name: String,
    mass: Real,
    sphere: Sphere,
}

impl SphereBuilder {
    /// Creates a sphere builder, checking that the name is not empty and that
    /// the mass and radius are strictly positive.
    pub fn new(name: impl Into<String>, mass: Real, radius: Real) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_mass(mass)?;
        validate_dimension("radius", radius)?;

        Ok(Self {
            name,
            mass,
            sphere: Sphere::new(radius),
        })
    }

    /// The sphere shape.
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }
}

impl PrimitiveBuilder for SphereBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn mass(&self) -> Real {
        self.mass
    }

    fn mass_properties(&self) -> Result<MassProperties, GeometryError> {
        Ok(MassProperties::from_sphere(self.mass, self.sphere.radius))
    }

    fn geometry(&self) -> GeometryDescriptor {
        GeometryDescriptor::Sphere {
            radius: self.sphere.radius,
        }
    }
}

/// Builds the rigid body of a solid box of uniform density.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxBuilder {
    name: String,
    mass: Real,
    cuboid: Cuboid,
}

impl BoxBuilder {
    /// Creates a box builder with the edge lengths `x`, `y`, `z` along the
    /// local axes.
    pub fn new(
        name: impl Into<String>,
        mass: Real,
        x: Real,
        y: Real,
        z: Real,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_mass(mass)?;
        validate_dimension("x", x)?;
        validate_dimension("y", y)?;
        validate_dimension("z", z)?;

        Ok(Self {
            name,
            mass,
            cuboid: Cuboid::new(Vector::new(x, y, z)),
        })
    }

    /// The box shape.
    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }
}

impl PrimitiveBuilder for BoxBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn mass(&self) -> Real {
        self.mass
    }

    fn mass_properties(&self) -> Result<MassProperties, GeometryError> {
        Ok(MassProperties::from_cuboid(self.mass, self.cuboid.size))
    }

    fn geometry(&self) -> GeometryDescriptor {
        GeometryDescriptor::Box {
            size: self.cuboid.size.into(),
        }
    }
}

/// Builds the rigid body of a solid cylinder of uniform density, with its
/// axis along the local `z` axis.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderBuilder {
    name: String,
    mass: Real,
    cylinder: Cylinder,
}

impl CylinderBuilder {
    /// Creates a cylinder builder.
    pub fn new(
        name: impl Into<String>,
        mass: Real,
        radius: Real,
        length: Real,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_mass(mass)?;
        validate_dimension("radius", radius)?;
        validate_dimension("length", length)?;

        Ok(Self {
            name,
            mass,
            cylinder: Cylinder::new(radius, length),
        })
    }

    /// The cylinder shape.
    pub fn cylinder(&self) -> &Cylinder {
        &self.cylinder
    }
}

impl PrimitiveBuilder for CylinderBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn mass(&self) -> Real {
        self.mass
    }

    fn mass_properties(&self) -> Result<MassProperties, GeometryError> {
        Ok(MassProperties::from_cylinder(
            self.mass,
            self.cylinder.radius,
            self.cylinder.length,
        ))
    }

    fn geometry(&self) -> GeometryDescriptor {
        GeometryDescriptor::Cylinder {
            radius: self.cylinder.radius,
            length: self.cylinder.length,
        }
    }
}
