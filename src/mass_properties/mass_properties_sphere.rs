use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Vector};
use crate::shape::Sphere;

impl MassProperties {
    pub(crate) fn sphere_unit_angular_inertia(radius: Real) -> PrincipalAngularInertia<Real> {
        Vector::repeat(radius * radius * 2.0 / 5.0)
    }

    /// Computes the mass properties of a solid sphere of the given total `mass`.
    ///
    /// The center of mass is at the origin and, by symmetry, the angular
    /// inertia is the same about every axis: `2/5 · mass · radius²`.
    pub fn from_sphere(mass: Real, radius: Real) -> Self {
        let volume = Sphere::new(radius).volume();
        let unit_i = Self::sphere_unit_angular_inertia(radius);
        Self::new(Point::origin(), mass, volume, unit_i * mass)
    }
}
