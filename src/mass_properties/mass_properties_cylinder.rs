use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Vector};
use crate::shape::Cylinder;

impl MassProperties {
    pub(crate) fn cylinder_z_unit_angular_inertia(
        radius: Real,
        length: Real,
    ) -> PrincipalAngularInertia<Real> {
        let sq_radius = radius * radius;
        let off_principal = (sq_radius * 3.0 + length * length) / 12.0;

        Vector::new(off_principal, off_principal, sq_radius / 2.0)
    }

    /// Computes the mass properties of a solid cylinder aligned with the local `z` axis.
    ///
    /// The transverse moments are `mass · (3·radius² + length²) / 12` and the
    /// moment about the axis is `mass · radius² / 2`, independent of the length.
    pub fn from_cylinder(mass: Real, radius: Real, length: Real) -> Self {
        let volume = Cylinder::new(radius, length).volume();
        let unit_i = Self::cylinder_z_unit_angular_inertia(radius, length);
        Self::new(Point::origin(), mass, volume, unit_i * mass)
    }
}
