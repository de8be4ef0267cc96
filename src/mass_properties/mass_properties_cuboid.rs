use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Vector};
use crate::shape::Cuboid;

impl MassProperties {
    pub(crate) fn cuboid_unit_angular_inertia(size: &Vector<Real>) -> PrincipalAngularInertia<Real> {
        let ix = (size.x * size.x) / 12.0;
        let iy = (size.y * size.y) / 12.0;
        let iz = (size.z * size.z) / 12.0;

        Vector::new(iy + iz, ix + iz, ix + iy)
    }

    /// Computes the mass properties of a solid box with edge lengths `size`.
    pub fn from_cuboid(mass: Real, size: Vector<Real>) -> Self {
        let volume = Cuboid::new(size).volume();
        let unit_i = Self::cuboid_unit_angular_inertia(&size);
        Self::new(Point::origin(), mass, volume, unit_i * mass)
    }
}
