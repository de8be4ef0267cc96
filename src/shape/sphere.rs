use crate::math::Real;

/// A solid sphere centered at the origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere { radius }
    }

    /// The volume of this sphere.
    #[inline]
    pub fn volume(&self) -> Real {
        core::f64::consts::PI * self.radius * self.radius * self.radius * 4.0 / 3.0
    }
}
