//! Definition of the cylinder shape.

use crate::math::Real;

/// A solid cylinder centered at the origin, with its axis along the local `z` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cylinder {
    /// The radius of the cylinder's circular cross-section.
    pub radius: Real,
    /// The total length of the cylinder along its axis.
    pub length: Real,
}

impl Cylinder {
    /// Creates a new `z`-aligned cylinder.
    #[inline]
    pub fn new(radius: Real, length: Real) -> Cylinder {
        Cylinder { radius, length }
    }

    /// Half the length of this cylinder.
    #[inline]
    pub fn half_length(&self) -> Real {
        self.length * 0.5
    }

    /// The volume of this cylinder.
    #[inline]
    pub fn volume(&self) -> Real {
        core::f64::consts::PI * self.radius * self.radius * self.length
    }
}
