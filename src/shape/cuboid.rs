//! Definition of the box shape.

use crate::math::{Real, Vector};

/// A box centered at the origin, with its edges aligned with the local axes.
///
/// Unlike most physics engines, the box is described by its full edge lengths
/// (the `size` attribute of URDF/SDF boxes) rather than its half-extents.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The edge lengths of the box along the local `x`, `y` and `z` axes.
    pub size: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box with the given edge lengths.
    #[inline]
    pub fn new(size: Vector<Real>) -> Cuboid {
        Cuboid { size }
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.size.x * self.size.y * self.size.z
    }
}
