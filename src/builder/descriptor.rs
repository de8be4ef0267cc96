use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Real};

/// The inertia tensor of a rigid body about its center of mass.
///
/// The off-diagonal entries are the entries of the inertia matrix, i.e.,
/// `ixy = -∫ x·y dm`, which is the convention of URDF and SDF `<inertia>` tags.
/// They are zero for the primitive shapes and for meshes whose principal axes
/// are aligned with their local-space axes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InertiaTensor {
    /// Moment of inertia about the local `x` axis.
    pub ixx: Real,
    /// Moment of inertia about the local `y` axis.
    pub iyy: Real,
    /// Moment of inertia about the local `z` axis.
    pub izz: Real,
    /// The `(x, y)` product of inertia.
    pub ixy: Real,
    /// The `(x, z)` product of inertia.
    pub ixz: Real,
    /// The `(y, z)` product of inertia.
    pub iyz: Real,
}

impl InertiaTensor {
    /// An inertia tensor with the given diagonal and no product of inertia.
    pub fn diagonal(ixx: Real, iyy: Real, izz: Real) -> Self {
        Self {
            ixx,
            iyy,
            izz,
            ..Default::default()
        }
    }

    /// Extracts the six independent entries of a symmetric inertia matrix.
    pub fn from_matrix(inertia: &Matrix<Real>) -> Self {
        Self {
            ixx: inertia.m11,
            iyy: inertia.m22,
            izz: inertia.m33,
            ixy: inertia.m12,
            ixz: inertia.m13,
            iyz: inertia.m23,
        }
    }

    /// The symmetric inertia matrix.
    pub fn to_matrix(&self) -> Matrix<Real> {
        Matrix::new(
            self.ixx, self.ixy, self.ixz, //
            self.ixy, self.iyy, self.iyz, //
            self.ixz, self.iyz, self.izz,
        )
    }

    /// This tensor with its products of inertia set to zero.
    ///
    /// This assumes the principal axes of the body are aligned with its
    /// local-space axes; use [`MassProperties::principal_inertia`] if they are not.
    pub fn without_products(&self) -> Self {
        Self::diagonal(self.ixx, self.iyy, self.izz)
    }

    /// Does this tensor have a product of inertia of magnitude greater than `eps`?
    pub fn has_products(&self, eps: Real) -> bool {
        self.ixy.abs() > eps || self.ixz.abs() > eps || self.iyz.abs() > eps
    }

    /// Checks that the diagonal is nonnegative and satisfies the triangle
    /// inequalities `ixx + iyy ≥ izz` (and permutations) of physical bodies,
    /// up to the relative tolerance `eps`.
    pub fn is_physical(&self, eps: Real) -> bool {
        let (a, b, c) = (self.ixx, self.iyy, self.izz);
        let tol = eps * (a + b + c);

        a >= 0.0 && b >= 0.0 && c >= 0.0 && a + b + tol >= c && a + c + tol >= b && b + c + tol >= a
    }
}

impl From<&MassProperties> for InertiaTensor {
    fn from(mprops: &MassProperties) -> Self {
        Self::from_matrix(&mprops.inertia)
    }
}

/// The description of the geometry of a rigid body, for its visual or collision elements.
///
/// It does not carry any mass information.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryDescriptor {
    /// A sphere.
    Sphere {
        /// The sphere radius.
        radius: Real,
    },
    /// A box.
    Box {
        /// The edge lengths along the local `x`, `y`, `z` axes.
        size: [Real; 3],
    },
    /// A cylinder aligned with the local `z` axis.
    Cylinder {
        /// The cylinder radius.
        radius: Real,
        /// The cylinder length along its axis.
        length: Real,
    },
    /// A triangle mesh resource.
    Mesh {
        /// The location of the mesh resource.
        uri: String,
        /// The scale applied to the mesh vertices.
        scale: [Real; 3],
    },
}

/// Everything needed to describe the inertial and geometric elements of a link.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBodyDescriptor {
    /// The name of the rigid body.
    pub name: String,
    /// The total mass of the rigid body.
    pub mass: Real,
    /// The inertia tensor about the center of mass.
    pub inertia: InertiaTensor,
    /// The geometry of the rigid body.
    pub geometry: GeometryDescriptor,
}
