use crate::math::{Matrix, Point, PrincipalAngularInertia, Real, Rotation, Vector};

const EPSILON: Real = f32::EPSILON as Real;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a rigid body with uniform density.
pub struct MassProperties {
    /// The total mass of the rigid body.
    pub mass: Real,
    /// The volume enclosed by the shape of the rigid body.
    pub volume: Real,
    /// The center of mass of the rigid body expressed in its local-space.
    pub local_com: Point<Real>,
    /// The inertia tensor of the rigid body, about its center of mass,
    /// expressed along the axes of its local-space.
    pub inertia: Matrix<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from a center-of-mass, a mass, a volume,
    /// and the angular inertia along the local coordinate axes.
    pub fn new(
        local_com: Point<Real>,
        mass: Real,
        volume: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        Self::with_inertia_matrix(
            local_com,
            mass,
            volume,
            Matrix::from_diagonal(&principal_inertia),
        )
    }

    /// Initializes the mass properties from a center-of-mass, a mass, a volume,
    /// and a full centroidal inertia tensor.
    pub fn with_inertia_matrix(
        local_com: Point<Real>,
        mass: Real,
        volume: Real,
        inertia: Matrix<Real>,
    ) -> Self {
        Self {
            mass,
            volume,
            local_com,
            inertia,
        }
    }

    /// The uniform density (mass per unit volume) of the rigid body.
    ///
    /// Returns zero if the volume is zero.
    pub fn density(&self) -> Real {
        if self.volume == 0.0 {
            0.0
        } else {
            self.mass / self.volume
        }
    }

    /// The angular inertia along the local coordinate axes, i.e., the diagonal
    /// of the inertia tensor.
    pub fn diagonal_inertia(&self) -> Vector<Real> {
        self.inertia.diagonal()
    }

    /// Returns `true` if every product of inertia has a magnitude smaller than
    /// `eps` times the largest diagonal entry.
    ///
    /// This is always the case for shapes whose principal axes are aligned
    /// with their local-space axes.
    pub fn is_axis_aligned(&self, eps: Real) -> bool {
        let scale = self.inertia.diagonal().amax();
        let i = &self.inertia;
        [i.m12, i.m13, i.m23]
            .iter()
            .all(|p| p.abs() <= eps * scale)
    }

    /// Diagonalizes the inertia tensor.
    ///
    /// Returns the principal angular inertia and the rotation from the
    /// principal axes to the local-space axes, such that
    /// `inertia == frame * diag(principal) * frame⁻¹`.
    pub fn principal_inertia(&self) -> (PrincipalAngularInertia<Real>, Rotation<Real>) {
        let eigen = self.inertia.symmetric_eigen();
        let mut eigenvectors = eigen.eigenvectors;

        // The eigenbasis may be left-handed.
        if eigenvectors.determinant() < 0.0 {
            eigenvectors.column_mut(2).neg_mut();
        }

        let frame = Rotation::from_matrix_eps(&eigenvectors, 1.0e-9, 100, Rotation::identity());
        // Drop negative eigenvalues caused by rounding errors.
        let principal = eigen.eigenvalues.map(|e| if e < EPSILON { 0.0 } else { e });

        (principal, frame)
    }

    /// The inertia tensor of the rigid body about an arbitrary `point` of its
    /// local-space, using the parallel axis theorem.
    pub fn inertia_wrt_point(&self, point: &Point<Real>) -> Matrix<Real> {
        self.inertia + parallel_axis_shift(&(point - self.local_com), self.mass)
    }
}

/// The inertia tensor of a point `mass` located at `shift` from the origin.
///
/// Adding it to a centroidal inertia tensor moves that tensor to a point
/// located at `-shift` from the center of mass (parallel axis theorem).
pub fn parallel_axis_shift(shift: &Vector<Real>, mass: Real) -> Matrix<Real> {
    let diag = Matrix::from_diagonal_element(shift.norm_squared());
    (diag - shift * shift.transpose()) * mass
}
