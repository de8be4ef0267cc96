use crate::mass_properties::details::parallel_axis_shift;
use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::{aabb_extents, Tetrahedron, TriMesh};
use crate::utils;

/// Error raised when the mass properties of a triangle mesh are undefined.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The mesh has no triangle.
    #[error("the mesh has no triangle.")]
    EmptyMesh,
    /// The signed volume enclosed by the mesh is zero or nearly zero.
    ///
    /// This happens with open, flat, or inconsistently wound meshes.
    #[error("the mesh encloses a degenerate volume ({volume}); it is probably open, flat, or not consistently oriented.")]
    DegenerateVolume {
        /// The signed volume computed for the mesh.
        volume: Real,
    },
}

impl MassProperties {
    /// Computes the mass properties of a closed triangle mesh of uniform density
    /// and total `mass`.
    ///
    /// The mesh must be watertight and its triangles consistently oriented.
    /// Inward-facing triangles are accepted as long as *all* of them face inward.
    /// The resulting inertia tensor is expressed about the center of mass, along
    /// the axes of the mesh's local-space, and keeps its products of inertia.
    ///
    /// # Panics
    ///
    /// Panics if an index of `indices` is out of bounds of `vertices`.
    pub fn from_trimesh(
        mass: Real,
        vertices: &[Point<Real>],
        indices: &[[u32; DIM]],
    ) -> Result<MassProperties, GeometryError> {
        if indices.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }

        let reference = utils::center(vertices).ok_or(GeometryError::EmptyMesh)?;
        let moments = integrate_trimesh(vertices, indices, &reference);
        let volume = moments.volume;
        let max_extent = aabb_extents(vertices).map(|e| e.max()).unwrap_or(0.0);

        if !volume.is_finite() || volume.abs() <= DEFAULT_EPSILON * max_extent.powi(3) {
            return Err(GeometryError::DegenerateVolume { volume });
        }

        if volume < 0.0 {
            log::debug!(
                "Triangle mesh with negative signed volume {}: its triangles face inward.",
                volume
            );
        }

        // The signs of the volume and of the integrals cancel out here.
        let com_shift = moments.first / volume;
        let inertia = moments.second - parallel_axis_shift(&com_shift, volume);
        let density = mass / volume;

        Ok(Self::with_inertia_matrix(
            reference + com_shift,
            mass,
            volume.abs(),
            inertia * density,
        ))
    }
}

impl TriMesh {
    /// Computes the mass properties of this mesh, with uniform density and total `mass`.
    pub fn mass_properties(&self, mass: Real) -> Result<MassProperties, GeometryError> {
        MassProperties::from_trimesh(mass, self.vertices(), self.indices())
    }
}

/// Volume integrals of a triangle mesh, relative to a reference point.
struct TriMeshMoments {
    /// Signed volume.
    volume: Real,
    /// First moment (volume-weighted centroid offset).
    first: Vector<Real>,
    /// Unit-density inertia tensor about the reference point.
    second: Matrix<Real>,
}

fn integrate_trimesh(
    vertices: &[Point<Real>],
    indices: &[[u32; DIM]],
    reference: &Point<Real>,
) -> TriMeshMoments {
    let mut moments = TriMeshMoments {
        volume: 0.0,
        first: Vector::zeros(),
        second: Matrix::zeros(),
    };

    for t in indices {
        let [p2, p3, p4] = t.map(|i| vertices[i as usize]);
        let tetra = Tetrahedron::new(*reference, p2, p3, p4);
        let vol = tetra.signed_volume();

        moments.volume += vol;
        moments.first += (tetra.center() - reference) * vol;
        moments.second +=
            tetrahedron_unit_inertia_tensor_wrt_point(reference, reference, &p2, &p3, &p4) * vol;
    }

    moments
}

/// Computes the unit inertia tensor of a tetrahedron, with regard to the given `point`.
///
/// Multiply the result by the tetrahedron's volume and density to obtain its
/// actual inertia tensor about `point`.
pub fn tetrahedron_unit_inertia_tensor_wrt_point(
    point: &Point<Real>,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
    p4: &Point<Real>,
) -> Matrix<Real> {
    let pts = [p1 - point, p2 - point, p3 - point, p4 - point];
    let sum: Vector<Real> = pts.iter().sum();

    // Covariance of a unit-volume tetrahedron: (Σ pᵢpᵢᵀ + (Σ pᵢ)(Σ pᵢ)ᵀ) / 20.
    let mut covariance = sum * sum.transpose();
    for pt in &pts {
        covariance += pt * pt.transpose();
    }
    covariance *= 0.05;

    Matrix::from_diagonal_element(covariance.trace()) - covariance
}

/// Computes the signed volume and center-of-mass of a triangle mesh.
///
/// Returns `None` if the mesh has no vertex. If the signed volume is zero,
/// the vertex average is returned as the center-of-mass.
///
/// # Panics
///
/// Panics if an index of `indices` is out of bounds of `vertices`.
pub fn trimesh_signed_volume_and_center_of_mass(
    vertices: &[Point<Real>],
    indices: &[[u32; DIM]],
) -> Option<(Real, Point<Real>)> {
    let reference = utils::center(vertices)?;
    let moments = integrate_trimesh(vertices, indices, &reference);

    if moments.volume == 0.0 {
        Some((0.0, reference))
    } else {
        Some((moments.volume, reference + moments.first / moments.volume))
    }
}
