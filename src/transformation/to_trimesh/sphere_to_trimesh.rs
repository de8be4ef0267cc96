use crate::math::{Point, Real, Vector};
use crate::shape::Sphere;
use crate::transformation::utils;

impl Sphere {
    /// Discretizes the boundary of this sphere as a triangle mesh.
    ///
    /// The sphere is split into `ntheta_subdiv` meridians (at least 3) and
    /// `nphi_subdiv` parallels (at least 2), with one vertex at each pole.
    pub fn to_trimesh(
        &self,
        ntheta_subdiv: u32,
        nphi_subdiv: u32,
    ) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (vtx, idx) = unit_sphere(ntheta_subdiv.max(3), nphi_subdiv.max(2));
        (utils::scaled(vtx, Vector::repeat(self.radius)), idx)
    }
}

fn unit_sphere(ntheta_subdiv: u32, nphi_subdiv: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let dphi = core::f64::consts::PI / (nphi_subdiv as Real);
    let nrings = nphi_subdiv - 1;

    let mut coords = Vec::with_capacity((nrings * ntheta_subdiv + 2) as usize);
    let mut idx = Vec::new();

    for k in 1..nphi_subdiv {
        let phi = -core::f64::consts::FRAC_PI_2 + dphi * (k as Real);
        utils::push_circle(phi.cos(), ntheta_subdiv, phi.sin(), &mut coords);
    }

    for k in 0..nrings - 1 {
        let lower = k * ntheta_subdiv;
        utils::push_ring_indices(lower, lower + ntheta_subdiv, ntheta_subdiv, &mut idx);
    }

    let south = coords.len() as u32;
    coords.push(Point::new(0.0, 0.0, -1.0));
    let north = south + 1;
    coords.push(Point::new(0.0, 0.0, 1.0));

    // The north pole lies above the last ring.
    utils::push_apex_indices((nrings - 1) * ntheta_subdiv, north, ntheta_subdiv, &mut idx);

    // The south pole lies below the first ring: flip its fan.
    let south_start_id = idx.len();
    utils::push_apex_indices(0, south, ntheta_subdiv, &mut idx);
    utils::reverse_clockwising(&mut idx[south_start_id..]);

    (coords, idx)
}
