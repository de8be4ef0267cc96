//! Low-level utilities for triangle mesh generation.
//!
//! Vertices are pushed to a `Vec<Point<Real>>` and triangles to a `Vec<[u32; 3]>`.
//! Circles lie in planes orthogonal to the `z` axis and are traversed
//! counter-clockwise when seen from `+z`; the index helpers below rely on that
//! to emit triangles facing outward.

use crate::math::{Point, Real, Vector};

/// Applies a non-uniform scale to a set of points.
pub fn scaled(mut points: Vec<Point<Real>>, scale: Vector<Real>) -> Vec<Point<Real>> {
    points
        .iter_mut()
        .for_each(|p| p.coords.component_mul_assign(&scale));
    points
}

/// Pushes `nsubdiv` points of a circle of the given `radius`, centered on the
/// `z` axis at height `z`.
#[inline]
pub fn push_circle(radius: Real, nsubdiv: u32, z: Real, out: &mut Vec<Point<Real>>) {
    let dtheta = core::f64::consts::TAU / (nsubdiv as Real);

    for i in 0..nsubdiv {
        let theta = dtheta * (i as Real);
        out.push(Point::new(theta.cos() * radius, theta.sin() * radius, z));
    }
}

/// Pushes the two triangles of the quad `(dl, dr, ur, ul)`.
///
/// The quad faces outward when `dl → dr` runs counter-clockwise around `+z`
/// and `ul`, `ur` lie above `dl`, `dr`.
#[inline]
pub fn push_rectangle_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; 3]>) {
    out.push([ul, dl, dr]);
    out.push([dr, ur, ul]);
}

/// Connects two circles of `nsubdiv` points each into a closed tube.
///
/// The circle starting at `base_upper_circle` must lie above the circle
/// starting at `base_lower_circle`.
#[inline]
pub fn push_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    for i in 0..nsubdiv {
        let j = (i + 1) % nsubdiv;
        push_rectangle_indices(
            base_upper_circle + i,
            base_upper_circle + j,
            base_lower_circle + i,
            base_lower_circle + j,
            out,
        );
    }
}

/// Fills a circle of `nsubdiv` points with a triangle fan facing `+z`.
#[inline]
pub fn push_filled_circle_indices(base_circle: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    for i in base_circle + 1..base_circle + nsubdiv - 1 {
        out.push([base_circle, i, i + 1]);
    }
}

/// Connects a circle of `nsubdiv` points to a single apex point.
///
/// The triangles face outward if the apex lies above the circle.
#[inline]
pub fn push_apex_indices(base_circle: u32, apex: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    for i in 0..nsubdiv {
        let j = (i + 1) % nsubdiv;
        out.push([apex, base_circle + i, base_circle + j]);
    }
}

/// Reverses the winding of the given triangles, flipping their normals.
#[inline]
pub fn reverse_clockwising(indices: &mut [[u32; 3]]) {
    indices.iter_mut().for_each(|idx| idx.swap(0, 1));
}
