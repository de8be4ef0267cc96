use crate::math::{Point, Real};
use crate::shape::Cuboid;
use crate::transformation::utils;

impl Cuboid {
    /// Discretizes the boundary of this box as a triangle mesh.
    ///
    /// The mesh has 8 vertices and 12 triangles facing outward.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (vtx, idx) = unit_cuboid();
        (utils::scaled(vtx, self.size), idx)
    }
}

/// Generates a cube centered at the origin with edges of length 1.
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        // -x
        [4, 5, 0],
        [5, 1, 0],
        // -z
        [5, 6, 1],
        [6, 2, 1],
        // +x
        [6, 7, 3],
        [2, 6, 3],
        // +z
        [7, 4, 0],
        [3, 7, 0],
        // -y
        [0, 1, 2],
        [3, 0, 2],
        // +y
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
