use crate::math::{Point, Real};
use crate::shape::Cylinder;
use crate::transformation::utils;

impl Cylinder {
    /// Discretizes the boundary of this cylinder as a triangle mesh.
    ///
    /// Each cap is a polygon with `nsubdiv` sides (at least 3).
    pub fn to_trimesh(&self, nsubdiv: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let nsubdiv = nsubdiv.max(3);
        let half_length = self.half_length();
        let mut coords = Vec::with_capacity(nsubdiv as usize * 2);
        let mut indices = Vec::with_capacity(nsubdiv as usize * 4);

        utils::push_circle(self.radius, nsubdiv, -half_length, &mut coords);
        utils::push_circle(self.radius, nsubdiv, half_length, &mut coords);

        utils::push_ring_indices(0, nsubdiv, nsubdiv, &mut indices);
        utils::push_filled_circle_indices(nsubdiv, nsubdiv, &mut indices);

        let bottom_start_id = indices.len();
        utils::push_filled_circle_indices(0, nsubdiv, &mut indices);
        utils::reverse_clockwising(&mut indices[bottom_start_id..]);

        (coords, indices)
    }
}
