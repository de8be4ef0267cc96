//! Wavefront (`.obj`) export of triangle meshes.
//!
//! This module is enabled by the `wavefront` feature flag.

use crate::shape::TriMesh;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::io::BufWriter;
use std::path::Path;

impl TriMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Vertex coordinates are written in single precision.
    pub fn to_obj_file(&self, path: &Path) -> Result<(), ObjError> {
        let mut file = BufWriter::new(std::fs::File::create(path)?);

        ObjData {
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(vec![
                                IndexTuple(tri[0] as usize, None, None),
                                IndexTuple(tri[1] as usize, None, None),
                                IndexTuple(tri[2] as usize, None, None),
                            ])
                        })
                        .collect(),
                    name: String::new(),
                    index: 0,
                    material: None,
                }],
                name: String::new(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
