use crate::math::{Point, Real};
use std::collections::HashMap;

const HEADER_LEN: usize = 80;
const TRIANGLE_LEN: usize = 50;

/// Error raised while decoding STL data.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum StlError {
    /// The data is neither a well-sized binary STL nor an ASCII STL.
    #[error("the data is neither a binary STL nor an ASCII STL.")]
    UnknownEncoding,
    /// A vertex coordinate of an ASCII STL could not be parsed.
    #[error("invalid vertex coordinate `{0}`.")]
    InvalidNumber(String),
    /// An ASCII STL ended in the middle of a vertex or of a facet.
    #[error("unexpected end of the ASCII STL data.")]
    UnexpectedEof,
}

/// Decodes a binary or ASCII STL into a vertex buffer and an index buffer.
///
/// Identical vertices of adjacent facets are merged, so that a closed STL
/// surface yields a closed indexed mesh.
pub fn parse_stl(data: &[u8]) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), StlError> {
    let mut welder = VertexWelder::default();

    if let Some(count) = binary_triangle_count(data) {
        for tri in 0..count {
            let start = HEADER_LEN + 4 + tri * TRIANGLE_LEN;
            // Skip the facet normal.
            let coords = &data[start + 12..start + 48];
            let vertex = |k: usize| {
                let c = |l: usize| {
                    let at = (k * 3 + l) * 4;
                    f32::from_le_bytes([coords[at], coords[at + 1], coords[at + 2], coords[at + 3]])
                        as Real
                };
                Point::new(c(0), c(1), c(2))
            };
            welder.push_triangle([vertex(0), vertex(1), vertex(2)]);
        }
    } else {
        let text = std::str::from_utf8(data).map_err(|_| StlError::UnknownEncoding)?;

        if !text.trim_start().starts_with("solid") {
            return Err(StlError::UnknownEncoding);
        }

        let mut tokens = text.split_whitespace();
        let mut facet = Vec::with_capacity(3);

        while let Some(token) = tokens.next() {
            if token != "vertex" {
                continue;
            }

            let mut coord = || -> Result<Real, StlError> {
                let token = tokens.next().ok_or(StlError::UnexpectedEof)?;
                token
                    .parse::<Real>()
                    .map_err(|_| StlError::InvalidNumber(token.to_string()))
            };
            facet.push(Point::new(coord()?, coord()?, coord()?));

            if facet.len() == 3 {
                welder.push_triangle([facet[0], facet[1], facet[2]]);
                facet.clear();
            }
        }

        if !facet.is_empty() {
            return Err(StlError::UnexpectedEof);
        }
    }

    Ok((welder.vertices, welder.indices))
}

/// The number of triangles of a binary STL, if `data` has exactly the size
/// announced by its header.
fn binary_triangle_count(data: &[u8]) -> Option<usize> {
    let count = data.get(HEADER_LEN..HEADER_LEN + 4)?;
    let count = u32::from_le_bytes([count[0], count[1], count[2], count[3]]) as usize;
    (data.len() == HEADER_LEN + 4 + count * TRIANGLE_LEN).then_some(count)
}

#[derive(Default)]
struct VertexWelder {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    ids: HashMap<[u64; 3], u32>,
}

impl VertexWelder {
    fn push_triangle(&mut self, pts: [Point<Real>; 3]) {
        let tri = pts.map(|pt| {
            // Adding zero maps -0.0 to 0.0.
            let key = [pt.x, pt.y, pt.z].map(|c| (c + 0.0).to_bits());
            *self.ids.entry(key).or_insert_with(|| {
                self.vertices.push(pt);
                self.vertices.len() as u32 - 1
            })
        });
        self.indices.push(tri);
    }
}
