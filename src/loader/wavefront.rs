use crate::math::{Point, Real};
use obj::{ObjData, ObjError};
use std::io::Read;

/// Error raised while decoding Wavefront OBJ data.
#[derive(thiserror::Error, Debug)]
pub enum WavefrontError {
    /// The OBJ data could not be parsed.
    #[error(transparent)]
    Obj(#[from] ObjError),
    /// A face references a vertex index that does not fit in 32 bits.
    #[error("face vertex index {0} is out of range.")]
    IndexOutOfRange(usize),
}

/// Decodes a Wavefront OBJ into a vertex buffer and an index buffer.
///
/// Every polygon of every group is triangulated as a fan around its first
/// vertex. Points and line elements are ignored.
///
/// This function is enabled by the `wavefront` feature flag.
pub fn parse_obj(input: impl Read) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), WavefrontError> {
    let data = ObjData::load_buf(input)?;

    let vertices = data
        .position
        .iter()
        .map(|p| Point::new(p[0] as Real, p[1] as Real, p[2] as Real))
        .collect();

    let mut indices = Vec::new();
    let polys = data
        .objects
        .iter()
        .flat_map(|object| object.groups.iter())
        .flat_map(|group| group.polys.iter());

    for poly in polys {
        let ids = poly
            .0
            .iter()
            .map(|tuple| {
                u32::try_from(tuple.0).map_err(|_| WavefrontError::IndexOutOfRange(tuple.0))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for k in 1..ids.len().saturating_sub(1) {
            indices.push([ids[0], ids[k], ids[k + 1]]);
        }
    }

    Ok((vertices, indices))
}
