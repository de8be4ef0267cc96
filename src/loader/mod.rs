//! Loading of triangle meshes from mesh resources.
//!
//! Mass-properties computations only need a vertex buffer and an index buffer.
//! Decoding the mesh resource itself is delegated to a [`MeshLoader`]. The
//! default [`FileMeshLoader`] reads STL (ASCII and binary) files, and Wavefront
//! OBJ files when the `wavefront` feature is enabled.

pub use self::stl::{parse_stl, StlError};
#[cfg(feature = "wavefront")]
pub use self::wavefront::{parse_obj, WavefrontError};

use crate::shape::{TriMesh, TriMeshBuilderError};
use std::io;
use std::path::{Path, PathBuf};

mod stl;
#[cfg(feature = "wavefront")]
mod wavefront;

/// Error raised when a mesh resource cannot be turned into a triangle mesh.
#[derive(thiserror::Error, Debug)]
pub enum ResourceError {
    /// The mesh file does not exist.
    #[error("mesh file not found: '{}'", .0.display())]
    NotFound(PathBuf),
    /// The mesh path is not valid UTF-8, so it cannot be reported as a URI.
    #[error("mesh path is not valid UTF-8: '{}'", .0.display())]
    NonUtf8Path(PathBuf),
    /// The mesh file exists but could not be read.
    #[error("failed to read mesh file '{}': {source}", .path.display())]
    Io {
        /// The path of the mesh file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The extension of the mesh file is not handled by the loader.
    #[error("unsupported mesh format: '{}'", .path.display())]
    UnsupportedFormat {
        /// The path of the mesh file.
        path: PathBuf,
    },
    /// The content of the mesh file could not be decoded.
    #[error("malformed mesh file '{}': {reason}", .path.display())]
    Malformed {
        /// The path of the mesh file.
        path: PathBuf,
        /// A description of the decoding failure.
        reason: String,
    },
    /// The decoded triangles reference vertices that do not exist.
    #[error("invalid mesh in '{}': {source}", .path.display())]
    InvalidMesh {
        /// The path of the mesh file.
        path: PathBuf,
        /// The topology error.
        source: TriMeshBuilderError,
    },
}

/// A collaborator turning a mesh resource into a triangle mesh.
///
/// Implementations must not share mutable state between calls to `load`, so
/// that builders relying on them can be created from several threads.
pub trait MeshLoader {
    /// Loads the triangle mesh stored at `path`.
    fn load(&self, path: &Path) -> Result<TriMesh, ResourceError>;
}

impl<F> MeshLoader for F
where
    F: Fn(&Path) -> Result<TriMesh, ResourceError>,
{
    fn load(&self, path: &Path) -> Result<TriMesh, ResourceError> {
        self(path)
    }
}

/// The mesh formats recognized by [`FileMeshLoader`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshFormat {
    /// STL, ASCII or binary.
    Stl,
    /// Wavefront OBJ.
    #[cfg(feature = "wavefront")]
    Obj,
}

impl MeshFormat {
    /// Guesses the format of a mesh file from its (case-insensitive) extension.
    ///
    /// Returns `None` for unknown extensions, and for `.obj` files if the
    /// `wavefront` feature is disabled.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "stl" => Some(Self::Stl),
            #[cfg(feature = "wavefront")]
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }
}

/// Loads STL and OBJ mesh files from the filesystem.
///
/// An empty (zero-byte) file is accepted and yields an empty mesh.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileMeshLoader;

impl MeshLoader for FileMeshLoader {
    fn load(&self, path: &Path) -> Result<TriMesh, ResourceError> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
        let format = MeshFormat::from_path(path).ok_or_else(|| ResourceError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        if metadata.len() == 0 {
            log::warn!("Empty mesh file {}.", path.display());
            return Ok(TriMesh::empty());
        }

        let malformed = |reason: String| ResourceError::Malformed {
            path: path.to_path_buf(),
            reason,
        };

        let (vertices, indices) = match format {
            MeshFormat::Stl => {
                let data = std::fs::read(path).map_err(|e| io_error(path, e))?;
                parse_stl(&data).map_err(|e| malformed(e.to_string()))?
            }
            #[cfg(feature = "wavefront")]
            MeshFormat::Obj => {
                let file = std::fs::File::open(path).map_err(|e| io_error(path, e))?;
                parse_obj(io::BufReader::new(file)).map_err(|e| malformed(e.to_string()))?
            }
        };

        let mesh = TriMesh::new(vertices, indices).map_err(|source| ResourceError::InvalidMesh {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Loaded mesh {}: {} vertices, {} triangles.",
            path.display(),
            mesh.vertices().len(),
            mesh.num_triangles()
        );

        Ok(mesh)
    }
}

fn io_error(path: &Path, err: io::Error) -> ResourceError {
    if err.kind() == io::ErrorKind::NotFound {
        ResourceError::NotFound(path.to_path_buf())
    } else {
        ResourceError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
