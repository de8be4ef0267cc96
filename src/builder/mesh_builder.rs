use crate::builder::error::{validate_mass, validate_name, validate_scale};
use crate::builder::{BuilderError, GeometryDescriptor, PrimitiveBuilder, ValidationError};
use crate::loader::{FileMeshLoader, MeshLoader, ResourceError};
use crate::mass_properties::{GeometryError, MassProperties};
use crate::math::{Real, Vector};
use crate::shape::TriMesh;
use std::path::Path;

/// Builds the rigid body of a closed triangle mesh of uniform density.
///
/// The mesh is loaded once, at construction, and the scale is applied to its
/// vertices right away. Its mass properties are only computed when requested,
/// so a builder can be created for a mesh that encloses no volume: the failure
/// is then reported as a [`GeometryError`] by the inertia queries.
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    name: String,
    mass: Real,
    uri: String,
    scale: [Real; 3],
    mesh: TriMesh,
}

impl MeshBuilder {
    /// Creates a mesh builder, loading the STL or OBJ file at `path`.
    ///
    /// The name, mass and scale are validated before the file is read.
    pub fn new(
        name: impl Into<String>,
        mass: Real,
        path: impl AsRef<Path>,
        scale: &[Real],
    ) -> Result<Self, BuilderError> {
        Self::with_loader(name, mass, path, scale, &FileMeshLoader)
    }

    /// Creates a mesh builder, loading the mesh at `path` with the given `loader`.
    ///
    /// The path is reported verbatim as the mesh URI, so it must be valid UTF-8.
    pub fn with_loader<L: MeshLoader + ?Sized>(
        name: impl Into<String>,
        mass: Real,
        path: impl AsRef<Path>,
        scale: &[Real],
        loader: &L,
    ) -> Result<Self, BuilderError> {
        let name = name.into();
        validate_name(&name)?;
        validate_mass(mass)?;
        let scale = validate_scale(scale)?;

        let path = path.as_ref();
        let uri = path
            .to_str()
            .ok_or_else(|| ResourceError::NonUtf8Path(path.to_path_buf()))?
            .to_string();
        let mesh = loader.load(path)?;

        Ok(Self::assemble(name, mass, uri, scale, mesh))
    }

    /// Creates a mesh builder from an already loaded mesh.
    ///
    /// The `uri` is only reported in the geometry descriptor.
    pub fn from_trimesh(
        name: impl Into<String>,
        mass: Real,
        uri: impl Into<String>,
        mesh: TriMesh,
        scale: &[Real],
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_mass(mass)?;
        let scale = validate_scale(scale)?;

        Ok(Self::assemble(name, mass, uri.into(), scale, mesh))
    }

    fn assemble(name: String, mass: Real, uri: String, scale: [Real; 3], mesh: TriMesh) -> Self {
        let mesh = mesh.scaled(&Vector::from(scale));
        log::debug!(
            "Mesh '{}' for '{}': {} vertices, {} triangles.",
            uri,
            name,
            mesh.vertices().len(),
            mesh.num_triangles()
        );

        Self {
            name,
            mass,
            uri,
            scale,
            mesh,
        }
    }

    /// The location of the mesh resource.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The scale applied to the mesh.
    pub fn scale(&self) -> [Real; 3] {
        self.scale
    }

    /// The loaded mesh, with its scale already applied.
    pub fn trimesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// Does the loaded mesh have no triangle?
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}

impl PrimitiveBuilder for MeshBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn mass(&self) -> Real {
        self.mass
    }

    fn mass_properties(&self) -> Result<MassProperties, GeometryError> {
        self.mesh.mass_properties(self.mass)
    }

    fn geometry(&self) -> GeometryDescriptor {
        GeometryDescriptor::Mesh {
            uri: self.uri.clone(),
            scale: self.scale,
        }
    }
}
