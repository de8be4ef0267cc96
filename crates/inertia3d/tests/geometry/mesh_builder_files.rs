use approx::assert_relative_eq;
use inertia3d::builder::{BuilderError, MeshBuilder, PrimitiveBuilder, ValidationError};
use inertia3d::loader::ResourceError;
use inertia3d::mass_properties::GeometryError;
use inertia3d::shape::Cuboid;
use na::{Point3, Vector3};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

fn unit_cube() -> (Vec<Point3<f64>>, Vec<[u32; 3]>) {
    Cuboid::new(Vector3::repeat(1.0)).to_trimesh()
}

fn triangles(vertices: &[Point3<f64>], indices: &[[u32; 3]]) -> Vec<[Point3<f64>; 3]> {
    indices
        .iter()
        .map(|idx| idx.map(|i| vertices[i as usize]))
        .collect()
}

fn write_ascii_stl(path: &Path, vertices: &[Point3<f64>], indices: &[[u32; 3]]) {
    let mut out = String::from("solid cube\n");
    for tri in triangles(vertices, indices) {
        out.push_str("  facet normal 0 0 0\n    outer loop\n");
        for pt in tri {
            writeln!(out, "      vertex {} {} {}", pt.x, pt.y, pt.z).unwrap();
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    out.push_str("endsolid cube\n");
    fs::write(path, out).unwrap();
}

fn write_binary_stl(path: &Path, vertices: &[Point3<f64>], indices: &[[u32; 3]]) {
    let mut out = vec![0u8; 80];
    out.extend_from_slice(&(indices.len() as u32).to_le_bytes());
    for tri in triangles(vertices, indices) {
        out.extend_from_slice(&[0u8; 12]);
        for pt in tri {
            for coord in pt.iter() {
                out.extend_from_slice(&(*coord as f32).to_le_bytes());
            }
        }
        out.extend_from_slice(&0u16.to_le_bytes());
    }
    fs::write(path, out).unwrap();
}

#[test]
fn unit_cube_stl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.stl");
    let (vtx, idx) = unit_cube();
    write_ascii_stl(&path, &vtx, &idx);

    let builder = MeshBuilder::new("cube", 1.0, &path, &[1.0, 1.0, 1.0]).unwrap();
    let inertia = builder.inertia().unwrap();

    assert_eq!(builder.trimesh().vertices().len(), 8);
    assert_eq!(builder.trimesh().num_triangles(), 12);
    assert_relative_eq!(inertia.ixx, 1.0 / 6.0, epsilon = 1.0e-6);
    assert_relative_eq!(inertia.iyy, 1.0 / 6.0, epsilon = 1.0e-6);
    assert_relative_eq!(inertia.izz, 1.0 / 6.0, epsilon = 1.0e-6);
}

#[test]
fn stl_and_obj_encodings_agree() {
    let dir = tempfile::tempdir().unwrap();
    let (vtx, idx) = unit_cube();
    let vtx: Vec<_> = vtx
        .iter()
        .map(|pt| Point3::new(pt.x * 0.5, pt.y * 2.0, pt.z) + Vector3::new(1.0, 2.0, 3.0))
        .collect();

    let ascii = dir.path().join("ascii.stl");
    let binary = dir.path().join("binary.STL");
    write_ascii_stl(&ascii, &vtx, &idx);
    write_binary_stl(&binary, &vtx, &idx);
    let mut paths = vec![ascii, binary];

    #[cfg(feature = "wavefront")]
    {
        let obj = dir.path().join("mesh.obj");
        let mesh = inertia3d::shape::TriMesh::new(vtx.clone(), idx.clone()).unwrap();
        mesh.to_obj_file(&obj).unwrap();
        paths.push(obj);
    }

    let bodies: Vec<_> = paths
        .iter()
        .map(|path| {
            MeshBuilder::new("mesh", 2.0, path, &[1.0; 3])
                .unwrap()
                .mass_properties()
                .unwrap()
        })
        .collect();

    for mprops in &bodies[1..] {
        assert_relative_eq!(mprops.volume, bodies[0].volume, epsilon = 1.0e-6);
        assert_relative_eq!(mprops.local_com, bodies[0].local_com, epsilon = 1.0e-6);
        assert_relative_eq!(mprops.inertia, bodies[0].inertia, epsilon = 1.0e-6);
    }

    assert_relative_eq!(bodies[0].volume, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(
        bodies[0].local_com,
        Point3::new(1.0, 2.0, 3.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn scale_is_applied_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.stl");
    let (vtx, idx) = unit_cube();
    write_binary_stl(&path, &vtx, &idx);

    let builder = MeshBuilder::new("bar", 12.0, &path, &[2.0, 1.0, 1.0]).unwrap();
    let body = builder.build().unwrap();

    assert_relative_eq!(body.inertia.ixx, 2.0, epsilon = 1.0e-6);
    assert_relative_eq!(body.inertia.iyy, 5.0, epsilon = 1.0e-6);
    assert_relative_eq!(body.inertia.izz, 5.0, epsilon = 1.0e-6);
    assert_eq!(
        body.geometry,
        inertia3d::builder::GeometryDescriptor::Mesh {
            uri: path.to_string_lossy().into_owned(),
            scale: [2.0, 1.0, 1.0]
        }
    );
}

#[test]
fn empty_mesh_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.stl");
    fs::write(&path, b"").unwrap();

    let builder = MeshBuilder::new("empty", 1.0, &path, &[1.0; 3]).unwrap();

    assert!(builder.is_empty());
    assert_eq!(builder.inertia(), Err(GeometryError::EmptyMesh));
}

#[test]
fn invalid_mesh_resources() {
    let dir = tempfile::tempdir().unwrap();

    let missing = PathBuf::from("/nonexistent_dir_12345/mesh.stl");
    assert!(matches!(
        MeshBuilder::new("mesh", 1.0, &missing, &[1.0; 3]),
        Err(BuilderError::Resource(ResourceError::NotFound(_)))
    ));

    let unsupported = dir.path().join("mesh.dae");
    fs::write(&unsupported, b"<COLLADA/>").unwrap();
    assert!(matches!(
        MeshBuilder::new("mesh", 1.0, &unsupported, &[1.0; 3]),
        Err(BuilderError::Resource(ResourceError::UnsupportedFormat { .. }))
    ));

    let malformed = dir.path().join("mesh.stl");
    fs::write(&malformed, b"solid broken\n facet normal 0 0 0\n outer loop\n vertex 1 x 2\n").unwrap();
    assert!(matches!(
        MeshBuilder::new("mesh", 1.0, &malformed, &[1.0; 3]),
        Err(BuilderError::Resource(ResourceError::Malformed { .. }))
    ));
}

#[test]
fn scale_is_validated_before_loading() {
    // The file does not exist, so reaching the loader would yield a resource error.
    let missing = PathBuf::from("/nonexistent_dir_12345/mesh.stl");

    assert!(matches!(
        MeshBuilder::new("mesh", 1.0, &missing, &[1.0, 1.0]),
        Err(BuilderError::Validation(ValidationError::InvalidScaleLength(2)))
    ));
    assert!(matches!(
        MeshBuilder::new("mesh", 1.0, &missing, &[1.0, 0.0, 1.0]),
        Err(BuilderError::Validation(ValidationError::NonPositiveScale { axis: 1, .. }))
    ));
    assert!(matches!(
        MeshBuilder::new("mesh", -1.0, &missing, &[1.0; 3]),
        Err(BuilderError::Validation(ValidationError::NonPositiveMass(_)))
    ));
}
