use inertia3d::builder::{
    BuilderError, GeometryDescriptor, PrimitiveBuilder, ShapeBuilder, ShapeParameters,
};
use inertia3d::loader::ResourceError;
use inertia3d::shape::{Cuboid, Cylinder, Sphere};
use na::Vector3;
use std::path::PathBuf;

#[test]
fn shape_builder_matches_concrete_builders() {
    let shapes = [
        ShapeParameters::Sphere(Sphere::new(0.25)),
        ShapeParameters::Box(Cuboid::new(Vector3::new(0.5, 0.25, 1.0))),
        ShapeParameters::Cylinder(Cylinder::new(0.1, 0.8)),
    ];

    for params in shapes {
        let builder = ShapeBuilder::new("link", 3.0, params.clone()).unwrap();
        let body = builder.build().unwrap();

        assert_eq!(body.mass, 3.0);
        assert!(body.inertia.is_physical(1.0e-12));
        match (params, body.geometry) {
            (ShapeParameters::Sphere(s), GeometryDescriptor::Sphere { radius }) => {
                assert_eq!(s.radius, radius)
            }
            (ShapeParameters::Box(c), GeometryDescriptor::Box { size }) => {
                assert_eq!(c.size, Vector3::from(size))
            }
            (ShapeParameters::Cylinder(c), GeometryDescriptor::Cylinder { radius, length }) => {
                assert_eq!((c.radius, c.length), (radius, length))
            }
            (params, geometry) => panic!("{params:?} built into {geometry:?}"),
        }
    }
}

#[test]
fn missing_mesh_file_is_a_resource_error() {
    let params = ShapeParameters::Mesh {
        uri: PathBuf::from("/nonexistent_dir_12345/link.stl"),
        scale: vec![1.0, 1.0, 1.0],
    };
    let err = ShapeBuilder::new("link", 1.0, params).unwrap_err();

    assert!(matches!(
        err,
        BuilderError::Resource(ResourceError::NotFound(_))
    ));
}
