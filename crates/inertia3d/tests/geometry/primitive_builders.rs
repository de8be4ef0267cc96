use approx::assert_relative_eq;
use inertia3d::builder::{
    BoxBuilder, BuilderError, CylinderBuilder, GeometryDescriptor, PrimitiveBuilder,
    SphereBuilder, ValidationError,
};

#[test]
fn sphere_moments_scale_with_mass_and_radius() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..100 {
        let mass = rng.rand_float() * 100.0 + 1.0e-3;
        let radius = rng.rand_float() * 10.0 + 1.0e-3;
        let inertia = SphereBuilder::new("ball", mass, radius)
            .unwrap()
            .inertia()
            .unwrap();
        let expected = 0.4 * mass * radius * radius;

        assert_relative_eq!(inertia.ixx, expected, max_relative = 1.0e-12);
        assert_relative_eq!(inertia.iyy, expected, max_relative = 1.0e-12);
        assert_relative_eq!(inertia.izz, expected, max_relative = 1.0e-12);
    }
}

#[test]
fn box_reference_values() {
    let body = BoxBuilder::new("base_link", 6.0, 1.0, 2.0, 3.0)
        .unwrap()
        .build()
        .unwrap();

    assert_relative_eq!(body.inertia.ixx, 6.5, epsilon = 1.0e-12);
    assert_relative_eq!(body.inertia.iyy, 5.0, epsilon = 1.0e-12);
    assert_relative_eq!(body.inertia.izz, 2.5, epsilon = 1.0e-12);
    assert_eq!(body.inertia.ixy, 0.0);
    assert_eq!(body.inertia.ixz, 0.0);
    assert_eq!(body.inertia.iyz, 0.0);
    assert_eq!(
        body.geometry,
        GeometryDescriptor::Box {
            size: [1.0, 2.0, 3.0]
        }
    );
}

#[test]
fn box_moments_follow_axis_permutations() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..100 {
        let mass = rng.rand_float() * 10.0 + 0.1;
        let dims = [
            rng.rand_float() * 5.0 + 0.1,
            rng.rand_float() * 5.0 + 0.1,
            rng.rand_float() * 5.0 + 0.1,
        ];
        let a = BoxBuilder::new("box", mass, dims[0], dims[1], dims[2])
            .unwrap()
            .inertia()
            .unwrap();
        let b = BoxBuilder::new("box", mass, dims[1], dims[2], dims[0])
            .unwrap()
            .inertia()
            .unwrap();

        assert_relative_eq!(b.ixx, a.iyy, max_relative = 1.0e-12);
        assert_relative_eq!(b.iyy, a.izz, max_relative = 1.0e-12);
        assert_relative_eq!(b.izz, a.ixx, max_relative = 1.0e-12);
        assert!(a.is_physical(1.0e-12));
    }
}

#[test]
fn cylinder_reference_values() {
    let inertia = CylinderBuilder::new("wheel", 1.0, 1.0, 2.0)
        .unwrap()
        .inertia()
        .unwrap();

    assert_relative_eq!(inertia.izz, 0.5, epsilon = 1.0e-12);
    assert_relative_eq!(inertia.ixx, 7.0 / 12.0, epsilon = 1.0e-12);
    assert_relative_eq!(inertia.iyy, 7.0 / 12.0, epsilon = 1.0e-12);
}

#[test]
fn primitives_reject_invalid_parameters() {
    assert_eq!(
        SphereBuilder::new("ball", 0.0, 1.0).unwrap_err(),
        ValidationError::NonPositiveMass(0.0)
    );
    assert!(matches!(
        CylinderBuilder::new("can", 1.0, 0.0, 1.0),
        Err(ValidationError::NonPositiveDimension {
            dimension: "radius",
            ..
        })
    ));
    assert!(matches!(
        BoxBuilder::new("box", 1.0, 1.0, 1.0, -2.0),
        Err(ValidationError::NonPositiveDimension { dimension: "z", .. })
    ));

    let err: BuilderError = SphereBuilder::new("", 1.0, 1.0).unwrap_err().into();
    assert!(matches!(
        err,
        BuilderError::Validation(ValidationError::EmptyName)
    ));
    assert!(err.to_string().contains("name"));
}

#[test]
fn build_is_idempotent() {
    let builder = CylinderBuilder::new("wheel", 2.5, 0.3, 0.1).unwrap();
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.name, "wheel");
    assert_eq!(first.mass, 2.5);
}
