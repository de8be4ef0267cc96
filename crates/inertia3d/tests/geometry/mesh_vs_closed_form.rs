use approx::assert_relative_eq;
use inertia3d::builder::{
    BoxBuilder, CylinderBuilder, InertiaTensor, MeshBuilder, PrimitiveBuilder, SphereBuilder,
};
use inertia3d::shape::{Cuboid, Cylinder, Sphere, TriMesh};
use na::{Point3, UnitQuaternion, Vector3};

fn mesh_inertia(mass: f64, (vertices, indices): (Vec<Point3<f64>>, Vec<[u32; 3]>)) -> InertiaTensor {
    let mesh = TriMesh::new(vertices, indices).unwrap();
    MeshBuilder::from_trimesh("mesh", mass, "mesh.obj", mesh, &[1.0; 3])
        .unwrap()
        .inertia()
        .unwrap()
}

fn assert_moments_eq(a: &InertiaTensor, b: &InertiaTensor, max_relative: f64) {
    assert_relative_eq!(a.ixx, b.ixx, max_relative = max_relative);
    assert_relative_eq!(a.iyy, b.iyy, max_relative = max_relative);
    assert_relative_eq!(a.izz, b.izz, max_relative = max_relative);
}

#[test]
fn tessellated_primitives_converge_to_closed_forms() {
    let sphere = SphereBuilder::new("ball", 3.0, 0.5).unwrap();
    let tessellated = mesh_inertia(3.0, Sphere::new(0.5).to_trimesh(64, 64));
    assert_moments_eq(&tessellated, &sphere.inertia().unwrap(), 1.0e-2);

    let cylinder = CylinderBuilder::new("can", 3.0, 0.5, 2.0).unwrap();
    let tessellated = mesh_inertia(3.0, Cylinder::new(0.5, 2.0).to_trimesh(64));
    assert_moments_eq(&tessellated, &cylinder.inertia().unwrap(), 1.0e-2);
    assert!(!tessellated.has_products(1.0e-9));

    let cuboid = BoxBuilder::new("box", 3.0, 0.5, 1.5, 2.5).unwrap();
    let tessellated = mesh_inertia(3.0, Cuboid::new(Vector3::new(0.5, 1.5, 2.5)).to_trimesh());
    assert_moments_eq(&tessellated, &cuboid.inertia().unwrap(), 1.0e-9);
}

#[test]
fn rotated_box_mesh_keeps_principal_moments() {
    let mut rng = oorandom::Rand64::new(1234);
    let size = Vector3::new(0.2, 0.7, 1.3);
    let expected = BoxBuilder::new("box", 5.0, size.x, size.y, size.z)
        .unwrap()
        .inertia()
        .unwrap();

    for _ in 0..20 {
        let rot = UnitQuaternion::from_euler_angles(
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
        );
        let (vtx, idx) = Cuboid::new(size).to_trimesh();
        let vtx = vtx.iter().map(|pt| rot * pt).collect();
        let mesh = TriMesh::new(vtx, idx).unwrap();
        let mprops = MeshBuilder::from_trimesh("box", 5.0, "box.stl", mesh, &[1.0; 3])
            .unwrap()
            .mass_properties()
            .unwrap();

        let rot_mat = rot.to_rotation_matrix().into_inner();
        let rotated = rot_mat * expected.to_matrix() * rot_mat.transpose();
        assert_relative_eq!(mprops.inertia, rotated, epsilon = 1.0e-9);

        let (mut principal, _) = mprops.principal_inertia();
        principal.as_mut_slice().sort_by(|a, b| a.total_cmp(b));
        assert_relative_eq!(
            principal,
            Vector3::new(expected.izz, expected.iyy, expected.ixx),
            epsilon = 1.0e-9
        );
    }
}
