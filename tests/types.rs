use trimesh::{RawMesh, TriangleMesh};

/// Ensure that meshes can compile with every supported scalar type
#[test]
fn scalar_types() {
    let _32 = TriangleMesh::<f32>::try_from(&RawMesh::<f32>::new()).unwrap();
    let _64 = TriangleMesh::<f64>::try_from(&RawMesh::<f64>::new()).unwrap();
}
