#![cfg(feature = "stl-io")]

use slidensnap::{
    mesh::Mesh,
    snap::{self, Preset},
    traits::CSG,
};

#[test]
fn ascii_stl_lists_every_triangle() {
    let mesh: Mesh<()> = Mesh::cube(2.0, None);
    let stl = mesh.to_stl_ascii("cube");

    assert!(stl.starts_with("solid cube\n"));
    assert!(stl.trim_end().ends_with("endsolid cube"));
    assert_eq!(stl.matches("facet normal").count(), 12);
    assert_eq!(stl.matches("vertex ").count(), 36);
}

#[test]
fn binary_stl_round_trip_preserves_the_envelope() {
    let params = Preset::Small.params();
    let mesh = snap::male_clip(params.t, params.w, params.l).unwrap().to_mesh();
    let triangles: usize = mesh.triangulate().polygons.len();

    let bytes = mesh.to_stl_binary().unwrap();
    assert_eq!(bytes.len(), 84 + 50 * triangles);

    let decoded: Mesh<()> = Mesh::from_stl(&bytes, None).unwrap();
    assert_eq!(decoded.polygons.len(), triangles);

    let (a, b) = (mesh.bounding_box(), decoded.bounding_box());
    assert!((a.mins - b.mins).norm() < 1e-5);
    assert!((a.maxs - b.maxs).norm() < 1e-5);
    assert!((mesh.volume() - decoded.volume()).abs() < 1e-3);
}

#[test]
fn ascii_stl_decodes() {
    let mesh: Mesh<()> = Mesh::cuboid(
        nalgebra::Point3::new(-1.0, 0.0, 0.5),
        nalgebra::Vector3::new(2.0, 3.0, 1.0),
        None,
    );
    let decoded: Mesh<()> = Mesh::from_stl(mesh.to_stl_ascii("box").as_bytes(), None).unwrap();
    assert_eq!(decoded.polygons.len(), 12);
    assert!((decoded.volume() - 6.0).abs() < 1e-5);
}
