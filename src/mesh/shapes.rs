//! Primitive solids as `Mesh`es

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Axis-aligned box spanning `origin .. origin + size`.
    ///
    /// ```text
    ///     4-------5
    ///    /|      /|
    ///   0-------1 |
    ///   | |     | |
    ///   | 7-----|-6
    ///   |/      |/
    ///   3-------2
    /// ```
    ///
    /// Faces wind counter-clockwise seen from outside.
    pub fn cuboid(origin: Point3<Real>, size: Vector3<Real>, metadata: Option<S>) -> Mesh<S> {
        let [x0, y0, z0] = [origin.x, origin.y, origin.z];
        let [x1, y1, z1] = [origin.x + size.x, origin.y + size.y, origin.z + size.z];

        let corners = [
            Point3::new(x0, y0, z0),
            Point3::new(x1, y0, z0),
            Point3::new(x1, y1, z0),
            Point3::new(x0, y1, z0),
            Point3::new(x0, y0, z1),
            Point3::new(x1, y0, z1),
            Point3::new(x1, y1, z1),
            Point3::new(x0, y1, z1),
        ];

        let faces: [([usize; 4], Vector3<Real>); 6] = [
            ([0, 3, 2, 1], -Vector3::z()), // bottom
            ([4, 5, 6, 7], Vector3::z()),  // top
            ([0, 1, 5, 4], -Vector3::y()), // front
            ([3, 7, 6, 2], Vector3::y()),  // back
            ([0, 4, 7, 3], -Vector3::x()), // left
            ([1, 2, 6, 5], Vector3::x()),  // right
        ];

        let polygons: Vec<Polygon<S>> = faces
            .iter()
            .map(|(indices, normal)| {
                let vertices = indices
                    .iter()
                    .map(|&i| Vertex::new(corners[i], *normal))
                    .collect();
                Polygon::new(vertices, metadata.clone())
            })
            .collect();

        Mesh::from_polygons(&polygons, metadata)
    }

    /// Cube of side `width` with one corner at the origin.
    pub fn cube(width: Real, metadata: Option<S>) -> Mesh<S> {
        Self::cuboid(Point3::origin(), Vector3::repeat(width), metadata)
    }
}
