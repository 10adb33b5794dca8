//! Straight extrusion of a [`Profile`] placed in one of the principal planes.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use crate::profile::Profile;
use geo::TriangulateEarcut;
use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Where a 2D profile is drawn and which way it is pushed.
///
/// | plane | profile x | profile y | extrusion |
/// |-------|-----------|-----------|-----------|
/// | `XY`  | x         | y         | +z        |
/// | `XZ`  | x         | z         | +y        |
/// | `YZ`  | y         | z         | +x        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SketchPlane {
    XY,
    XZ,
    YZ,
}

impl SketchPlane {
    /// `(u, v, d)`: the world directions of profile x, profile y and the
    /// extrusion.
    pub fn basis(self) -> (Vector3<Real>, Vector3<Real>, Vector3<Real>) {
        match self {
            SketchPlane::XY => (Vector3::x(), Vector3::y(), Vector3::z()),
            SketchPlane::XZ => (Vector3::x(), Vector3::z(), Vector3::y()),
            SketchPlane::YZ => (Vector3::y(), Vector3::z(), Vector3::x()),
        }
    }

    /// World position of profile point `p` at `depth` along the extrusion axis.
    pub fn place(self, p: &Point2<Real>, depth: Real) -> Point3<Real> {
        let (u, v, d) = self.basis();
        Point3::from(u * p.x + v * p.y + d * depth)
    }
}

impl Profile {
    /// Sweep the profile along the plane's extrusion axis from `start` to
    /// `start + length`.
    ///
    /// The resulting mesh is closed and faces outward whatever the winding of
    /// the profile. Caps are ear-cut so every polygon is convex.
    pub fn extrude<S: Clone + Send + Sync + Debug>(
        &self,
        plane: SketchPlane,
        start: Real,
        length: Real,
        metadata: Option<S>,
    ) -> Mesh<S> {
        let (u, v, d) = plane.basis();
        let (bottom_depth, top_depth) = if length >= 0.0 {
            (start, start + length)
        } else {
            (start + length, start)
        };

        // Side quads face outward when the ring runs counter-clockwise seen
        // from +d.
        let handedness = u.cross(&v).dot(&d);
        let points: Vec<Point2<Real>> = if self.signed_area() * handedness > 0.0 {
            self.points().to_vec()
        } else {
            self.points().iter().rev().copied().collect()
        };

        let n = points.len();
        let bottom: Vec<Point3<Real>> =
            points.iter().map(|p| plane.place(p, bottom_depth)).collect();
        let top: Vec<Point3<Real>> = points.iter().map(|p| plane.place(p, top_depth)).collect();

        let mut polygons = Vec::with_capacity(n + 2 * n);

        for i in 0..n {
            let j = (i + 1) % n;
            let edge = bottom[j] - bottom[i];
            let normal = edge
                .cross(&d)
                .try_normalize(Real::EPSILON)
                .unwrap_or_else(Vector3::zeros);
            let quad = [bottom[i], bottom[j], top[j], top[i]]
                .into_iter()
                .map(|pos| Vertex::new(pos, normal))
                .collect();
            polygons.push(Polygon::new(quad, metadata.clone()));
        }

        for [a, b, c] in self.cap_triangles() {
            for (depth, facing) in [(top_depth, d), (bottom_depth, -d)] {
                let mut tri = [a, b, c].map(|p| plane.place(&p, depth));
                let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
                if normal.norm_squared() <= Real::EPSILON * Real::EPSILON {
                    continue;
                }
                if normal.dot(&facing) < 0.0 {
                    tri.reverse();
                }
                let vertices = tri.into_iter().map(|pos| Vertex::new(pos, facing)).collect();
                polygons.push(Polygon::new(vertices, metadata.clone()));
            }
        }

        Mesh::from_polygons(&polygons, metadata)
    }

    /// Ear-cut triangulation of the outline in profile coordinates.
    fn cap_triangles(&self) -> Vec<[Point2<Real>; 3]> {
        let triangulation = self.to_geo().earcut_triangles_raw();
        let vertices = triangulation.vertices;
        triangulation
            .triangle_indices
            .chunks_exact(3)
            .map(|tri| {
                [0, 1, 2].map(|k| Point2::new(vertices[2 * tri[k]], vertices[2 * tri[k] + 1]))
            })
            .collect()
    }
}
