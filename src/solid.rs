//! A lazily evaluated CSG tree.
//!
//! Generators hand back a [`Solid`] rather than a mesh: the tree is cheap to
//! build and compare, has an exact bounding box, and is only turned into
//! polygons when [`Solid::to_mesh`] is called.

use crate::float_types::{
    Real,
    parry3d::bounding_volume::{Aabb, BoundingVolume},
};
use crate::mesh::Mesh;
use crate::profile::{Profile, SketchPlane};
use crate::traits::{CSG, flip_z_matrix};
use nalgebra::{Matrix4, Point2, Point3, Vector3};

/// A profile swept along its sketch plane's extrusion axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrusion {
    pub profile: Profile,
    pub plane: SketchPlane,
    pub start: Real,
    pub length: Real,
}

/// Axis-aligned box spanning `origin .. origin + size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub origin: Point3<Real>,
    pub size: Vector3<Real>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Extrusion(Extrusion),
    Cuboid(Cuboid),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    Primitive(Primitive),
    Union(Box<Solid>, Box<Solid>),
    /// Left operand minus right operand.
    Difference(Box<Solid>, Box<Solid>),
    Transformed(Box<Solid>, Matrix4<Real>),
}

impl Solid {
    pub fn extrusion(profile: Profile, plane: SketchPlane, start: Real, length: Real) -> Solid {
        Solid::Primitive(Primitive::Extrusion(Extrusion {
            profile,
            plane,
            start,
            length,
        }))
    }

    pub fn cuboid(origin: Point3<Real>, size: Vector3<Real>) -> Solid {
        Solid::Primitive(Primitive::Cuboid(Cuboid { origin, size }))
    }

    /// Box given by two opposite corners, in any order.
    pub fn cuboid_between(a: Point3<Real>, b: Point3<Real>) -> Solid {
        let origin = a.inf(&b);
        Solid::cuboid(origin, a.sup(&b) - origin)
    }

    pub fn union(self, other: Solid) -> Solid {
        Solid::Union(Box::new(self), Box::new(other))
    }

    pub fn difference(self, other: Solid) -> Solid {
        Solid::Difference(Box::new(self), Box::new(other))
    }

    /// Left-leaning union of every solid in `solids`; `None` when empty.
    pub fn union_all(solids: impl IntoIterator<Item = Solid>) -> Option<Solid> {
        solids.into_iter().reduce(Solid::union)
    }

    pub fn transform(self, matrix: Matrix4<Real>) -> Solid {
        Solid::Transformed(Box::new(self), matrix)
    }

    pub fn translate(self, x: Real, y: Real, z: Real) -> Solid {
        self.transform(Matrix4::new_translation(&Vector3::new(x, y, z)))
    }

    /// Mirror about the horizontal plane and lift by `height` (`z' = height - z`).
    pub fn flip_z(self, height: Real) -> Solid {
        self.transform(flip_z_matrix(height))
    }

    /// Number of primitive leaves in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Solid::Primitive(_) => 1,
            Solid::Union(a, b) | Solid::Difference(a, b) => {
                a.primitive_count() + b.primitive_count()
            },
            Solid::Transformed(inner, _) => inner.primitive_count(),
        }
    }

    /// Exact bounds without evaluating the tree. A difference is bounded by
    /// its left operand.
    pub fn bounding_box(&self) -> Aabb {
        match self {
            Solid::Primitive(Primitive::Cuboid(c)) => {
                let far = c.origin + c.size;
                Aabb::new(c.origin.inf(&far), c.origin.sup(&far))
            },
            Solid::Primitive(Primitive::Extrusion(e)) => extrusion_bounds(e),
            Solid::Union(a, b) => a.bounding_box().merged(&b.bounding_box()),
            Solid::Difference(a, _) => a.bounding_box(),
            Solid::Transformed(inner, matrix) => {
                let bb = inner.bounding_box();
                points_bounds(bb.vertices().iter().map(|p| matrix.transform_point(p)))
            },
        }
    }

    /// Evaluate the tree with the BSP kernel.
    pub fn to_mesh(&self) -> Mesh<()> {
        match self {
            Solid::Primitive(Primitive::Cuboid(c)) => {
                let origin = c.origin.inf(&(c.origin + c.size));
                Mesh::cuboid(origin, c.size.abs(), None)
            },
            Solid::Primitive(Primitive::Extrusion(e)) => {
                e.profile.extrude(e.plane, e.start, e.length, None)
            },
            Solid::Union(a, b) => {
                let (a, b) = evaluate_pair(a, b);
                a.union(&b)
            },
            Solid::Difference(a, b) => {
                let (a, b) = evaluate_pair(a, b);
                a.difference(&b)
            },
            Solid::Transformed(inner, matrix) => {
                let mesh = inner.to_mesh().transform(matrix);
                if matrix.fixed_view::<3, 3>(0, 0).determinant() < 0.0 {
                    // reflections turn faces inside out
                    mesh.inverse()
                } else {
                    mesh
                }
            },
        }
    }
}

fn points_bounds(points: impl Iterator<Item = Point3<Real>>) -> Aabb {
    let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
    let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
    for p in points {
        mins = mins.inf(&p);
        maxs = maxs.sup(&p);
    }
    Aabb::new(mins, maxs)
}

fn extrusion_bounds(e: &Extrusion) -> Aabb {
    let Some(rect) = e.profile.bounding_rect() else {
        return Aabb::new(Point3::origin(), Point3::origin());
    };
    let (min, max) = (rect.min(), rect.max());
    let corners = [Point2::new(min.x, min.y), Point2::new(max.x, max.y)];
    points_bounds(
        corners
            .iter()
            .flat_map(|p| [e.start, e.start + e.length].map(|depth| e.plane.place(p, depth))),
    )
}

#[cfg(not(feature = "parallel"))]
fn evaluate_pair(a: &Solid, b: &Solid) -> (Mesh<()>, Mesh<()>) {
    (a.to_mesh(), b.to_mesh())
}

#[cfg(feature = "parallel")]
fn evaluate_pair(a: &Solid, b: &Solid) -> (Mesh<()>, Mesh<()>) {
    rayon::join(|| a.to_mesh(), || b.to_mesh())
}
