use crate::float_types::{Real, parry3d::bounding_volume::Aabb};
use crate::mesh::plane::Plane;
use nalgebra::{Matrix3, Matrix4, Translation3, Vector3};

/// Boolean operations + transformations
pub trait CSG: Sized + Clone {
    fn new() -> Self;
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Aabb;
    fn inverse(&self) -> Self;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Scales by sx, sy, sz
    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        self.transform(&Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
    }

    /// Reflect (mirror) about `plane`, keeping faces pointing outward.
    fn mirror(&self, plane: Plane) -> Self {
        self.transform(&mirror_matrix(&plane)).inverse()
    }
}

/// Homogeneous reflection about `plane`: `R = I - 2 n nᵀ` conjugated by the
/// translation that moves the plane through the origin.
pub fn mirror_matrix(plane: &Plane) -> Matrix4<Real> {
    let n = plane.normal().normalize();
    let offset = n * plane.offset();

    let mut reflect = Matrix4::identity();
    let reflect_3 = Matrix3::identity() - 2.0 * n * n.transpose();
    reflect.fixed_view_mut::<3, 3>(0, 0).copy_from(&reflect_3);

    Translation3::from(offset).to_homogeneous()
        * reflect
        * Translation3::from(-offset).to_homogeneous()
}

/// Flip z and lift by `height`: `z' = height - z`. This is the exact
/// matrix of `translate([0, 0, height]) mirror([0, 0, 1])`.
pub fn flip_z_matrix(height: Real) -> Matrix4<Real> {
    let mut m = Matrix4::identity();
    m[(2, 2)] = -1.0;
    m[(2, 3)] = height;
    m
}
