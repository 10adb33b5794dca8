//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use slidensnap::{
    float_types::Real,
    mesh::{polygon::Polygon, vertex::Vertex},
    snap::SnapParams,
};
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]` of a
/// set of polygons, taken from their vertices.
pub fn bounding_box(polygons: &[Polygon<()>]) -> [Real; 6] {
    let mut mins = [Real::MAX; 3];
    let mut maxs = [Real::MIN; 3];

    for v in polygons.iter().flat_map(|p| &p.vertices) {
        for axis in 0..3 {
            mins[axis] = mins[axis].min(v.pos[axis]);
            maxs[axis] = maxs[axis].max(v.pos[axis]);
        }
    }

    [mins[0], mins[1], mins[2], maxs[0], maxs[1], maxs[2]]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a simple Polygon in 3D with given vertices.
pub fn make_polygon_3d(points: &[[Real; 3]]) -> Polygon<()> {
    let verts = points
        .iter()
        .map(|p| Vertex::new(Point3::new(p[0], p[1], p[2]), Vector3::z()))
        .collect();
    Polygon::new(verts, None)
}

/// Parameter sets that satisfy every constraint, with `j` inside the
/// recommended `[2g, 3g]` band.
pub fn arb_snap_params() -> impl Strategy<Value = SnapParams> {
    (
        1.0f64..4.0,  // t
        0.1f64..0.5,  // g
        0.5f64..6.0,  // w beyond t + 2g
        2.0f64..3.0,  // j as a multiple of g
        1.0f64..2.0,  // l as a multiple of w
        0.3f64..1.0,  // a as a fraction of l
        0.2f64..2.0,  // s beyond g
        0.5f64..3.0,  // h
        0.05f64..1.0, // c as a fraction of its limit
    )
        .prop_map(|(t, g, extra_w, j_factor, l_factor, a_frac, extra_s, h, c_frac)| {
            let w = t + 2.0 * g + extra_w;
            let l = w * l_factor;
            let s = g + extra_s;
            let j = g * j_factor;
            let clip_height = (w - t) / 2.0 + s;
            SnapParams {
                t,
                w,
                g,
                j,
                l,
                h,
                s,
                a: l * a_frac,
                c: c_frac * (clip_height + h + j),
                epsilon: 0.001,
            }
        })
}
