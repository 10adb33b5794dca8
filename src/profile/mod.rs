//! Closed 2D outlines that get extruded into solids.

use crate::errors::ValidationError;
use crate::float_types::Real;
use geo::line_intersection::{LineIntersection, line_intersection};
use geo::{Area, BoundingRect, Coord, Line, LineString, Polygon as GeoPolygon, Rect};
use nalgebra::Point2;

pub mod extrude;

pub use extrude::SketchPlane;

/// A simple polygon given by its ordered points. The last point connects back to
/// the first; there is no repeated closing point.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<Point2<Real>>,
}

impl Profile {
    /// Build a profile, rejecting outlines with fewer than three points,
    /// non-finite coordinates or self-intersections.
    pub fn new(points: Vec<Point2<Real>>) -> Result<Self, ValidationError> {
        if points.len() < 3 {
            return Err(ValidationError::TooFewPoints(points.len()));
        }
        if let Some(bad) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(ValidationError::InvalidCoordinate(*bad));
        }

        let profile = Profile { points };
        if let Some(hit) = profile.first_self_intersection() {
            return Err(ValidationError::SelfIntersection(hit));
        }
        Ok(profile)
    }

    /// Same as [`Profile::new`] with `[x, y]` pairs.
    pub fn from_coords(coords: &[[Real; 2]]) -> Result<Self, ValidationError> {
        Self::new(coords.iter().map(|&[x, y]| Point2::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn edges(&self) -> impl Iterator<Item = Line<Real>> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            Line::new(Coord { x: a.x, y: a.y }, Coord { x: b.x, y: b.y })
        })
    }

    /// Edges that share a vertex may only touch at that vertex; every other
    /// pair of edges must be disjoint.
    fn first_self_intersection(&self) -> Option<Point2<Real>> {
        let edges: Vec<Line<Real>> = self.edges().collect();
        let n = edges.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                match line_intersection(edges[i], edges[j]) {
                    None => {},
                    Some(LineIntersection::SinglePoint { .. }) if adjacent => {},
                    Some(LineIntersection::SinglePoint { intersection, .. }) => {
                        return Some(Point2::new(intersection.x, intersection.y));
                    },
                    Some(LineIntersection::Collinear { intersection }) => {
                        // adjacent collinear edges folding back over each other
                        if !adjacent || intersection.start != intersection.end {
                            return Some(Point2::new(intersection.start.x, intersection.start.y));
                        }
                    },
                }
            }
        }
        None
    }

    /// The outline as a `geo` polygon without holes.
    pub fn to_geo(&self) -> GeoPolygon<Real> {
        let coords: Vec<Coord<Real>> = self
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        GeoPolygon::new(LineString::new(coords), vec![])
    }

    /// Positive for counter-clockwise outlines.
    pub fn signed_area(&self) -> Real {
        self.to_geo().signed_area()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.to_geo().bounding_rect()
    }

    /// Extent along x.
    pub fn width(&self) -> Real {
        self.bounding_rect().map_or(0.0, |r| r.width())
    }

    /// Extent along y.
    pub fn height(&self) -> Real {
        self.bounding_rect().map_or(0.0, |r| r.height())
    }

    /// Mirror image across the y axis. The point order is reversed so the
    /// winding direction is preserved.
    pub fn mirrored_x(&self) -> Profile {
        Profile {
            points: self
                .points
                .iter()
                .rev()
                .map(|p| Point2::new(-p.x, p.y))
                .collect(),
        }
    }

    /// `true` if every point has a partner mirrored across `x = 0`, within `tol`.
    pub fn is_symmetric_about_y(&self, tol: Real) -> bool {
        self.points.iter().all(|p| {
            self.points
                .iter()
                .any(|q| (q.x + p.x).abs() <= tol && (q.y - p.y).abs() <= tol)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowtie_is_rejected() {
        let err = Profile::from_coords(&[[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0]])
            .unwrap_err();
        let at = match err {
            ValidationError::SelfIntersection(at) => at,
            other => panic!("expected a self-intersection, got {other:?}"),
        };
        assert!((at - Point2::new(0.5, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn folded_back_edge_is_rejected() {
        let result = Profile::from_coords(&[[0.0, 0.0], [2.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert!(matches!(result, Err(ValidationError::SelfIntersection(_))));
    }

    #[test]
    fn winding_and_extent() {
        let square = Profile::from_coords(&[[0.0, 0.0], [2.0, 0.0], [2.0, 3.0], [0.0, 3.0]])
            .unwrap();
        assert!(square.is_counter_clockwise());
        assert_eq!(square.signed_area(), 6.0);
        assert_eq!(square.width(), 2.0);
        assert_eq!(square.height(), 3.0);
        assert!(!square.is_symmetric_about_y(1e-12));

        let mirrored = square.mirrored_x();
        assert!(mirrored.is_counter_clockwise());
        assert_eq!(mirrored.points()[0], Point2::new(0.0, 3.0));
    }
}
