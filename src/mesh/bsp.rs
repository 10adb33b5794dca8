//! Binary Space Partitioning (BSP) tree over convex polygons.
//!
//! Each node splits space with one plane; polygons lying in that plane are
//! stored on the node, everything else is pushed into the `front` or `back`
//! subtree. A missing `back` child means "inside the solid", which is what
//! [`Node::clip_polygons`] relies on to discard interior faces.

use crate::float_types::Real;
use crate::mesh::plane::{BACK, COPLANAR, FRONT, Plane};
use crate::mesh::polygon::Polygon;
use std::fmt::Debug;

/// How many candidate planes are scored when building a node.
const SPLIT_SAMPLE_SIZE: usize = 20;
/// Penalty per polygon a candidate plane would cut in two.
const SPAN_WEIGHT: Real = 8.0;
/// Penalty per polygon of front/back imbalance.
const BALANCE_WEIGHT: Real = 1.0;

/// A BSP tree node, containing polygons plus optional front/back subtrees
#[derive(Debug, Clone)]
pub struct Node<S: Clone> {
    /// Splitting plane for this node, `None` until polygons are added.
    pub plane: Option<Plane>,
    pub front: Option<Box<Node<S>>>,
    pub back: Option<Box<Node<S>>>,
    /// Polygons that lie in `plane`.
    pub polygons: Vec<Polygon<S>>,
}

impl<S: Clone + Send + Sync + Debug> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Node<S> {
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    pub fn from_polygons(polygons: &[Polygon<S>]) -> Self {
        let mut node = Self::new();
        node.build(polygons);
        node
    }

    /// Convert solid space to empty space and back.
    pub fn invert(&mut self) {
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            current.polygons.iter_mut().for_each(|p| p.flip());
            if let Some(plane) = current.plane.as_mut() {
                plane.flip();
            }
            std::mem::swap(&mut current.front, &mut current.back);

            if let Some(front) = current.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = current.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Remove the parts of `polygons` that lie inside this tree.
    pub fn clip_polygons(&self, polygons: &[Polygon<S>]) -> Vec<Polygon<S>> {
        let Some(plane) = self.plane.as_ref() else {
            return polygons.to_vec();
        };

        let mut front_polys = Vec::with_capacity(polygons.len());
        let mut back_polys = Vec::with_capacity(polygons.len());
        for polygon in polygons {
            let (coplanar_front, coplanar_back, front, back) = plane.split_polygon(polygon);
            front_polys.extend(coplanar_front);
            front_polys.extend(front);
            back_polys.extend(coplanar_back);
            back_polys.extend(back);
        }

        let mut result = match self.front.as_deref() {
            Some(front) => front.clip_polygons(&front_polys),
            None => front_polys,
        };
        if let Some(back) = self.back.as_deref() {
            result.extend(back.clip_polygons(&back_polys));
        }
        result
    }

    /// Remove all polygons in this tree that are inside `other`.
    pub fn clip_to(&mut self, other: &Node<S>) {
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            current.polygons = other.clip_polygons(&current.polygons);
            if let Some(front) = current.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = current.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Every polygon stored in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            result.extend_from_slice(&current.polygons);
            stack.extend(current.front.as_deref());
            stack.extend(current.back.as_deref());
        }
        result
    }

    /// Insert `polygons` into the tree, splitting where needed.
    pub fn build(&mut self, polygons: &[Polygon<S>]) {
        if polygons.is_empty() {
            return;
        }

        let plane = self
            .plane
            .get_or_insert_with(|| pick_splitting_plane(polygons))
            .clone();

        let mut front = Vec::with_capacity(polygons.len() / 2);
        let mut back = Vec::with_capacity(polygons.len() / 2);
        for polygon in polygons {
            let (coplanar_front, coplanar_back, f, b) = plane.split_polygon(polygon);
            self.polygons.extend(coplanar_front);
            self.polygons.extend(coplanar_back);
            front.extend(f);
            back.extend(b);
        }

        if !front.is_empty() {
            self.front
                .get_or_insert_with(|| Box::new(Node::new()))
                .build(&front);
        }
        if !back.is_empty() {
            self.back
                .get_or_insert_with(|| Box::new(Node::new()))
                .build(&back);
        }
    }
}

/// Score a sample of the polygons' own planes and keep the one that cuts the
/// fewest polygons while keeping front and back balanced.
fn pick_splitting_plane<S: Clone>(polygons: &[Polygon<S>]) -> Plane {
    let mut best_plane = polygons[0].plane.clone();
    let mut best_score = Real::MAX;

    for candidate in polygons.iter().take(SPLIT_SAMPLE_SIZE) {
        let plane = &candidate.plane;
        let (mut num_front, mut num_back, mut num_spanning) = (0usize, 0usize, 0usize);
        for poly in polygons {
            match plane.classify_polygon(poly) {
                COPLANAR => {},
                FRONT => num_front += 1,
                BACK => num_back += 1,
                _ => num_spanning += 1,
            }
        }

        let score = SPAN_WEIGHT * num_spanning as Real
            + BALANCE_WEIGHT * (num_front as Real - num_back as Real).abs();
        if score < best_score {
            best_score = score;
            best_plane = plane.clone();
        }
    }

    best_plane
}
