//! # Outline Data Structure
//!
//! Closed polygon boundary with per-edge CUT/CREASE classification and
//! internal crease segments.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Classification of one boundary edge of a panel outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeClass {
    /// Fully severed material: part of the die-cut boundary.
    Cut,
    /// Scored fold line.
    Crease,
}

/// A line segment in the outline's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: DVec2,
    pub b: DVec2,
}

impl Segment {
    /// Creates a segment between two points.
    #[inline]
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }
}

/// A closed panel outline.
///
/// `edges[i]` classifies the boundary segment from `points[i]` to
/// `points[i + 1]` (wrapping back to `points[0]`), so the classification
/// always covers the polygon boundary exactly with no gaps or duplicates.
///
/// # Example
///
/// ```rust
/// use fustella_outline::{EdgeClass, Outline};
/// use glam::DVec2;
///
/// let mut builder = Outline::begin(DVec2::ZERO);
/// builder.cut_to(DVec2::new(0.0, -50.0));
/// builder.cut_to(DVec2::new(100.0, -50.0));
/// builder.cut_to(DVec2::new(100.0, 0.0));
/// let outline = builder.close(EdgeClass::Crease);
///
/// assert_eq!(outline.vertex_count(), 4);
/// assert_eq!(outline.cut_count(), 3);
/// assert_eq!(outline.crease_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<DVec2>,
    edges: Vec<EdgeClass>,
    internal_creases: Vec<Segment>,
}

/// Incremental outline builder: a path of classified edges, closed at the
/// end with the classification of the final (attachment) edge.
#[derive(Debug)]
pub struct OutlineBuilder {
    points: Vec<DVec2>,
    edges: Vec<EdgeClass>,
    internal_creases: Vec<Segment>,
}

impl Outline {
    /// Starts a builder at the given first vertex.
    pub fn begin(start: DVec2) -> OutlineBuilder {
        OutlineBuilder {
            points: vec![start],
            edges: Vec::new(),
            internal_creases: Vec::new(),
        }
    }

    /// Boundary vertices in order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of boundary vertices (equal to the number of boundary edges).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Classification of boundary edge `i` (from `points[i]` to
    /// `points[(i + 1) % n]`).
    #[inline]
    pub fn edge_class(&self, i: usize) -> EdgeClass {
        self.edges[i]
    }

    /// Iterates boundary segments with their classification.
    pub fn segments(&self) -> impl Iterator<Item = (Segment, EdgeClass)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            (
                Segment::new(self.points[i], self.points[(i + 1) % n]),
                self.edges[i],
            )
        })
    }

    /// Internal crease segments (doubler fold lines), not part of the
    /// boundary.
    #[inline]
    pub fn internal_creases(&self) -> &[Segment] {
        &self.internal_creases
    }

    /// Number of boundary edges classified CUT.
    pub fn cut_count(&self) -> usize {
        self.edges.iter().filter(|e| **e == EdgeClass::Cut).count()
    }

    /// Number of boundary edges classified CREASE.
    pub fn crease_count(&self) -> usize {
        self.edges
            .iter()
            .filter(|e| **e == EdgeClass::Crease)
            .count()
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (DVec2, DVec2) {
        let mut min = self.points.first().copied().unwrap_or(DVec2::ZERO);
        let mut max = min;
        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }

    /// True when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
            && self
                .internal_creases
                .iter()
                .all(|s| s.a.is_finite() && s.b.is_finite())
    }
}

impl OutlineBuilder {
    /// Appends a CUT edge to the given vertex.
    pub fn cut_to(&mut self, p: DVec2) {
        self.points.push(p);
        self.edges.push(EdgeClass::Cut);
    }

    /// Appends a CREASE edge to the given vertex.
    pub fn crease_to(&mut self, p: DVec2) {
        self.points.push(p);
        self.edges.push(EdgeClass::Crease);
    }

    /// Records an internal crease segment (not part of the boundary).
    pub fn internal_crease(&mut self, a: DVec2, b: DVec2) {
        self.internal_creases.push(Segment::new(a, b));
    }

    /// Closes the boundary back to the first vertex with the given class.
    pub fn close(mut self, closing: EdgeClass) -> Outline {
        self.edges.push(closing);
        Outline {
            points: self.points,
            edges: self.edges,
            internal_creases: self.internal_creases,
        }
    }
}
