//! Axis-constrained line segments, the edges of a rectangle.
//!
//! A [`LineSegment`] lies on a line where one coordinate is fixed (the
//! `constant`) and spans an inclusive range of the other coordinate (the
//! `bounds`). Rectangles are axis-aligned, so every edge fits this model.

use super::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The axis whose coordinate is constant along a segment.
///
/// A segment on [`OrthogonalAxis::X`] is a vertical line at a fixed x; one on
/// [`OrthogonalAxis::Y`] is a horizontal line at a fixed y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrthogonalAxis {
    X,
    Y,
}

impl fmt::Display for OrthogonalAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrthogonalAxis::X => f.write_str("x"),
            OrthogonalAxis::Y => f.write_str("y"),
        }
    }
}

/// Inclusive `[lower, upper]` range along the axis a segment runs parallel to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParallelAxisBounds {
    pub lower: f64,
    pub upper: f64,
}

impl ParallelAxisBounds {
    /// Creates bounds from `lower` to `upper`. Callers keep `lower <= upper`.
    pub const fn new(lower: f64, upper: f64) -> Self {
        ParallelAxisBounds { lower, upper }
    }

    /// Length of the range (`upper - lower`).
    pub fn difference(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `value` lies within the range, endpoints included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// The common part of two ranges, which may be a single point or inverted
    /// when they do not meet.
    fn overlap(&self, other: &ParallelAxisBounds) -> ParallelAxisBounds {
        ParallelAxisBounds::new(self.lower.max(other.lower), self.upper.min(other.upper))
    }
}

/// One edge of a rectangle.
///
/// Two segments are equal when axis, constant and bounds are exactly equal;
/// no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub axis: OrthogonalAxis,
    pub constant: f64,
    pub bounds: ParallelAxisBounds,
}

impl LineSegment {
    pub const fn new(axis: OrthogonalAxis, constant: f64, bounds: ParallelAxisBounds) -> Self {
        LineSegment { axis, constant, bounds }
    }

    /// The point where this segment crosses `other`, if they cross.
    ///
    /// Segments on the same axis never cross. For orthogonal segments, each
    /// constant has to fall within the other's bounds (inclusive). The result
    /// takes x from whichever segment is pinned on [`OrthogonalAxis::X`] and y
    /// from the other one, so `a.intersection_with(&b) == b.intersection_with(&a)`.
    pub fn intersection_with(&self, other: &LineSegment) -> Option<Point> {
        if self.axis == other.axis {
            return None;
        }
        if !self.bounds.contains(other.constant) || !other.bounds.contains(self.constant) {
            return None;
        }
        let (vertical, horizontal) = match self.axis {
            OrthogonalAxis::X => (self, other),
            OrthogonalAxis::Y => (other, self),
        };
        Some(Point::new(vertical.constant, horizontal.constant))
    }

    /// Whether at least one endpoint of this segment's bounds lies within
    /// `other`'s bounds.
    pub fn lower_or_upper_boundary_is_between(&self, other: &LineSegment) -> bool {
        other.bounds.contains(self.bounds.lower) || other.bounds.contains(self.bounds.upper)
    }

    /// Whether both endpoints of this segment's bounds lie within `other`'s
    /// bounds, i.e. this segment is nested inside `other`.
    pub fn lower_and_upper_boundary_is_between(&self, other: &LineSegment) -> bool {
        other.bounds.contains(self.bounds.lower) && other.bounds.contains(self.bounds.upper)
    }

    /// Whether both segments lie on the same infinite line.
    pub fn is_collinear_with(&self, other: &LineSegment) -> bool {
        self.axis == other.axis && self.constant == other.constant
    }

    /// The part of the line shared with `other`, or `None` when the shared part
    /// has zero length.
    ///
    /// Only meaningful for collinear segments; the result keeps this segment's
    /// axis and constant.
    pub fn overlap_with(&self, other: &LineSegment) -> Option<LineSegment> {
        let bounds = self.bounds.overlap(&other.bounds);
        if bounds.difference() <= 0.0 {
            return None;
        }
        Some(LineSegment::new(self.axis, self.constant, bounds))
    }
}
