//! Geometric primitives: points, sizes and axis-aligned rectangles.
//!
//! The coordinate system has y increasing upwards: a rectangle is anchored at
//! its top-left corner and extends `width` to the right and `height` downwards.

use super::line_segment::{LineSegment, OrthogonalAxis, ParallelAxisBounds};
use crate::error::InvalidRectangleError;
use crate::validation::Violations;
use serde::{Deserialize, Serialize};

// --- Point ---

/// A 2D point with `f64` coordinates, compared by exact value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// A point at the origin (0.0, 0.0).
    pub const ZERO: Point = Point::new(0.0, 0.0);
}

// --- Size ---

/// A width and height pair.
///
/// `Size` places no constraint on its values; [`Rectangle::new`] is where
/// positivity is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// The width component of the size.
    pub width: f64,
    /// The height component of the size.
    pub height: f64,
}

impl Size {
    /// Creates a new size with the given width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Calculates the area of the size (width * height).
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

// --- Rectangle ---

/// An axis-aligned rectangle with a strictly positive width and height.
///
/// The only way to obtain one is [`Rectangle::new`] (or
/// [`Rectangle::from_coords`]), so every value in circulation satisfies the
/// invariant. Rectangles are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    top_left: Point,
    size: Size,
}

/// The four edges of a rectangle, named rather than indexed.
///
/// [`RectangleSegments::to_array`] and iteration yield them in the fixed order
/// top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleSegments {
    pub top: LineSegment,
    pub right: LineSegment,
    pub bottom: LineSegment,
    pub left: LineSegment,
}

impl RectangleSegments {
    /// The edges as `[top, right, bottom, left]`.
    pub fn to_array(&self) -> [LineSegment; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    pub fn iter(&self) -> std::array::IntoIter<LineSegment, 4> {
        self.to_array().into_iter()
    }
}

impl IntoIterator for RectangleSegments {
    type Item = LineSegment;
    type IntoIter = std::array::IntoIter<LineSegment, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl Rectangle {
    /// Creates a rectangle anchored at `top_left`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRectangleError`] holding one violation per dimension
    /// that is not strictly positive (`size.width`, `size.height`). NaN
    /// dimensions are rejected too.
    pub fn new(top_left: Point, size: Size) -> Result<Self, InvalidRectangleError> {
        let mut violations = Violations::new();
        // Negated comparison so that NaN is reported as well.
        if !(size.width > 0.0) {
            violations.push("size.width", "The width must be greater than zero.");
        }
        if !(size.height > 0.0) {
            violations.push("size.height", "The height must be greater than zero.");
        }
        if !violations.is_empty() {
            tracing::trace!(%violations, "rejected rectangle");
            return Err(InvalidRectangleError::new(violations));
        }
        Ok(Rectangle { top_left, size })
    }

    /// Creates a rectangle from its top-left coordinates and dimensions.
    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Result<Self, InvalidRectangleError> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    /// The top-left corner.
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The x-coordinate of the left edge.
    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    /// The x-coordinate of the right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.top_left.x + self.size.width
    }

    /// The y-coordinate of the top edge.
    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    /// The y-coordinate of the bottom edge (`y - height`).
    pub fn bottom(&self) -> f64 {
        self.top_left.y - self.size.height
    }

    /// Decomposes the rectangle into its four boundary segments.
    pub fn segments(&self) -> RectangleSegments {
        let horizontal = ParallelAxisBounds::new(self.left(), self.right());
        let vertical = ParallelAxisBounds::new(self.bottom(), self.top());
        RectangleSegments {
            top: LineSegment::new(OrthogonalAxis::Y, self.top(), horizontal),
            right: LineSegment::new(OrthogonalAxis::X, self.right(), vertical),
            bottom: LineSegment::new(OrthogonalAxis::Y, self.bottom(), horizontal),
            left: LineSegment::new(OrthogonalAxis::X, self.left(), vertical),
        }
    }

    /// Inclusive containment: whether `other` lies entirely within this
    /// rectangle, edges allowed to coincide.
    ///
    /// Every rectangle contains itself. The relation is not symmetric.
    pub fn contains(&self, other: &Rectangle) -> bool {
        let own = self.segments();
        let theirs = other.segments();
        let vertical = ParallelAxisBounds::new(own.bottom.constant, own.top.constant);
        let horizontal = ParallelAxisBounds::new(own.left.constant, own.right.constant);

        vertical.contains(theirs.top.constant)
            && vertical.contains(theirs.bottom.constant)
            && horizontal.contains(theirs.right.constant)
            && horizontal.contains(theirs.left.constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Point: std::fmt::Debug, Clone, Copy, PartialEq, Default, Serialize, Send, Sync);
    assert_impl_all!(Size: std::fmt::Debug, Clone, Copy, PartialEq, Default, Serialize, Send, Sync);
    assert_impl_all!(Rectangle: std::fmt::Debug, Clone, Copy, PartialEq, Serialize, Send, Sync);

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Rectangle {
        Rectangle::from_coords(x, y, width, height).unwrap()
    }

    #[test]
    fn valid_top_left_and_size_are_kept() {
        let top_left = Point::new(1.0, 1.0);
        let size = Size::new(1.0, 1.0);
        let rectangle = Rectangle::new(top_left, size).unwrap();
        assert_eq!(rectangle.top_left(), top_left);
        assert_eq!(rectangle.size(), size);
    }

    #[rstest]
    #[case(-1.0, 1.0, "width")]
    #[case(0.0, 1.0, "width")]
    #[case(1.0, -1.0, "height")]
    #[case(1.0, 0.0, "height")]
    #[case(f64::NAN, 1.0, "width")]
    fn one_invalid_dimension_yields_one_violation(
        #[case] width: f64,
        #[case] height: f64,
        #[case] field: &str,
    ) {
        let err = Rectangle::new(Point::ZERO, Size::new(width, height)).unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.get(&format!("size.{field}")),
            Some(&[format!("The {field} must be greater than zero.")][..])
        );
    }

    #[rstest]
    #[case(-1.0, -1.0)]
    #[case(0.0, 0.0)]
    fn both_invalid_dimensions_yield_two_violations(#[case] width: f64, #[case] height: f64) {
        let err = Rectangle::new(Point::ZERO, Size::new(width, height)).unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations.get("size.width"),
            Some(&["The width must be greater than zero.".to_string()][..])
        );
        assert_eq!(
            violations.get("size.height"),
            Some(&["The height must be greater than zero.".to_string()][..])
        );
    }

    #[test]
    fn segments_are_top_right_bottom_left() {
        let rectangle = rect(-2.0, 1.0, 4.0, 2.0);
        let segments = rectangle.segments();

        assert_eq!(
            segments.top,
            LineSegment::new(OrthogonalAxis::Y, 1.0, ParallelAxisBounds::new(-2.0, 2.0))
        );
        assert_eq!(
            segments.right,
            LineSegment::new(OrthogonalAxis::X, 2.0, ParallelAxisBounds::new(-1.0, 1.0))
        );
        assert_eq!(
            segments.bottom,
            LineSegment::new(OrthogonalAxis::Y, -1.0, ParallelAxisBounds::new(-2.0, 2.0))
        );
        assert_eq!(
            segments.left,
            LineSegment::new(OrthogonalAxis::X, -2.0, ParallelAxisBounds::new(-1.0, 1.0))
        );
        assert_eq!(
            segments.to_array(),
            [segments.top, segments.right, segments.bottom, segments.left]
        );
        assert_eq!(segments.iter().count(), 4);
    }

    #[test]
    fn edges_follow_upward_y() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), -20.0);
        assert_eq!(r.size().area(), 1200.0);
    }

    #[test]
    fn rectangle_contains_itself() {
        let r = rect(0.0, 0.0, 3.0, 2.0);
        assert!(r.contains(&r));
    }

    #[rstest]
    // strictly inside
    #[case(rect(0.0, 10.0, 10.0, 10.0), rect(2.0, 8.0, 2.0, 2.0), true, false)]
    // sharing the top and left edges
    #[case(rect(0.0, 10.0, 10.0, 10.0), rect(0.0, 10.0, 5.0, 5.0), true, false)]
    // identical
    #[case(rect(0.0, 0.0, 3.0, 2.0), rect(0.0, 0.0, 3.0, 2.0), true, true)]
    // partial overlap
    #[case(rect(0.0, 10.0, 5.0, 5.0), rect(3.0, 8.0, 5.0, 5.0), false, false)]
    // disjoint
    #[case(rect(0.0, 0.0, 3.0, 2.0), rect(10.0, 0.0, 1.0, 1.0), false, false)]
    // same width, taller
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(0.0, 2.0, 3.0, 2.0), true, false)]
    fn containment_is_inclusive_and_directional(
        #[case] r1: Rectangle,
        #[case] r2: Rectangle,
        #[case] r1_contains_r2: bool,
        #[case] r2_contains_r1: bool,
    ) {
        assert_eq!(r1.contains(&r2), r1_contains_r2);
        assert_eq!(r2.contains(&r1), r2_contains_r1);
    }

    #[test]
    fn point_serde() {
        let p = Point::new(1.5, -2.0);
        let serialized = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&serialized).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn rectangle_serializes_top_left_and_size() {
        let r = rect(0.0, 10.0, 5.0, 4.0);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "top_left": { "x": 0.0, "y": 10.0 },
                "size": { "width": 5.0, "height": 4.0 }
            })
        );
    }
}
