//! Boundary intersection points between two rectangles.

use crate::types::{Point, Rectangle};

/// Finds the points where the boundaries of two rectangles cross.
///
/// Exists as a seam so that callers such as
/// [`crate::application::CollisionInteractor`] can be exercised with a
/// substitute implementation.
pub trait IntersectionFinder {
    /// Every distinct point where an edge of `rectangle_a` meets an edge of
    /// `rectangle_b`. Order is not significant.
    fn find_all(&self, rectangle_a: &Rectangle, rectangle_b: &Rectangle) -> Vec<Point>;
}

/// Checks each of the 16 edge pairs for a crossing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentIntersectionFinder;

impl IntersectionFinder for SegmentIntersectionFinder {
    fn find_all(&self, rectangle_a: &Rectangle, rectangle_b: &Rectangle) -> Vec<Point> {
        let mut intersections: Vec<Point> = Vec::with_capacity(4);
        for segment_a in rectangle_a.segments() {
            for segment_b in rectangle_b.segments() {
                let Some(point) = segment_a.intersection_with(&segment_b) else {
                    continue;
                };
                // Corners are hit by two edge pairs each; keep one.
                if !intersections.contains(&point) {
                    intersections.push(point);
                }
            }
        }
        tracing::debug!(count = intersections.len(), "found intersections");
        intersections
    }
}
