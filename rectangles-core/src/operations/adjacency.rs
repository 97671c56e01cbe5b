//! Shared boundary edges between two rectangles.
//!
//! Two edges are adjacent when they lie on the same line and overlap along it
//! by more than a single point. The overlap is classified as:
//!
//! - [`AdjacencyType::Proper`]: the edges are identical.
//! - [`AdjacencyType::SubLine`]: one edge lies entirely within the other.
//! - [`AdjacencyType::Partial`]: the edges overlap but neither contains the other.
//!
//! Rectangles touching only at a corner are not adjacent.

use crate::types::{LineSegment, Rectangle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How two collinear edges overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjacencyType {
    Proper,
    Partial,
    SubLine,
}

impl fmt::Display for AdjacencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdjacencyType::Proper => "Proper",
            AdjacencyType::Partial => "Partial",
            AdjacencyType::SubLine => "SubLine",
        };
        f.write_str(name)
    }
}

/// A shared stretch of boundary and how it came about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjacency {
    #[serde(rename = "type")]
    pub kind: AdjacencyType,
    /// The overlapping part of the two edges.
    pub segment: LineSegment,
}

impl Adjacency {
    pub const fn new(kind: AdjacencyType, segment: LineSegment) -> Self {
        Adjacency { kind, segment }
    }
}

/// Finds the adjacencies between the boundaries of two rectangles.
pub trait AdjacencyFinder {
    /// Every distinct adjacency between an edge of `rect1` and an edge of
    /// `rect2`. Order is not significant.
    fn find_all(&self, rect1: &Rectangle, rect2: &Rectangle) -> Vec<Adjacency>;
}

/// Compares each of the 16 edge pairs and classifies the collinear ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentAdjacencyFinder;

impl SegmentAdjacencyFinder {
    /// Classifies one pair of edges. Equality wins over nesting, nesting over
    /// interleaving; a zero-length overlap is no adjacency.
    fn classify(segment1: &LineSegment, segment2: &LineSegment) -> Option<Adjacency> {
        if !segment1.is_collinear_with(segment2) {
            return None;
        }
        if segment1.bounds == segment2.bounds {
            return Some(Adjacency::new(AdjacencyType::Proper, *segment1));
        }
        let kind = if segment1.lower_and_upper_boundary_is_between(segment2)
            || segment2.lower_and_upper_boundary_is_between(segment1)
        {
            AdjacencyType::SubLine
        } else if segment1.lower_or_upper_boundary_is_between(segment2)
            || segment2.lower_or_upper_boundary_is_between(segment1)
        {
            AdjacencyType::Partial
        } else {
            return None;
        };
        segment1
            .overlap_with(segment2)
            .map(|overlap| Adjacency::new(kind, overlap))
    }
}

impl AdjacencyFinder for SegmentAdjacencyFinder {
    fn find_all(&self, rect1: &Rectangle, rect2: &Rectangle) -> Vec<Adjacency> {
        let mut adjacencies: Vec<Adjacency> = Vec::new();
        for segment1 in rect1.segments() {
            for segment2 in rect2.segments() {
                let Some(adjacency) = Self::classify(&segment1, &segment2) else {
                    continue;
                };
                tracing::trace!(kind = %adjacency.kind, axis = %adjacency.segment.axis, constant = adjacency.segment.constant, "adjacent edges");
                if !adjacencies.contains(&adjacency) {
                    adjacencies.push(adjacency);
                }
            }
        }
        tracing::debug!(count = adjacencies.len(), "found adjacencies");
        adjacencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrthogonalAxis, ParallelAxisBounds};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Rectangle {
        Rectangle::from_coords(x, y, width, height).unwrap()
    }

    fn segment(axis: OrthogonalAxis, constant: f64, lower: f64, upper: f64) -> LineSegment {
        LineSegment::new(axis, constant, ParallelAxisBounds::new(lower, upper))
    }

    fn find(r1: Rectangle, r2: Rectangle) -> Vec<Adjacency> {
        SegmentAdjacencyFinder.find_all(&r1, &r2)
    }

    #[rstest]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(1.0, 1.0, 1.0, 1.0))]
    #[case(rect(3.5, 2.0, 3.0, 4.0), rect(0.0, 2.0, 3.0, 4.0))]
    #[case(rect(0.0, 0.0, 3.0, 2.0), rect(10.0, 0.0, 1.0, 1.0))]
    #[case(rect(0.0, 10.0, 5.0, 5.0), rect(3.0, 8.0, 5.0, 5.0))]
    fn non_adjacent_rectangles_yield_nothing(#[case] r1: Rectangle, #[case] r2: Rectangle) {
        assert!(find(r1, r2).is_empty());
    }

    #[test]
    fn corner_touch_is_not_an_adjacency() {
        assert!(find(rect(0.0, 0.0, 3.0, 2.0), rect(3.0, -2.0, 1.0, 1.0)).is_empty());
    }

    #[rstest]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(3.0, 2.0, 1.0, 4.0), segment(OrthogonalAxis::X, 3.0, -2.0, 2.0))]
    #[case(rect(0.0, 3.0, 3.0, 1.0), rect(0.0, 2.0, 3.0, 4.0), segment(OrthogonalAxis::Y, 2.0, 0.0, 3.0))]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(0.0, -2.0, 3.0, 1.0), segment(OrthogonalAxis::Y, -2.0, 0.0, 3.0))]
    #[case(rect(-1.0, 2.0, 1.0, 4.0), rect(0.0, 2.0, 3.0, 4.0), segment(OrthogonalAxis::X, 0.0, -2.0, 2.0))]
    fn identical_shared_edge_is_proper(
        #[case] r1: Rectangle,
        #[case] r2: Rectangle,
        #[case] expected: LineSegment,
    ) {
        assert_eq!(find(r1, r2), vec![Adjacency::new(AdjacencyType::Proper, expected)]);
    }

    #[rstest]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(3.0, 0.0, 2.0, 3.0), segment(OrthogonalAxis::X, 3.0, -2.0, 0.0))]
    #[case(rect(-1.0, 3.0, 2.0, 1.0), rect(0.0, 2.0, 3.0, 4.0), segment(OrthogonalAxis::Y, 2.0, 0.0, 1.0))]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(-1.0, 0.0, 1.0, 3.0), segment(OrthogonalAxis::X, 0.0, -2.0, 0.0))]
    #[case(rect(1.0, -2.0, 5.0, 1.0), rect(0.0, 2.0, 3.0, 4.0), segment(OrthogonalAxis::Y, -2.0, 1.0, 3.0))]
    fn interleaved_edges_are_partial(
        #[case] r1: Rectangle,
        #[case] r2: Rectangle,
        #[case] expected: LineSegment,
    ) {
        assert_eq!(find(r1, r2), vec![Adjacency::new(AdjacencyType::Partial, expected)]);
    }

    #[rstest]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(3.0, 2.0, 1.0, 2.0), segment(OrthogonalAxis::X, 3.0, 0.0, 2.0))]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(1.0, 3.0, 1.0, 1.0), segment(OrthogonalAxis::Y, 2.0, 1.0, 2.0))]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(-1.0, 1.0, 1.0, 3.0), segment(OrthogonalAxis::X, 0.0, -2.0, 1.0))]
    #[case(rect(0.0, 2.0, 3.0, 4.0), rect(2.0, -2.0, 1.0, 1.0), segment(OrthogonalAxis::Y, -2.0, 2.0, 3.0))]
    #[case(rect(0.0, -2.0, 5.0, 1.0), rect(0.0, 2.0, 3.0, 4.0), segment(OrthogonalAxis::Y, -2.0, 0.0, 3.0))]
    // the nested edge may belong to either rectangle
    #[case(rect(1.0, 3.0, 1.0, 1.0), rect(0.0, 2.0, 3.0, 4.0), segment(OrthogonalAxis::Y, 2.0, 1.0, 2.0))]
    #[case(rect(3.0, 2.0, 1.0, 2.0), rect(0.0, 2.0, 3.0, 4.0), segment(OrthogonalAxis::X, 3.0, 0.0, 2.0))]
    #[case(rect(4.0, 6.0, 6.0, 4.0), rect(10.0, 8.0, 2.0, 8.0), segment(OrthogonalAxis::X, 10.0, 2.0, 6.0))]
    fn nested_edges_are_sub_lines(
        #[case] r1: Rectangle,
        #[case] r2: Rectangle,
        #[case] expected: LineSegment,
    ) {
        assert_eq!(find(r1, r2), vec![Adjacency::new(AdjacencyType::SubLine, expected)]);
    }

    #[test]
    fn nested_on_both_sides_yields_two_sub_lines() {
        let adjacencies = find(rect(0.0, 2.0, 3.0, 4.0), rect(0.0, 1.0, 3.0, 2.0));
        assert_eq!(
            adjacencies,
            vec![
                Adjacency::new(AdjacencyType::SubLine, segment(OrthogonalAxis::X, 3.0, -1.0, 1.0)),
                Adjacency::new(AdjacencyType::SubLine, segment(OrthogonalAxis::X, 0.0, -1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn interleaved_on_both_sides_yields_two_partials() {
        let adjacencies = find(rect(0.0, 2.0, 3.0, 4.0), rect(0.0, 3.0, 3.0, 2.0));
        assert_eq!(adjacencies.len(), 2);
        assert!(adjacencies.iter().all(|a| a.kind == AdjacencyType::Partial));
        assert!(adjacencies.contains(&Adjacency::new(
            AdjacencyType::Partial,
            segment(OrthogonalAxis::X, 0.0, 1.0, 2.0)
        )));
        assert!(adjacencies.contains(&Adjacency::new(
            AdjacencyType::Partial,
            segment(OrthogonalAxis::X, 3.0, 1.0, 2.0)
        )));
    }

    #[test]
    fn shared_top_and_nested_sides_mix_proper_and_sub_line() {
        let adjacencies = find(rect(0.0, 2.0, 3.0, 4.0), rect(0.0, 2.0, 3.0, 2.0));
        assert_eq!(adjacencies.len(), 3);
        for expected in [
            Adjacency::new(AdjacencyType::Proper, segment(OrthogonalAxis::Y, 2.0, 0.0, 3.0)),
            Adjacency::new(AdjacencyType::SubLine, segment(OrthogonalAxis::X, 0.0, 0.0, 2.0)),
            Adjacency::new(AdjacencyType::SubLine, segment(OrthogonalAxis::X, 3.0, 0.0, 2.0)),
        ] {
            assert!(adjacencies.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn identical_rectangles_are_proper_on_every_edge() {
        let r = rect(0.0, 0.0, 3.0, 2.0);
        let adjacencies = find(r, r);
        assert_eq!(adjacencies.len(), 4);
        assert!(adjacencies.iter().all(|a| a.kind == AdjacencyType::Proper));
        let segments: Vec<LineSegment> = adjacencies.iter().map(|a| a.segment).collect();
        assert_eq!(segments, r.segments().to_array().to_vec());
    }

    #[test]
    fn adjacency_serializes_kind_as_type() {
        let adjacency = Adjacency::new(AdjacencyType::SubLine, segment(OrthogonalAxis::X, 3.0, 0.0, 2.0));
        let json = serde_json::to_value(adjacency).unwrap();
        assert_eq!(json["type"], "SubLine");
        assert_eq!(json["segment"]["axis"], "X");
        assert_eq!(json["segment"]["bounds"]["upper"], 2.0);
    }
}
