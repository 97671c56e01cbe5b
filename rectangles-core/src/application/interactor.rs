//! Executes a [`CollisionQuery`] end to end.

use super::parser::parse_rectangle;
use super::query::CollisionQuery;
use super::report::CollisionReport;
use crate::operations::{
    AdjacencyFinder, Containment, IntersectionFinder, SegmentAdjacencyFinder, SegmentIntersectionFinder,
};
use crate::validation::Violations;

/// Field path of the violation raised when no attribute is requested.
pub const QUERY_FLAGS_PATH: &str = "queryFlags";

/// Validates a query and computes the requested collision attributes.
///
/// Generic over the finders; [`CollisionInteractor::new`] uses the
/// segment-based ones.
#[derive(Debug, Clone, Default)]
pub struct CollisionInteractor<A = SegmentAdjacencyFinder, I = SegmentIntersectionFinder> {
    adjacency_finder: A,
    intersection_finder: I,
}

impl CollisionInteractor {
    /// An interactor backed by the segment-based finders.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: AdjacencyFinder, I: IntersectionFinder> CollisionInteractor<A, I> {
    pub fn with_finders(adjacency_finder: A, intersection_finder: I) -> Self {
        CollisionInteractor {
            adjacency_finder,
            intersection_finder,
        }
    }

    /// Runs `query`.
    ///
    /// All problems are collected before giving up: a missing query flag and
    /// the violations of both rectangles are reported together. If anything
    /// is wrong no attribute is computed.
    pub fn execute(&self, query: &CollisionQuery) -> Result<CollisionReport, Violations> {
        let mut violations = Violations::new();
        if !query.flags.any() {
            violations.push(QUERY_FLAGS_PATH, "At least one query flag must be set");
        }
        let rect1 = parse_rectangle(&query.rectangle1, "rectangle1");
        let rect2 = parse_rectangle(&query.rectangle2, "rectangle2");

        let (rect1, rect2) = match (rect1, rect2) {
            (Ok(rect1), Ok(rect2)) if violations.is_empty() => (rect1, rect2),
            (rect1, rect2) => {
                if let Err(errors) = rect1 {
                    violations.merge(errors);
                }
                if let Err(errors) = rect2 {
                    violations.merge(errors);
                }
                tracing::debug!(count = violations.len(), "collision query rejected");
                return Err(violations);
            }
        };

        let mut report = CollisionReport::new(rect1, rect2);
        if query.flags.intersections {
            report.intersections = Some(self.intersection_finder.find_all(&rect1, &rect2));
        }
        if query.flags.containment {
            report.containment = Some(Containment::between(&rect1, &rect2));
        }
        if query.flags.adjacency {
            report.adjacency = Some(self.adjacency_finder.find_all(&rect1, &rect2));
        }
        tracing::debug!(flags = ?query.flags, "collision query executed");
        Ok(report)
    }
}
