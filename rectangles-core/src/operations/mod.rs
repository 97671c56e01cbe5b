//! Geometric relationships between two rectangles.
//!
//! - [`intersections`]: points where the boundaries cross.
//! - [`containment`]: whether either rectangle contains the other.
//! - [`adjacency`]: shared stretches of boundary, classified by extent.
//!
//! The three are independent, total functions of their inputs. Intersections
//! and adjacency go through the [`IntersectionFinder`] and [`AdjacencyFinder`]
//! traits so the application layer can swap in test doubles.
//!
//! ```
//! use rectangles_core::{operations, Rectangle};
//!
//! let r1 = Rectangle::from_coords(0.0, 10.0, 5.0, 5.0).unwrap();
//! let r2 = Rectangle::from_coords(3.0, 8.0, 5.0, 5.0).unwrap();
//! assert_eq!(operations::intersections(&r1, &r2).len(), 2);
//! assert!(operations::adjacency(&r1, &r2).is_empty());
//! ```

pub mod adjacency;
pub mod containment;
pub mod intersection;

pub use adjacency::{Adjacency, AdjacencyFinder, AdjacencyType, SegmentAdjacencyFinder};
pub use containment::Containment;
pub use intersection::{IntersectionFinder, SegmentIntersectionFinder};

use crate::types::{Point, Rectangle};

/// Distinct boundary intersection points of `rect1` and `rect2`.
pub fn intersections(rect1: &Rectangle, rect2: &Rectangle) -> Vec<Point> {
    SegmentIntersectionFinder.find_all(rect1, rect2)
}

/// Containment of `rect1` in `rect2` and vice versa.
pub fn containment(rect1: &Rectangle, rect2: &Rectangle) -> Containment {
    Containment::between(rect1, rect2)
}

/// Distinct adjacencies between the boundaries of `rect1` and `rect2`.
pub fn adjacency(rect1: &Rectangle, rect2: &Rectangle) -> Vec<Adjacency> {
    SegmentAdjacencyFinder.find_all(rect1, rect2)
}
