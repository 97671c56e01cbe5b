//! Successful outcome of a collision query.

use crate::operations::{Adjacency, Containment};
use crate::types::{Point, Rectangle};
use serde::Serialize;

/// The parsed rectangles and each attribute the query asked for.
///
/// An attribute is `None` when it was not requested, which is distinct from an
/// empty result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionReport {
    pub rectangle1: Rectangle,
    pub rectangle2: Rectangle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersections: Option<Vec<Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containment: Option<Containment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjacency: Option<Vec<Adjacency>>,
}

impl CollisionReport {
    /// A report with no attributes computed yet.
    pub fn new(rectangle1: Rectangle, rectangle2: Rectangle) -> Self {
        CollisionReport {
            rectangle1,
            rectangle2,
            intersections: None,
            containment: None,
            adjacency: None,
        }
    }
}
