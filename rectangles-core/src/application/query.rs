//! Input of a collision query: two unparsed rectangles and the requested attributes.

use serde::{Deserialize, Serialize};

/// The four fields of a rectangle as received from the outside world,
/// not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RectangleRawData {
    /// Top-left x-coordinate.
    pub x: String,
    /// Top-left y-coordinate.
    pub y: String,
    pub width: String,
    pub height: String,
}

impl RectangleRawData {
    pub fn new(
        x: impl Into<String>,
        y: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        RectangleRawData {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Which attributes a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryFlags {
    pub intersections: bool,
    pub containment: bool,
    pub adjacency: bool,
}

impl QueryFlags {
    /// All three attributes.
    pub const ALL: QueryFlags = QueryFlags {
        intersections: true,
        containment: true,
        adjacency: true,
    };

    /// Whether at least one attribute is requested.
    pub fn any(&self) -> bool {
        self.intersections || self.containment || self.adjacency
    }
}

/// A request to compute collision attributes between two rectangles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionQuery {
    pub rectangle1: RectangleRawData,
    pub rectangle2: RectangleRawData,
    pub flags: QueryFlags,
}
