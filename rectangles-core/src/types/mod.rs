//! Core data types for rectangle geometry.
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rectangle`] and the named edge set
//!   [`RectangleSegments`].
//! - **Line segments**: [`LineSegment`], [`OrthogonalAxis`] and
//!   [`ParallelAxisBounds`], which model a single rectangle edge.
//!
//! All types are immutable values and serializable with Serde.

pub mod geometry;
pub mod line_segment;

pub use geometry::{Point, Rectangle, RectangleSegments, Size};
pub use line_segment::{LineSegment, OrthogonalAxis, ParallelAxisBounds};
