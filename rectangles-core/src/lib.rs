//! # Rectangles Core Library (`rectangles-core`)
//!
//! Geometric relationships between two axis-aligned rectangles:
//!
//! - **Intersections**: points where the boundaries cross ([`operations::intersections`]).
//! - **Containment**: whether either rectangle lies entirely within the other,
//!   edges included ([`operations::containment`]).
//! - **Adjacency**: shared stretches of boundary, classified as
//!   [`AdjacencyType::Proper`], [`AdjacencyType::SubLine`] or
//!   [`AdjacencyType::Partial`] ([`operations::adjacency`]).
//!
//! Coordinates use the mathematical orientation: `y` grows upwards, so a
//! rectangle anchored at its top-left corner `(x, y)` spans `[x, x + width]`
//! horizontally and `[y - height, y]` vertically.
//!
//! Around the geometry sit an application layer ([`application`]) that parses
//! raw input and collects every validation problem into [`Violations`], a TOML
//! configuration ([`config`]) and `tracing`-based logging ([`logging`]).
//!
//! ```
//! use rectangles_core::application::{CollisionInteractor, CollisionQuery, QueryFlags, RectangleRawData};
//!
//! let query = CollisionQuery {
//!     rectangle1: RectangleRawData::new("0", "10", "10", "10"),
//!     rectangle2: RectangleRawData::new("2", "8", "3", "3"),
//!     flags: QueryFlags::ALL,
//! };
//! let report = CollisionInteractor::new().execute(&query).unwrap();
//! assert_eq!(report.intersections, Some(vec![]));
//! assert!(report.containment.unwrap().rect1_contains_rect2);
//! ```

pub mod application;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod types;
pub mod validation;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, OutputConfig};
pub use error::{ConfigError, CoreError, InvalidRectangleError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use operations::{Adjacency, AdjacencyType, Containment};
pub use types::{LineSegment, OrthogonalAxis, ParallelAxisBounds, Point, Rectangle, RectangleSegments, Size};
pub use validation::Violations;
