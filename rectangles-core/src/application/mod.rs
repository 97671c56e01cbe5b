//! Use-case layer: turns an unvalidated [`CollisionQuery`] into a
//! [`CollisionReport`] or a set of [`Violations`](crate::Violations).

pub mod interactor;
pub mod parser;
pub mod query;
pub mod report;

pub use interactor::{CollisionInteractor, QUERY_FLAGS_PATH};
pub use parser::parse_rectangle;
pub use query::{CollisionQuery, QueryFlags, RectangleRawData};
pub use report::CollisionReport;
