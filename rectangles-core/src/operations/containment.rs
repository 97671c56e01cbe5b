//! Mutual containment of two rectangles.

use crate::types::Rectangle;
use serde::Serialize;

/// Containment checked in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Containment {
    pub rect1_contains_rect2: bool,
    pub rect2_contains_rect1: bool,
}

impl Containment {
    /// Evaluates [`Rectangle::contains`] both ways.
    pub fn between(rect1: &Rectangle, rect2: &Rectangle) -> Self {
        let containment = Containment {
            rect1_contains_rect2: rect1.contains(rect2),
            rect2_contains_rect1: rect2.contains(rect1),
        };
        tracing::debug!(?containment, "checked containment");
        containment
    }

    /// Whether the two rectangles contain each other, i.e. are identical.
    pub fn is_mutual(&self) -> bool {
        self.rect1_contains_rect2 && self.rect2_contains_rect1
    }
}
