//! Parsing of raw rectangle fields into a validated [`Rectangle`].

use super::query::RectangleRawData;
use crate::types::{Point, Rectangle, Size};
use crate::validation::Violations;

/// Field path suffix and the name used for it in messages.
struct FieldInfo {
    suffix: &'static str,
    friendly_name: &'static str,
}

const FIELDS: [FieldInfo; 4] = [
    FieldInfo { suffix: "x", friendly_name: "top-left x-coordinate" },
    FieldInfo { suffix: "y", friendly_name: "top-left y-coordinate" },
    FieldInfo { suffix: "size.width", friendly_name: "width" },
    FieldInfo { suffix: "size.height", friendly_name: "height" },
];

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses the four fields of `raw` and builds a rectangle named `name`
/// (e.g. `rectangle1`).
///
/// Every field that is not a finite number gets a violation at
/// `<name>.<field>`. When all four parse, the rectangle invariant is checked
/// and its violations are reported under `<name>.size.*`, as are right or
/// bottom edges that overflow to infinity.
pub fn parse_rectangle(raw: &RectangleRawData, name: &str) -> Result<Rectangle, Violations> {
    let values = [&raw.x, &raw.y, &raw.width, &raw.height];
    let mut violations = Violations::new();
    let mut parsed = [0.0f64; 4];

    for (slot, (field, value)) in parsed.iter_mut().zip(FIELDS.iter().zip(values)) {
        match parse_number(value) {
            Some(number) => *slot = number,
            None => violations.push(
                format!("{name}.{}", field.suffix),
                format!("The {} of {name} is not a number", field.friendly_name),
            ),
        }
    }
    if !violations.is_empty() {
        tracing::debug!(rectangle = name, %violations, "unparsable rectangle fields");
        return Err(violations);
    }

    let [x, y, width, height] = parsed;
    let rectangle = Rectangle::new(Point::new(x, y), Size::new(width, height))
        .map_err(|err| err.into_violations().prefixed(name))?;

    // Finite fields can still overflow once the far edges are computed.
    if !rectangle.right().is_finite() {
        violations.push(
            format!("{name}.size.width"),
            format!("The right edge of {name} is out of range"),
        );
    }
    if !rectangle.bottom().is_finite() {
        violations.push(
            format!("{name}.size.height"),
            format!("The bottom edge of {name} is out of range"),
        );
    }
    if !violations.is_empty() {
        tracing::debug!(rectangle = name, %violations, "rectangle edges overflow");
        return Err(violations);
    }
    Ok(rectangle)
}
