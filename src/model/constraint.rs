//! Resize constraints carried by shapes.

use serde::{Deserialize, Serialize};

use super::Appearance;
use crate::consts;
use crate::geometry::Vec2;

/// Size-shaping rule applied whenever a shape is resized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Constraint {
    /// Square to the smaller edge.
    MinSize,
    /// Fixed width and/or height. `None` leaves the axis free.
    Size {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },
    /// Height follows the font size plus vertical padding.
    TextHeight { padding: f64 },
}

impl Constraint {
    #[must_use]
    pub fn apply(&self, size: Vec2, appearance: &Appearance) -> Vec2 {
        match self {
            Self::MinSize => {
                let edge = size.x.min(size.y);
                Vec2::new(edge, edge)
            }
            Self::Size { width, height } => Vec2::new(width.unwrap_or(size.x), height.unwrap_or(size.y)),
            Self::TextHeight { padding } => {
                Vec2::new(size.x, (appearance.font_size() * consts::TEXT_LINE_HEIGHT + 2.0 * padding).round())
            }
        }
    }

    /// Whether the result depends on the appearance value under `key`.
    #[must_use]
    pub fn reads_appearance(&self, key: &str) -> bool {
        matches!(self, Self::TextHeight { .. }) && key == consts::FONT_SIZE
    }

    /// Apply every constraint in order.
    #[must_use]
    pub fn apply_all<'a>(constraints: impl IntoIterator<Item = &'a Self>, size: Vec2, appearance: &Appearance) -> Vec2 {
        constraints.into_iter().fold(size, |size, constraint| constraint.apply(size, appearance))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use serde_json::json;

    use super::*;

    #[test]
    fn min_size_squares_to_smaller_edge() {
        assert_eq!(Constraint::MinSize.apply(Vec2::new(80.0, 30.0), &Appearance::empty()), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn size_fixes_only_given_axes() {
        let constraint = Constraint::Size { width: None, height: Some(24.0) };
        assert_eq!(constraint.apply(Vec2::new(80.0, 30.0), &Appearance::empty()), Vec2::new(80.0, 24.0));
    }

    #[test]
    fn text_height_follows_font_size() {
        let appearance = Appearance::of([(consts::FONT_SIZE.to_owned(), json!(20))]);
        let size = Constraint::TextHeight { padding: 5.0 }.apply(Vec2::new(100.0, 10.0), &appearance);
        assert_eq!(size, Vec2::new(100.0, 34.0));
    }

    #[test]
    fn constraints_apply_in_order() {
        let constraints = [Constraint::Size { width: Some(50.0), height: None }, Constraint::MinSize];
        let size = Constraint::apply_all(&constraints, Vec2::new(80.0, 70.0), &Appearance::empty());
        assert_eq!(size, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn size_omits_free_axes_on_the_wire() {
        let constraint = Constraint::Size { width: Some(10.0), height: None };
        assert_eq!(serde_json::to_value(&constraint).expect("serialize"), json!({"type": "size", "width": 10.0}));
    }
}
