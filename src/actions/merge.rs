//! Coalescing of consecutive actions into one history entry.

use super::Action;

/// Fold `next` into `previous` when both describe one continuous edit.
///
/// Consecutive transforms of the same items become one transform from the
/// first old bounds to the last new bounds. Consecutive appearance changes of
/// the same key on the same items keep the latest value.
#[must_use]
pub fn merge_actions(previous: &Action, next: &Action) -> Option<Action> {
    match (previous, next) {
        (
            Action::TransformItems { diagram_id, item_ids, old_bounds, .. },
            Action::TransformItems { diagram_id: next_diagram, item_ids: next_items, new_bounds, .. },
        ) if diagram_id == next_diagram && item_ids == next_items => Some(Action::TransformItems {
            diagram_id: diagram_id.clone(),
            item_ids: item_ids.clone(),
            old_bounds: *old_bounds,
            new_bounds: *new_bounds,
        }),
        (
            Action::ChangeItemsAppearance { diagram_id, item_ids, key, .. },
            Action::ChangeItemsAppearance { diagram_id: next_diagram, item_ids: next_items, key: next_key, .. },
        ) if diagram_id == next_diagram && item_ids == next_items && key == next_key => Some(next.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::geometry::{Rotation, Transform, Vec2};

    fn at(x: f64) -> Transform {
        Transform::new(Vec2::new(x, 0.0), Vec2::new(10.0, 10.0), Rotation::ZERO)
    }

    fn transform(items: &[&str], from: f64, to: f64) -> Action {
        Action::TransformItems {
            diagram_id: "page".into(),
            item_ids: items.iter().map(|id| (*id).to_owned()).collect(),
            old_bounds: at(from),
            new_bounds: at(to),
        }
    }

    fn appearance(key: &str, value: i32) -> Action {
        Action::ChangeItemsAppearance {
            diagram_id: "page".into(),
            item_ids: vec!["a".into()],
            key: key.into(),
            value: json!(value),
        }
    }

    #[test]
    fn transforms_of_same_items_span_first_to_last() {
        let merged = merge_actions(&transform(&["a"], 0.0, 5.0), &transform(&["a"], 5.0, 9.0));
        assert_eq!(merged, Some(transform(&["a"], 0.0, 9.0)));
    }

    #[test]
    fn transforms_of_different_items_stay_apart() {
        assert_eq!(merge_actions(&transform(&["a"], 0.0, 5.0), &transform(&["b"], 5.0, 9.0)), None);
    }

    #[test]
    fn appearance_changes_keep_latest_value() {
        assert_eq!(merge_actions(&appearance("OPACITY", 1), &appearance("OPACITY", 2)), Some(appearance("OPACITY", 2)));
        assert_eq!(merge_actions(&appearance("OPACITY", 1), &appearance("TEXT", 2)), None);
    }

    #[test]
    fn unrelated_kinds_never_merge() {
        assert_eq!(merge_actions(&appearance("OPACITY", 1), &transform(&["a"], 0.0, 1.0)), None);
    }
}
