use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::geometry::Rotation;

#[test]
fn remove_items_wire_format() {
    let action = Action::RemoveItems { diagram_id: "page".into(), item_ids: vec!["a".into()] };
    let json = serde_json::to_value(&action).expect("serialize");
    assert_eq!(json, json!({"type": "removeItems", "diagramId": "page", "itemIds": ["a"]}));
}

#[test]
fn order_items_flattens_mode() {
    let json = json!({"type": "orderItems", "diagramId": "page", "itemIds": ["a"], "mode": "moveTo", "index": 3});
    let action: Action = serde_json::from_value(json).expect("deserialize");
    assert_eq!(
        action,
        Action::OrderItems {
            diagram_id: "page".into(),
            item_ids: vec!["a".into()],
            mode: OrderMode::MoveTo { index: 3 }
        }
    );
}

#[test]
fn transform_items_uses_flat_transforms() {
    let action = Action::TransformItems {
        diagram_id: "page".into(),
        item_ids: vec!["a".into()],
        old_bounds: Transform::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Rotation::ZERO),
        new_bounds: Transform::new(Vec2::new(5.0, 6.0), Vec2::new(3.0, 4.0), Rotation::ZERO),
    };
    let json = serde_json::to_value(&action).expect("serialize");
    assert_eq!(json["oldBounds"], json!({"x": 1.0, "y": 2.0, "w": 3.0, "h": 4.0, "r": 0.0}));
    assert_eq!(serde_json::from_value::<Action>(json).expect("deserialize"), action);
}

#[test]
fn add_visual_appearance_is_optional() {
    let json = json!({
        "type": "addVisual",
        "diagramId": "page",
        "id": "b",
        "renderer": "Button",
        "position": {"x": 0, "y": 0}
    });
    let action: Action = serde_json::from_value(json).expect("deserialize");
    assert_eq!(action.kind(), ActionKind::AddVisual);
    assert_eq!(action.diagram_id(), Some("page"));
}

#[test]
fn kinds_and_targets() {
    let size = Action::ChangeSize { size: Vec2::new(10.0, 10.0) };
    assert_eq!(size.kind(), ActionKind::ChangeSize);
    assert_eq!(size.diagram_id(), None);
    assert_eq!(
        serde_json::to_value(ActionKind::ChangeItemsAppearance).expect("serialize"),
        json!("changeItemsAppearance")
    );
}
