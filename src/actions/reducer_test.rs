#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::consts;
use crate::geometry::{Rotation, Transform};
use crate::model::{DiagramItemSet, ItemId, OrderMode};

fn ids(raw: &[&str]) -> Vec<ItemId> {
    raw.iter().map(|id| (*id).to_owned()).collect()
}

fn add_visual(id: &str, x: f64) -> Action {
    Action::AddVisual {
        diagram_id: "page".into(),
        id: id.into(),
        renderer: "Button".into(),
        position: Vec2::new(x, 100.0),
        appearance: crate::model::Appearance::empty(),
    }
}

fn run(state: &EditorState, actions: &[Action]) -> EditorState {
    let registry = RendererRegistry::with_builtins();
    actions.iter().fold(state.clone(), |state, action| apply_action(&state, action, &registry))
}

fn page(state: &EditorState) -> &Diagram {
    state.diagram("page").expect("page diagram")
}

fn seeded() -> EditorState {
    let state = EditorState::default().add_diagram("page");
    run(&state, &[add_visual("a", 100.0), add_visual("b", 300.0), add_visual("c", 500.0)])
}

#[test]
fn add_visual_creates_centered_default_shape() {
    let state = seeded();
    let shape = page(&state).get_shape("a").expect("shape");
    assert_eq!(shape.transform().position(), Vec2::new(100.0, 100.0));
    assert_eq!(shape.transform().size(), Vec2::new(100.0, 100.0));
    assert_eq!(page(&state).root_ids().len(), 3);
}

#[test]
fn icons_and_images_go_through_registry() {
    let state = run(&seeded(), &[
        Action::AddIcon {
            diagram_id: "page".into(),
            id: "i".into(),
            text: "\u{f007}".into(),
            font_family: "FontAwesome".into(),
            position: Vec2::new(20.0, 20.0),
        },
        Action::AddImage {
            diagram_id: "page".into(),
            id: "m".into(),
            source: "logo.png".into(),
            position: Vec2::new(50.0, 50.0),
            size: Vec2::new(64.0, 48.0),
        },
    ]);
    assert_eq!(page(&state).get_shape("i").expect("icon").renderer(), consts::ICON_RENDERER);
    assert_eq!(page(&state).get_shape("m").expect("image").transform().size(), Vec2::new(64.0, 48.0));
}

#[test]
fn unknown_diagram_leaves_state_untouched() {
    let state = seeded();
    let next = run(&state, &[Action::RemoveItems { diagram_id: "missing".into(), item_ids: ids(&["a"]) }]);
    assert!(next.ptr_eq(&state));
}

#[test]
fn group_order_and_ungroup_route_to_diagram() {
    let state = run(&seeded(), &[
        Action::GroupItems { diagram_id: "page".into(), group_id: "g".into(), item_ids: ids(&["a", "b"]) },
        Action::OrderItems { diagram_id: "page".into(), item_ids: ids(&["g"]), mode: OrderMode::BringToFront },
    ]);
    let roots: Vec<&str> = page(&state).root_ids().iter().map(String::as_str).collect();
    assert_eq!(roots, vec!["c", "g"]);

    let ungrouped = run(&state, &[Action::UngroupItems { diagram_id: "page".into(), group_ids: ids(&["g"]) }]);
    let roots: Vec<&str> = page(&ungrouped).root_ids().iter().map(String::as_str).collect();
    assert_eq!(roots, vec!["c", "a", "b"]);
}

#[test]
fn transform_items_maps_between_bounds() {
    let state = seeded();
    let old_bounds = *page(&state).get_shape("a").expect("a").transform();
    let new_bounds = Transform::new(Vec2::new(150.0, 120.0), Vec2::new(200.0, 50.0), Rotation::ZERO);
    let next = run(&state, &[Action::TransformItems {
        diagram_id: "page".into(),
        item_ids: ids(&["a"]),
        old_bounds,
        new_bounds,
    }]);
    assert_eq!(*page(&next).get_shape("a").expect("a").transform(), new_bounds);
}

#[test]
fn locked_items_ignore_appearance_changes() {
    let state = run(&seeded(), &[
        Action::LockItems { diagram_id: "page".into(), item_ids: ids(&["a"]) },
        Action::ChangeItemsAppearance {
            diagram_id: "page".into(),
            item_ids: ids(&["a", "b"]),
            key: consts::BACKGROUND_COLOR.into(),
            value: json!("#ff0000"),
        },
    ]);
    assert_eq!(page(&state).get_shape("a").expect("a").appearance().string(consts::BACKGROUND_COLOR), None);
    assert_eq!(page(&state).get_shape("b").expect("b").appearance().string(consts::BACKGROUND_COLOR), Some("#ff0000"));
}

#[test]
fn paste_inserts_offset_copies_and_selects_them() {
    let state = seeded();
    let set = DiagramItemSet::from_diagram(page(&state), &ids(&["a"]));
    let json = serializer::serialize_set(&set).expect("serializes");
    let next = run(&state, &[Action::PasteItems { diagram_id: "page".into(), json, offset: 10.0 }]);

    let diagram = page(&next);
    assert_eq!(diagram.items().len(), 4);
    let selected = diagram.selected_items().next().and_then(crate::model::DiagramItem::as_shape).expect("pasted");
    assert_ne!(selected.id(), "a");
    assert_eq!(selected.transform().position(), Vec2::new(110.0, 110.0));
}

#[test]
fn invalid_paste_is_ignored() {
    let state = seeded();
    let next = run(&state, &[Action::PasteItems {
        diagram_id: "page".into(),
        json: json!({ "items": [{ "id": "g", "childIds": ["ghost"] }] }),
        offset: 0.0,
    }]);
    assert!(next.ptr_eq(&state));
}

#[test]
fn document_actions_manage_diagrams() {
    let state = run(&seeded(), &[
        Action::DuplicateDiagram { diagram_id: "page".into(), new_diagram_id: "copy".into() },
        Action::RenameDiagram { diagram_id: "copy".into(), title: "Copy".into() },
        Action::ChangeSize { size: Vec2::new(640.0, 480.0) },
    ]);
    assert_eq!(state.selected_diagram_id(), Some("copy"));
    assert_eq!(state.diagram("copy").expect("copy").title(), Some("Copy"));
    assert_eq!(state.diagram("copy").expect("copy").items().len(), 3);
    assert!(state.diagrams().all(|diagram| diagram.size() == Vec2::new(640.0, 480.0)));

    let removed = run(&state, &[Action::RemoveDiagram { diagram_id: "copy".into() }]);
    assert_eq!(removed.selected_diagram_id(), Some("page"));
}

#[test]
fn document_actions_are_noops_at_diagram_level() {
    let state = seeded();
    let diagram = page(&state);
    let registry = RendererRegistry::new();
    let next = apply_diagram_action(diagram, &Action::AddDiagram { diagram_id: "x".into() }, &registry);
    assert!(next.ptr_eq(diagram));
}
