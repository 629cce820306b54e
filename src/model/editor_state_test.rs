use super::*;
use crate::geometry::{Rotation, Transform};
use crate::model::Shape;

fn state() -> EditorState {
    EditorState::default().add_diagram("one").add_diagram("two")
}

fn order(state: &EditorState) -> Vec<&str> {
    state.diagrams().map(Diagram::id).collect()
}

#[test]
fn add_diagram_appends_and_selects() {
    let state = state();
    assert_eq!(order(&state), vec!["one", "two"]);
    assert_eq!(state.selected_diagram_id(), Some("two"));
    assert!(state.add_diagram("one").ptr_eq(&state));
}

#[test]
fn remove_selected_diagram_selects_first_remaining() {
    let state = state().remove_diagram("two");
    assert_eq!(order(&state), vec!["one"]);
    assert_eq!(state.selected_diagram_id(), Some("one"));
    let state = state.remove_diagram("one");
    assert_eq!(state.selected_diagram_id(), None);
    assert!(state.remove_diagram("one").ptr_eq(&state));
}

#[test]
fn select_unknown_diagram_is_noop() {
    let state = state();
    assert!(state.select_diagram("ghost").ptr_eq(&state));
    assert_eq!(state.select_diagram("one").selected_diagram_id(), Some("one"));
}

#[test]
fn rename_and_duplicate() {
    let state = state().rename_diagram("one", "Login");
    assert_eq!(state.diagram("one").and_then(Diagram::title), Some("Login"));

    let shape = Shape::create("s", "Button", Transform::new(Vec2::ZERO, Vec2::new(10.0, 10.0), Rotation::ZERO));
    let state = state.update_diagram("one", |diagram| diagram.add_visual(shape));
    let duplicated = state.duplicate_diagram("one", "copy");
    assert_eq!(order(&duplicated), vec!["one", "copy", "two"]);
    let copy = duplicated.diagram("copy").expect("copy");
    assert_eq!(copy.title(), Some("Login"));
    assert!(copy.item("s").is_some());
    assert_ne!(copy.instance_id(), state.diagram("one").expect("one").instance_id());
    assert!(duplicated.duplicate_diagram("ghost", "x").ptr_eq(&duplicated));
}

#[test]
fn change_size_propagates_to_diagrams() {
    let size = Vec2::new(1280.0, 720.0);
    let state = state().change_size(size);
    assert_eq!(state.size(), size);
    assert!(state.diagrams().all(|diagram| diagram.size() == size));
    assert!(state.change_size(size).ptr_eq(&state));
    assert_eq!(state.add_diagram("three").diagram("three").map(Diagram::size), Some(size));
}

#[test]
fn update_diagram_noop_keeps_state() {
    let state = state();
    assert!(state.update_diagram("one", Diagram::clone).ptr_eq(&state));
    assert!(state.update_diagram("ghost", |diagram| diagram.rename("x")).ptr_eq(&state));
}
