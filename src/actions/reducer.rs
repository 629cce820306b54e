//! Pure reducer from `(state, action)` to the next state.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use super::{Action, RendererRegistry};
use crate::geometry::Vec2;
use crate::model::{Diagram, EditorState};
use crate::serializer;

/// Apply one action to the document.
///
/// Document-wide actions act on the state directly; everything else is routed
/// to the diagram it names. Unknown diagrams and no-op edits return `state`
/// itself.
#[must_use]
pub fn apply_action(state: &EditorState, action: &Action, registry: &RendererRegistry) -> EditorState {
    match action {
        Action::ChangeSize { size } => state.change_size(*size),
        Action::SelectDiagram { diagram_id } => state.select_diagram(diagram_id),
        Action::AddDiagram { diagram_id } => state.add_diagram(diagram_id.clone()),
        Action::RemoveDiagram { diagram_id } => state.remove_diagram(diagram_id),
        Action::RenameDiagram { diagram_id, title } => state.rename_diagram(diagram_id, title),
        Action::DuplicateDiagram { diagram_id, new_diagram_id } => {
            state.duplicate_diagram(diagram_id, new_diagram_id.clone())
        }
        _ => {
            let Some(diagram_id) = action.diagram_id() else {
                return state.clone();
            };
            if state.diagram(diagram_id).is_none() {
                tracing::warn!(diagram_id, kind = ?action.kind(), "action targets unknown diagram");
                return state.clone();
            }
            state.update_diagram(diagram_id, |diagram| apply_diagram_action(diagram, action, registry))
        }
    }
}

/// Apply a content edit to one diagram. Document-wide actions are a no-op here.
#[must_use]
pub fn apply_diagram_action(diagram: &Diagram, action: &Action, registry: &RendererRegistry) -> Diagram {
    match action {
        Action::AddVisual { id, renderer, position, appearance, .. } => {
            diagram.add_visual(registry.create_shape(id.clone(), renderer, *position, appearance))
        }
        Action::AddIcon { id, text, font_family, position, .. } => {
            diagram.add_visual(registry.create_icon(id.clone(), text, font_family, *position))
        }
        Action::AddImage { id, source, position, size, .. } => {
            diagram.add_visual(registry.create_image(id.clone(), source, *position, *size))
        }
        Action::RemoveItems { item_ids, .. } => diagram.remove_items(item_ids),
        Action::GroupItems { group_id, item_ids, .. } => diagram.group(group_id.clone(), item_ids),
        Action::UngroupItems { group_ids, .. } => diagram.ungroup(group_ids),
        Action::OrderItems { item_ids, mode, .. } => diagram.order_items(*mode, item_ids),
        Action::TransformItems { item_ids, old_bounds, new_bounds, .. } => {
            diagram.transform_items(item_ids, old_bounds, new_bounds)
        }
        Action::ChangeItemsAppearance { item_ids, key, value, .. } => diagram.change_appearance(item_ids, key, value),
        Action::LockItems { item_ids, .. } => diagram.lock_items(item_ids),
        Action::UnlockItems { item_ids, .. } => diagram.unlock_items(item_ids),
        Action::PasteItems { json, offset, .. } => paste(diagram, json, *offset),
        Action::SelectItems { item_ids, .. } => diagram.select_items(item_ids),
        Action::ChangeSize { .. }
        | Action::SelectDiagram { .. }
        | Action::AddDiagram { .. }
        | Action::RemoveDiagram { .. }
        | Action::RenameDiagram { .. }
        | Action::DuplicateDiagram { .. } => diagram.clone(),
    }
}

fn paste(diagram: &Diagram, json: &serde_json::Value, offset: f64) -> Diagram {
    let set = serializer::generate_new_ids(json).and_then(|fresh| serializer::deserialize_set(&fresh));
    match set {
        Ok(set) => diagram.add_items(&set.translated(Vec2::new(offset, offset))),
        Err(err) => {
            tracing::warn!(diagram_id = diagram.id(), error = %err, "rejected paste payload");
            diagram.clone()
        }
    }
}
