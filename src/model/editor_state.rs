//! Multi-diagram document root.
//!
//! Holds every diagram of the document, their order, the selected diagram and
//! the canvas size shared by all of them.

#[cfg(test)]
#[path = "editor_state_test.rs"]
mod editor_state_test;

use super::{Diagram, DiagramId};
use crate::collections::{ImmutableList, ImmutableMap, Record};
use crate::geometry::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorProps {
    pub diagrams: ImmutableMap<Diagram>,
    pub diagram_ids: ImmutableList<DiagramId>,
    pub selected_diagram_id: Option<DiagramId>,
    pub size: Vec2,
}

/// Document root: the ordered diagrams (pages) of one document and the canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    record: Record<EditorProps>,
}

impl EditorState {
    #[must_use]
    pub fn new(size: Vec2) -> Self {
        Self::from_props(EditorProps {
            diagrams: ImmutableMap::empty(),
            diagram_ids: ImmutableList::empty(),
            selected_diagram_id: None,
            size,
        })
    }

    #[must_use]
    pub fn from_props(props: EditorProps) -> Self {
        Self { record: Record::new(props) }
    }

    #[must_use]
    pub fn props(&self) -> &EditorProps {
        self.record.props()
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.props().size
    }

    #[must_use]
    pub fn diagram_ids(&self) -> &ImmutableList<DiagramId> {
        &self.props().diagram_ids
    }

    #[must_use]
    pub fn selected_diagram_id(&self) -> Option<&str> {
        self.props().selected_diagram_id.as_deref()
    }

    #[must_use]
    pub fn diagram(&self, id: &str) -> Option<&Diagram> {
        self.props().diagrams.get(id)
    }

    #[must_use]
    pub fn selected_diagram(&self) -> Option<&Diagram> {
        self.selected_diagram_id().and_then(|id| self.diagram(id))
    }

    /// Diagrams in document order.
    pub fn diagrams(&self) -> impl Iterator<Item = &Diagram> {
        self.diagram_ids().iter().filter_map(|id| self.diagram(id))
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.record.ptr_eq(&other.record)
    }

    /// Append an empty diagram on the current canvas and select it. A taken id is a no-op.
    #[must_use]
    pub fn add_diagram(&self, id: impl Into<DiagramId>) -> Self {
        let id = id.into();
        if self.diagram(&id).is_some() {
            return self.clone();
        }
        self.insert_diagram(Diagram::new(id, self.size()), None)
    }

    /// Remove a diagram. Removing the selected diagram selects the first remaining one.
    #[must_use]
    pub fn remove_diagram(&self, id: &str) -> Self {
        if self.diagram(id).is_none() {
            return self.clone();
        }
        let diagram_ids = self.diagram_ids().remove(&[id.to_owned()]);
        let selected = match self.selected_diagram_id() {
            Some(selected) if selected == id => diagram_ids.first().cloned(),
            other => other.map(str::to_owned),
        };
        self.update(|props| {
            props.diagrams = props.diagrams.remove(&[id]);
            props.diagram_ids = diagram_ids;
            props.selected_diagram_id = selected;
        })
    }

    #[must_use]
    pub fn select_diagram(&self, id: &str) -> Self {
        if self.diagram(id).is_none() || self.selected_diagram_id() == Some(id) {
            return self.clone();
        }
        self.update(|props| props.selected_diagram_id = Some(id.to_owned()))
    }

    #[must_use]
    pub fn rename_diagram(&self, id: &str, title: &str) -> Self {
        self.update_diagram(id, |diagram| diagram.rename(title))
    }

    /// Copy a diagram under `new_id`, placed right after the original.
    #[must_use]
    pub fn duplicate_diagram(&self, id: &str, new_id: impl Into<DiagramId>) -> Self {
        let new_id = new_id.into();
        let Some(source) = self.diagram(id) else {
            return self.clone();
        };
        if self.diagram(&new_id).is_some() {
            return self.clone();
        }
        let mut props = source.props().clone();
        props.id = new_id;
        let copy = Diagram::from_props(props);
        let slot = self.diagram_ids().index_of(&id.to_owned()).map(|index| index + 1);
        self.insert_diagram(copy, slot)
    }

    /// Change the canvas size of the document and of every diagram in it.
    #[must_use]
    pub fn change_size(&self, size: Vec2) -> Self {
        if size == self.size() {
            return self.clone();
        }
        let resized: Vec<(DiagramId, Diagram)> =
            self.diagrams().map(|diagram| (diagram.id().to_owned(), diagram.change_size(size))).collect();
        self.update(|props| {
            props.size = size;
            props.diagrams = props.diagrams.set_many(resized);
        })
    }

    /// Replace one diagram with the result of `f`. Unknown ids are a no-op.
    #[must_use]
    pub fn update_diagram(&self, id: &str, f: impl FnOnce(&Diagram) -> Diagram) -> Self {
        let Some(diagram) = self.diagram(id) else {
            return self.clone();
        };
        let next = f(diagram);
        if next.ptr_eq(diagram) {
            return self.clone();
        }
        self.update(|props| props.diagrams = props.diagrams.set(id, next))
    }

    fn insert_diagram(&self, diagram: Diagram, slot: Option<usize>) -> Self {
        let id = diagram.id().to_owned();
        let diagram_ids = match slot {
            Some(index) => self.diagram_ids().insert_at(index, [id.clone()]),
            None => self.diagram_ids().add([id.clone()]),
        };
        self.update(|props| {
            props.diagrams = props.diagrams.set(id.clone(), diagram);
            props.diagram_ids = diagram_ids;
            props.selected_diagram_id = Some(id);
        })
    }

    fn update(&self, f: impl FnOnce(&mut EditorProps)) -> Self {
        Self { record: self.record.update(f) }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Vec2::new(crate::consts::DEFAULT_CANVAS_WIDTH, crate::consts::DEFAULT_CANVAS_HEIGHT))
    }
}
