//! Stateful editor front: history, group bounds memo and persistence.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde_json::Value;

use crate::actions::{Action, RendererRegistry, apply_action};
use crate::config::EditorConfig;
use crate::history::{HistoryCommand, HistoryPolicy, UndoableState, undoable};
use crate::geometry::Transform;
use crate::model::{BoundsCache, Diagram, DiagramItemSet, EditorState};
use crate::serializer::{self, SerializerError};

/// Stateful front of the document model.
///
/// Owns the history of [`EditorState`]s and routes every command through the
/// pure reducer. Hosts keep one `Editor` per open document and re-render from
/// [`Editor::state`] whenever a call reports a change.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    registry: RendererRegistry,
    policy: HistoryPolicy<Action>,
    history: UndoableState<EditorState, Action>,
    bounds: BoundsCache,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default(), RendererRegistry::with_builtins())
    }
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig, registry: RendererRegistry) -> Self {
        let policy = config.history_policy();
        let history = UndoableState::create(EditorState::new(config.canvas_size), config.history_capacity);
        Self { config, registry, policy, history, bounds: BoundsCache::default() }
    }

    // --- Commands ---

    /// Apply an action. Returns whether the document changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.run(HistoryCommand::Apply(action))
    }

    pub fn undo(&mut self) -> bool {
        self.run(HistoryCommand::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.run(HistoryCommand::Redo)
    }

    fn run(&mut self, command: HistoryCommand<Action>) -> bool {
        let registry = &self.registry;
        let next =
            undoable(&self.history, command, |state, action| apply_action(state, action, registry), &self.policy);
        let changed = !next.ptr_eq(&self.history);
        self.history = next;
        changed
    }

    // --- Persistence ---

    /// Replace the document with a loaded one. The history starts over.
    ///
    /// # Errors
    ///
    /// Returns the serializer error and keeps the current document when `json` cannot be loaded.
    pub fn load(&mut self, json: &Value) -> Result<(), SerializerError> {
        let state = serializer::load_document(json)?;
        tracing::debug!(diagrams = state.diagram_ids().len(), "document loaded");
        self.history = UndoableState::create(state, self.config.history_capacity);
        self.bounds.clear();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SerializerError::Json`] if an appearance value cannot be encoded.
    pub fn save(&self) -> Result<Value, SerializerError> {
        serializer::serialize_document(self.state())
    }

    /// Clipboard payload for the selection of the selected diagram, if anything is selected.
    ///
    /// # Errors
    ///
    /// Returns [`SerializerError::Json`] if an appearance value cannot be encoded.
    pub fn copy_selection(&self) -> Result<Option<Value>, SerializerError> {
        let Some(diagram) = self.selected_diagram() else {
            return Ok(None);
        };
        let ids: Vec<String> = diagram.selected_ids().iter().cloned().collect();
        let set = DiagramItemSet::from_diagram(diagram, &ids);
        if set.is_empty() {
            return Ok(None);
        }
        serializer::serialize_set(&set).map(Some)
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &EditorState {
        self.history.present()
    }

    #[must_use]
    pub fn selected_diagram(&self) -> Option<&Diagram> {
        self.state().selected_diagram()
    }

    /// Bounds of an item in the selected diagram. Group bounds are memoized
    /// per diagram instance.
    pub fn bounds(&mut self, id: &str) -> Option<Transform> {
        let diagram = self.history.present().selected_diagram()?;
        self.bounds.bounds_of(diagram, id)
    }

    /// Enclosing bounds of the selection in the selected diagram.
    pub fn selection_bounds(&mut self) -> Option<Transform> {
        let diagram = self.history.present().selected_diagram()?;
        let ids = diagram.selected_ids().to_vec();
        self.bounds.bounds_of_items(diagram, &ids)
    }

    #[must_use]
    pub fn history(&self) -> &UndoableState<EditorState, Action> {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }
}
