//! Document model for the wireframe editor.
//!
//! This crate owns everything about a wireframe document that is not pixels:
//! the persistent collections the model is built from, the geometry kernel,
//! shapes and groups, the diagram aggregate with its structural edits, the
//! undo/redo history, and the versioned JSON format. Hosts (UI, canvas
//! renderer, persistence, collaboration) feed [`actions::Action`]s in and read
//! projections back out; none of them hold document logic of their own.
//!
//! Every value here is immutable. An edit returns a new value, and an edit
//! that changes nothing returns the receiver itself so callers can detect
//! "no change" with a pointer comparison (`ptr_eq`).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`collections`] | Persistent list, set, keyed map and record |
//! | [`geometry`] | `Vec2`, `Rotation`, `Rect2` and the oriented `Transform` |
//! | [`model`] | Shapes, groups, diagrams, item-set closure and the editor state |
//! | [`history`] | Bounded undo/redo history with ignore and merge policies |
//! | [`actions`] | The command surface and the pure reducers behind it |
//! | [`serializer`] | Versioned JSON documents, migrations and clipboard sets |
//! | [`editor`] | Stateful facade that wires config, reducer and history together |
//! | [`config`] | Editor configuration |
//! | [`consts`] | Shared constants (defaults, appearance keys, schema version) |

pub mod actions;
pub mod collections;
pub mod config;
pub mod consts;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod model;
pub mod serializer;

pub use actions::{Action, ActionKind, RendererRegistry, ShapeDefaults, apply_action, apply_diagram_action};
pub use config::{ConfigError, EditorConfig};
pub use editor::Editor;
pub use history::{HistoryCommand, HistoryPolicy, Snapshot, UndoableState, undoable};
pub use model::{Diagram, DiagramItem, DiagramItemSet, EditorState, Group, Shape};
pub use serializer::SerializerError;
