//! Command surface of the document model.
//!
//! Hosts describe every edit as an [`Action`]. The reducers in this module
//! turn `(state, action)` into the next state without side effects; the
//! history layer decides what gets recorded.

mod action;
mod merge;
mod reducer;
mod registry;

pub use action::{Action, ActionKind};
pub use merge::merge_actions;
pub use reducer::{apply_action, apply_diagram_action};
pub use registry::{RendererRegistry, ShapeDefaults};
