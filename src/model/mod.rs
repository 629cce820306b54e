//! Document model: shapes, groups, diagrams and the editor state.
//!
//! Items are a closed sum type ([`DiagramItem`]). A [`Diagram`] exclusively
//! owns its items; groups only reference their children by id. Nothing here
//! mutates in place: every edit returns a new value and an edit that changes
//! nothing returns the receiver itself.

mod appearance;
mod bounds_cache;
mod configurable;
mod constraint;
mod container;
mod diagram;
mod editor_state;
mod group;
mod item;
mod item_set;
mod shape;

use std::sync::atomic::{AtomicU64, Ordering};

pub use appearance::Appearance;
pub use bounds_cache::BoundsCache;
pub use configurable::Configurable;
pub use constraint::Constraint;
pub use container::{DiagramContainer, OrderMode};
pub use diagram::{Diagram, DiagramProps};
pub use editor_state::{EditorProps, EditorState};
pub use group::{Group, GroupProps};
pub use item::DiagramItem;
pub use item_set::DiagramItemSet;
pub use shape::{Shape, ShapeProps};

/// Identifier of an item, unique within its diagram.
pub type ItemId = String;

/// Identifier of a diagram, unique within its document.
pub type DiagramId = String;

/// Generate a fresh random id.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Process-unique number identifying one diagram instance.
pub(crate) fn next_instance_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
