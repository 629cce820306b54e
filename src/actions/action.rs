//! Wire-tagged edit requests and their payload-free kinds.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::{Transform, Vec2};
use crate::model::{Appearance, DiagramId, ItemId, OrderMode};

/// One edit request.
///
/// Serialized as a flat object tagged by `type`, e.g.
/// `{"type":"removeItems","diagramId":"page","itemIds":["a"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Add a shape drawn by `renderer`, centered at `position`.
    AddVisual {
        diagram_id: DiagramId,
        id: ItemId,
        renderer: String,
        position: Vec2,
        #[serde(default)]
        appearance: Appearance,
    },
    /// Add an icon glyph from `font_family`, centered at `position`.
    AddIcon {
        diagram_id: DiagramId,
        id: ItemId,
        text: String,
        font_family: String,
        position: Vec2,
    },
    /// Add a raster image of `size` showing `source`, centered at `position`.
    AddImage {
        diagram_id: DiagramId,
        id: ItemId,
        source: String,
        position: Vec2,
        size: Vec2,
    },
    /// Remove items and everything nested in them.
    RemoveItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },
    /// Group root items under a new group with id `group_id`.
    GroupItems {
        diagram_id: DiagramId,
        group_id: ItemId,
        item_ids: Vec<ItemId>,
    },
    /// Dissolve root groups into their children.
    UngroupItems {
        diagram_id: DiagramId,
        group_ids: Vec<ItemId>,
    },
    /// Reorder root items in paint order.
    OrderItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
        #[serde(flatten)]
        mode: OrderMode,
    },
    /// Map items from `old_bounds` to `new_bounds`. Locked items stay put.
    TransformItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
        old_bounds: Transform,
        new_bounds: Transform,
    },
    /// Set one appearance key on unlocked visuals.
    ChangeItemsAppearance {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
        key: String,
        value: Value,
    },
    /// Lock items against transforms and appearance edits.
    LockItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },
    /// Release locked items.
    UnlockItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },
    /// Paste a clipboard payload produced by the item-set serializer.
    PasteItems {
        diagram_id: DiagramId,
        json: Value,
        #[serde(default)]
        offset: f64,
    },
    /// Resize the canvas of every diagram.
    ChangeSize {
        size: Vec2,
    },
    /// Make a diagram the selected one.
    SelectDiagram {
        diagram_id: DiagramId,
    },
    /// Replace the item selection of a diagram.
    SelectItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },
    /// Append an empty diagram and select it.
    AddDiagram {
        diagram_id: DiagramId,
    },
    /// Remove a diagram. The first remaining one becomes selected if needed.
    RemoveDiagram {
        diagram_id: DiagramId,
    },
    /// Set the title of a diagram.
    RenameDiagram {
        diagram_id: DiagramId,
        title: String,
    },
    /// Copy a diagram under `new_diagram_id` right after the original.
    DuplicateDiagram {
        diagram_id: DiagramId,
        new_diagram_id: DiagramId,
    },
}

/// Payload-free discriminant of [`Action`], used by history policies and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// [`Action::AddVisual`].
    AddVisual,
    /// [`Action::AddIcon`].
    AddIcon,
    /// [`Action::AddImage`].
    AddImage,
    /// [`Action::RemoveItems`].
    RemoveItems,
    /// [`Action::GroupItems`].
    GroupItems,
    /// [`Action::UngroupItems`].
    UngroupItems,
    /// [`Action::OrderItems`].
    OrderItems,
    /// [`Action::TransformItems`].
    TransformItems,
    /// [`Action::ChangeItemsAppearance`].
    ChangeItemsAppearance,
    /// [`Action::LockItems`].
    LockItems,
    /// [`Action::UnlockItems`].
    UnlockItems,
    /// [`Action::PasteItems`].
    PasteItems,
    /// [`Action::ChangeSize`].
    ChangeSize,
    /// [`Action::SelectDiagram`].
    SelectDiagram,
    /// [`Action::SelectItems`].
    SelectItems,
    /// [`Action::AddDiagram`].
    AddDiagram,
    /// [`Action::RemoveDiagram`].
    RemoveDiagram,
    /// [`Action::RenameDiagram`].
    RenameDiagram,
    /// [`Action::DuplicateDiagram`].
    DuplicateDiagram,
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::AddVisual { .. } => ActionKind::AddVisual,
            Self::AddIcon { .. } => ActionKind::AddIcon,
            Self::AddImage { .. } => ActionKind::AddImage,
            Self::RemoveItems { .. } => ActionKind::RemoveItems,
            Self::GroupItems { .. } => ActionKind::GroupItems,
            Self::UngroupItems { .. } => ActionKind::UngroupItems,
            Self::OrderItems { .. } => ActionKind::OrderItems,
            Self::TransformItems { .. } => ActionKind::TransformItems,
            Self::ChangeItemsAppearance { .. } => ActionKind::ChangeItemsAppearance,
            Self::LockItems { .. } => ActionKind::LockItems,
            Self::UnlockItems { .. } => ActionKind::UnlockItems,
            Self::PasteItems { .. } => ActionKind::PasteItems,
            Self::ChangeSize { .. } => ActionKind::ChangeSize,
            Self::SelectDiagram { .. } => ActionKind::SelectDiagram,
            Self::SelectItems { .. } => ActionKind::SelectItems,
            Self::AddDiagram { .. } => ActionKind::AddDiagram,
            Self::RemoveDiagram { .. } => ActionKind::RemoveDiagram,
            Self::RenameDiagram { .. } => ActionKind::RenameDiagram,
            Self::DuplicateDiagram { .. } => ActionKind::DuplicateDiagram,
        }
    }

    /// Diagram the action targets. `None` for document-wide actions.
    #[must_use]
    pub fn diagram_id(&self) -> Option<&str> {
        match self {
            Self::AddVisual { diagram_id, .. }
            | Self::AddIcon { diagram_id, .. }
            | Self::AddImage { diagram_id, .. }
            | Self::RemoveItems { diagram_id, .. }
            | Self::GroupItems { diagram_id, .. }
            | Self::UngroupItems { diagram_id, .. }
            | Self::OrderItems { diagram_id, .. }
            | Self::TransformItems { diagram_id, .. }
            | Self::ChangeItemsAppearance { diagram_id, .. }
            | Self::LockItems { diagram_id, .. }
            | Self::UnlockItems { diagram_id, .. }
            | Self::PasteItems { diagram_id, .. }
            | Self::SelectDiagram { diagram_id }
            | Self::SelectItems { diagram_id, .. }
            | Self::AddDiagram { diagram_id }
            | Self::RemoveDiagram { diagram_id }
            | Self::RenameDiagram { diagram_id, .. }
            | Self::DuplicateDiagram { diagram_id, .. } => Some(diagram_id),
            Self::ChangeSize { .. } => None,
        }
    }
}
