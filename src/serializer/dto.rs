//! Wire shapes of the current schema.

use serde::{Deserialize, Serialize};

use crate::collections::ImmutableList;
use crate::geometry::{Rotation, Transform, Vec2};
use crate::model::{
    Appearance, Configurable, Constraint, DiagramContainer, DiagramId, DiagramItem, Group, GroupProps, ItemId, Shape,
    ShapeProps,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub version: u64,
    pub size: Vec2,
    pub diagrams: Vec<DiagramDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_diagram_id: Option<DiagramId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDto {
    pub id: DiagramId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<ItemDto>,
    pub order: Vec<ItemId>,
}

/// Clipboard payload: a loose list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSetDto {
    pub items: Vec<ItemDto>,
}

/// Shape or group, told apart by `childIds` versus `renderer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemDto {
    /// Tried first: only groups carry `childIds`.
    Group(GroupDto),
    /// Anything with a `renderer`.
    Shape(ShapeDto),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: ItemId,
    pub child_ids: Vec<ItemId>,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDto {
    pub id: ItemId,
    pub renderer: String,
    #[serde(default)]
    pub appearance: Appearance,
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configurables: Vec<Configurable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl ItemDto {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Group(group) => &group.id,
            Self::Shape(shape) => &shape.id,
        }
    }
}

impl From<&DiagramItem> for ItemDto {
    fn from(item: &DiagramItem) -> Self {
        match item {
            DiagramItem::Shape(shape) => Self::Shape(ShapeDto {
                id: shape.id().to_owned(),
                renderer: shape.renderer().to_owned(),
                appearance: shape.appearance().clone(),
                transform: *shape.transform(),
                configurables: shape.configurables().to_vec(),
                constraints: shape.constraints().to_vec(),
                locked: shape.is_locked(),
            }),
            DiagramItem::Group(group) => Self::Group(GroupDto {
                id: group.id().to_owned(),
                child_ids: group.child_ids().iter().cloned().collect(),
                rotation: group.rotation(),
                locked: group.is_locked(),
            }),
        }
    }
}

impl From<ItemDto> for DiagramItem {
    fn from(dto: ItemDto) -> Self {
        match dto {
            ItemDto::Shape(shape) => Self::Shape(Shape::new(ShapeProps {
                id: shape.id,
                renderer: shape.renderer,
                appearance: shape.appearance,
                transform: shape.transform,
                configurables: ImmutableList::from_vec(shape.configurables),
                constraints: ImmutableList::from_vec(shape.constraints),
                locked: shape.locked,
            })),
            ItemDto::Group(group) => Self::Group(Group::new(GroupProps {
                id: group.id,
                child_ids: DiagramContainer::of(group.child_ids),
                rotation: group.rotation,
                locked: group.locked,
            })),
        }
    }
}
