//! The closed item sum type shared by diagrams, item sets and the serializer.

use super::{Diagram, Group, Shape};
use crate::geometry::{Rotation, Transform};

/// Closed set of item variants stored in a diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramItem {
    /// Visual drawn by a renderer.
    Shape(Shape),
    /// Container of other items by id.
    Group(Group),
}

impl DiagramItem {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Shape(shape) => shape.id(),
            Self::Group(group) => group.id(),
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        match self {
            Self::Shape(shape) => shape.is_locked(),
            Self::Group(group) => group.is_locked(),
        }
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        match self {
            Self::Shape(shape) => shape.transform().rotation(),
            Self::Group(group) => group.rotation(),
        }
    }

    #[must_use]
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Group(_) => None,
        }
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(group) => Some(group),
            Self::Shape(_) => None,
        }
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Shape(a), Self::Shape(b)) => a.ptr_eq(b),
            (Self::Group(a), Self::Group(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Oriented bounds of the item inside `diagram`.
    #[must_use]
    pub fn bounds(&self, diagram: &Diagram) -> Transform {
        match self {
            Self::Shape(shape) => *shape.transform(),
            Self::Group(group) => group.bounds(diagram),
        }
    }

    #[must_use]
    pub fn transform_by_bounds(&self, old_bounds: &Transform, new_bounds: &Transform) -> Self {
        match self {
            Self::Shape(shape) => Self::Shape(shape.transform_by_bounds(old_bounds, new_bounds)),
            Self::Group(group) => Self::Group(group.transform_by_bounds(old_bounds, new_bounds)),
        }
    }

    #[must_use]
    pub fn set_locked(&self, locked: bool) -> Self {
        match self {
            Self::Shape(shape) => Self::Shape(shape.set_locked(locked)),
            Self::Group(group) => Self::Group(group.set_locked(locked)),
        }
    }

    #[must_use]
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        match self {
            Self::Shape(shape) => Self::Shape(shape.with_id(id)),
            Self::Group(group) => Self::Group(group.with_id(id)),
        }
    }
}

impl From<Shape> for DiagramItem {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<Group> for DiagramItem {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}
