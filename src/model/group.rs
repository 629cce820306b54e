//! Groups: items that own no geometry of their own.
//!
//! A group lists its children by id and derives its bounds from them on
//! demand. A group with a child that does not resolve, or one that sits on a
//! cycle of the child graph, has zero bounds.

use std::collections::HashSet;

use super::{Diagram, DiagramContainer, DiagramItem, ItemId};
use crate::collections::Record;
use crate::geometry::{Rotation, Transform};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupProps {
    pub id: ItemId,
    pub child_ids: DiagramContainer,
    pub rotation: Rotation,
    pub locked: bool,
}

/// A group of items. Children are referenced by id; the diagram owns them.
///
/// A group stores no geometry besides its rotation. Its bounds are derived
/// from its children on every query (see [`super::BoundsCache`] for reuse).
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    record: Record<GroupProps>,
}

impl Group {
    #[must_use]
    pub fn new(props: GroupProps) -> Self {
        Self { record: Record::new(props) }
    }

    pub fn create(id: impl Into<ItemId>, child_ids: impl IntoIterator<Item = ItemId>, rotation: Rotation) -> Self {
        Self::new(GroupProps { id: id.into(), child_ids: DiagramContainer::of(child_ids), rotation, locked: false })
    }

    #[must_use]
    pub fn props(&self) -> &GroupProps {
        self.record.props()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.props().id
    }

    #[must_use]
    pub fn child_ids(&self) -> &DiagramContainer {
        &self.props().child_ids
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.props().rotation
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.props().locked
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.record.ptr_eq(&other.record)
    }

    /// Whether every child id resolves in `diagram`.
    #[must_use]
    pub fn is_valid(&self, diagram: &Diagram) -> bool {
        self.child_ids().iter().all(|id| diagram.item(id).is_some())
    }

    /// Enclosing transform of all children under the group rotation.
    ///
    /// Invalid or cyclic groups yield [`Transform::ZERO`].
    #[must_use]
    pub fn bounds(&self, diagram: &Diagram) -> Transform {
        let mut visiting = HashSet::new();
        self.bounds_guarded(diagram, &mut visiting).unwrap_or(Transform::ZERO)
    }

    fn bounds_guarded(&self, diagram: &Diagram, visiting: &mut HashSet<ItemId>) -> Option<Transform> {
        if !visiting.insert(self.id().to_owned()) {
            return None;
        }
        let mut transforms = Vec::with_capacity(self.child_ids().len());
        for child_id in self.child_ids() {
            let transform = match diagram.item(child_id)? {
                DiagramItem::Shape(shape) => *shape.transform(),
                DiagramItem::Group(group) => group.bounds_guarded(diagram, visiting)?,
            };
            transforms.push(transform);
        }
        visiting.remove(self.id());
        Some(Transform::from_transforms_and_rotation(&transforms, self.rotation()))
    }

    /// Follow the rotation delta between the bounds. Children are re-mapped by the diagram.
    #[must_use]
    pub fn transform_by_bounds(&self, old_bounds: &Transform, new_bounds: &Transform) -> Self {
        let delta = new_bounds.rotation() - old_bounds.rotation();
        if delta == Rotation::ZERO {
            return self.clone();
        }
        let rotation = self.rotation() + delta;
        self.update(|props| props.rotation = rotation)
    }

    #[must_use]
    pub fn remove_children(&self, ids: &[ItemId]) -> Self {
        let child_ids = self.child_ids().remove(ids);
        if child_ids.ptr_eq(self.child_ids()) {
            return self.clone();
        }
        self.update(|props| props.child_ids = child_ids)
    }

    #[must_use]
    pub fn set_locked(&self, locked: bool) -> Self {
        self.update(|props| props.locked = locked)
    }

    #[must_use]
    pub fn with_id(&self, id: impl Into<ItemId>) -> Self {
        let id = id.into();
        self.update(|props| props.id = id)
    }

    fn update(&self, f: impl FnOnce(&mut GroupProps)) -> Self {
        Self { record: self.record.update(f) }
    }
}
