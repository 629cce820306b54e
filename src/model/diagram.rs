//! The diagram aggregate.
//!
//! DESIGN
//! ======
//! A diagram exclusively owns its items. Root order (`root_ids`) is the paint
//! order of items not nested in a group; groups reference their children by
//! id only. Every structural edit returns a new diagram with a fresh
//! `instance_id`; an edit that changes nothing returns a clone that shares
//! the same props and keeps the instance id, so both `ptr_eq` and bounds
//! caches keyed by instance stay valid.

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

use serde_json::Value;

use super::{
    DiagramContainer, DiagramId, DiagramItem, DiagramItemSet, Group, ItemId, OrderMode, Shape, next_instance_id,
};
use crate::collections::{ImmutableMap, ImmutableSet, Record};
use crate::consts;
use crate::geometry::{Rotation, Transform, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramProps {
    pub id: DiagramId,
    pub title: Option<String>,
    pub items: ImmutableMap<DiagramItem>,
    pub root_ids: DiagramContainer,
    pub selected_ids: ImmutableSet<ItemId>,
    pub size: Vec2,
}

#[derive(Debug, Clone)]
pub struct Diagram {
    record: Record<DiagramProps>,
    instance_id: u64,
}

impl Diagram {
    #[must_use]
    pub fn new(id: impl Into<DiagramId>, size: Vec2) -> Self {
        Self::from_props(DiagramProps {
            id: id.into(),
            title: None,
            items: ImmutableMap::empty(),
            root_ids: DiagramContainer::empty(),
            selected_ids: ImmutableSet::empty(),
            size,
        })
    }

    /// Empty diagram on the default canvas.
    #[must_use]
    pub fn create(id: impl Into<DiagramId>) -> Self {
        Self::new(id, Vec2::new(consts::DEFAULT_CANVAS_WIDTH, consts::DEFAULT_CANVAS_HEIGHT))
    }

    #[must_use]
    pub fn from_props(props: DiagramProps) -> Self {
        Self { record: Record::new(props), instance_id: next_instance_id() }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    #[must_use]
    pub fn props(&self) -> &DiagramProps {
        self.record.props()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.props().id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.props().title.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &ImmutableMap<DiagramItem> {
        &self.props().items
    }

    #[must_use]
    pub fn root_ids(&self) -> &DiagramContainer {
        &self.props().root_ids
    }

    #[must_use]
    pub fn selected_ids(&self) -> &ImmutableSet<ItemId> {
        &self.props().selected_ids
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.props().size
    }

    /// Process-unique id of this instance. Not part of equality.
    #[must_use]
    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.record.ptr_eq(&other.record)
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&DiagramItem> {
        self.items().get(id)
    }

    #[must_use]
    pub fn get_shape(&self, id: &str) -> Option<&Shape> {
        self.item(id).and_then(DiagramItem::as_shape)
    }

    #[must_use]
    pub fn get_group(&self, id: &str) -> Option<&Group> {
        self.item(id).and_then(DiagramItem::as_group)
    }

    /// Root items in paint order.
    pub fn root_items(&self) -> impl Iterator<Item = &DiagramItem> {
        self.root_ids().iter().filter_map(|id| self.item(id))
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &DiagramItem> {
        self.selected_ids().iter().filter_map(|id| self.item(id))
    }

    /// Group directly containing `id`, if any.
    #[must_use]
    pub fn parent_of(&self, id: &str) -> Option<&Group> {
        self.items().values().filter_map(DiagramItem::as_group).find(|group| group.child_ids().contains(id))
    }

    #[must_use]
    pub fn bounds(&self, id: &str) -> Option<Transform> {
        self.item(id).map(|item| item.bounds(self))
    }

    // =========================================================================
    // STRUCTURE
    // =========================================================================

    #[must_use]
    pub fn rename(&self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.update(|props| props.title = Some(title))
    }

    /// Add a visual at the front of the root order. A taken id is a no-op.
    #[must_use]
    pub fn add_visual(&self, shape: Shape) -> Self {
        if self.items().contains_key(shape.id()) {
            return self.clone();
        }
        let id = shape.id().to_owned();
        self.update(|props| {
            props.items = props.items.set(id.clone(), DiagramItem::Shape(shape));
            props.root_ids = props.root_ids.add([id]);
        })
    }

    /// Insert a whole item set (paste) and select its root items.
    ///
    /// Sets that are invalid or collide with existing ids are ignored.
    #[must_use]
    pub fn add_items(&self, set: &DiagramItemSet) -> Self {
        if set.is_empty() || !set.can_add(self) {
            return self.clone();
        }
        let entries: Vec<(ItemId, DiagramItem)> =
            set.all_items().iter().map(|item| (item.id().to_owned(), item.clone())).collect();
        let roots = set.root_ids().to_vec();
        self.update(|props| {
            props.items = props.items.set_many(entries);
            props.root_ids = props.root_ids.add(roots.iter().cloned());
            props.selected_ids = ImmutableSet::of(roots);
        })
    }

    /// Remove items together with everything nested inside them.
    ///
    /// Groups that lose children stay in the diagram, even when left empty.
    #[must_use]
    pub fn remove_items(&self, ids: &[ItemId]) -> Self {
        let set = DiagramItemSet::from_diagram(self, ids);
        if set.is_empty() {
            return self.clone();
        }
        let removed: Vec<ItemId> = set.all_items().iter().map(|item| item.id().to_owned()).collect();
        let parents: Vec<(ItemId, DiagramItem)> = self
            .items()
            .values()
            .filter_map(DiagramItem::as_group)
            .filter(|group| !removed.iter().any(|id| id == group.id()))
            .map(|group| (group.id().to_owned(), DiagramItem::Group(group.remove_children(&removed))))
            .collect();
        self.update(|props| {
            props.items = props.items.remove(&removed).set_many(parents);
            props.root_ids = props.root_ids.remove(&removed);
            props.selected_ids = props.selected_ids.remove(&removed);
        })
    }

    /// Group root items under a new group and select it.
    ///
    /// Children keep their root order. The group takes the slot of the
    /// frontmost grouped item. Ids that are not root items are ignored.
    #[must_use]
    pub fn group(&self, group_id: impl Into<ItemId>, ids: &[ItemId]) -> Self {
        let group_id = group_id.into();
        if self.items().contains_key(&group_id) {
            return self.clone();
        }
        let targets: Vec<ItemId> = self.root_ids().iter().filter(|id| ids.contains(*id)).cloned().collect();
        let Some(frontmost) = self.root_ids().iter().rposition(|id| targets.contains(id)) else {
            return self.clone();
        };
        let slot = frontmost + 1 - targets.len();
        let group = Group::create(group_id.clone(), targets.iter().cloned(), Rotation::ZERO);
        self.update(|props| {
            props.items = props.items.set(group_id.clone(), DiagramItem::Group(group));
            props.root_ids = props.root_ids.remove(&targets).insert_at(slot, [group_id.clone()]);
            props.selected_ids = ImmutableSet::of([group_id]);
        })
    }

    /// Dissolve root groups, putting their children where the group was.
    ///
    /// Selects every released child. Ids that are not root groups are ignored,
    /// and so are child ids that name no item.
    #[must_use]
    pub fn ungroup(&self, group_ids: &[ItemId]) -> Self {
        let mut items = self.items().clone();
        let mut root_ids = self.root_ids().clone();
        let mut released: Vec<ItemId> = Vec::new();
        let mut dissolved = false;

        for id in group_ids {
            let Some(group) = self.get_group(id) else {
                continue;
            };
            let Some(slot) = root_ids.index_of(id) else {
                continue;
            };
            let children: Vec<ItemId> =
                group.child_ids().iter().filter(|child| self.item(child).is_some()).cloned().collect();
            root_ids = root_ids.remove(std::slice::from_ref(id)).insert_at(slot, children.iter().cloned());
            items = items.remove(std::slice::from_ref(id));
            released.extend(children);
            dissolved = true;
        }

        if !dissolved {
            return self.clone();
        }
        self.update(|props| {
            props.items = items;
            props.root_ids = root_ids;
            props.selected_ids = ImmutableSet::of(released);
        })
    }

    /// Reorder root items. Ids outside the root order are ignored.
    #[must_use]
    pub fn order_items(&self, mode: OrderMode, ids: &[ItemId]) -> Self {
        let root_ids = self.root_ids().reorder(mode, ids);
        if root_ids.ptr_eq(self.root_ids()) {
            return self.clone();
        }
        self.update(|props| props.root_ids = root_ids)
    }

    #[must_use]
    pub fn change_size(&self, size: Vec2) -> Self {
        if size == self.size() {
            return self.clone();
        }
        self.update(|props| props.size = size)
    }

    /// Replace the selection. Unknown ids are dropped.
    #[must_use]
    pub fn select_items(&self, ids: &[ItemId]) -> Self {
        let selected: ImmutableSet<ItemId> = ids.iter().filter(|id| self.items().contains_key(id)).cloned().collect();
        if selected == *self.selected_ids() {
            return self.clone();
        }
        self.update(|props| props.selected_ids = selected)
    }

    // =========================================================================
    // ITEM EDITS
    // =========================================================================

    /// Replace the listed items with the result of `f`. Unknown ids are skipped.
    #[must_use]
    pub fn update_items(&self, ids: &[ItemId], f: impl Fn(&DiagramItem) -> DiagramItem) -> Self {
        let changed: Vec<(ItemId, DiagramItem)> = ids
            .iter()
            .filter_map(|id| {
                let item = self.item(id)?;
                let next = f(item);
                (!next.ptr_eq(item)).then(|| (id.clone(), next))
            })
            .collect();
        if changed.is_empty() {
            return self.clone();
        }
        self.update(|props| props.items = props.items.set_many(changed))
    }

    /// Re-map the items and everything nested in them from `old_bounds` to `new_bounds`.
    ///
    /// Locked items are left in place.
    #[must_use]
    pub fn transform_items(&self, ids: &[ItemId], old_bounds: &Transform, new_bounds: &Transform) -> Self {
        if old_bounds == new_bounds {
            return self.clone();
        }
        let targets = self.unlocked_closure(ids);
        self.update_items(&targets, |item| item.transform_by_bounds(old_bounds, new_bounds))
    }

    /// Set one appearance key on every unlocked visual in the closure of `ids`.
    #[must_use]
    pub fn change_appearance(&self, ids: &[ItemId], key: &str, value: &Value) -> Self {
        let targets = self.unlocked_closure(ids);
        self.update_items(&targets, |item| match item {
            DiagramItem::Shape(shape) => DiagramItem::Shape(shape.set_appearance(key, value.clone())),
            DiagramItem::Group(_) => item.clone(),
        })
    }

    #[must_use]
    pub fn lock_items(&self, ids: &[ItemId]) -> Self {
        self.update_items(ids, |item| item.set_locked(true))
    }

    #[must_use]
    pub fn unlock_items(&self, ids: &[ItemId]) -> Self {
        self.update_items(ids, |item| item.set_locked(false))
    }

    fn unlocked_closure(&self, ids: &[ItemId]) -> Vec<ItemId> {
        let seeds: Vec<ItemId> =
            ids.iter().filter(|id| self.item(id).is_some_and(|item| !item.is_locked())).cloned().collect();
        DiagramItemSet::from_diagram(self, &seeds)
            .all_items()
            .iter()
            .filter(|item| !item.is_locked())
            .map(|item| item.id().to_owned())
            .collect()
    }

    fn update(&self, f: impl FnOnce(&mut DiagramProps)) -> Self {
        let record = self.record.update(f);
        if record.ptr_eq(&self.record) {
            return self.clone();
        }
        Self { record, instance_id: next_instance_id() }
    }
}

impl PartialEq for Diagram {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record
    }
}
