//! Ordered id containers for diagram roots and group children.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::ItemId;
use crate::collections::ImmutableList;

/// How a set of items is repositioned within a [`DiagramContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum OrderMode {
    /// Move to the end of the paint order, on top of everything.
    BringToFront,
    /// Move one step towards the front.
    BringForwards,
    /// Move one step towards the back.
    SendBackwards,
    /// Move to the start of the paint order.
    SendToBack,
    /// Move next to the item currently at `index`.
    MoveTo { index: usize },
}

/// Ordered sequence of unique item ids.
///
/// Used both for the root paint order of a diagram and for the children of a
/// group. Ids absent from the container are ignored by every operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramContainer {
    ids: ImmutableList<ItemId>,
}

impl DiagramContainer {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from ids, keeping the first occurrence of duplicates.
    pub fn of(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let unique: IndexSet<ItemId> = ids.into_iter().collect();
        Self { ids: ImmutableList::of(unique) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|candidate| candidate == id)
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemId> {
        self.ids.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ItemId] {
        self.ids.as_slice()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.ids.ptr_eq(&other.ids)
    }

    /// Append ids that are not present yet.
    #[must_use]
    pub fn add(&self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.insert_at(self.len(), ids)
    }

    /// Insert ids that are not present yet at `index` (clamped to the end).
    #[must_use]
    pub fn insert_at(&self, index: usize, ids: impl IntoIterator<Item = ItemId>) -> Self {
        let fresh: IndexSet<ItemId> = ids.into_iter().filter(|id| !self.contains(id)).collect();
        self.wrap(self.ids.insert_at(index.min(self.len()), fresh))
    }

    #[must_use]
    pub fn remove(&self, ids: &[ItemId]) -> Self {
        self.wrap(self.ids.remove(ids))
    }

    #[must_use]
    pub fn reorder(&self, mode: OrderMode, ids: &[ItemId]) -> Self {
        let ids = match mode {
            OrderMode::BringToFront => self.ids.bring_to_front(ids),
            OrderMode::BringForwards => self.ids.bring_forwards(ids),
            OrderMode::SendBackwards => self.ids.send_backwards(ids),
            OrderMode::SendToBack => self.ids.send_to_back(ids),
            OrderMode::MoveTo { index } => self.ids.move_to(ids, index),
        };
        self.wrap(ids)
    }

    fn wrap(&self, ids: ImmutableList<ItemId>) -> Self {
        if ids.ptr_eq(&self.ids) { self.clone() } else { Self { ids } }
    }
}

impl<'a> IntoIterator for &'a DiagramContainer {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
