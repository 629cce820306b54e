//! Closed sets of items lifted out of a diagram.
//!
//! An item set contains the requested items plus everything nested inside
//! them. It is what copy produces and what paste inserts.

#[cfg(test)]
#[path = "item_set_test.rs"]
mod item_set_test;

use std::collections::HashSet;

use super::{Diagram, DiagramItem, Group, ItemId, Shape};
use crate::geometry::Vec2;

/// Transitive closure of a set of items: the seeds plus everything nested in them.
///
/// Built either from seed ids inside a diagram (copy, delete) or from a loose
/// list of items (paste). Unknown seeds are dropped; cycles in malformed
/// group graphs are cut at the first revisit.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramItemSet {
    all_items: Vec<DiagramItem>,
    root_ids: Vec<ItemId>,
    is_valid: bool,
}

impl DiagramItemSet {
    #[must_use]
    pub fn empty() -> Self {
        Self { all_items: Vec::new(), root_ids: Vec::new(), is_valid: true }
    }

    /// Closure of `ids` inside `diagram`.
    #[must_use]
    pub fn from_diagram(diagram: &Diagram, ids: &[ItemId]) -> Self {
        let mut walk = Walk::new(diagram);
        let mut seeds: Vec<&str> = Vec::new();
        for id in ids {
            let Some(item) = diagram.item(id) else {
                continue;
            };
            if !seeds.contains(&item.id()) {
                seeds.push(item.id());
            }
            walk.visit(item);
        }
        let root_ids = seeds.into_iter().filter(|id| !walk.descendants.contains(*id)).map(str::to_owned).collect();
        Self { all_items: walk.items, root_ids, is_valid: walk.valid }
    }

    /// Set over loose items, e.g. deserialized from the clipboard.
    ///
    /// Valid when every group child is part of the set. Roots are the items no
    /// group in the set claims, in input order.
    pub fn from_items(items: impl IntoIterator<Item = DiagramItem>) -> Self {
        let mut ids: HashSet<ItemId> = HashSet::new();
        let mut all_items: Vec<DiagramItem> = Vec::new();
        for item in items {
            if ids.insert(item.id().to_owned()) {
                all_items.push(item);
            }
        }
        let children: HashSet<&str> = all_items
            .iter()
            .filter_map(DiagramItem::as_group)
            .flat_map(|group| group.child_ids().iter().map(String::as_str))
            .collect();
        let is_valid = children.iter().all(|child| ids.contains(*child));
        let root_ids = all_items
            .iter()
            .map(DiagramItem::id)
            .filter(|id| !children.contains(id))
            .map(str::to_owned)
            .collect();
        Self { all_items, root_ids, is_valid }
    }

    #[must_use]
    pub fn all_items(&self) -> &[DiagramItem] {
        &self.all_items
    }

    pub fn all_visuals(&self) -> impl Iterator<Item = &Shape> {
        self.all_items.iter().filter_map(DiagramItem::as_shape)
    }

    pub fn all_groups(&self) -> impl Iterator<Item = &Group> {
        self.all_items.iter().filter_map(DiagramItem::as_group)
    }

    /// Seeds that are not nested inside another member of the set.
    #[must_use]
    pub fn root_ids(&self) -> &[ItemId] {
        &self.root_ids
    }

    pub fn root_items(&self) -> impl Iterator<Item = &DiagramItem> {
        self.root_ids.iter().filter_map(|id| self.item(id))
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&DiagramItem> {
        self.all_items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all_items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_items.is_empty()
    }

    /// Whether every referenced child resolves.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Valid and disjoint from `diagram`.
    #[must_use]
    pub fn can_add(&self, diagram: &Diagram) -> bool {
        self.is_valid && self.all_items.iter().all(|item| diagram.item(item.id()).is_none())
    }

    /// Valid and entirely contained in `diagram`.
    #[must_use]
    pub fn can_remove(&self, diagram: &Diagram) -> bool {
        self.is_valid && self.all_items.iter().all(|item| diagram.item(item.id()).is_some())
    }

    /// Copy of the set with every visual moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        let all_items = self
            .all_items
            .iter()
            .map(|item| match item {
                DiagramItem::Shape(shape) => DiagramItem::Shape(shape.move_by(delta)),
                DiagramItem::Group(_) => item.clone(),
            })
            .collect();
        Self { all_items, root_ids: self.root_ids.clone(), is_valid: self.is_valid }
    }
}

impl Default for DiagramItemSet {
    fn default() -> Self {
        Self::empty()
    }
}

struct Walk<'a> {
    diagram: &'a Diagram,
    visited: HashSet<&'a str>,
    descendants: HashSet<&'a str>,
    items: Vec<DiagramItem>,
    valid: bool,
}

impl<'a> Walk<'a> {
    fn new(diagram: &'a Diagram) -> Self {
        Self { diagram, visited: HashSet::new(), descendants: HashSet::new(), items: Vec::new(), valid: true }
    }

    fn visit(&mut self, item: &'a DiagramItem) {
        if !self.visited.insert(item.id()) {
            return;
        }
        self.items.push(item.clone());
        let DiagramItem::Group(group) = item else {
            return;
        };
        for child_id in group.child_ids() {
            self.descendants.insert(child_id);
            match self.diagram.item(child_id) {
                Some(child) => self.visit(child),
                None => self.valid = false,
            }
        }
    }
}
