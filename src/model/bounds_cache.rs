//! Per-instance memo of group bounds.

use std::collections::{HashMap, VecDeque};

use super::{Diagram, DiagramItem, ItemId};
use crate::geometry::{Rotation, Transform};

const DEFAULT_CACHED_INSTANCES: usize = 4;

/// Memoized group bounds keyed by diagram instance and item id.
///
/// Diagrams never change after construction, so an entry stays correct for as
/// long as its instance exists. Only the most recently queried instances are
/// retained; older ones are dropped wholesale.
#[derive(Debug)]
pub struct BoundsCache {
    entries: HashMap<(u64, ItemId), Transform>,
    instances: VecDeque<u64>,
    max_instances: usize,
}

impl BoundsCache {
    #[must_use]
    pub fn new(max_instances: usize) -> Self {
        Self { entries: HashMap::new(), instances: VecDeque::new(), max_instances: max_instances.max(1) }
    }

    /// Bounds of `item` in `diagram`. Shapes bypass the cache.
    pub fn bounds(&mut self, diagram: &Diagram, item: &DiagramItem) -> Transform {
        let DiagramItem::Group(group) = item else {
            return item.bounds(diagram);
        };
        self.touch(diagram.instance_id());
        let key = (diagram.instance_id(), group.id().to_owned());
        *self.entries.entry(key).or_insert_with(|| group.bounds(diagram))
    }

    /// Bounds of the item with `id`, if it exists in `diagram`.
    pub fn bounds_of(&mut self, diagram: &Diagram, id: &str) -> Option<Transform> {
        let item = diagram.item(id)?;
        Some(self.bounds(diagram, item))
    }

    /// Enclosing transform of the given items. A single item keeps its own
    /// rotation. `None` when no id names an item.
    pub fn bounds_of_items(&mut self, diagram: &Diagram, ids: &[ItemId]) -> Option<Transform> {
        let bounds: Vec<Transform> = ids.iter().filter_map(|id| self.bounds_of(diagram, id)).collect();
        match bounds.as_slice() {
            [] => None,
            [single] => Some(*single),
            many => Some(Transform::from_transforms_and_rotation(many, Rotation::ZERO)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.instances.clear();
    }

    fn touch(&mut self, instance_id: u64) {
        if self.instances.back() == Some(&instance_id) {
            return;
        }
        self.instances.retain(|id| *id != instance_id);
        self.instances.push_back(instance_id);
        while self.instances.len() > self.max_instances {
            if let Some(evicted) = self.instances.pop_front() {
                self.entries.retain(|(instance, _), _| *instance != evicted);
                tracing::debug!(instance = evicted, "bounds cache instance evicted");
            }
        }
    }
}

impl Default for BoundsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHED_INSTANCES)
    }
}
