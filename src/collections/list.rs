//! Ordered persistent list with the z-order primitives used by containers.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persistent ordered list.
pub struct ImmutableList<T> {
    items: Option<Arc<Vec<T>>>,
}

/// Where a reorder moves the selected elements.
#[derive(Debug, Clone, Copy)]
enum Target {
    /// Insert before the remainder element at this original index.
    Absolute(usize),
    /// Shift by an offset from the outermost selected element.
    Relative(isize),
}

impl<T> ImmutableList<T> {
    /// The shared empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self { items: None }
    }

    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() { Self::empty() } else { Self { items: Some(Arc::new(items)) } }
    }

    /// Build a list from any iterator. No elements yields [`ImmutableList::empty`].
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(items.into_iter().collect())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_deref().map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_none()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` when both lists share the same buffer (or are both empty).
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.items, &other.items) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: Clone> ImmutableList<T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Append elements to the end.
    #[must_use]
    pub fn add(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut added = items.into_iter().peekable();
        if added.peek().is_none() {
            return self.clone();
        }
        let mut next = self.to_vec();
        next.extend(added);
        Self::from_vec(next)
    }

    /// Insert elements before `index`. Indices past the end append.
    #[must_use]
    pub fn insert_at(&self, index: usize, items: impl IntoIterator<Item = T>) -> Self {
        let inserted: Vec<T> = items.into_iter().collect();
        if inserted.is_empty() {
            return self.clone();
        }
        let mut next = self.to_vec();
        let index = index.min(next.len());
        next.splice(index..index, inserted);
        Self::from_vec(next)
    }

    /// Drop the first `count` elements.
    #[must_use]
    pub fn drop_front(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        Self::from_vec(self.as_slice().iter().skip(count).cloned().collect())
    }

    /// The list without its last element.
    #[must_use]
    pub fn without_last(&self) -> Self {
        match self.as_slice().split_last() {
            Some((_, rest)) => Self::from_vec(rest.to_vec()),
            None => self.clone(),
        }
    }
}

impl<T: Clone + PartialEq> ImmutableList<T> {
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    /// Remove every occurrence of the given elements.
    #[must_use]
    pub fn remove(&self, items: &[T]) -> Self {
        if items.is_empty() || !self.iter().any(|item| items.contains(item)) {
            return self.clone();
        }
        Self::of(self.iter().filter(|item| !items.contains(item)).cloned())
    }

    /// Replace the element at `index`. Out of range or equal values are a no-op.
    #[must_use]
    pub fn set(&self, index: usize, item: T) -> Self {
        match self.get(index) {
            Some(current) if *current != item => {
                let mut next = self.to_vec();
                next[index] = item;
                Self::from_vec(next)
            }
            _ => self.clone(),
        }
    }

    /// Move the given elements to the end, keeping their relative order.
    #[must_use]
    pub fn bring_to_front(&self, items: &[T]) -> Self {
        self.reorder(items, Target::Absolute(usize::MAX))
    }

    /// Move the given elements one step past the frontmost of them.
    #[must_use]
    pub fn bring_forwards(&self, items: &[T]) -> Self {
        self.reorder(items, Target::Relative(1))
    }

    /// Move the given elements one step before the backmost of them.
    #[must_use]
    pub fn send_backwards(&self, items: &[T]) -> Self {
        self.reorder(items, Target::Relative(-1))
    }

    /// Move the given elements to the start, keeping their relative order.
    #[must_use]
    pub fn send_to_back(&self, items: &[T]) -> Self {
        self.reorder(items, Target::Absolute(0))
    }

    /// Move the given elements next to the element currently at `index`.
    #[must_use]
    pub fn move_to(&self, items: &[T], index: usize) -> Self {
        self.reorder(items, Target::Absolute(index))
    }

    fn reorder(&self, items: &[T], target: Target) -> Self {
        let mut stay: Vec<(usize, &T)> = Vec::new();
        let mut moved: Vec<(usize, &T)> = Vec::new();
        for (index, item) in self.iter().enumerate() {
            if items.contains(item) {
                moved.push((index, item));
            } else {
                stay.push((index, item));
            }
        }

        let Some(&(first_index, _)) = moved.first() else {
            return self.clone();
        };

        let (new_index, backwards) = match target {
            Target::Absolute(index) => (index, first_index > index),
            Target::Relative(offset) => {
                let anchor = if offset > 0 {
                    moved.iter().map(|(index, _)| *index).max().unwrap_or(first_index)
                } else {
                    moved.iter().map(|(index, _)| *index).min().unwrap_or(first_index)
                };
                (anchor.saturating_add_signed(offset), offset <= 0)
            }
        };

        let split = stay
            .iter()
            .take_while(|(index, _)| if backwards { *index < new_index } else { *index <= new_index })
            .count();

        let mut next: Vec<T> = Vec::with_capacity(self.len());
        next.extend(stay[..split].iter().map(|(_, item)| (*item).clone()));
        next.extend(moved.iter().map(|(_, item)| (*item).clone()));
        next.extend(stay[split..].iter().map(|(_, item)| (*item).clone()));

        if next.as_slice() == self.as_slice() {
            return self.clone();
        }
        Self::from_vec(next)
    }
}

impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        Self { items: self.items.clone() }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for ImmutableList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmutableList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}
