//! Persistent set backed by a shared [`IndexSet`].

#[cfg(test)]
#[path = "set_test.rs"]
mod set_test;

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persistent set that remembers insertion order.
///
/// Iteration follows insertion order; equality is membership only.
pub struct ImmutableSet<T> {
    inner: Option<Arc<IndexSet<T>>>,
}

/// Borrowing iterator over an [`ImmutableSet`] in insertion order.
pub struct Iter<'a, T>(Option<indexmap::set::Iter<'a, T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> ImmutableSet<T> {
    /// The shared empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self { inner: None }
    }

    fn from_index_set(set: IndexSet<T>) -> Self {
        if set.is_empty() { Self::empty() } else { Self { inner: Some(Arc::new(set)) } }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| inner.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.as_ref().map(|inner| inner.iter()))
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: Clone + Eq + Hash> ImmutableSet<T> {
    /// Build a set from any iterator, dropping duplicates.
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_index_set(items.into_iter().collect())
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.contains(item))
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn edit(&self) -> IndexSet<T> {
        self.inner.as_deref().cloned().unwrap_or_default()
    }

    /// Add elements that are not yet members.
    #[must_use]
    pub fn add(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut next: Option<IndexSet<T>> = None;
        for item in items {
            if !self.contains(&item) {
                next.get_or_insert_with(|| self.edit()).insert(item);
            }
        }
        next.map_or_else(|| self.clone(), Self::from_index_set)
    }

    /// Remove the given elements. The rest keep their order.
    #[must_use]
    pub fn remove(&self, items: &[T]) -> Self {
        if !items.iter().any(|item| self.contains(item)) {
            return self.clone();
        }
        let mut next = self.edit();
        for item in items {
            next.shift_remove(item);
        }
        Self::from_index_set(next)
    }

    /// Remove the element if present, otherwise add it.
    #[must_use]
    pub fn toggle(&self, item: T) -> Self {
        if self.contains(&item) {
            self.remove(std::slice::from_ref(&item))
        } else {
            self.add([item])
        }
    }
}

impl<T> Clone for ImmutableSet<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> Default for ImmutableSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Eq + Hash> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner == other.inner
    }
}

impl<T: Eq + Hash> Eq for ImmutableSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for ImmutableSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de> + Eq + Hash> Deserialize<'de> for ImmutableSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexSet::<T>::deserialize(deserializer).map(Self::from_index_set)
    }
}
