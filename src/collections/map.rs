//! String-keyed persistent map backed by a shared [`IndexMap`].

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persistent string-keyed map.
///
/// Lookup is hashed; iteration follows insertion order, which is what the
/// serializer writes. Equality compares entries and ignores order.
pub struct ImmutableMap<V> {
    inner: Option<Arc<IndexMap<String, V>>>,
}

impl<V> ImmutableMap<V> {
    /// The shared empty map.
    #[must_use]
    pub fn empty() -> Self {
        Self { inner: None }
    }

    fn from_index_map(map: IndexMap<String, V>) -> Self {
        if map.is_empty() { Self::empty() } else { Self { inner: Some(Arc::new(map)) } }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| inner.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.as_ref().and_then(|inner| inner.get(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.contains_key(key))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.inner.iter().flat_map(|inner| inner.iter()).map(|(key, value)| (key.as_str(), value))
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

impl<V: Clone + PartialEq> ImmutableMap<V> {
    /// Build a map from entries. Later duplicates overwrite earlier ones in place.
    pub fn of(entries: impl IntoIterator<Item = (String, V)>) -> Self {
        Self::from_index_map(entries.into_iter().collect())
    }

    fn edit(&self) -> IndexMap<String, V> {
        self.inner.as_deref().cloned().unwrap_or_default()
    }

    /// Insert or replace a value. Setting an equal value is a no-op.
    #[must_use]
    pub fn set(&self, key: impl Into<String>, value: V) -> Self {
        let key = key.into();
        if self.get(&key) == Some(&value) {
            return self.clone();
        }
        let mut next = self.edit();
        next.insert(key, value);
        Self::from_index_map(next)
    }

    /// Insert or replace many values at once.
    #[must_use]
    pub fn set_many(&self, entries: impl IntoIterator<Item = (String, V)>) -> Self {
        let mut next: Option<IndexMap<String, V>> = None;
        for (key, value) in entries {
            let current = match &next {
                Some(inner) => inner.get(&key),
                None => self.get(&key),
            };
            if current == Some(&value) {
                continue;
            }
            next.get_or_insert_with(|| self.edit()).insert(key, value);
        }
        next.map_or_else(|| self.clone(), Self::from_index_map)
    }

    /// Remove the given keys. Unknown keys are ignored; the rest keep their order.
    #[must_use]
    pub fn remove<K: AsRef<str>>(&self, keys: &[K]) -> Self {
        if !keys.iter().any(|key| self.contains_key(key.as_ref())) {
            return self.clone();
        }
        let mut next = self.edit();
        for key in keys {
            next.shift_remove(key.as_ref());
        }
        Self::from_index_map(next)
    }

    /// Replace a value with `f(value)`. Missing keys and unchanged results are a no-op.
    #[must_use]
    pub fn update(&self, key: &str, f: impl FnOnce(&V) -> V) -> Self {
        match self.get(key) {
            Some(current) => self.set(key, f(current)),
            None => self.clone(),
        }
    }
}

impl<V> Clone for ImmutableMap<V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<V> Default for ImmutableMap<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: PartialEq> PartialEq for ImmutableMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner == other.inner
    }
}

impl<V: fmt::Debug> fmt::Debug for ImmutableMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Clone + PartialEq> FromIterator<(String, V)> for ImmutableMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<V: Serialize> Serialize for ImmutableMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for ImmutableMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, V>::deserialize(deserializer).map(Self::from_index_map)
    }
}
