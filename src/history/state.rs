//! Bounded past/present/future stacks.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;
use std::sync::Arc;

use crate::collections::ImmutableList;

/// One saved prior value plus the action that produced the value after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T, A> {
    state: T,
    action: Option<A>,
}

impl<T, A> Snapshot<T, A> {
    #[must_use]
    pub fn state(&self) -> &T {
        &self.state
    }

    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }
}

/// Bounded undo/redo history around an immutable present value.
pub struct UndoableState<T, A> {
    inner: Arc<History<T, A>>,
}

struct History<T, A> {
    past: ImmutableList<Snapshot<T, A>>,
    present: T,
    future: ImmutableList<Snapshot<T, A>>,
    capacity: usize,
}

impl<T, A> UndoableState<T, A> {
    #[must_use]
    pub fn present(&self) -> &T {
        &self.inner.present
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.inner.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.inner.future.is_empty()
    }

    #[must_use]
    pub fn past(&self) -> &ImmutableList<Snapshot<T, A>> {
        &self.inner.past
    }

    #[must_use]
    pub fn future(&self) -> &ImmutableList<Snapshot<T, A>> {
        &self.inner.future
    }

    /// Actions of the tagged history entries, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.inner.past.iter().filter_map(Snapshot::action)
    }

    /// Action of the most recent history entry, if it was tagged.
    #[must_use]
    pub fn last_action(&self) -> Option<&A> {
        self.inner.past.last().and_then(Snapshot::action)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone, A: Clone> UndoableState<T, A> {
    /// Fresh history. A capacity of zero is raised to one.
    #[must_use]
    pub fn create(present: T, capacity: usize) -> Self {
        Self::from_parts(ImmutableList::empty(), present, ImmutableList::empty(), capacity.max(1))
    }

    /// Record `value` as the new present, pushing the current present to the past.
    #[must_use]
    pub fn executed(&self, value: T, action: Option<A>) -> Self {
        let mut past = self.inner.past.add([Snapshot { state: self.inner.present.clone(), action }]);
        if past.len() > self.inner.capacity {
            past = past.drop_front(past.len() - self.inner.capacity);
        }
        Self::from_parts(past, value, ImmutableList::empty(), self.inner.capacity)
    }

    /// Replace the present without adding a history entry.
    ///
    /// A given action re-tags the most recent entry, so the action log keeps
    /// describing what produced the present.
    #[must_use]
    pub fn replace_present(&self, value: T, action: Option<A>) -> Self {
        let past = match (action, self.inner.past.last()) {
            (Some(action), Some(last)) => self
                .inner
                .past
                .without_last()
                .add([Snapshot { state: last.state.clone(), action: Some(action) }]),
            _ => self.inner.past.clone(),
        };
        Self::from_parts(past, value, self.inner.future.clone(), self.inner.capacity)
    }

    #[must_use]
    pub fn undo(&self) -> Self {
        let Some(previous) = self.inner.past.last() else {
            return self.clone();
        };
        let current = Snapshot { state: self.inner.present.clone(), action: previous.action.clone() };
        Self::from_parts(
            self.inner.past.without_last(),
            previous.state.clone(),
            self.inner.future.add([current]),
            self.inner.capacity,
        )
    }

    #[must_use]
    pub fn redo(&self) -> Self {
        let Some(next) = self.inner.future.last() else {
            return self.clone();
        };
        let current = Snapshot { state: self.inner.present.clone(), action: next.action.clone() };
        Self::from_parts(
            self.inner.past.add([current]),
            next.state.clone(),
            self.inner.future.without_last(),
            self.inner.capacity,
        )
    }

    fn from_parts(
        past: ImmutableList<Snapshot<T, A>>,
        present: T,
        future: ImmutableList<Snapshot<T, A>>,
        capacity: usize,
    ) -> Self {
        Self { inner: Arc::new(History { past, present, future, capacity }) }
    }
}

impl<T, A> Clone for UndoableState<T, A> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: fmt::Debug, A: fmt::Debug> fmt::Debug for UndoableState<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoableState")
            .field("past", &self.inner.past)
            .field("present", &self.inner.present)
            .field("future", &self.inner.future)
            .field("capacity", &self.inner.capacity)
            .finish()
    }
}
