//! Shared immutable property bag with identity-preserving updates.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Copy-on-write record over a props struct.
///
/// Cloning shares the props. [`Record::update`] edits a private copy and keeps
/// the original instance when the edit leaves the props equal.
pub struct Record<P> {
    props: Arc<P>,
}

impl<P> Record<P> {
    #[must_use]
    pub fn new(props: P) -> Self {
        Self { props: Arc::new(props) }
    }

    #[must_use]
    pub fn props(&self) -> &P {
        &self.props
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.props, &other.props)
    }
}

impl<P: Clone + PartialEq> Record<P> {
    /// Apply `f` to a copy of the props.
    #[must_use]
    pub fn update(&self, f: impl FnOnce(&mut P)) -> Self {
        let mut next = P::clone(&self.props);
        f(&mut next);
        if next == *self.props { self.clone() } else { Self::new(next) }
    }
}

impl<P> Clone for Record<P> {
    fn clone(&self) -> Self {
        Self { props: Arc::clone(&self.props) }
    }
}

impl<P> Deref for Record<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.props
    }
}

impl<P: PartialEq> PartialEq for Record<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.props == *other.props
    }
}

impl<P: fmt::Debug> fmt::Debug for Record<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.props.fmt(f)
    }
}
