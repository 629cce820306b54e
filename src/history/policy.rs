//! Rules for which actions are recorded and which are merged.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::fmt;

use super::UndoableState;

type IgnoreFn<A> = Box<dyn Fn(&A) -> bool + Send + Sync>;
type MergeFn<A> = Box<dyn Fn(&A, &A) -> Option<A> + Send + Sync>;

/// Command fed into [`undoable`].
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryCommand<A> {
    /// Step back to the previous present.
    Undo,
    /// Re-apply the most recently undone entry.
    Redo,
    /// Run the action through the reducer.
    Apply(A),
}

/// Decides how applied actions enter the history.
///
/// Ignored actions change the present without a history entry. The merger is
/// asked whether an action can be folded into the most recent entry; when it
/// returns a merged action the present is replaced and the entry re-tagged.
pub struct HistoryPolicy<A> {
    ignore: IgnoreFn<A>,
    merge: MergeFn<A>,
}

impl<A> HistoryPolicy<A> {
    /// Record every action, never merge.
    #[must_use]
    pub fn new() -> Self {
        Self { ignore: Box::new(|_| false), merge: Box::new(|_, _| None) }
    }

    #[must_use]
    pub fn with_ignore(mut self, ignore: impl Fn(&A) -> bool + Send + Sync + 'static) -> Self {
        self.ignore = Box::new(ignore);
        self
    }

    #[must_use]
    pub fn with_merge(mut self, merge: impl Fn(&A, &A) -> Option<A> + Send + Sync + 'static) -> Self {
        self.merge = Box::new(merge);
        self
    }

    #[must_use]
    pub fn is_ignored(&self, action: &A) -> bool {
        (self.ignore)(action)
    }

    #[must_use]
    pub fn try_merge(&self, previous: &A, next: &A) -> Option<A> {
        (self.merge)(previous, next)
    }
}

impl<A> Default for HistoryPolicy<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for HistoryPolicy<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryPolicy").finish_non_exhaustive()
    }
}

/// Run one command through the history.
///
/// `Apply` computes the next present with `reducer`. A result equal to the
/// present returns `state` itself. Otherwise the policy picks between a silent
/// replacement (ignored action), merging into the last entry, or a new entry.
/// Merging only happens while nothing is waiting to be redone.
pub fn undoable<T, A>(
    state: &UndoableState<T, A>,
    command: HistoryCommand<A>,
    reducer: impl Fn(&T, &A) -> T,
    policy: &HistoryPolicy<A>,
) -> UndoableState<T, A>
where
    T: Clone + PartialEq,
    A: Clone + fmt::Debug,
{
    match command {
        HistoryCommand::Undo => state.undo(),
        HistoryCommand::Redo => state.redo(),
        HistoryCommand::Apply(action) => {
            let next = reducer(state.present(), &action);
            if next == *state.present() {
                return state.clone();
            }

            if policy.is_ignored(&action) {
                tracing::debug!(?action, "action kept out of history");
                return state.replace_present(next, None);
            }

            if !state.can_redo() {
                if let Some(merged) = state.last_action().and_then(|previous| policy.try_merge(previous, &action)) {
                    tracing::debug!(action = ?merged, "history entry merged");
                    return state.replace_present(next, Some(merged));
                }
            }

            if state.past().len() >= state.capacity() {
                tracing::debug!(capacity = state.capacity(), "history full, evicting oldest entry");
            }
            state.executed(next, Some(action))
        }
    }
}
