//! # Undo/Redo History
//!
//! A bounded history around an immutable present value.
//!
//! ## Design
//!
//! - `past` holds snapshots of earlier values, each tagged with the action
//!   that produced the value after it (if the caller supplied one)
//! - Executing a new value clears `future` and evicts the oldest snapshots
//!   once `past` exceeds the capacity
//! - Undo and redo move snapshots between the two stacks; on an empty stack
//!   they return the receiver itself
//! - [`undoable`] wraps a pure reducer and decides per action whether to
//!   record, merge into the last entry, or replace the present silently
//!
//! ## Example
//!
//! ```rust
//! use wireframe::history::{HistoryCommand, HistoryPolicy, UndoableState, undoable};
//!
//! let policy: HistoryPolicy<i32> = HistoryPolicy::new();
//! let state = UndoableState::create(0, 10);
//! let state = undoable(&state, HistoryCommand::Apply(5), |n, delta| n + delta, &policy);
//! assert_eq!(*state.present(), 5);
//! let state = undoable(&state, HistoryCommand::Undo, |n, delta| n + delta, &policy);
//! assert_eq!(*state.present(), 0);
//! ```

mod policy;
mod state;

pub use policy::{HistoryCommand, HistoryPolicy, undoable};
pub use state::{Snapshot, UndoableState};
