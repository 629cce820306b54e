//! Persistent collections.
//!
//! Each collection is a copy-on-write wrapper around a shared buffer. Mutators
//! return a new instance, except when the call changes nothing: then they hand
//! back a clone of the receiver that shares its buffer, so `ptr_eq` reports the
//! two as the same instance. Empty collections hold no buffer at all, which
//! makes every empty instance identical to `empty()`.

mod list;
mod map;
mod record;
mod set;

pub use list::ImmutableList;
pub use map::ImmutableMap;
pub use record::Record;
pub use set::ImmutableSet;
