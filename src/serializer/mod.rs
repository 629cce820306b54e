//! Versioned JSON documents and clipboard item sets.
//!
//! DESIGN
//! ======
//! Only the current schema is ever written. Older documents are lifted into
//! the current shape by a chain of pure `vN -> vN+1` steps over
//! `serde_json::Value`, then decoded once through the wire DTOs in [`dto`].
//! The serializer is used at load/save boundaries only; edits never touch JSON.
//!
//! | Version | Root | Items | Transform |
//! |---------|------|-------|-----------|
//! | 1 | single implicit diagram | map + `rootIds` | nested `{position, size, rotation}` |
//! | 2 | `diagrams[]` | map + `rootIds` | nested |
//! | 3 | `version: 3`, `diagrams[]` | array + `order` | flat `{x, y, w, h, r}` |

mod document;
pub mod dto;
mod item_set;
mod migrate;

pub use document::{load_document, serialize_document};
pub use item_set::{deserialize_set, generate_new_ids, serialize_set};
pub use migrate::{detect_version, migrate, v1_to_v2, v2_to_v3};

/// Error returned when a document or clipboard payload cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported schema version: {0}")]
    UnsupportedVersion(u64),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("malformed document: {0}")]
    Malformed(String),
}
