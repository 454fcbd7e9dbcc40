//! Writing-progress project model keyed by `(id, active)`.
//!
//! # Responsibility
//! - Define the progress record whose table key is a composite of the
//!   integer id and the active flag.
//!
//! # Invariants
//! - `(id, active)` is the full table key; the table may legitimately hold
//!   two rows sharing one `id`, one per flag value.
//! - `kind` is serialized as `type` to match the external schema.

use serde::{Deserialize, Serialize};

/// Progress record for one writing project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Hash-key half of the composite key.
    pub id: i32,
    /// Range-key half of the composite key.
    pub active: bool,
    /// Working title of the project.
    pub title: String,
    /// Project category code.
    #[serde(rename = "type")]
    pub kind: i32,
    /// Series the project belongs to, when any.
    pub series: Option<String>,
    /// Progress status code.
    pub status: i32,
}

impl Project {
    /// Full composite table key for this record.
    pub fn key(&self) -> (i32, bool) {
        (self.id, self.active)
    }
}
