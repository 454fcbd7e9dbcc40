//! Key-value table boundary.
//!
//! # Responsibility
//! - Define the client contract the managed table service must provide.
//! - Keep table wire details out of the store layer.
//!
//! # Invariants
//! - Transport failures surface as `TableError` and are never retried here.
//! - `batch_get` returns the present subset; per-item misses are not errors.

use crate::model::project::Project;
use crate::model::quote::Quote;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

pub mod memory;

pub type TableResult<T> = Result<T, TableError>;

/// Transport-level failure raised by a table client.
#[derive(Debug)]
pub enum TableError {
    /// The table service could not be reached or rejected the request.
    Unavailable(String),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "table service unavailable: {message}"),
        }
    }
}

impl Error for TableError {}

/// Approximate table metadata returned by [`TableClient::describe_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescription {
    /// Approximate live item count; may lag recent writes.
    pub item_count: i64,
}

/// Equality condition evaluated by a conditional scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCondition {
    /// Name of the boolean attribute the scan filters on.
    pub property: String,
    /// Value the attribute must equal.
    pub equals: bool,
}

impl ScanCondition {
    /// Builds the flag-equality condition used by active-set scans.
    pub fn flag_equals(property: impl Into<String>, equals: bool) -> Self {
        Self {
            property: property.into(),
            equals,
        }
    }
}

/// Row stored in a key-value table.
pub trait TableRecord: Clone {
    /// Full table key: the hash key alone for simple tables, hash plus
    /// range key for composite tables.
    type Key: Clone + Eq + Ord + Hash;

    /// Full key of this row.
    fn key(&self) -> Self::Key;

    /// Hash-key half shared by every row of one partition.
    fn partition_id(&self) -> i32;

    /// Named boolean attribute used by conditional scans; `None` when the
    /// record has no attribute with that name.
    fn flag_attribute(&self, name: &str) -> Option<bool>;
}

/// Client contract for the managed key-value table service.
///
/// Every operation is a single request/response round trip. Implementations
/// are expected to be safe to share across concurrent callers; the store
/// layer adds no locking of its own.
pub trait TableClient<R: TableRecord> {
    /// Unconditionally writes one row, overwriting any row with the same key.
    fn put(&self, record: &R) -> TableResult<()>;

    /// Point lookup by full key.
    fn get(&self, key: &R::Key) -> TableResult<Option<R>>;

    /// Removes one row by full key; removing an absent key is a no-op.
    fn delete(&self, key: &R::Key) -> TableResult<()>;

    /// Writes all rows in one batched request.
    fn batch_put(&self, records: &[R]) -> TableResult<()>;

    /// Returns the subset of requested keys that exist, order unspecified.
    fn batch_get(&self, keys: &[R::Key]) -> TableResult<Vec<R>>;

    /// Returns every row sharing the given hash key.
    fn query_partition(&self, partition_id: i32) -> TableResult<Vec<R>>;

    /// Full-table scan filtered by a boolean attribute condition.
    fn scan(&self, condition: &ScanCondition) -> TableResult<Vec<R>>;

    /// Table metadata with the approximate live item count.
    fn describe_table(&self) -> TableResult<TableDescription>;
}

impl TableRecord for Quote {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn partition_id(&self) -> i32 {
        self.id
    }

    fn flag_attribute(&self, _name: &str) -> Option<bool> {
        None
    }
}

impl TableRecord for Project {
    type Key = (i32, bool);

    fn key(&self) -> (i32, bool) {
        (self.id, self.active)
    }

    fn partition_id(&self) -> i32 {
        self.id
    }

    /// `Active` is the attribute name fixed by the deployed table schema.
    /// `ProgressOptions::property_name` must name this attribute; a scan
    /// conditioned on any other name matches nothing.
    fn flag_attribute(&self, name: &str) -> Option<bool> {
        if name == "Active" {
            Some(self.active)
        } else {
            None
        }
    }
}
