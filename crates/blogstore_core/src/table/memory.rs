//! In-memory table client for tests and local development.
//!
//! # Responsibility
//! - Implement the full table contract against a process-local map.
//!
//! # Invariants
//! - Semantics match the managed service contract: puts overwrite, batch
//!   gets silently drop misses, deletes of absent keys are no-ops.
//! - The reported item count is exact here, approximate in production.

use super::{ScanCondition, TableClient, TableDescription, TableRecord, TableResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local table keyed exactly like the managed service.
pub struct MemoryTable<R: TableRecord> {
    rows: Mutex<BTreeMap<R::Key, R>>,
}

impl<R: TableRecord> MemoryTable<R> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
        }
    }

    /// Creates a table pre-populated with the given rows.
    pub fn with_rows(rows: impl IntoIterator<Item = R>) -> Self {
        let table = Self::new();
        {
            let mut guard = table.lock_rows();
            for row in rows {
                guard.insert(row.key(), row);
            }
        }
        table
    }

    /// Number of live rows.
    pub fn len(&self) -> usize {
        self.lock_rows().len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.lock_rows().is_empty()
    }

    fn lock_rows(&self) -> MutexGuard<'_, BTreeMap<R::Key, R>> {
        // A poisoned lock only means another test thread panicked mid-write;
        // the map itself stays structurally valid.
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<R: TableRecord> Default for MemoryTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TableRecord> TableClient<R> for MemoryTable<R> {
    fn put(&self, record: &R) -> TableResult<()> {
        self.lock_rows().insert(record.key(), record.clone());
        Ok(())
    }

    fn get(&self, key: &R::Key) -> TableResult<Option<R>> {
        Ok(self.lock_rows().get(key).cloned())
    }

    fn delete(&self, key: &R::Key) -> TableResult<()> {
        self.lock_rows().remove(key);
        Ok(())
    }

    fn batch_put(&self, records: &[R]) -> TableResult<()> {
        let mut rows = self.lock_rows();
        for record in records {
            rows.insert(record.key(), record.clone());
        }
        Ok(())
    }

    fn batch_get(&self, keys: &[R::Key]) -> TableResult<Vec<R>> {
        let rows = self.lock_rows();
        Ok(keys.iter().filter_map(|key| rows.get(key).cloned()).collect())
    }

    fn query_partition(&self, partition_id: i32) -> TableResult<Vec<R>> {
        let rows = self.lock_rows();
        Ok(rows
            .values()
            .filter(|row| row.partition_id() == partition_id)
            .cloned()
            .collect())
    }

    fn scan(&self, condition: &ScanCondition) -> TableResult<Vec<R>> {
        let rows = self.lock_rows();
        Ok(rows
            .values()
            .filter(|row| row.flag_attribute(&condition.property) == Some(condition.equals))
            .cloned()
            .collect())
    }

    fn describe_table(&self) -> TableResult<TableDescription> {
        Ok(TableDescription {
            item_count: self.lock_rows().len() as i64,
        })
    }
}
