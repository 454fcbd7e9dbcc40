//! Project store contract and table-backed implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and batch APIs over the composite-keyed progress
//!   table.
//! - Resolve ambiguous per-id lookups through the named tie-break policy.
//!
//! # Invariants
//! - Empty batch inputs and a blank flag property name are rejected before
//!   any table round trip.
//! - `modify`/`delete` address rows by the full `(id, active)` key.

use super::resolve::{prefer_inactive, resolve_rows};
use super::{StoreError, StoreResult};
use crate::config::ProgressOptions;
use crate::model::project::Project;
use crate::table::{ScanCondition, TableClient};
use log::{debug, warn};

/// Store contract for project progress records.
pub trait ProjectStore {
    /// Unconditionally upserts one project row under its full composite key.
    fn add(&self, project: &Project) -> StoreResult<()>;

    /// Stores all projects in one batched put.
    fn batch_store(&self, projects: &[Project]) -> StoreResult<()>;

    /// Looks up an id that may carry zero, one, or two rows (one per flag
    /// value) and resolves the result. An absent id is `Ok(None)`.
    fn get_item(&self, id: i32) -> StoreResult<Option<Project>>;

    /// One batched get returning every stored row for the requested ids.
    /// Ids without rows are silently omitted.
    fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Project>>;

    /// Overwrites an existing row; `NotFound` when no row has this key.
    fn modify(&self, project: &Project) -> StoreResult<()>;

    /// Removes an existing row; `NotFound` when no row has this key.
    fn delete(&self, project: &Project) -> StoreResult<()>;

    /// All projects whose flag attribute is true, ordered ascending by id.
    /// An empty result is not an error.
    fn get_active_projects(&self) -> StoreResult<Vec<Project>>;
}

/// Project store backed by the managed key-value table.
pub struct TableProjectStore<C: TableClient<Project>> {
    client: C,
    options: ProgressOptions,
}

impl<C: TableClient<Project>> TableProjectStore<C> {
    /// Creates a store over the given table client.
    pub fn new(client: C, options: ProgressOptions) -> Self {
        Self { client, options }
    }
}

impl<C: TableClient<Project>> ProjectStore for TableProjectStore<C> {
    fn add(&self, project: &Project) -> StoreResult<()> {
        debug!(
            "event=project_add module=project_store status=start id={} active={}",
            project.id, project.active
        );
        self.client.put(project)?;
        Ok(())
    }

    fn batch_store(&self, projects: &[Project]) -> StoreResult<()> {
        if projects.is_empty() {
            warn!("event=project_batch_store module=project_store status=rejected reason=empty_input");
            return Err(StoreError::InvalidArgument(
                "at least one project must be provided".to_string(),
            ));
        }

        self.client.batch_put(projects)?;
        debug!(
            "event=project_batch_store module=project_store status=ok count={}",
            projects.len()
        );
        Ok(())
    }

    fn get_item(&self, id: i32) -> StoreResult<Option<Project>> {
        let rows = self.client.query_partition(id)?;
        let resolved = prefer_inactive(resolve_rows(id, rows)?);
        if resolved.is_none() {
            warn!("event=project_get module=project_store status=miss id={id}");
        }
        Ok(resolved)
    }

    fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Project>> {
        if ids.is_empty() {
            warn!("event=project_batch_get module=project_store status=rejected reason=empty_input");
            return Err(StoreError::InvalidArgument(
                "at least one id must be provided".to_string(),
            ));
        }

        // The composite key means each requested id can exist under either
        // flag value; probe both in the single batched request.
        let keys: Vec<(i32, bool)> = ids
            .iter()
            .flat_map(|&id| [(id, true), (id, false)])
            .collect();

        let projects = self.client.batch_get(&keys)?;
        debug!(
            "event=project_batch_get module=project_store status=ok requested={} found={}",
            ids.len(),
            projects.len()
        );
        Ok(projects)
    }

    fn modify(&self, project: &Project) -> StoreResult<()> {
        if self.client.get(&project.key())?.is_none() {
            warn!(
                "event=project_modify module=project_store status=miss id={}",
                project.id
            );
            return Err(StoreError::NotFound { id: project.id });
        }

        debug!(
            "event=project_modify module=project_store status=ok id={}",
            project.id
        );
        self.client.put(project)?;
        Ok(())
    }

    fn delete(&self, project: &Project) -> StoreResult<()> {
        if self.client.get(&project.key())?.is_none() {
            warn!(
                "event=project_delete module=project_store status=miss id={}",
                project.id
            );
            return Err(StoreError::NotFound { id: project.id });
        }

        debug!(
            "event=project_delete module=project_store status=ok id={}",
            project.id
        );
        self.client.delete(&project.key())?;
        Ok(())
    }

    fn get_active_projects(&self) -> StoreResult<Vec<Project>> {
        if self.options.property_name.trim().is_empty() {
            warn!("event=project_active_set module=project_store status=rejected reason=blank_property_name");
            return Err(StoreError::InvalidArgument(
                "the property name must be specified".to_string(),
            ));
        }

        let condition = ScanCondition::flag_equals(self.options.property_name.as_str(), true);
        let mut projects = self.client.scan(&condition)?;
        projects.sort_by_key(|project| project.id);

        if projects.is_empty() {
            warn!("event=project_active_set module=project_store status=empty");
        } else {
            debug!(
                "event=project_active_set module=project_store status=ok count={}",
                projects.len()
            );
        }
        Ok(projects)
    }
}
