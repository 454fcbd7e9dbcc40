//! Progress facade service.
//!
//! # Responsibility
//! - Expose the project store to the transport layer as a thin facade.
//!
//! # Invariants
//! - Pure delegation; validation and resolution live in the store layer.

use crate::model::project::Project;
use crate::store::project_store::ProjectStore;
use crate::store::StoreResult;

/// Facade over a project store implementation.
pub struct ProgressService<S: ProjectStore> {
    store: S,
}

impl<S: ProjectStore> ProgressService<S> {
    /// Creates a facade over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Upserts one project row.
    pub fn add(&self, project: &Project) -> StoreResult<()> {
        self.store.add(project)
    }

    /// Stores a non-empty batch of project rows.
    pub fn batch_store(&self, projects: &[Project]) -> StoreResult<()> {
        self.store.batch_store(projects)
    }

    /// Resolved lookup by id; absent ids resolve to `Ok(None)`.
    pub fn get_item(&self, id: i32) -> StoreResult<Option<Project>> {
        self.store.get_item(id)
    }

    /// Batched lookup returning every stored row for the requested ids.
    pub fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Project>> {
        self.store.batch_get(ids)
    }

    /// Overwrites an existing project row.
    pub fn modify(&self, project: &Project) -> StoreResult<()> {
        self.store.modify(project)
    }

    /// Removes an existing project row.
    pub fn delete(&self, project: &Project) -> StoreResult<()> {
        self.store.delete(project)
    }

    /// Active projects ordered ascending by id.
    pub fn get_active_projects(&self) -> StoreResult<Vec<Project>> {
        self.store.get_active_projects()
    }
}
