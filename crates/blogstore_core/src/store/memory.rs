//! In-memory stub stores with explicit seed datasets.
//!
//! # Responsibility
//! - Provide the store contracts without a table service, for local
//!   development and deterministic tests.
//!
//! # Invariants
//! - Datasets are constructor-supplied; no hidden static state.
//! - Contract semantics match the table-backed stores, including upsert
//!   overwrites and write-path presence checks.

use super::project_store::ProjectStore;
use super::quote_store::QuoteStore;
use super::resolve::{prefer_inactive, resolve_rows};
use super::{StoreError, StoreResult};
use crate::model::project::Project;
use crate::model::quote::Quote;
use crate::table::TableDescription;
use rand::Rng;
use std::sync::{Mutex, MutexGuard};

/// Quote store over an in-memory dataset.
pub struct MemoryQuoteStore {
    data: Mutex<Vec<Quote>>,
}

impl MemoryQuoteStore {
    /// Creates a store over the given dataset.
    pub fn new(initial: Vec<Quote>) -> Self {
        Self {
            data: Mutex::new(initial),
        }
    }

    /// Creates a store loaded with the fixture dataset (ids 1001-1008).
    pub fn with_seed_data() -> Self {
        Self::new(seed_quotes())
    }

    fn lock_data(&self) -> MutexGuard<'_, Vec<Quote>> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl QuoteStore for MemoryQuoteStore {
    fn add(&self, quote: &Quote) -> StoreResult<()> {
        let mut data = self.lock_data();
        data.retain(|existing| existing.id != quote.id);
        data.push(quote.clone());
        Ok(())
    }

    fn batch_store(&self, quotes: &[Quote]) -> StoreResult<()> {
        if quotes.is_empty() {
            return Err(StoreError::InvalidArgument(
                "at least one quote must be provided".to_string(),
            ));
        }

        let mut data = self.lock_data();
        for quote in quotes {
            data.retain(|existing| existing.id != quote.id);
            data.push(quote.clone());
        }
        Ok(())
    }

    fn get_item(&self, id: i32) -> StoreResult<Option<Quote>> {
        Ok(self.lock_data().iter().find(|quote| quote.id == id).cloned())
    }

    fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Quote>> {
        if ids.is_empty() {
            return Err(StoreError::InvalidArgument(
                "at least one id must be provided".to_string(),
            ));
        }

        let data = self.lock_data();
        Ok(ids
            .iter()
            .filter_map(|id| data.iter().find(|quote| quote.id == *id).cloned())
            .collect())
    }

    fn modify(&self, quote: &Quote) -> StoreResult<()> {
        let mut data = self.lock_data();
        let position = data
            .iter()
            .position(|existing| existing.id == quote.id)
            .ok_or(StoreError::NotFound { id: quote.id })?;
        data[position] = quote.clone();
        Ok(())
    }

    fn delete(&self, quote: &Quote) -> StoreResult<()> {
        let mut data = self.lock_data();
        let position = data
            .iter()
            .position(|existing| existing.id == quote.id)
            .ok_or(StoreError::NotFound { id: quote.id })?;
        data.remove(position);
        Ok(())
    }

    fn get_random_quotes(
        &self,
        number_to_get: i32,
        _available_count: i32,
    ) -> StoreResult<Vec<Quote>> {
        if number_to_get <= 0 {
            return Ok(Vec::new());
        }

        let data = self.lock_data();
        if number_to_get as usize > data.len() {
            return Err(StoreError::OutOfRange(
                "you are trying to get more items than in the data set".to_string(),
            ));
        }

        // Rejection sampling over stored records rather than the id space;
        // the dataset is dense by construction, so indexes terminate fast.
        let mut rng = rand::thread_rng();
        let mut quotes: Vec<Quote> = Vec::with_capacity(number_to_get as usize);
        while quotes.len() < number_to_get as usize {
            let candidate = &data[rng.gen_range(0..data.len())];
            if !quotes.iter().any(|quote| quote.id == candidate.id) {
                quotes.push(candidate.clone());
            }
        }
        Ok(quotes)
    }

    fn table_description(&self) -> StoreResult<TableDescription> {
        Ok(TableDescription {
            item_count: self.lock_data().len() as i64,
        })
    }
}

/// Project store over an in-memory dataset.
pub struct MemoryProjectStore {
    property_name: String,
    data: Mutex<Vec<Project>>,
}

impl MemoryProjectStore {
    /// Creates a store over the given dataset.
    pub fn new(initial: Vec<Project>, property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            data: Mutex::new(initial),
        }
    }

    /// Creates a store loaded with the fixture dataset (ids 1000-1009).
    pub fn with_seed_data() -> Self {
        Self::new(seed_projects(), "Active")
    }

    fn lock_data(&self) -> MutexGuard<'_, Vec<Project>> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProjectStore for MemoryProjectStore {
    fn add(&self, project: &Project) -> StoreResult<()> {
        let mut data = self.lock_data();
        data.retain(|existing| existing.key() != project.key());
        data.push(project.clone());
        Ok(())
    }

    fn batch_store(&self, projects: &[Project]) -> StoreResult<()> {
        if projects.is_empty() {
            return Err(StoreError::InvalidArgument(
                "at least one project must be provided".to_string(),
            ));
        }

        let mut data = self.lock_data();
        for project in projects {
            data.retain(|existing| existing.key() != project.key());
            data.push(project.clone());
        }
        Ok(())
    }

    fn get_item(&self, id: i32) -> StoreResult<Option<Project>> {
        let rows: Vec<Project> = self
            .lock_data()
            .iter()
            .filter(|project| project.id == id)
            .cloned()
            .collect();
        Ok(prefer_inactive(resolve_rows(id, rows)?))
    }

    fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Project>> {
        if ids.is_empty() {
            return Err(StoreError::InvalidArgument(
                "at least one id must be provided".to_string(),
            ));
        }

        let data = self.lock_data();
        Ok(data
            .iter()
            .filter(|project| ids.contains(&project.id))
            .cloned()
            .collect())
    }

    fn modify(&self, project: &Project) -> StoreResult<()> {
        let mut data = self.lock_data();
        let position = data
            .iter()
            .position(|existing| existing.key() == project.key())
            .ok_or(StoreError::NotFound { id: project.id })?;
        data[position] = project.clone();
        Ok(())
    }

    fn delete(&self, project: &Project) -> StoreResult<()> {
        let mut data = self.lock_data();
        let position = data
            .iter()
            .position(|existing| existing.key() == project.key())
            .ok_or(StoreError::NotFound { id: project.id })?;
        data.remove(position);
        Ok(())
    }

    fn get_active_projects(&self) -> StoreResult<Vec<Project>> {
        if self.property_name.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "the property name must be specified".to_string(),
            ));
        }

        let mut projects: Vec<Project> = self
            .lock_data()
            .iter()
            .filter(|project| project.active)
            .cloned()
            .collect();
        projects.sort_by_key(|project| project.id);
        Ok(projects)
    }
}

/// Fixture quotes matching the deployed table's starting id.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::single(1001, "Fry", "Shut up and take my money!", "Eye Phone", "Futurama"),
        Quote::single(1002, "Bender", "Bite my shiny metal ass.", "Every Episode", "Futurama"),
        Quote::single(
            1003,
            "Professor Farnsworth",
            "Good News everyone.",
            "Every Episode",
            "Futurama",
        ),
        Quote::single(
            1004,
            "Dr. Zoidberg",
            "Fry, It's Been Years Since Medical School, So Remind Me. \
             Disemboweling In Your Species: Fatal Or Non-Fatal?",
            "Mating",
            "Futurama",
        ),
        Quote::single(
            1005,
            "Amy Wong",
            "Finally, A Uniform I'd Be Happy To Be Caught Dead In!",
            "Every Episode",
            "Futurama",
        ),
        Quote::single(
            1006,
            "Hermes Conrad",
            "If You Ask Me, It's Mighty Suspicious. I'm Gonna Call The Police. \
             Right After I Flush Some Things.",
            "Every Episode",
            "Futurama",
        ),
        Quote::single(
            1007,
            "Zap Brannigan",
            "I Got Your Distress Call And Came Here As Soon As I Wanted To.",
            "Every Episode",
            "Futurama",
        ),
        Quote::single(1008, "Scruffy", "I'm scruffy, the janitor.", "Every Episode", "Futurama"),
    ]
}

/// Fixture projects covering both flag values and every series shape.
pub fn seed_projects() -> Vec<Project> {
    fn project(id: i32, active: bool, title: &str, kind: i32, series: Option<&str>, status: i32) -> Project {
        Project {
            id,
            active,
            title: title.to_string(),
            kind,
            series: series.map(str::to_string),
            status,
        }
    }

    vec![
        project(1000, false, "Survival", 2, None, 1),
        project(1001, true, "Aftermath", 1, None, 2),
        project(1002, true, "Discovery", 4, Some(""), 3),
        project(1003, false, "Crossroads", 4, Some("Harrison & Sylvia"), 4),
        project(1004, true, "Conspiracies", 4, Some("Harrison & Sylvia"), 5),
        project(1005, true, "Arrival", 3, None, 6),
        project(1006, false, "Hero Call", 2, None, 7),
        project(1007, false, "Mounting Tensions", 4, Some("Tergaria"), 8),
        project(1008, true, "Fortunes", 4, Some("Tergaria"), 7),
        project(1009, false, "Transformation", 2, None, 6),
    ]
}
