//! Quote store contract and table-backed implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and batch APIs over the quote table.
//! - Sample random quote ids without loading the full table.
//!
//! # Invariants
//! - Empty batch inputs are rejected before any table round trip.
//! - `modify`/`delete` confirm presence first, because the raw put/delete
//!   primitives cannot distinguish "created" from "overwritten".

use super::sample::sample_distinct_ids;
use super::{StoreError, StoreResult};
use crate::config::QuoteOptions;
use crate::model::quote::Quote;
use crate::table::{TableClient, TableDescription};
use log::{debug, warn};

/// Store contract for quote records.
pub trait QuoteStore {
    /// Unconditionally upserts one quote. A second add with the same id
    /// silently overwrites the stored row.
    fn add(&self, quote: &Quote) -> StoreResult<()>;

    /// Stores all quotes in one batched put.
    fn batch_store(&self, quotes: &[Quote]) -> StoreResult<()>;

    /// Point lookup; an absent id is `Ok(None)`, never an error.
    fn get_item(&self, id: i32) -> StoreResult<Option<Quote>>;

    /// One batched get returning exactly the subset of requested ids that
    /// exist. Misses are silently omitted.
    fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Quote>>;

    /// Overwrites an existing quote; `NotFound` when no row has this id.
    fn modify(&self, quote: &Quote) -> StoreResult<()>;

    /// Removes an existing quote; `NotFound` when no row has this id.
    fn delete(&self, quote: &Quote) -> StoreResult<()>;

    /// Draws `number_to_get` distinct ids from
    /// `[beginning_id, available_count)` and batch-fetches them. Sparse id
    /// ranges may yield fewer records than requested; that is not an error.
    fn get_random_quotes(&self, number_to_get: i32, available_count: i32)
        -> StoreResult<Vec<Quote>>;

    /// Table metadata used to derive the sampling upper bound.
    fn table_description(&self) -> StoreResult<TableDescription>;
}

/// Quote store backed by the managed key-value table.
pub struct TableQuoteStore<C: TableClient<Quote>> {
    client: C,
    options: QuoteOptions,
}

impl<C: TableClient<Quote>> TableQuoteStore<C> {
    /// Creates a store over the given table client.
    pub fn new(client: C, options: QuoteOptions) -> Self {
        Self { client, options }
    }
}

impl<C: TableClient<Quote>> QuoteStore for TableQuoteStore<C> {
    fn add(&self, quote: &Quote) -> StoreResult<()> {
        debug!("event=quote_add module=quote_store status=start id={}", quote.id);
        self.client.put(quote)?;
        Ok(())
    }

    fn batch_store(&self, quotes: &[Quote]) -> StoreResult<()> {
        if quotes.is_empty() {
            warn!("event=quote_batch_store module=quote_store status=rejected reason=empty_input");
            return Err(StoreError::InvalidArgument(
                "at least one quote must be provided".to_string(),
            ));
        }

        self.client.batch_put(quotes)?;
        debug!(
            "event=quote_batch_store module=quote_store status=ok count={}",
            quotes.len()
        );
        Ok(())
    }

    fn get_item(&self, id: i32) -> StoreResult<Option<Quote>> {
        let quote = self.client.get(&id)?;
        if quote.is_none() {
            warn!("event=quote_get module=quote_store status=miss id={id}");
        }
        Ok(quote)
    }

    fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Quote>> {
        if ids.is_empty() {
            warn!("event=quote_batch_get module=quote_store status=rejected reason=empty_input");
            return Err(StoreError::InvalidArgument(
                "at least one id must be provided".to_string(),
            ));
        }

        let quotes = self.client.batch_get(ids)?;
        debug!(
            "event=quote_batch_get module=quote_store status=ok requested={} found={}",
            ids.len(),
            quotes.len()
        );
        Ok(quotes)
    }

    fn modify(&self, quote: &Quote) -> StoreResult<()> {
        // Load-then-act; concurrent modifiers can race and the last writer
        // wins. Accepted for low-contention administrative usage.
        if self.client.get(&quote.id)?.is_none() {
            warn!("event=quote_modify module=quote_store status=miss id={}", quote.id);
            return Err(StoreError::NotFound { id: quote.id });
        }

        debug!("event=quote_modify module=quote_store status=ok id={}", quote.id);
        self.client.put(quote)?;
        Ok(())
    }

    fn delete(&self, quote: &Quote) -> StoreResult<()> {
        if self.client.get(&quote.id)?.is_none() {
            warn!("event=quote_delete module=quote_store status=miss id={}", quote.id);
            return Err(StoreError::NotFound { id: quote.id });
        }

        debug!("event=quote_delete module=quote_store status=ok id={}", quote.id);
        self.client.delete(&quote.id)?;
        Ok(())
    }

    fn get_random_quotes(
        &self,
        number_to_get: i32,
        available_count: i32,
    ) -> StoreResult<Vec<Quote>> {
        let ids = sample_distinct_ids(
            &mut rand::thread_rng(),
            self.options.beginning_id,
            available_count,
            number_to_get,
        )?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            "event=quote_random module=quote_store status=sampled count={}",
            ids.len()
        );
        self.batch_get(&ids)
    }

    fn table_description(&self) -> StoreResult<TableDescription> {
        if self.options.table_name.trim().is_empty() {
            warn!("event=quote_describe module=quote_store status=rejected reason=blank_table_name");
            return Err(StoreError::InvalidArgument(
                "the table name must be specified".to_string(),
            ));
        }

        Ok(self.client.describe_table()?)
    }
}
