//! Quote facade service.
//!
//! # Responsibility
//! - Expose the quote store to the transport layer as a thin facade.
//! - Derive the random-sampling upper bound from table metadata.
//!
//! # Invariants
//! - The facade performs no business logic beyond the sampling-bound
//!   derivation; everything else is delegation.

use crate::config::QuoteOptions;
use crate::model::quote::Quote;
use crate::store::quote_store::QuoteStore;
use crate::store::{StoreError, StoreResult};
use log::warn;

/// Facade over a quote store implementation.
pub struct QuoteService<S: QuoteStore> {
    store: S,
    options: QuoteOptions,
}

impl<S: QuoteStore> QuoteService<S> {
    /// Creates a facade over the given store.
    pub fn new(store: S, options: QuoteOptions) -> Self {
        Self { store, options }
    }

    /// Upserts one quote.
    pub fn add(&self, quote: &Quote) -> StoreResult<()> {
        self.store.add(quote)
    }

    /// Stores a non-empty batch of quotes.
    pub fn batch_store(&self, quotes: &[Quote]) -> StoreResult<()> {
        self.store.batch_store(quotes)
    }

    /// Point lookup; absent ids resolve to `Ok(None)`.
    pub fn get_item(&self, id: i32) -> StoreResult<Option<Quote>> {
        self.store.get_item(id)
    }

    /// Batched lookup returning the present subset of the requested ids.
    pub fn batch_get(&self, ids: &[i32]) -> StoreResult<Vec<Quote>> {
        self.store.batch_get(ids)
    }

    /// Overwrites an existing quote.
    pub fn modify(&self, quote: &Quote) -> StoreResult<()> {
        self.store.modify(quote)
    }

    /// Removes an existing quote.
    pub fn delete(&self, quote: &Quote) -> StoreResult<()> {
        self.store.delete(quote)
    }

    /// Samples `number_to_get` random quotes.
    ///
    /// Derives the sampling upper bound from the table's approximate item
    /// count offset by the configured starting id, then delegates to the
    /// store's sampling routine.
    ///
    /// # Errors
    /// - `OutOfRange` when the derived sampling bound does not fit in `i32`.
    /// - Store and sampling errors propagate unchanged.
    pub fn get_random_quotes(&self, number_to_get: i32) -> StoreResult<Vec<Quote>> {
        let description = self.store.table_description()?;

        // Guard the derived bound, not just the raw count: an item count
        // within `beginning_id - 1` of `i32::MAX` would still overflow the
        // offset addition.
        let available = description
            .item_count
            .saturating_add(i64::from(self.options.beginning_id) - 1);
        if available >= i64::from(i32::MAX) {
            warn!(
                "event=quote_random module=quote_service status=rejected reason=item_count_overflow item_count={}",
                description.item_count
            );
            return Err(StoreError::OutOfRange(
                "there are too many quotes in the database".to_string(),
            ));
        }

        self.store.get_random_quotes(number_to_get, available as i32)
    }
}
