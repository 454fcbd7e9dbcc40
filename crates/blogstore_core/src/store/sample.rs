//! Uniform without-replacement id sampling.
//!
//! # Responsibility
//! - Draw distinct candidate ids from a bounded keyspace without loading
//!   the table.
//!
//! # Invariants
//! - Draws are inclusive on `begin` and exclusive on `end`.
//! - A returned set never contains duplicate ids.
//! - Candidates are rejected only for uniqueness, not existence; sparse
//!   ranges can later yield fewer records than ids.

use super::{StoreError, StoreResult};
use log::{debug, warn};
use rand::Rng;

/// Draws `number_to_get` distinct ids uniformly at random from `[begin, end)`.
///
/// Rejection sampling over the id space: a drawn id is kept unless it was
/// already kept, and the loop stops once `number_to_get` distinct ids are
/// collected. The randomness source is caller-supplied so tests can drive
/// the routine deterministically.
///
/// # Errors
/// - `OutOfRange` when `end < begin`, which means the reported table size
///   is implausible.
/// - `OutOfRange` when `number_to_get` exceeds the range size; the
///   rejection loop could never terminate in that case.
pub fn sample_distinct_ids<R: Rng>(
    rng: &mut R,
    begin: i32,
    end: i32,
    number_to_get: i32,
) -> StoreResult<Vec<i32>> {
    if end < begin {
        warn!(
            "event=sample_ids module=sample status=rejected reason=bound_below_floor begin={begin} end={end}"
        );
        return Err(StoreError::OutOfRange(
            "there was an issue getting the total number of records from the table".to_string(),
        ));
    }

    if number_to_get <= 0 {
        return Ok(Vec::new());
    }

    let range_len = i64::from(end) - i64::from(begin);
    if i64::from(number_to_get) > range_len {
        warn!(
            "event=sample_ids module=sample status=rejected reason=range_exhausted requested={number_to_get} range_len={range_len}"
        );
        return Err(StoreError::OutOfRange(format!(
            "cannot draw {number_to_get} distinct ids from a range of {range_len}"
        )));
    }

    let mut ids: Vec<i32> = Vec::with_capacity(number_to_get as usize);
    while ids.len() < number_to_get as usize {
        let candidate = rng.gen_range(begin..end);
        if !ids.contains(&candidate) {
            ids.push(candidate);
        }
    }

    debug!(
        "event=sample_ids module=sample status=ok count={} begin={begin} end={end}",
        ids.len()
    );
    Ok(ids)
}
