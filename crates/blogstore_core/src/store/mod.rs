//! Store layer contracts, errors, and policies.
//!
//! # Responsibility
//! - Define use-case oriented store contracts over the table boundary.
//! - Keep argument validation in front of every table round trip.
//!
//! # Invariants
//! - Reads of absent keys return `Ok(None)` or smaller sets, never errors.
//! - Write-path presence checks surface the same absence as `NotFound`,
//!   because the raw put/delete primitives cannot report it.
//! - Transport errors pass through unchanged; the store never retries.

use crate::table::TableError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod project_store;
pub mod quote_store;
pub mod resolve;
pub mod sample;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error taxonomy shared by both record kinds.
#[derive(Debug)]
pub enum StoreError {
    /// Absent or empty required input, rejected before any table call.
    InvalidArgument(String),
    /// Write-path presence check failed; the record must already exist.
    NotFound { id: i32 },
    /// Data-integrity or numeric-range violation.
    OutOfRange(String),
    /// Transport failure from the table client, propagated unchanged.
    Table(TableError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::NotFound { id } => {
                write!(f, "the item does not exist in the table: {id}")
            }
            Self::OutOfRange(message) => write!(f, "{message}"),
            Self::Table(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Table(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TableError> for StoreError {
    fn from(value: TableError) -> Self {
        Self::Table(value)
    }
}
