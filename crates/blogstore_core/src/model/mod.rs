//! Domain models for the blog backing stores.
//!
//! # Responsibility
//! - Define the canonical record shapes stored in the quote and progress
//!   tables.
//!
//! # Invariants
//! - Record identifiers are caller-supplied; no model generates ids.
//! - Serialized field naming matches the external table schema.

pub mod project;
pub mod quote;
