//! Facade services consumed by the transport layer.
//!
//! # Responsibility
//! - Expose store contracts as thin, validated entry points.
//! - Keep the transport layer decoupled from table details.

pub mod progress_service;
pub mod quote_service;
