//! Core data-access facade for the blog backend.
//! This crate is the single source of truth for store contracts and
//! resolution/sampling policy.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod table;

pub use config::{ProgressOptions, QuoteOptions, StoreBackend};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::Project;
pub use model::quote::{Quote, Source, Speaker};
pub use service::progress_service::ProgressService;
pub use service::quote_service::QuoteService;
pub use store::memory::{seed_projects, seed_quotes, MemoryProjectStore, MemoryQuoteStore};
pub use store::project_store::{ProjectStore, TableProjectStore};
pub use store::quote_store::{QuoteStore, TableQuoteStore};
pub use store::resolve::{prefer_inactive, resolve_rows, Resolution};
pub use store::sample::sample_distinct_ids;
pub use store::{StoreError, StoreResult};
pub use table::memory::MemoryTable;
pub use table::{
    ScanCondition, TableClient, TableDescription, TableError, TableRecord, TableResult,
};

/// Liveness probe answered without touching any store. Lets host wiring
/// verify linkage before a table client exists.
pub fn ping() -> &'static str {
    "pong"
}

/// Version of the core store library, for host startup logs.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
