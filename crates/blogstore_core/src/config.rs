//! Store configuration options.
//!
//! # Responsibility
//! - Define the option shapes the host process binds from configuration.
//! - Map the stub toggle to an explicit backend selector so the core never
//!   branches on environment.
//!
//! # Invariants
//! - Defaults match the deployed table layout: quote ids start at 1001 and
//!   the progress flag attribute is named `Active`.

use serde::Deserialize;

/// Backend the host factory selects at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory stub store seeded with a fixture dataset.
    Memory,
    /// Store backed by the managed key-value table.
    Table,
}

/// Options for the quote stack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoteOptions {
    /// Switches to the in-memory stub store during local development.
    pub mock_store: bool,
    /// Lowest identifier present in the quote table.
    pub beginning_id: i32,
    /// Quote table name.
    pub table_name: String,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            mock_store: false,
            beginning_id: 1001,
            table_name: "Quote".to_string(),
        }
    }
}

impl QuoteOptions {
    /// Backend implied by the stub toggle.
    pub fn backend(&self) -> StoreBackend {
        if self.mock_store {
            StoreBackend::Memory
        } else {
            StoreBackend::Table
        }
    }
}

/// Options for the progress stack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProgressOptions {
    /// Switches to the in-memory stub store during local development.
    pub mock_store: bool,
    /// Name of the boolean attribute active-set scans filter on. Must
    /// match the flag attribute the table schema actually stores
    /// (`Active` in the deployed layout).
    pub property_name: String,
    /// Progress table name.
    pub table_name: String,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            mock_store: false,
            property_name: "Active".to_string(),
            table_name: "Progress".to_string(),
        }
    }
}

impl ProgressOptions {
    /// Backend implied by the stub toggle.
    pub fn backend(&self) -> StoreBackend {
        if self.mock_store {
            StoreBackend::Memory
        } else {
            StoreBackend::Table
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProgressOptions, QuoteOptions, StoreBackend};

    #[test]
    fn quote_defaults_match_deployed_layout() {
        let options = QuoteOptions::default();
        assert!(!options.mock_store);
        assert_eq!(options.beginning_id, 1001);
        assert_eq!(options.table_name, "Quote");
        assert_eq!(options.backend(), StoreBackend::Table);
    }

    #[test]
    fn progress_defaults_match_deployed_layout() {
        let options = ProgressOptions::default();
        assert_eq!(options.property_name, "Active");
        assert_eq!(options.table_name, "Progress");
        assert_eq!(options.backend(), StoreBackend::Table);
    }

    #[test]
    fn mock_toggle_selects_memory_backend() {
        let options = QuoteOptions {
            mock_store: true,
            ..QuoteOptions::default()
        };
        assert_eq!(options.backend(), StoreBackend::Memory);
    }
}
