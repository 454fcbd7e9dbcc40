//! Quote domain model.
//!
//! # Responsibility
//! - Define the canonical quote record stored in the Quote table.
//!
//! # Invariants
//! - `id` is globally unique within the table and never reused.
//! - `speakers` keeps dialogue order through the `order` field.

use serde::{Deserialize, Serialize};

/// One voice inside a quote, positioned within the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    /// The individual speaking.
    pub person: String,
    /// The individual's words.
    pub words: String,
    /// Position of this speaker within the quote.
    pub order: i32,
}

/// Where a quote came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// The book or episode the quote came from.
    pub story: String,
    /// The collection the story belongs to.
    pub series: String,
}

/// Canonical quote record keyed by a single integer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The identifier for the quote; the single hash key of the table.
    pub id: i32,
    /// The collection of speakers in dialogue order.
    pub speakers: Vec<Speaker>,
    /// The source of the quote.
    pub source: Source,
}

impl Quote {
    /// Builds a single-speaker quote, the most common record shape.
    pub fn single(
        id: i32,
        person: impl Into<String>,
        words: impl Into<String>,
        story: impl Into<String>,
        series: impl Into<String>,
    ) -> Self {
        Self {
            id,
            speakers: vec![Speaker {
                person: person.into(),
                words: words.into(),
                order: 0,
            }],
            source: Source {
                story: story.into(),
                series: series.into(),
            },
        }
    }
}
