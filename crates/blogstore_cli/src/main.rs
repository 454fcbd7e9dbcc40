//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `blogstore_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use blogstore_core::{MemoryProjectStore, MemoryQuoteStore, ProjectStore, QuoteStore};

fn main() {
    println!("blogstore_core ping={}", blogstore_core::ping());
    println!("blogstore_core version={}", blogstore_core::core_version());

    let quotes = MemoryQuoteStore::with_seed_data();
    match quotes.get_item(1001) {
        Ok(Some(quote)) => println!(
            "seed quote id=1001 series={} speakers={}",
            quote.source.series,
            quote.speakers.len()
        ),
        Ok(None) => println!("seed quote id=1001 missing"),
        Err(err) => println!("seed quote lookup failed: {err}"),
    }

    let projects = MemoryProjectStore::with_seed_data();
    match projects.get_active_projects() {
        Ok(active) => println!("seed active projects={}", active.len()),
        Err(err) => println!("active project scan failed: {err}"),
    }
}
