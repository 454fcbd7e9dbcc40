use blogstore_core::{
    seed_projects, seed_quotes, MemoryProjectStore, MemoryQuoteStore, ProjectStore, QuoteStore,
    StoreError,
};
use std::collections::HashSet;

#[test]
fn seed_quote_dataset_is_reachable_by_id() {
    let store = MemoryQuoteStore::with_seed_data();

    let quote = store.get_item(1001).unwrap().unwrap();
    assert_eq!(quote.speakers[0].person, "Fry");
    assert_eq!(quote.source.series, "Futurama");
}

#[test]
fn stub_stores_share_no_state_between_instances() {
    let first = MemoryQuoteStore::with_seed_data();
    let second = MemoryQuoteStore::with_seed_data();

    first
        .delete(&first.get_item(1001).unwrap().unwrap())
        .unwrap();

    assert_eq!(first.get_item(1001).unwrap(), None);
    assert!(second.get_item(1001).unwrap().is_some());
}

#[test]
fn stub_sampling_returns_distinct_records() {
    let store = MemoryQuoteStore::with_seed_data();

    let quotes = store.get_random_quotes(3, 0).unwrap();

    assert_eq!(quotes.len(), 3);
    let ids: HashSet<i32> = quotes.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn stub_sampling_beyond_the_dataset_is_out_of_range() {
    let store = MemoryQuoteStore::with_seed_data();
    let err = store
        .get_random_quotes(seed_quotes().len() as i32 + 1, 0)
        .unwrap_err();
    assert!(matches!(err, StoreError::OutOfRange(_)));
}

#[test]
fn stub_modify_and_delete_keep_presence_semantics() {
    let store = MemoryQuoteStore::new(Vec::new());
    let quote = seed_quotes().remove(0);

    assert!(matches!(
        store.modify(&quote).unwrap_err(),
        StoreError::NotFound { id: 1001 }
    ));

    store.add(&quote).unwrap();
    store.modify(&quote).unwrap();
    store.delete(&quote).unwrap();
    assert_eq!(store.get_item(1001).unwrap(), None);
}

#[test]
fn seed_project_lookup_resolves_single_rows() {
    let store = MemoryProjectStore::with_seed_data();

    let crossroads = store.get_item(1003).unwrap().unwrap();
    assert!(!crossroads.active);
    assert_eq!(crossroads.title, "Crossroads");
}

#[test]
fn seed_project_ambiguity_prefers_the_inactive_row() {
    let store = MemoryProjectStore::with_seed_data();

    // Seed id 1001 is active; persist the inactive variant alongside it.
    let mut retired = store.get_item(1001).unwrap().unwrap();
    retired.active = false;
    retired.status = 9;
    store.add(&retired).unwrap();

    let resolved = store.get_item(1001).unwrap().unwrap();
    assert!(!resolved.active);
    assert_eq!(resolved.status, 9);
}

#[test]
fn seed_active_projects_are_sorted_ascending() {
    let store = MemoryProjectStore::with_seed_data();

    let active = store.get_active_projects().unwrap();
    let ids: Vec<i32> = active.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1001, 1002, 1004, 1005, 1008]);
    assert!(active.iter().all(|p| p.active));
}

#[test]
fn blank_property_name_rejects_the_stub_active_scan() {
    let store = MemoryProjectStore::new(seed_projects(), "  ");
    assert!(matches!(
        store.get_active_projects().unwrap_err(),
        StoreError::InvalidArgument(_)
    ));
}

#[test]
fn project_kind_serializes_under_the_external_type_name() {
    let project = seed_projects().remove(1);
    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["type"], 1);
    assert!(value.get("kind").is_none());
    assert_eq!(value["title"], "Aftermath");
}

#[test]
fn quote_round_trips_through_json() {
    let quote = seed_quotes().remove(0);
    let json = serde_json::to_string(&quote).unwrap();
    let parsed: blogstore_core::Quote = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, quote);
}
