use blogstore_core::{MemoryTable, Quote, QuoteOptions, QuoteStore, StoreError, TableQuoteStore};
use std::collections::HashSet;

fn store() -> TableQuoteStore<MemoryTable<Quote>> {
    TableQuoteStore::new(MemoryTable::new(), QuoteOptions::default())
}

fn quote(id: i32, words: &str) -> Quote {
    Quote::single(id, "Fry", words, "Eye Phone", "Futurama")
}

#[test]
fn batch_store_then_batch_get_round_trips() {
    let store = store();
    let batch = vec![
        quote(1001, "first"),
        quote(1002, "second"),
        quote(1003, "third"),
    ];

    store.batch_store(&batch).unwrap();
    let fetched = store.batch_get(&[1001, 1002, 1003]).unwrap();

    let want: HashSet<i32> = batch.iter().map(|q| q.id).collect();
    let got: HashSet<i32> = fetched.iter().map(|q| q.id).collect();
    assert_eq!(got, want);
}

#[test]
fn get_item_on_absent_id_returns_none() {
    let store = store();
    assert_eq!(store.get_item(4242).unwrap(), None);
}

#[test]
fn add_silently_overwrites_an_existing_id() {
    let store = store();
    store.add(&quote(1001, "original")).unwrap();
    store.add(&quote(1001, "replacement")).unwrap();

    let loaded = store.get_item(1001).unwrap().unwrap();
    assert_eq!(loaded.speakers[0].words, "replacement");
}

#[test]
fn modify_overwrites_an_existing_quote() {
    let store = store();
    store.add(&quote(1001, "draft")).unwrap();

    store.modify(&quote(1001, "edited")).unwrap();

    let loaded = store.get_item(1001).unwrap().unwrap();
    assert_eq!(loaded.speakers[0].words, "edited");
}

#[test]
fn modify_on_missing_id_is_not_found() {
    let store = store();
    let err = store.modify(&quote(1001, "ghost")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 1001 }));
}

#[test]
fn delete_removes_the_row() {
    let store = store();
    store.add(&quote(1001, "short lived")).unwrap();

    store.delete(&quote(1001, "short lived")).unwrap();
    assert_eq!(store.get_item(1001).unwrap(), None);
}

#[test]
fn delete_on_missing_id_is_not_found() {
    let store = store();
    let err = store.delete(&quote(1001, "ghost")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 1001 }));
}

#[test]
fn empty_batch_inputs_are_invalid_arguments() {
    let store = store();
    assert!(matches!(
        store.batch_store(&[]).unwrap_err(),
        StoreError::InvalidArgument(_)
    ));
    assert!(matches!(
        store.batch_get(&[]).unwrap_err(),
        StoreError::InvalidArgument(_)
    ));
}

#[test]
fn batch_get_silently_drops_missing_ids() {
    let store = store();
    store.batch_store(&[quote(1001, "kept")]).unwrap();

    let fetched = store.batch_get(&[1001, 1002, 1003]).unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, 1001);
}

#[test]
fn table_description_reports_item_count() {
    let store = store();
    store
        .batch_store(&[quote(1001, "a"), quote(1002, "b")])
        .unwrap();

    assert_eq!(store.table_description().unwrap().item_count, 2);
}

#[test]
fn blank_table_name_rejects_description() {
    let options = QuoteOptions {
        table_name: "  ".to_string(),
        ..QuoteOptions::default()
    };
    let store = TableQuoteStore::new(MemoryTable::new(), options);

    assert!(matches!(
        store.table_description().unwrap_err(),
        StoreError::InvalidArgument(_)
    ));
}
