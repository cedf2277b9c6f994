use erdq::fields::FieldConfigStore;
use erdq::model::{
    Aggregation, AggregationFunction, FieldConfig, FieldKey, Filter, FilterOperator, SortBy,
    SortDirection,
};

fn key(table: &str, field: &str) -> FieldKey {
    FieldKey::new(table, field)
}

#[test]
fn test_open_unconfigured_field_loads_default_draft() {
    let store = FieldConfigStore::new();
    let panel = store.open(key("orders", "amount"));

    assert_eq!(panel.key(), &key("orders", "amount"));
    assert_eq!(panel.draft(), &FieldConfig::default());
    assert!(store.is_empty());
}

#[test]
fn test_save_stores_draft() {
    let mut store = FieldConfigStore::new();
    let mut panel = store.open(key("orders", "amount"));
    panel
        .set_aggregation(Some(Aggregation::new(AggregationFunction::Sum)))
        .set_group_by(true);
    store.save(panel);

    let saved = store.get(&key("orders", "amount")).unwrap();
    assert_eq!(saved.aggregation, Some(Aggregation::new(AggregationFunction::Sum)));
    assert!(saved.group_by);
    assert!(saved.is_included);
}

#[test]
fn test_open_existing_field_loads_saved_config() {
    let mut store = FieldConfigStore::new();
    let mut panel = store.open(key("orders", "status"));
    panel.set_filter(Some(Filter::new(FilterOperator::Eq, "paid")));
    store.save(panel);

    let reopened = store.open(key("orders", "status"));
    assert_eq!(
        reopened.draft().filter,
        Some(Filter::new(FilterOperator::Eq, "paid"))
    );
}

#[test]
fn test_save_replaces_entry_wholesale() {
    let mut store = FieldConfigStore::new();

    let mut panel = store.open(key("orders", "amount"));
    panel
        .set_alias(Some("amt".to_string()))
        .set_sort(Some(SortBy::new(SortDirection::Asc, 1)));
    store.save(panel);

    let mut panel = store.open(key("orders", "amount"));
    panel.set_draft(FieldConfig::default().with_group_by(true));
    store.save(panel);

    let saved = store.get(&key("orders", "amount")).unwrap();
    assert!(saved.alias.is_none());
    assert!(saved.sort_by.is_none());
    assert!(saved.group_by);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_discarded_panel_leaves_store_untouched() {
    let mut store = FieldConfigStore::new();
    let mut panel = store.open(key("orders", "amount"));
    panel.set_alias(Some("kept".to_string()));
    store.save(panel);

    let mut panel = store.open(key("orders", "amount"));
    panel.set_alias(Some("discarded".to_string())).set_included(false);
    panel.discard();

    let saved = store.get(&key("orders", "amount")).unwrap();
    assert_eq!(saved.alias.as_deref(), Some("kept"));
    assert!(saved.is_included);

    let panel = store.open(key("customers", "name"));
    drop(panel);
    assert!(!store.contains(&key("customers", "name")));
}

#[test]
fn test_resaving_keeps_original_position() {
    let mut store = FieldConfigStore::new();
    for field in ["a", "b", "c"] {
        let panel = store.open(key("t", field));
        store.save(panel);
    }
    let mut panel = store.open(key("t", "a"));
    panel.set_group_by(true);
    store.save(panel);

    let order: Vec<String> = store.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(order, vec!["t.a", "t.b", "t.c"]);
}

#[test]
fn test_snapshot_is_independent_of_later_saves() {
    let mut store = FieldConfigStore::new();
    let panel = store.open(key("orders", "id"));
    store.save(panel);

    let snapshot = store.snapshot();

    let mut panel = store.open(key("orders", "id"));
    panel.set_included(false);
    store.save(panel);

    assert!(snapshot[&key("orders", "id")].is_included);
    assert!(!store.get(&key("orders", "id")).unwrap().is_included);
}
