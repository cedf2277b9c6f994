//! Properties the compiler must hold for any diagram and config set.

use erdq::compile::compile;
use erdq::diagram::DiagramStore;
use erdq::fields::FieldConfigs;
use erdq::joins::infer_reference_tables;
use erdq::model::{
    Aggregation, AggregationFunction, Calculation, FieldConfig, FieldKey, Filter, FilterOperator,
    SortBy, SortDirection, Table,
};

fn sample_configs() -> Vec<(FieldKey, FieldConfig)> {
    vec![
        (
            FieldKey::new("orders", "amount"),
            FieldConfig::default()
                .with_aggregation(Aggregation::new(AggregationFunction::Sum))
                .with_sort(SortBy::new(SortDirection::Desc, 2)),
        ),
        (
            FieldKey::new("orders", "status"),
            FieldConfig::filter_only(Filter::new(FilterOperator::In, "paid,shipped"))
                .with_sort(SortBy::new(SortDirection::Asc, 5)),
        ),
        (
            FieldKey::new("customers", "name"),
            FieldConfig::default()
                .with_alias("customer")
                .with_group_by(true)
                .with_sort(SortBy::new(SortDirection::Asc, 1)),
        ),
        (
            FieldKey::new("customers", "id"),
            FieldConfig::default()
                .with_calculation(Calculation::new("customers.id * 10", "scaled"))
                .with_sort(SortBy::new(SortDirection::Asc, 4)),
        ),
        (
            FieldKey::new("orders", "placed_at"),
            FieldConfig::default().with_sort(SortBy::new(SortDirection::Desc, 3)),
        ),
    ]
}

fn diagram() -> DiagramStore {
    let mut store = DiagramStore::new();
    store.add_table(Table::from_columns(
        "orders",
        [
            ("id", "integer"),
            ("customer_id", "integer"),
            ("amount", "numeric"),
            ("status", "text"),
            ("placed_at", "timestamp"),
        ],
    ));
    store.add_table(Table::from_columns(
        "customers",
        [("id", "integer"), ("name", "text")],
    ));
    store
        .add_connection("0-customer_id-source", "1-id-target")
        .unwrap();
    store
}

#[test]
fn test_compile_is_idempotent() {
    let cfgs: FieldConfigs = sample_configs().into_iter().collect();
    let store = diagram();
    let refs = infer_reference_tables(&store);
    let names = store.table_names();

    let first = compile(&cfgs, Some(refs.as_slice()), &names);
    for _ in 0..5 {
        let again = compile(&cfgs, Some(refs.as_slice()), &names);
        assert_eq!(again, first);
        assert_eq!(
            serde_json::to_string(&again).unwrap(),
            serde_json::to_string(&first).unwrap()
        );
    }
    let again = compile(&cfgs, Some(refs.as_slice()), &names);
    assert_eq!(first.fingerprint().unwrap(), again.fingerprint().unwrap());
}

#[test]
fn test_compile_does_not_mutate_inputs() {
    let cfgs: FieldConfigs = sample_configs().into_iter().collect();
    let store = diagram();
    let refs = infer_reference_tables(&store);
    let names = store.table_names();

    let cfgs_before = cfgs.clone();
    let refs_before = refs.clone();
    let names_before = names.clone();

    let _ = compile(&cfgs, Some(refs.as_slice()), &names);

    assert_eq!(cfgs, cfgs_before);
    assert_eq!(refs, refs_before);
    assert_eq!(names, names_before);
}

#[test]
fn test_sort_order_independent_of_save_order() {
    let configs = sample_configs();
    let n = configs.len();

    // Every rotation of the save order yields the same sort sequence.
    for shift in 0..n {
        let mut rotated = configs.clone();
        rotated.rotate_left(shift);
        let cfgs: FieldConfigs = rotated.into_iter().collect();
        let spec = compile(&cfgs, None, &["orders".to_string(), "customers".to_string()]);

        let priorities: Vec<i32> = spec.sort_by.iter().map(|s| s.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5]);
        assert_eq!(spec.sort_by[0].field, "customers.name");
    }

    let mut reversed = configs;
    reversed.reverse();
    let cfgs: FieldConfigs = reversed.into_iter().collect();
    let spec = compile(&cfgs, None, &[]);
    assert!(spec.sort_by.windows(2).all(|w| w[0].priority <= w[1].priority));
}

#[test]
fn test_equal_priorities_keep_config_order() {
    let cfgs: FieldConfigs = [
        (
            FieldKey::new("t", "b"),
            FieldConfig::default().with_sort(SortBy::new(SortDirection::Asc, 1)),
        ),
        (
            FieldKey::new("t", "a"),
            FieldConfig::default().with_sort(SortBy::new(SortDirection::Desc, 1)),
        ),
    ]
    .into_iter()
    .collect();

    let spec = compile(&cfgs, None, &["t".to_string()]);
    let fields: Vec<&str> = spec.sort_by.iter().map(|s| s.field.as_str()).collect();
    assert_eq!(fields, vec!["t.b", "t.a"]);
}

#[test]
fn test_excluded_filter_field_never_projected() {
    let cfgs: FieldConfigs = sample_configs().into_iter().collect();
    let spec = compile(&cfgs, None, &[]);

    assert!(spec.filters.iter().any(|f| f.field == "orders.status"));
    assert!(!spec
        .include_fields
        .iter()
        .any(|f| f.contains("orders.status")));
}

#[test]
fn test_joins_array_always_empty() {
    let cfgs: FieldConfigs = sample_configs().into_iter().collect();
    let store = diagram();
    let refs = infer_reference_tables(&store);
    let spec = compile(&cfgs, Some(refs.as_slice()), &store.table_names());

    assert!(spec.joins.is_empty());
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["joins"], serde_json::json!([]));
}
