use erdq::model::{
    Aggregation, AggregationFunction, Calculation, FieldConfig, FieldKey, Filter, FilterOperator,
    SortBy, SortDirection,
};
use serde_json::json;

#[test]
fn test_default_config() {
    let config = FieldConfig::default();
    assert!(config.is_included);
    assert!(!config.group_by);
    assert!(config.alias.is_none());
    assert!(config.aggregation.is_none());
    assert!(config.calculation.is_none());
    assert!(config.filter.is_none());
    assert!(config.sort_by.is_none());
}

#[test]
fn test_partial_config_deserializes_with_defaults() {
    let config: FieldConfig = serde_json::from_value(json!({
        "aggregation": { "type": "SUM", "alias": "total_amount" }
    }))
    .unwrap();

    assert!(config.is_included);
    assert!(!config.group_by);
    assert_eq!(
        config.aggregation,
        Some(Aggregation::new(AggregationFunction::Sum).with_alias("total_amount"))
    );
}

#[test]
fn test_config_serializes_only_set_directives() {
    let config = FieldConfig::filter_only(Filter::new(FilterOperator::NotIn, "a,b"))
        .with_sort(SortBy::new(SortDirection::Desc, 3));

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({
            "isIncluded": false,
            "filter": { "operator": "NOT IN", "value": "a,b" },
            "groupBy": false,
            "sortBy": { "direction": "DESC", "priority": 3 }
        })
    );
}

#[test]
fn test_filter_operator_wire_names() {
    let cases = [
        (FilterOperator::Eq, "="),
        (FilterOperator::NotEq, "!="),
        (FilterOperator::Gt, ">"),
        (FilterOperator::Lt, "<"),
        (FilterOperator::GtEq, ">="),
        (FilterOperator::LtEq, "<="),
        (FilterOperator::Like, "LIKE"),
        (FilterOperator::In, "IN"),
        (FilterOperator::NotIn, "NOT IN"),
    ];
    for (op, wire) in cases {
        assert_eq!(serde_json::to_value(op).unwrap(), json!(wire));
        assert_eq!(op.as_str(), wire);
    }
}

#[test]
fn test_default_aggregation_aliases() {
    assert_eq!(AggregationFunction::Count.default_alias("id"), "count_id");
    assert_eq!(
        AggregationFunction::Distinct.default_alias("email"),
        "distinct_email"
    );
    assert_eq!(
        Aggregation::new(AggregationFunction::Min).resolved_alias("amount"),
        "min_amount"
    );
}

#[test]
fn test_calculation_completeness() {
    assert!(Calculation::new("amount * 1.2", "gross").is_complete());
    assert!(!Calculation::new("", "gross").is_complete());
    assert!(!Calculation::default().is_complete());
}

#[test]
fn test_field_key_serializes_as_string() {
    let key = FieldKey::new("orders", "amount");
    assert_eq!(serde_json::to_value(&key).unwrap(), json!("orders.amount"));
    let back: FieldKey = serde_json::from_value(json!("orders.amount")).unwrap();
    assert_eq!(back, key);
    assert!(serde_json::from_value::<FieldKey>(json!("orders")).is_err());
}
