//! Gesture script parsing and replay.

use erdq::model::{AggregationFunction, FieldKey, SortDirection, Table};
use erdq::script::{Action, ReplaySummary, Script, ScriptError};
use erdq::EditorSession;

const ORDERS_SCRIPT: &str = r#"{
  "tables": [
    { "name": "orders", "columns": { "id": "integer", "customer_id": "integer", "amount": "numeric(12,2)", "status": "varchar" } },
    { "name": "customers", "columns": { "id": "integer", "name": "text" } }
  ],
  "actions": [
    { "addTable": { "table": "orders" } },
    { "addTable": { "table": "customers" } },
    { "connect": { "source": "0-customer_id-source", "target": "1-id-target" } },
    { "connect": { "source": "0-missing-source", "target": "1-id-target" } },
    { "configure": { "table": "customers", "field": "name",
                     "config": { "alias": "customer", "groupBy": true, "sortBy": { "direction": "ASC", "priority": 2 } } } },
    { "configure": { "table": "orders", "field": "amount",
                     "config": { "aggregation": { "type": "SUM", "alias": "total_amount" }, "sortBy": { "direction": "DESC", "priority": 1 } } } },
    { "configure": { "table": "orders", "field": "status",
                     "config": { "isIncluded": false, "filter": { "operator": "=", "value": "paid" } } } }
  ]
}"#;

#[test]
fn test_parse_actions() {
    let script = Script::parse(ORDERS_SCRIPT).unwrap();
    assert_eq!(script.tables.len(), 2);
    assert_eq!(script.actions.len(), 7);
    assert_eq!(
        script.actions[0],
        Action::AddTable {
            table: "orders".to_string()
        }
    );

    let Action::Configure { config, .. } = &script.actions[5] else {
        panic!("expected configure action");
    };
    let aggregation = config.aggregation.as_ref().unwrap();
    assert_eq!(aggregation.function, AggregationFunction::Sum);
    assert!(config.is_included);
}

#[test]
fn test_replay_builds_session() {
    let script = Script::parse(ORDERS_SCRIPT).unwrap();
    let mut session = EditorSession::new();

    let summary = script.replay(&mut session, &[]).unwrap();
    assert_eq!(
        summary,
        ReplaySummary {
            nodes_added: 2,
            connections_added: 1,
            connections_skipped: 1,
            fields_configured: 3,
        }
    );

    let spec = session.render();
    assert_eq!(
        spec.include_fields,
        vec!["customers.name AS customer", "SUM(orders.amount) AS total_amount"]
    );
    assert_eq!(spec.group_by, vec!["customers.name"]);
    assert_eq!(spec.filters.len(), 1);
    assert_eq!(spec.filters[0].field, "orders.status");
    assert_eq!(spec.sort_by[0].field, "orders.amount");
    assert_eq!(spec.sort_by[0].direction, SortDirection::Desc);
    assert_eq!(spec.reference_tables.len(), 2);
}

#[test]
fn test_replay_resolves_catalog_tables() {
    let script = Script::parse(
        r#"{ "actions": [ { "addTable": { "table": "products" } },
                          { "configure": { "table": "products", "field": "sku" } } ] }"#,
    )
    .unwrap();
    assert_eq!(script.undeclared_tables(), vec!["products"]);

    let catalog = vec![Table::from_columns("products", [("id", "integer"), ("sku", "text")])];
    let mut session = EditorSession::new();
    script.replay(&mut session, &catalog).unwrap();

    assert_eq!(session.diagram().table_names(), vec!["products"]);
    assert!(session.fields().contains(&FieldKey::new("products", "sku")));
    assert_eq!(session.render().include_fields, vec!["products.sku"]);
}

#[test]
fn test_replay_unknown_table() {
    let script = Script::parse(r#"{ "actions": [ { "addTable": { "table": "ghost" } } ] }"#).unwrap();
    let mut session = EditorSession::new();

    let err = script.replay(&mut session, &[]).unwrap_err();
    assert!(matches!(err, ScriptError::UnknownTable(ref name) if name == "ghost"));
}

#[test]
fn test_undeclared_tables_deduplicated() {
    let script = Script::parse(
        r#"{ "tables": [ { "name": "orders" } ],
             "actions": [ { "addTable": { "table": "orders" } },
                          { "addTable": { "table": "users" } },
                          { "addTable": { "table": "users" } } ] }"#,
    )
    .unwrap();
    assert_eq!(script.undeclared_tables(), vec!["users"]);
}

#[test]
fn test_parse_error() {
    assert!(matches!(
        Script::parse("{ not json"),
        Err(ScriptError::ParseError(_))
    ));
}

#[test]
fn test_from_file_reads_demo() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/orders.json");
    let script = Script::from_file(path).unwrap();
    assert!(script.undeclared_tables().is_empty());

    let mut session = EditorSession::new();
    let summary = script.replay(&mut session, &[]).unwrap();
    assert_eq!(summary.nodes_added, 2);
    assert_eq!(summary.connections_added, 1);
}
