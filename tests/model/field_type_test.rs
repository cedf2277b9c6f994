use erdq::model::{Field, FieldType, Table};

#[test]
fn test_numeric_column_types() {
    for db_type in ["integer", "bigint", "DECIMAL(10,2)", "numeric", "real", "double precision"] {
        assert_eq!(
            FieldType::from_column("quantity", db_type),
            FieldType::Number,
            "{db_type} should be numeric"
        );
    }
}

#[test]
fn test_date_and_boolean_column_types() {
    assert_eq!(FieldType::from_column("placed_on", "date"), FieldType::Date);
    assert_eq!(FieldType::from_column("placed_at", "timestamptz"), FieldType::Date);
    assert_eq!(FieldType::from_column("active", "boolean"), FieldType::Boolean);
    assert_eq!(FieldType::from_column("active", "bool"), FieldType::Boolean);
}

#[test]
fn test_unknown_types_fall_back_to_text() {
    assert_eq!(FieldType::from_column("name", "varchar(255)"), FieldType::Text);
    assert_eq!(FieldType::from_column("payload", "jsonb"), FieldType::Text);
    assert_eq!(FieldType::from_column("anything", ""), FieldType::Text);
}

#[test]
fn test_relation_is_never_inferred() {
    assert_eq!(
        FieldType::from_column("customer_id", "integer"),
        FieldType::Number
    );
}

#[test]
fn test_every_type_has_icon_and_color() {
    let all = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Number,
        FieldType::Date,
        FieldType::Boolean,
        FieldType::Relation,
    ];
    let mut icons: Vec<_> = all.iter().map(|t| t.icon()).collect();
    icons.dedup();
    assert_eq!(icons.len(), all.len());
    for t in all {
        assert!(t.color().starts_with('#'));
        assert_eq!(t.color().len(), 7);
    }
}

#[test]
fn test_key_flags() {
    let id = Field::from_column("id", "integer");
    assert!(id.is_primary_key);
    assert!(!id.is_foreign_key);

    let fk = Field::from_column("customer_id", "integer");
    assert!(!fk.is_primary_key);
    assert!(fk.is_foreign_key);

    let plain = Field::from_column("identity", "text");
    assert!(!plain.is_primary_key);
    assert!(!plain.is_foreign_key);
}

#[test]
fn test_table_from_columns() {
    let table = Table::from_columns(
        "customers",
        [("id", "integer"), ("email", "varchar"), ("name", "text")],
    );

    assert_eq!(table.name, "customers");
    assert_eq!(table.fields.len(), 3);
    assert_eq!(table.primary_key().map(|f| f.name.as_str()), Some("id"));
    assert_eq!(table.field("email").unwrap().field_type, FieldType::Email);
    assert_eq!(table.field("name").unwrap().id, "name");
    assert!(table.field("missing").is_none());
}

#[test]
fn test_field_serializes_in_camel_case() {
    let field = Field::from_column("customer_id", "integer");
    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "customer_id",
            "name": "customer_id",
            "type": "number",
            "isPrimaryKey": false,
            "isForeignKey": true
        })
    );
}
