//! Tests for the mapper module

use super::*;
use crate::error::Error;
use crate::schema::{declare_fields, FieldDefinition, FieldSubset, SchemaRegistry};
use crate::types::JsonObject;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn subset(ids: &[&str]) -> FieldSubset {
    SchemaRegistry::default().project(ids).unwrap()
}

fn sample_records() -> Vec<Value> {
    vec![
        json!({"account_name": "Acme", "date_sent": "2024-01-05", "direction": "outbound"}),
        json!({"account_name": "Globex", "date_sent": "2024-01-06", "direction": "inbound"}),
    ]
}

// ============================================================================
// Scalar Normalisation Tests
// ============================================================================

#[test_case(None, json!(""); "missing")]
#[test_case(Some(json!(null)), json!(""); "null")]
#[test_case(Some(json!("Acme")), json!("Acme"); "string")]
#[test_case(Some(json!(42)), json!(42); "number")]
#[test_case(Some(json!(true)), json!(true); "boolean")]
#[test_case(Some(json!([1, 2])), json!("[1,2]"); "array")]
#[test_case(Some(json!({"k": "v"})), json!("{\"k\":\"v\"}"); "object")]
fn test_to_scalar(input: Option<Value>, expected: Value) {
    assert_eq!(to_scalar(input.as_ref()), expected);
}

// ============================================================================
// Extractor Table Tests
// ============================================================================

#[test]
fn test_default_table_covers_schema() {
    let table = ExtractorTable::default();
    assert_eq!(table.len(), 3);
    for field in declare_fields() {
        assert!(table.contains(&field.id), "no extractor for {}", field.id);
    }
}

#[test]
fn test_register_replaces() {
    let table = ExtractorTable::new()
        .with("direction", attribute("direction"))
        .with("direction", Box::new(|_: &JsonObject| json!("fixed")));

    let record = json!({"direction": "inbound"});
    let extract = table.get("direction").unwrap();
    assert_eq!(extract(record.as_object().unwrap()), json!("fixed"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_empty_table() {
    let table = ExtractorTable::new();
    assert!(table.is_empty());
    assert!(table.get("account_name").is_none());
}

// ============================================================================
// Row Mapping Tests
// ============================================================================

#[test]
fn test_map_rows_full_subset() {
    let records =
        vec![json!({"account_name": "Acme", "date_sent": "2024-01-05", "direction": "outbound"})];
    let rows = map_rows(&subset(&["account_name", "date_sent", "direction"]), &records).unwrap();

    assert_eq!(
        rows,
        vec![OutputRow {
            values: vec![json!("Acme"), json!("2024-01-05"), json!("outbound")]
        }]
    );
}

#[test]
fn test_map_rows_follows_subset_order() {
    let rows = map_rows(&subset(&["direction", "account_name"]), &sample_records()).unwrap();

    assert_eq!(rows[0].values, vec![json!("outbound"), json!("Acme")]);
    assert_eq!(rows[1].values, vec![json!("inbound"), json!("Globex")]);
}

#[test_case(&[]; "no fields")]
#[test_case(&["date_sent"]; "one field")]
#[test_case(&["direction", "date_sent", "account_name"]; "all fields reversed")]
#[test_case(&["direction", "direction"]; "repeated field")]
fn test_map_rows_lengths(ids: &[&str]) {
    let records = sample_records();
    let rows = map_rows(&subset(ids), &records).unwrap();

    assert_eq!(rows.len(), records.len());
    for row in &rows {
        assert_eq!(row.values.len(), ids.len());
    }
}

#[test]
fn test_map_rows_no_records() {
    let rows = map_rows(&subset(&["account_name"]), &[]).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_map_rows_missing_attributes() {
    let records = vec![json!({"account_name": "Acme"}), json!({})];
    let rows = map_rows(&subset(&["account_name", "direction"]), &records).unwrap();

    assert_eq!(rows[0].values, vec![json!("Acme"), json!("")]);
    assert_eq!(rows[1].values, vec![json!(""), json!("")]);
}

#[test]
fn test_map_rows_ignores_extra_attributes() {
    let records = vec![json!({"direction": "inbound", "body": "hello", "price": "-0.0075"})];
    let rows = map_rows(&subset(&["direction"]), &records).unwrap();
    assert_eq!(rows[0].values, vec![json!("inbound")]);
}

#[test]
fn test_map_rows_field_without_extractor() {
    let mut fields = declare_fields();
    fields.push(FieldDefinition::text("body", "Body"));
    let registry = SchemaRegistry::new(fields).unwrap();
    let subset = registry.project(&["body", "direction"]).unwrap();

    let records = vec![json!({"direction": "inbound", "body": "hello"})];
    let rows = map_rows(&subset, &records).unwrap();

    assert_eq!(rows[0].values, vec![json!(""), json!("inbound")]);
}

#[test]
fn test_map_rows_custom_extractor() {
    let mut fields = declare_fields();
    fields.push(FieldDefinition::text("body", "Body"));
    let registry = SchemaRegistry::new(fields).unwrap();

    let mapper = ResponseMapper::new(ExtractorTable::default().with("body", attribute("body")));
    let records = vec![json!({"direction": "inbound", "body": "hello"})];
    let rows = mapper
        .map_rows(&registry.project(&["body"]).unwrap(), &records)
        .unwrap();

    assert_eq!(rows[0].values, vec![json!("hello")]);
}

#[test]
fn test_map_rows_non_object_record() {
    let records = vec![
        json!({"direction": "inbound"}),
        json!("not a record"),
    ];
    let err = map_rows(&subset(&["direction"]), &records).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { index: 1, .. }));
}

#[test]
fn test_map_rows_non_object_fails_even_without_fields() {
    let err = map_rows(&subset(&[]), &[json!(null)]).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { index: 0, .. }));
}

#[test]
fn test_output_row_wire_shape() {
    let row = OutputRow {
        values: vec![json!("Acme"), json!("")],
    };
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        json!({"values": ["Acme", ""]})
    );
}
