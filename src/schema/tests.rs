//! Tests for the schema module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Canonical Schema Tests
// ============================================================================

#[test]
fn test_declare_fields_order() {
    let ids: Vec<String> = declare_fields().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["account_name", "date_sent", "direction"]);
}

#[test]
fn test_declare_fields_types() {
    let fields = declare_fields();
    assert_eq!(fields[0].semantic_type, SemanticType::Text);
    assert_eq!(fields[1].semantic_type, SemanticType::YearMonthDay);
    assert_eq!(fields[2].semantic_type, SemanticType::Text);
}

#[test]
fn test_declare_fields_is_deterministic() {
    assert_eq!(declare_fields(), declare_fields());
}

#[test]
fn test_field_wire_format() {
    let value = serde_json::to_value(FieldDefinition::year_month_day("date_sent", "Date Sent"))
        .unwrap();
    assert_eq!(
        value,
        json!({
            "name": "date_sent",
            "label": "Date Sent",
            "dataType": "STRING",
            "semantics": {
                "conceptType": "DIMENSION",
                "semanticType": "YEAR_MONTH_DAY"
            }
        })
    );
}

#[test]
fn test_field_from_wire_format() {
    let field: FieldDefinition = serde_json::from_value(json!({
        "name": "direction",
        "label": "Messages Sent",
        "dataType": "STRING",
        "semantics": { "semanticType": "TEXT" }
    }))
    .unwrap();
    assert_eq!(field, FieldDefinition::text("direction", "Messages Sent"));
}

#[test]
fn test_schema_response() {
    let registry = SchemaRegistry::default();
    let response = registry.schema();
    assert_eq!(response.schema, declare_fields());

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["schema"].as_array().unwrap().len(), 3);
    assert_eq!(value["schema"][0]["name"], "account_name");
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_registry_rejects_duplicate_ids() {
    let err = SchemaRegistry::new(vec![
        FieldDefinition::text("a", "A"),
        FieldDefinition::text("a", "Again"),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_registry_lookup() {
    let registry = SchemaRegistry::default();
    assert!(registry.contains(DIRECTION));
    assert!(!registry.contains("body"));
    assert_eq!(registry.get(DATE_SENT).unwrap().display_name, "Date Sent");
}

// ============================================================================
// Projection Tests
// ============================================================================

#[test]
fn test_project_keeps_caller_order() {
    let registry = SchemaRegistry::default();
    let subset = registry.project(&[DIRECTION, ACCOUNT_NAME]).unwrap();
    assert_eq!(subset.ids(), vec!["direction", "account_name"]);
    assert_eq!(subset.len(), 2);
}

#[test]
fn test_project_all_fields() {
    let registry = SchemaRegistry::default();
    let subset = registry
        .project(&["account_name", "date_sent", "direction"])
        .unwrap();
    assert_eq!(subset.fields(), registry.fields());
}

#[test]
fn test_project_every_ordering() {
    let registry = SchemaRegistry::default();
    let orders = [
        vec![ACCOUNT_NAME, DATE_SENT, DIRECTION],
        vec![ACCOUNT_NAME, DIRECTION, DATE_SENT],
        vec![DATE_SENT, ACCOUNT_NAME, DIRECTION],
        vec![DATE_SENT, DIRECTION, ACCOUNT_NAME],
        vec![DIRECTION, ACCOUNT_NAME, DATE_SENT],
        vec![DIRECTION, DATE_SENT, ACCOUNT_NAME],
    ];
    for order in orders {
        let subset = registry.project(&order).unwrap();
        assert_eq!(subset.ids(), order);
    }
}

#[test]
fn test_project_empty() {
    let registry = SchemaRegistry::default();
    let subset = registry.project::<&str>(&[]).unwrap();
    assert!(subset.is_empty());
}

#[test]
fn test_project_owned_ids() {
    let registry = SchemaRegistry::default();
    let ids = vec!["date_sent".to_string()];
    let subset = registry.project(&ids).unwrap();
    assert_eq!(subset.ids(), vec!["date_sent"]);
}

#[test]
fn test_project_unknown_field() {
    let registry = SchemaRegistry::default();
    let err = registry
        .project(&["account_name", "acount_name"])
        .unwrap_err();
    assert!(matches!(err, Error::UnknownField { ref field } if field == "acount_name"));
}

#[test]
fn test_subset_serializes_as_list() {
    let registry = SchemaRegistry::default();
    let subset = registry.project(&[DIRECTION]).unwrap();
    let value = serde_json::to_value(&subset).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["label"], "Messages Sent");
}
