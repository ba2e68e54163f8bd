//! Tests for decoder module

use super::*;
use crate::error::Error;
use serde_json::json;

#[test]
fn test_json_decoder_array() {
    let decoder = JsonDecoder::new();
    let body = r#"[{"direction": "inbound"}, {"direction": "outbound"}]"#;

    let records = decoder.decode(body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["direction"], "inbound");
    assert_eq!(records[1]["direction"], "outbound");
}

#[test]
fn test_json_decoder_empty_array() {
    let records = JsonDecoder::new().decode("[]").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_json_decoder_keeps_non_object_entries() {
    let records = JsonDecoder::new().decode(r#"[{"a": 1}, 2, "x"]"#).unwrap();
    assert_eq!(records, vec![json!({"a": 1}), json!(2), json!("x")]);
}

#[test]
fn test_json_decoder_rejects_object() {
    let err = JsonDecoder::new()
        .decode(r#"{"messages": []}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Decode { ref message } if message.contains("got object")));
}

#[test]
fn test_json_decoder_invalid_json() {
    let err = JsonDecoder::new().decode("<html>502</html>").unwrap_err();
    assert!(matches!(err, Error::Decode { ref message } if message.starts_with("Failed to parse JSON")));
}

#[test]
fn test_json_decoder_empty_body() {
    assert!(matches!(
        JsonDecoder::new().decode(""),
        Err(Error::Decode { .. })
    ));
}

#[test]
fn test_json_decoder_with_path() {
    let decoder = JsonDecoder::with_path("data.messages");
    let body = r#"{"data": {"messages": [{"direction": "inbound"}]}}"#;

    let records = decoder.decode(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(decoder.record_path(), Some("data.messages"));
}

#[test]
fn test_json_decoder_missing_path() {
    let decoder = JsonDecoder::with_path("messages");
    let err = decoder.decode(r#"{"data": []}"#).unwrap_err();
    assert!(matches!(err, Error::Decode { ref message } if message.contains("messages")));
}

#[test]
fn test_json_decoder_path_to_scalar() {
    let decoder = JsonDecoder::with_path("count");
    let err = decoder.decode(r#"{"count": 3}"#).unwrap_err();
    assert!(matches!(err, Error::Decode { ref message } if message.contains("got number")));
}

#[test]
fn test_json_decoder_raw() {
    let value = JsonDecoder::new().decode_raw(r#"{"ok": true}"#).unwrap();
    assert_eq!(value, json!({"ok": true}));
}
