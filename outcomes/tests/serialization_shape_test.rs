//! Wire-shape tests for the outcome value types.
//!
//! Downstream consumers key on exact field names, including the derived
//! `success`, `page_size`, and `total_pages` fields, so the serialized
//! shape is pinned here.

use outcomes::{DataOutcome, Diagnostics, Outcome, PageNumber, PagedOutcome};
use serde_json::{json, Value};

#[test]
fn outcome_serializes_messages_errors_timestamp_and_success() {
    let outcome = Outcome::new()
        .with_message("step one done")
        .with_error("step two failed");

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["messages"], json!(["step one done"]));
    assert_eq!(value["errors"], json!(["step two failed"]));
    assert_eq!(value["success"], json!(false));
    assert!(value["timestamp"].is_string());
}

#[test]
fn data_outcome_serializes_absent_payload_as_null() {
    let outcome: DataOutcome<u32> = DataOutcome::new().with_message("nothing to report");

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["data"], Value::Null);
    assert_eq!(value["success"], json!(true));
}

#[test]
fn data_outcome_serializes_present_payload_inline() {
    let outcome = DataOutcome::new().with_data(vec![1, 2, 3]);

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["data"], json!([1, 2, 3]));
}

#[test]
fn paged_outcome_serializes_all_pagination_fields() {
    let page = PagedOutcome::new()
        .with_data(vec!["a", "b"])
        .with_pagination(PageNumber::new(2), 5);

    let value = serde_json::to_value(&page).unwrap();

    assert_eq!(value["data"], json!(["a", "b"]));
    assert_eq!(value["page_number"], json!(2));
    assert_eq!(value["page_size"], json!(2));
    assert_eq!(value["total_items"], json!(5));
    assert_eq!(value["total_pages"], json!(3));
    assert_eq!(value["success"], json!(true));

    let object = value.as_object().unwrap();
    let mut field_names: Vec<&str> = object.keys().map(String::as_str).collect();
    field_names.sort_unstable();
    assert_eq!(
        field_names,
        [
            "data",
            "errors",
            "messages",
            "page_number",
            "page_size",
            "success",
            "timestamp",
            "total_items",
            "total_pages",
        ]
    );
}
