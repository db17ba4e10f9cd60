#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use test_case::test_case;

#[test_case("google.protobuf.Timestamp", Some(WellKnownType::Timestamp))]
#[test_case(".google.protobuf.Timestamp", Some(WellKnownType::Timestamp))]
#[test_case("google.type.Date", Some(WellKnownType::Date))]
#[test_case("google.type.DateTime", Some(WellKnownType::DateTime))]
#[test_case("google.protobuf.Struct", Some(WellKnownType::Struct))]
#[test_case("google.protobuf.Value", Some(WellKnownType::Value))]
#[test_case("google.protobuf.Empty", Some(WellKnownType::Empty))]
#[test_case("google.protobuf.Duration", None)]
#[test_case("library.v1.Timestamp", None)]
fn WellKnownType___from_full_name___matches_table(name: &str, expected: Option<WellKnownType>) {
    assert_eq!(WellKnownType::from_full_name(name), expected);
}

#[test]
fn WellKnownType___lookup___uses_package_and_name() {
    let target = MessageRef::new("google.protobuf", "Timestamp");

    assert_eq!(
        WellKnownType::lookup(&target),
        Some(WellKnownType::Timestamp)
    );
}

#[test]
fn WellKnownType___lookup___nested_type_with_same_name___is_not_well_known() {
    let target = MessageRef::nested("google.protobuf", ["Outer"], "Timestamp");

    assert_eq!(WellKnownType::lookup(&target), None);
}

#[test]
fn WellKnownType___full_name___round_trips_through_lookup() {
    for kind in [
        WellKnownType::Timestamp,
        WellKnownType::Date,
        WellKnownType::DateTime,
        WellKnownType::Struct,
        WellKnownType::Value,
        WellKnownType::Empty,
    ] {
        assert_eq!(WellKnownType::from_full_name(kind.full_name()), Some(kind));
    }
}

#[test]
fn WellKnownType___timestamp___is_date_time_string() {
    let schema = WellKnownType::Timestamp.schema().unwrap();

    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({"type": "string", "format": "date-time"})
    );
}

#[test]
fn WellKnownType___date___is_date_string() {
    let schema = WellKnownType::Date.schema().unwrap();

    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({"type": "string", "format": "date"})
    );
}

#[test]
fn WellKnownType___struct___is_plain_object() {
    let schema = WellKnownType::Struct.schema().unwrap();

    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({"type": "object"})
    );
}

#[test]
fn WellKnownType___value___is_any_non_null_type() {
    let schema = WellKnownType::Value.schema().unwrap();

    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({"type": ["string", "number", "integer", "boolean", "object", "array"]})
    );
}

#[test]
fn WellKnownType___empty___has_no_schema() {
    assert_eq!(WellKnownType::Empty.schema(), None);
}
