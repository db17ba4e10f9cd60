//! Well-known message types with fixed JSON representations.
//!
//! These are consulted before generic message handling, so a field typed as one
//! of them never produces a `$ref`.

use crate::schema::{JsonType, SchemaNode};
use protoschema_core::MessageRef;

/// The closed set of message types with a non-generic schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellKnownType {
    /// `google.protobuf.Timestamp`, an RFC 3339 string.
    Timestamp,
    /// `google.type.Date`, a calendar date string.
    Date,
    /// `google.type.DateTime`, an RFC 3339 string.
    DateTime,
    /// `google.protobuf.Struct`, any JSON object.
    Struct,
    /// `google.protobuf.Value`, any JSON value except null.
    Value,
    /// `google.protobuf.Empty`, omitted entirely.
    Empty,
}

const WELL_KNOWN_TYPES: &[(&str, WellKnownType)] = &[
    ("google.protobuf.Timestamp", WellKnownType::Timestamp),
    ("google.type.Date", WellKnownType::Date),
    ("google.type.DateTime", WellKnownType::DateTime),
    ("google.protobuf.Struct", WellKnownType::Struct),
    ("google.protobuf.Value", WellKnownType::Value),
    ("google.protobuf.Empty", WellKnownType::Empty),
];

impl WellKnownType {
    /// Look up a fully-qualified message name (without a leading dot).
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let full_name = full_name.strip_prefix('.').unwrap_or(full_name);
        WELL_KNOWN_TYPES
            .iter()
            .find(|(name, _)| *name == full_name)
            .map(|(_, kind)| *kind)
    }

    /// Look up the target of a message reference.
    pub fn lookup(target: &MessageRef) -> Option<Self> {
        Self::from_full_name(&target.full_name())
    }

    /// Fully-qualified protobuf name.
    pub fn full_name(self) -> &'static str {
        WELL_KNOWN_TYPES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("", |(name, _)| *name)
    }

    /// Schema for a field of this type; `None` drops the field.
    pub fn schema(self) -> Option<SchemaNode> {
        match self {
            WellKnownType::Timestamp | WellKnownType::DateTime => {
                Some(SchemaNode::typed(JsonType::String).with_format("date-time"))
            }
            WellKnownType::Date => Some(SchemaNode::typed(JsonType::String).with_format("date")),
            WellKnownType::Struct => Some(SchemaNode::typed(JsonType::Object)),
            WellKnownType::Value => Some(SchemaNode::union(vec![
                JsonType::String,
                JsonType::Number,
                JsonType::Integer,
                JsonType::Boolean,
                JsonType::Object,
                JsonType::Array,
            ])),
            WellKnownType::Empty => None,
        }
    }
}

#[cfg(test)]
#[path = "well_known/well_known_tests.rs"]
mod well_known_tests;
