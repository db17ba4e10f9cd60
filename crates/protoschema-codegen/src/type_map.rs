//! Field shape to JSON Schema mapping.
//!
//! Rules apply in this order:
//!
//! | Field | Schema |
//! |-------|--------|
//! | map | `object` with `additionalProperties` from the value type |
//! | well-known message | fixed shape, see [`WellKnownType`] |
//! | message | `$ref` to the message's document |
//! | string | `string`, default `""` |
//! | integer kinds | `integer` with the kind as `format`, default `0` |
//! | enum | `integer` or `string` with `enum`, per [`EnumRepresentation`] |
//! | bool | `boolean`, default `false` |
//! | float, double | `number` with the kind as `format`, default `0.0` |
//! | bytes | `string` with format `bytes`, default `""` |
//!
//! Repeated fields wrap the result in an `array` with default `[]`.

use crate::reference::reference_for;
use crate::schema::{JsonType, SchemaNode};
use crate::well_known::WellKnownType;
use protoschema_core::{
    EnumRepresentation, EnumValue, FieldDescriptor, FieldKind, GeneratorConfig, ScalarKind,
};
use serde_json::json;

/// Map a field to its schema; `None` means the field is omitted.
pub fn map_field(field: &FieldDescriptor, config: &GeneratorConfig) -> Option<SchemaNode> {
    if let FieldKind::Map(value) = &field.kind {
        let mut node = SchemaNode::typed(JsonType::Object);
        node.additional_properties = map_field(value, config).map(Box::new);
        return Some(node);
    }

    let base = map_kind(field, config)?;

    if field.is_repeated() {
        let mut node = SchemaNode::typed(JsonType::Array).with_default(json!([]));
        node.items = Some(Box::new(base));
        return Some(node);
    }

    Some(base)
}

fn map_kind(field: &FieldDescriptor, config: &GeneratorConfig) -> Option<SchemaNode> {
    match &field.kind {
        FieldKind::Message(target) => match WellKnownType::lookup(target) {
            Some(well_known) => well_known.schema(),
            None => Some(SchemaNode::reference(reference_for(target))),
        },
        FieldKind::Scalar(kind) => Some(map_scalar(*kind)),
        FieldKind::Enum(values) => Some(map_enum(values, config.enum_type)),
        FieldKind::Map(_) => map_field(field, config),
        FieldKind::Group(type_name) => {
            tracing::warn!(
                field = %field.name,
                group = %type_name,
                "unsupported field kind, omitting field"
            );
            None
        }
    }
}

/// Schema for a scalar kind.
pub fn map_scalar(kind: ScalarKind) -> SchemaNode {
    match kind {
        ScalarKind::String => SchemaNode::typed(JsonType::String).with_default(json!("")),
        ScalarKind::Bool => SchemaNode::typed(JsonType::Boolean).with_default(json!(false)),
        ScalarKind::Float | ScalarKind::Double => SchemaNode::typed(JsonType::Number)
            .with_format(kind.name())
            .with_default(json!(0.0)),
        ScalarKind::Bytes => SchemaNode::typed(JsonType::String)
            .with_format("bytes")
            .with_default(json!("")),
        ScalarKind::Int32
        | ScalarKind::Int64
        | ScalarKind::Uint32
        | ScalarKind::Uint64
        | ScalarKind::Sint32
        | ScalarKind::Sint64
        | ScalarKind::Fixed32
        | ScalarKind::Fixed64
        | ScalarKind::Sfixed32
        | ScalarKind::Sfixed64 => SchemaNode::typed(JsonType::Integer)
            .with_format(kind.name())
            .with_default(json!(0)),
    }
}

/// Schema for an enum with the given declared values.
pub fn map_enum(values: &[EnumValue], representation: EnumRepresentation) -> SchemaNode {
    match representation {
        EnumRepresentation::Integer => SchemaNode::typed(JsonType::Integer)
            .with_format("enum")
            .with_default(json!(0)),
        EnumRepresentation::String => {
            let mut node = SchemaNode::typed(JsonType::String).with_format("enum");
            node.enumeration = Some(values.iter().map(|value| value.name.clone()).collect());
            node.default = values.first().map(|value| json!(value.name));
            node
        }
    }
}
