//! Named properties for individual fields.

use crate::comments::format_comment;
use crate::draft::supports_read_write_only;
use crate::naming::format_field_name;
use crate::schema::NamedSchema;
use crate::type_map::map_field;
use protoschema_core::{FieldBehavior, FieldDescriptor, GeneratorConfig};

/// Key of the value property inside a oneof member definition.
pub const VALUE_PROPERTY: &str = "value";

/// How the property for a field is keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKey {
    /// The field's formatted name.
    FieldName,
    /// The literal [`VALUE_PROPERTY`] key used inside oneof definitions.
    Value,
}

/// Build the property for a field, or `None` when the field maps to nothing.
///
/// Non-reference nodes get the key as `title`. The leading comment becomes the
/// `description`. Behavior annotations set `readOnly`/`writeOnly` when the
/// configured draft supports them.
pub fn property_for_field(
    field: &FieldDescriptor,
    config: &GeneratorConfig,
    key: PropertyKey,
) -> Option<NamedSchema> {
    let Some(mut node) = map_field(field, config) else {
        tracing::debug!(field = %field.name, "field maps to no schema, omitting");
        return None;
    };

    if supports_read_write_only(&config.version) {
        for behavior in &field.behaviors {
            match behavior {
                FieldBehavior::OutputOnly => node.read_only = Some(true),
                FieldBehavior::InputOnly => node.write_only = Some(true),
                FieldBehavior::Other(number) => {
                    tracing::debug!(field = %field.name, behavior = number, "ignoring field behavior");
                }
            }
        }
    }

    let name = match key {
        PropertyKey::FieldName => format_field_name(field, config.naming),
        PropertyKey::Value => VALUE_PROPERTY.to_string(),
    };

    if !node.is_reference() {
        node.title = Some(name.clone());
    }

    // Kept next to $ref too; validators ignore it there.
    node.description = format_comment(field.comment.as_deref(), true);

    Some(NamedSchema::new(name, node))
}
