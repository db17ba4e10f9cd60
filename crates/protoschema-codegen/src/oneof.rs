//! Oneof groups as discriminated unions.
//!
//! A group `contact { string email; string phone; }` on document `Book`
//! becomes:
//!
//! ```json
//! "contact": {
//!   "default": null,
//!   "oneOf": [
//!     { "type": "null" },
//!     { "$ref": "#/definitions/Book_email" },
//!     { "$ref": "#/definitions/Book_phone" }
//!   ]
//! }
//! ```
//!
//! Each definition is an object with a `kind` property fixed to the member's
//! declared name and a `value` property holding the member's schema, so a
//! payload names the populated member explicitly.

use crate::naming::format_oneof_name;
use crate::property::{PropertyKey, property_for_field};
use crate::reference::local_reference;
use crate::schema::{JsonType, NamedSchema, NamedSchemas, SchemaNode};
use protoschema_core::{GeneratorConfig, MessageDescriptor};
use serde_json::{Value, json};

/// Key of the discriminator property inside a oneof member definition.
pub const KIND_PROPERTY: &str = "kind";

/// Append one union property per non-synthetic oneof of `message` to
/// `document`, registering member definitions in its `definitions`.
pub fn expand_oneofs(
    message: &MessageDescriptor,
    document_name: &str,
    document: &mut SchemaNode,
    config: &GeneratorConfig,
) {
    for (index, group) in message.oneofs.iter().enumerate() {
        if group.synthetic {
            continue;
        }

        let mut alternatives = vec![SchemaNode::typed(JsonType::Null)];

        for member in message.oneof_members(index) {
            let Some(value) = property_for_field(member, config, PropertyKey::Value) else {
                tracing::warn!(
                    message_type = %message.full_name(),
                    oneof = %group.name,
                    field = %member.name,
                    "oneof member maps to no schema, skipping"
                );
                continue;
            };

            let definition_name = format!("{}_{}", document_name, member.name);
            let mut definition = SchemaNode::typed(JsonType::Object).with_title(&definition_name);
            definition.properties = Some(
                [
                    NamedSchema::new(KIND_PROPERTY, kind_property(&member.name)),
                    value,
                ]
                .into_iter()
                .collect(),
            );

            document
                .definitions
                .get_or_insert_with(NamedSchemas::new)
                .push(NamedSchema::new(&definition_name, definition));

            alternatives.push(SchemaNode::reference(local_reference(&definition_name)));
        }

        let union = SchemaNode {
            default: Some(Value::Null),
            one_of: Some(alternatives),
            ..SchemaNode::default()
        };

        document
            .properties
            .get_or_insert_with(NamedSchemas::new)
            .push(NamedSchema::new(
                format_oneof_name(&group.name, config.naming),
                union,
            ));
    }
}

/// Discriminator schema: a string fixed to the member's declared name.
fn kind_property(member_name: &str) -> SchemaNode {
    let mut node = SchemaNode::typed(JsonType::String)
        .with_title(KIND_PROPERTY)
        .with_default(json!(member_name));
    node.enumeration = Some(vec![member_name.to_string()]);
    node
}
