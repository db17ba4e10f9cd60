//! Message descriptors to schema documents.
//!
//! One document is produced per message, depth first: nested messages come
//! before the message that declares them. Map entry messages are synthesized
//! by protoc and produce no document of their own. Document names keep the
//! declared case; the naming convention applies to the title.

use crate::comments::format_comment;
use crate::naming::format_message_name;
use crate::oneof::expand_oneofs;
use crate::property::{PropertyKey, property_for_field};
use crate::reference::document_name;
use crate::schema::{JsonType, NamedSchemas, SchemaDocument, SchemaNode};
use protoschema_core::{GeneratorConfig, MessageDescriptor};

/// Build the documents for a list of top-level messages.
pub fn build_documents(
    messages: &[MessageDescriptor],
    config: &GeneratorConfig,
) -> Vec<SchemaDocument> {
    let mut documents = Vec::new();
    for message in messages {
        build_message(message, config, &mut documents);
    }
    documents
}

fn build_message(
    message: &MessageDescriptor,
    config: &GeneratorConfig,
    documents: &mut Vec<SchemaDocument>,
) {
    for nested in &message.messages {
        build_message(nested, config, documents);
    }

    if message.map_entry {
        tracing::debug!(message_type = %message.full_name(), "skipping map entry");
        return;
    }

    let name = document_name(&message.reference());
    let mut root = root_node(message, &name, config);

    expand_oneofs(message, &name, &mut root, config);

    let properties = root.properties.get_or_insert_with(NamedSchemas::new);
    for field in message.plain_fields() {
        if let Some(property) = property_for_field(field, config, PropertyKey::FieldName) {
            properties.push(property);
        }
    }

    tracing::debug!(
        document = %name,
        properties = properties.len(),
        "built schema document"
    );

    documents.push(SchemaDocument { name, root });
}

fn root_node(message: &MessageDescriptor, name: &str, config: &GeneratorConfig) -> SchemaNode {
    SchemaNode {
        schema: Some(config.version.clone()),
        id: Some(config.id_for(name)),
        description: format_comment(message.comment.as_deref(), true),
        properties: Some(NamedSchemas::new()),
        ..SchemaNode::typed(JsonType::Object)
            .with_title(format_message_name(name, config.naming))
    }
}
