//! Conversion from `prost-reflect` descriptors into the generator IR.
//!
//! Leading comments are looked up in the file's `source_code_info` by the
//! descriptor path protoc records for each message, field, and oneof.
//! `google.api.field_behavior` annotations are read through the pool's own
//! extension descriptor, so they are only visible when the descriptor set
//! carries `google/api/field_behavior.proto`.

use std::collections::HashMap;

use prost_reflect::{
    DescriptorPool, ExtensionDescriptor, FileDescriptor, Kind, OneofDescriptor, Value,
};
use protoschema_core::{
    Cardinality, EnumValue, FieldBehavior, FieldDescriptor, FieldKind, MessageDescriptor,
    MessageRef, OneofGroup, ScalarKind,
};

/// Fully-qualified name of the field behavior extension.
pub const FIELD_BEHAVIOR_EXTENSION: &str = "google.api.field_behavior";

/// Leading comments of one file, keyed by descriptor path.
#[derive(Debug, Default)]
pub struct CommentIndex {
    leading: HashMap<Vec<i32>, String>,
}

impl CommentIndex {
    pub fn for_file(file: &FileDescriptor) -> Self {
        let leading = file
            .file_descriptor_proto()
            .source_code_info
            .iter()
            .flat_map(|info| info.location.iter())
            .filter_map(|location| {
                location
                    .leading_comments
                    .as_ref()
                    .map(|comment| (location.path.clone(), comment.clone()))
            })
            .collect();
        Self { leading }
    }

    pub fn leading(&self, path: &[i32]) -> Option<String> {
        self.leading.get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.leading.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty()
    }
}

/// Converts the messages of a descriptor pool into [`MessageDescriptor`]s.
pub struct DescriptorConverter {
    field_behavior: Option<ExtensionDescriptor>,
}

impl DescriptorConverter {
    pub fn new(pool: &DescriptorPool) -> Self {
        let field_behavior = pool.get_extension_by_name(FIELD_BEHAVIOR_EXTENSION);
        if field_behavior.is_none() {
            tracing::debug!("{FIELD_BEHAVIOR_EXTENSION} not in descriptor pool");
        }
        Self { field_behavior }
    }

    /// Top-level messages of a file, with nested messages attached.
    pub fn convert_file(&self, file: &FileDescriptor) -> Vec<MessageDescriptor> {
        let comments = CommentIndex::for_file(file);
        file.messages()
            .map(|message| self.convert_message(&message, &comments))
            .collect()
    }

    fn convert_message(
        &self,
        message: &prost_reflect::MessageDescriptor,
        comments: &CommentIndex,
    ) -> MessageDescriptor {
        let reference = message_ref(message);
        let oneofs: Vec<OneofDescriptor> = message.oneofs().collect();

        MessageDescriptor {
            package: reference.package,
            scope: reference.scope,
            name: reference.name,
            fields: message
                .fields()
                .map(|field| self.convert_field(&field, &oneofs, comments))
                .collect(),
            messages: message
                .child_messages()
                .map(|nested| self.convert_message(&nested, comments))
                .collect(),
            oneofs: oneofs
                .iter()
                .map(|oneof| OneofGroup {
                    name: oneof.name().to_string(),
                    comment: comments.leading(oneof.path()),
                    synthetic: oneof
                        .fields()
                        .any(|field| field.field_descriptor_proto().proto3_optional()),
                })
                .collect(),
            comment: comments.leading(message.path()),
            map_entry: message.is_map_entry(),
        }
    }

    fn convert_field(
        &self,
        field: &prost_reflect::FieldDescriptor,
        oneofs: &[OneofDescriptor],
        comments: &CommentIndex,
    ) -> FieldDescriptor {
        let oneof = field.containing_oneof().and_then(|containing| {
            oneofs
                .iter()
                .position(|oneof| oneof.full_name() == containing.full_name())
        });

        FieldDescriptor {
            name: field.name().to_string(),
            json_name: field.json_name().to_string(),
            kind: self.field_kind(field),
            cardinality: if field.is_list() {
                Cardinality::Repeated
            } else {
                Cardinality::Singular
            },
            behaviors: self.behaviors(field),
            comment: comments.leading(field.path()),
            oneof,
        }
    }

    fn field_kind(&self, field: &prost_reflect::FieldDescriptor) -> FieldKind {
        if field.is_group() {
            let type_name = match field.kind() {
                Kind::Message(message) => message.full_name().to_string(),
                _ => field.full_name().to_string(),
            };
            return FieldKind::Group(type_name);
        }

        match field.kind() {
            Kind::Message(entry) if field.is_map() => {
                let value = entry.map_entry_value_field();
                let value = FieldDescriptor {
                    kind: self.field_kind(&value),
                    ..FieldDescriptor::new(value.name(), FieldKind::Scalar(ScalarKind::String))
                };
                FieldKind::Map(Box::new(value))
            }
            Kind::Message(message) => FieldKind::Message(message_ref(&message)),
            Kind::Enum(descriptor) => FieldKind::Enum(
                descriptor
                    .values()
                    .map(|value| EnumValue::new(value.name(), value.number()))
                    .collect(),
            ),
            Kind::Double => FieldKind::Scalar(ScalarKind::Double),
            Kind::Float => FieldKind::Scalar(ScalarKind::Float),
            Kind::Int32 => FieldKind::Scalar(ScalarKind::Int32),
            Kind::Int64 => FieldKind::Scalar(ScalarKind::Int64),
            Kind::Uint32 => FieldKind::Scalar(ScalarKind::Uint32),
            Kind::Uint64 => FieldKind::Scalar(ScalarKind::Uint64),
            Kind::Sint32 => FieldKind::Scalar(ScalarKind::Sint32),
            Kind::Sint64 => FieldKind::Scalar(ScalarKind::Sint64),
            Kind::Fixed32 => FieldKind::Scalar(ScalarKind::Fixed32),
            Kind::Fixed64 => FieldKind::Scalar(ScalarKind::Fixed64),
            Kind::Sfixed32 => FieldKind::Scalar(ScalarKind::Sfixed32),
            Kind::Sfixed64 => FieldKind::Scalar(ScalarKind::Sfixed64),
            Kind::Bool => FieldKind::Scalar(ScalarKind::Bool),
            Kind::String => FieldKind::Scalar(ScalarKind::String),
            Kind::Bytes => FieldKind::Scalar(ScalarKind::Bytes),
        }
    }

    fn behaviors(&self, field: &prost_reflect::FieldDescriptor) -> Vec<FieldBehavior> {
        let Some(extension) = &self.field_behavior else {
            return Vec::new();
        };

        let options = field.options();
        if !options.has_extension(extension) {
            return Vec::new();
        }

        match &*options.get_extension(extension) {
            Value::List(values) => values
                .iter()
                .filter_map(|value| match value.as_enum_number() {
                    Some(number) => Some(FieldBehavior::from_number(number)),
                    None => {
                        tracing::warn!(field = %field.full_name(), ?value, "unexpected field behavior value");
                        None
                    }
                })
                .collect(),
            Value::EnumNumber(number) => vec![FieldBehavior::from_number(*number)],
            other => {
                tracing::warn!(field = %field.full_name(), value = ?other, "unexpected field behavior payload");
                Vec::new()
            }
        }
    }
}

/// Reference to a message, splitting its full name into package, scope, and name.
pub fn message_ref(message: &prost_reflect::MessageDescriptor) -> MessageRef {
    let package = message.package_name();
    let relative = message
        .full_name()
        .strip_prefix(package)
        .map(|rest| rest.trim_start_matches('.'))
        .unwrap_or(message.full_name());

    let mut parts: Vec<&str> = relative.split('.').collect();
    let name = parts.pop().unwrap_or(message.name());

    MessageRef::nested(package, parts, name)
}

#[cfg(test)]
#[path = "convert/convert_tests.rs"]
mod convert_tests;
