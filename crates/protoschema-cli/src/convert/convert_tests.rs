#![allow(non_snake_case)]

use super::*;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::source_code_info::Location;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions, OneofDescriptorProto, SourceCodeInfo,
};

fn field(name: &str, number: i32, field_type: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(field_type as i32),
        ..Default::default()
    }
}

fn typed_field(name: &str, number: i32, field_type: Type, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, field_type)
    }
}

fn comment(path: &[i32], text: &str) -> Location {
    Location {
        path: path.to_vec(),
        span: vec![0, 0, 0],
        leading_comments: Some(text.to_string()),
        ..Default::default()
    }
}

fn timestamp_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("google/protobuf/timestamp.proto".to_string()),
        package: Some("google.protobuf".to_string()),
        syntax: Some("proto3".to_string()),
        message_type: vec![DescriptorProto {
            name: Some("Timestamp".to_string()),
            field: vec![field("seconds", 1, Type::Int64), field("nanos", 2, Type::Int32)],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn book_file() -> FileDescriptorProto {
    let labels_entry = DescriptorProto {
        name: Some("LabelsEntry".to_string()),
        field: vec![field("key", 1, Type::String), field("value", 2, Type::String)],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };

    let chapter = DescriptorProto {
        name: Some("Chapter".to_string()),
        field: vec![field("number", 1, Type::Int32)],
        ..Default::default()
    };

    let book = DescriptorProto {
        name: Some("Book".to_string()),
        field: vec![
            field("display_title", 1, Type::String),
            typed_field(
                "published",
                2,
                Type::Message,
                ".google.protobuf.Timestamp",
            ),
            FieldDescriptorProto {
                label: Some(Label::Repeated as i32),
                ..typed_field("labels", 3, Type::Message, ".library.v1.Book.LabelsEntry")
            },
            FieldDescriptorProto {
                label: Some(Label::Repeated as i32),
                ..typed_field("chapters", 4, Type::Message, ".library.v1.Book.Chapter")
            },
            FieldDescriptorProto {
                oneof_index: Some(0),
                ..field("email", 5, Type::String)
            },
            FieldDescriptorProto {
                oneof_index: Some(0),
                ..field("phone", 6, Type::String)
            },
            FieldDescriptorProto {
                oneof_index: Some(1),
                proto3_optional: Some(true),
                ..field("subtitle", 7, Type::String)
            },
            typed_field("format", 8, Type::Enum, ".library.v1.Format"),
            FieldDescriptorProto {
                label: Some(Label::Repeated as i32),
                ..field("tags", 9, Type::String)
            },
        ],
        nested_type: vec![labels_entry, chapter],
        oneof_decl: vec![
            OneofDescriptorProto {
                name: Some("contact".to_string()),
                ..Default::default()
            },
            OneofDescriptorProto {
                name: Some("_subtitle".to_string()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    FileDescriptorProto {
        name: Some("library/v1/book.proto".to_string()),
        package: Some("library.v1".to_string()),
        dependency: vec!["google/protobuf/timestamp.proto".to_string()],
        syntax: Some("proto3".to_string()),
        message_type: vec![book],
        enum_type: vec![EnumDescriptorProto {
            name: Some("Format".to_string()),
            value: vec![
                EnumValueDescriptorProto {
                    name: Some("FORMAT_UNSPECIFIED".to_string()),
                    number: Some(0),
                    ..Default::default()
                },
                EnumValueDescriptorProto {
                    name: Some("HARDCOVER".to_string()),
                    number: Some(1),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        source_code_info: Some(SourceCodeInfo {
            location: vec![
                comment(&[4, 0], " A bound book.\n"),
                comment(&[4, 0, 2, 0], " Title on the cover.\n"),
                comment(&[4, 0, 8, 0], " How to reach the author.\n"),
                comment(&[4, 0, 3, 1], " One chapter.\n"),
            ],
        }),
        ..Default::default()
    }
}

fn pool() -> DescriptorPool {
    DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
        file: vec![timestamp_file(), book_file()],
    })
    .unwrap()
}

fn convert_book() -> MessageDescriptor {
    let pool = pool();
    let file = pool.get_file_by_name("library/v1/book.proto").unwrap();
    let mut messages = DescriptorConverter::new(&pool).convert_file(&file);
    assert_eq!(messages.len(), 1);
    messages.remove(0)
}

fn find_field<'a>(message: &'a MessageDescriptor, name: &str) -> &'a FieldDescriptor {
    message.fields.iter().find(|field| field.name == name).unwrap()
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn convert_file___top_level_message___has_package_and_comment() {
    let book = convert_book();

    assert_eq!(book.package, "library.v1");
    assert!(book.scope.is_empty());
    assert_eq!(book.name, "Book");
    assert_eq!(book.comment.as_deref(), Some(" A bound book.\n"));
}

#[test]
fn convert_file___nested_messages___scoped_under_container() {
    let book = convert_book();

    let names: Vec<_> = book.messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["LabelsEntry", "Chapter"]);

    let chapter = &book.messages[1];
    assert_eq!(chapter.scope, vec!["Book".to_string()]);
    assert_eq!(chapter.comment.as_deref(), Some(" One chapter.\n"));
    assert!(!chapter.map_entry);
}

#[test]
fn convert_file___map_entry___flagged() {
    let book = convert_book();

    assert!(book.messages[0].map_entry);
}

// ============================================================================
// Fields
// ============================================================================

#[test]
fn convert_field___scalar___keeps_names_and_comment() {
    let book = convert_book();

    let title = find_field(&book, "display_title");
    assert_eq!(title.json_name, "displayTitle");
    assert_eq!(title.kind, FieldKind::Scalar(ScalarKind::String));
    assert_eq!(title.comment.as_deref(), Some(" Title on the cover.\n"));
    assert_eq!(title.cardinality, Cardinality::Singular);
}

#[test]
fn convert_field___well_known_message___references_by_package() {
    let book = convert_book();

    assert_eq!(
        find_field(&book, "published").kind,
        FieldKind::Message(MessageRef::new("google.protobuf", "Timestamp"))
    );
}

#[test]
fn convert_field___nested_message___reference_has_scope() {
    let book = convert_book();

    let chapters = find_field(&book, "chapters");
    assert_eq!(chapters.cardinality, Cardinality::Repeated);
    assert_eq!(
        chapters.kind,
        FieldKind::Message(MessageRef::nested("library.v1", ["Book"], "Chapter"))
    );
}

#[test]
fn convert_field___map___becomes_map_of_value_field() {
    let book = convert_book();

    let labels = find_field(&book, "labels");
    assert_eq!(labels.cardinality, Cardinality::Singular);
    match &labels.kind {
        FieldKind::Map(value) => {
            assert_eq!(value.name, "value");
            assert_eq!(value.kind, FieldKind::Scalar(ScalarKind::String));
        }
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn convert_field___repeated_scalar___repeated_cardinality() {
    let book = convert_book();

    assert!(find_field(&book, "tags").is_repeated());
}

#[test]
fn convert_field___enum___lists_values_in_order() {
    let book = convert_book();

    assert_eq!(
        find_field(&book, "format").kind,
        FieldKind::Enum(vec![
            EnumValue::new("FORMAT_UNSPECIFIED", 0),
            EnumValue::new("HARDCOVER", 1),
        ])
    );
}

#[test]
fn convert_field___no_behavior_extension___no_behaviors() {
    let book = convert_book();

    assert!(book.fields.iter().all(|field| field.behaviors.is_empty()));
}

// ============================================================================
// Oneofs
// ============================================================================

#[test]
fn convert_message___oneofs___real_then_synthetic() {
    let book = convert_book();

    assert_eq!(book.oneofs.len(), 2);
    assert_eq!(book.oneofs[0].name, "contact");
    assert!(!book.oneofs[0].synthetic);
    assert_eq!(
        book.oneofs[0].comment.as_deref(),
        Some(" How to reach the author.\n")
    );
    assert!(book.oneofs[1].synthetic);
}

#[test]
fn convert_field___oneof_member___has_group_index() {
    let book = convert_book();

    assert_eq!(find_field(&book, "email").oneof, Some(0));
    assert_eq!(find_field(&book, "phone").oneof, Some(0));
    assert_eq!(find_field(&book, "subtitle").oneof, Some(1));
    assert_eq!(find_field(&book, "display_title").oneof, None);
}

#[test]
fn convert_message___synthetic_member___is_plain_field() {
    let book = convert_book();

    let plain: Vec<_> = book.plain_fields().map(|field| field.name.as_str()).collect();
    assert!(plain.contains(&"subtitle"));
    assert!(!plain.contains(&"email"));
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn CommentIndex___for_file___indexes_leading_comments() {
    let pool = pool();
    let file = pool.get_file_by_name("library/v1/book.proto").unwrap();

    let index = CommentIndex::for_file(&file);

    assert_eq!(index.len(), 4);
    assert_eq!(index.leading(&[4, 0]).as_deref(), Some(" A bound book.\n"));
    assert_eq!(index.leading(&[4, 1]), None);
}

#[test]
fn CommentIndex___no_source_info___empty() {
    let pool = pool();
    let file = pool
        .get_file_by_name("google/protobuf/timestamp.proto")
        .unwrap();

    assert!(CommentIndex::for_file(&file).is_empty());
}

#[test]
fn message_ref___nested_message___splits_scope() {
    let pool = pool();
    let chapter = pool.get_message_by_name("library.v1.Book.Chapter").unwrap();

    let reference = message_ref(&chapter);

    assert_eq!(reference.package, "library.v1");
    assert_eq!(reference.scope, vec!["Book".to_string()]);
    assert_eq!(reference.name, "Chapter");
}
