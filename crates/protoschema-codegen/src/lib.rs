//! protoschema-codegen - JSON Schema generation from protobuf descriptors
//!
//! The generator takes the parsed descriptor IR from `protoschema-core` and
//! produces one JSON Schema document per message:
//!
//! ```text
//! MessageDescriptor tree
//!     ↓
//!  [builder]  ─→ [oneof] ─→ [property] ─→ [type_map] ─→ [well_known]
//!     ↓                                        ↓
//!  SchemaDocument                         [reference]
//! ```
//!
//! # Usage
//!
//! ```
//! use protoschema_codegen::build_documents;
//! use protoschema_core::{FieldDescriptor, FieldKind, GeneratorConfig, MessageDescriptor, ScalarKind};
//!
//! let book = MessageDescriptor::new("library.v1", "Book")
//!     .with_field(FieldDescriptor::new("title", FieldKind::Scalar(ScalarKind::String)));
//!
//! let documents = build_documents(&[book], &GeneratorConfig::default());
//!
//! assert_eq!(documents[0].file_name(), "Book.json");
//! ```
//!
//! Translation never fails. Fields without a schema (unsupported kinds,
//! `google.protobuf.Empty`) are logged through `tracing` and omitted.

pub mod builder;
pub mod comments;
pub mod draft;
pub mod naming;
pub mod oneof;
pub mod property;
pub mod reference;
pub mod schema;
pub mod type_map;
pub mod well_known;

pub use builder::build_documents;
pub use reference::{document_name, reference_for};
pub use schema::{JsonType, NamedSchema, NamedSchemas, SchemaDocument, SchemaNode, SchemaType};
pub use well_known::WellKnownType;
