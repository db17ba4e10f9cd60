//! protoschema-cli - protoc plugin and command line front end
//!
//! Decodes protobuf descriptors with `prost-reflect`, converts them into the
//! `protoschema-core` IR, and hands them to `protoschema-codegen`.
//!
//! - [`plugin::handle_request`] implements the protoc plugin protocol
//! - [`generate::generate`] builds documents from a decoded descriptor pool
//! - [`output::write_documents`] writes documents to a directory

pub mod convert;
pub mod error;
pub mod generate;
pub mod output;
pub mod plugin;

pub use convert::DescriptorConverter;
pub use error::PluginError;
pub use generate::{decode_descriptor_set, generate};
pub use output::write_documents;
pub use plugin::handle_request;
