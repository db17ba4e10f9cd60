//! protoc plugin protocol.
//!
//! The request's `proto_file` entries are kept as raw bytes and re-encoded
//! into a `FileDescriptorSet` for `prost-reflect`. Decoding them through
//! `prost_types` first would drop custom options such as
//! `google.api.field_behavior`.
//!
//! Failures never abort the process: protoc expects them in the response's
//! `error` field.

use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use prost_types::compiler::code_generator_response::{Feature, File};
use protoschema_codegen::SchemaDocument;
use protoschema_core::{GeneratorConfig, GeneratorError};

use crate::error::PluginError;
use crate::generate::{decode_descriptor_set, generate};

/// `CodeGeneratorRequest` with descriptor files left encoded.
#[derive(Clone, PartialEq, Message)]
pub struct RawCodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,

    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,

    #[prost(bytes = "vec", repeated, tag = "15")]
    pub proto_file: Vec<Vec<u8>>,
}

/// `FileDescriptorSet` with descriptor files left encoded.
#[derive(Clone, PartialEq, Message)]
pub struct RawFileDescriptorSet {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub file: Vec<Vec<u8>>,
}

/// Handle one encoded request, always producing a response.
pub fn handle_request(request: &[u8]) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match process_request(request) {
        Ok(files) => response.file = files,
        Err(err) => {
            tracing::error!(error = %err, "plugin request failed");
            response.error = Some(err.to_string());
        }
    }

    response
}

fn process_request(request: &[u8]) -> Result<Vec<File>, PluginError> {
    let request = RawCodeGeneratorRequest::decode(request)?;
    let config = GeneratorConfig::from_parameter(request.parameter.as_deref().unwrap_or(""))?;

    let descriptor_set = RawFileDescriptorSet {
        file: request.proto_file,
    }
    .encode_to_vec();
    let pool = decode_descriptor_set(&descriptor_set)?;

    let documents = generate(&pool, &request.file_to_generate, &config)?;
    documents.iter().map(response_file).collect()
}

fn response_file(document: &SchemaDocument) -> Result<File, PluginError> {
    Ok(File {
        name: Some(document.file_name()),
        content: Some(document.to_json_string().map_err(GeneratorError::from)?),
        ..Default::default()
    })
}
