//! Error types for plugin and generate runs.

use protoschema_core::GeneratorError;
use thiserror::Error;

/// Errors that can occur while handling a generator request.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The request bytes are not a valid `CodeGeneratorRequest`.
    #[error("malformed CodeGeneratorRequest: {0}")]
    Request(#[from] prost::DecodeError),

    /// Configuration, descriptor, or output error.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl From<prost_reflect::DescriptorError> for PluginError {
    fn from(err: prost_reflect::DescriptorError) -> Self {
        PluginError::Generator(GeneratorError::Descriptor(err.to_string()))
    }
}
