//! Error types for protoschema

use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for the I/O boundary around schema generation
///
/// The translation engine itself never fails; these errors come from
/// configuration parsing, descriptor decoding, and file output.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A `key=value` pair in the plugin parameter string could not be parsed
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An option has a value outside its accepted set
    #[error("invalid value for {key}: {value}")]
    InvalidOption { key: String, value: String },

    /// An option key is not recognized
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Descriptor bytes could not be decoded
    #[error("descriptor error: {0}")]
    Descriptor(String),

    /// A requested file is not present in the descriptor set
    #[error("file not found in descriptor set: {0}")]
    FileNotFound(String),

    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
