//! protoschema-core - Descriptor model, configuration, and error types
//!
//! This crate provides the foundational types shared by the protoschema crates:
//! - [`MessageDescriptor`] and [`FieldDescriptor`], the parsed schema IR
//! - [`GeneratorConfig`] for the options of one generator invocation
//! - [`GeneratorError`] for error handling at the I/O boundary

mod config;
mod descriptor;
mod error;

pub use config::{EnumRepresentation, GeneratorConfig, Naming};
pub use descriptor::{
    Cardinality, EnumValue, FieldBehavior, FieldDescriptor, FieldKind, MessageDescriptor,
    MessageRef, OneofGroup, ScalarKind, json_name_for,
};
pub use error::{GeneratorError, GeneratorResult};

/// Log levels accepted on the command line
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            _ => Err(GeneratorError::InvalidOption {
                key: "log_level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Cardinality, EnumRepresentation, FieldDescriptor, FieldKind, GeneratorConfig,
        GeneratorError, GeneratorResult, LogLevel, MessageDescriptor, MessageRef, Naming,
        OneofGroup, ScalarKind,
    };
}
