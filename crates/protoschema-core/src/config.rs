//! Generator configuration types

use crate::error::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Naming convention for property and document names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    /// Keep descriptor names verbatim
    Proto,

    /// Use declared JSON names for fields and adjust message/oneof casing
    #[default]
    Json,
}

impl FromStr for Naming {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proto" => Ok(Naming::Proto),
            "json" => Ok(Naming::Json),
            _ => Err(GeneratorError::InvalidOption {
                key: "naming".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// How enum-typed fields are represented in the generated schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumRepresentation {
    /// Enum values as their numeric value
    #[default]
    Integer,

    /// Enum values as their declared names
    String,
}

impl FromStr for EnumRepresentation {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(EnumRepresentation::Integer),
            "string" => Ok(EnumRepresentation::String),
            _ => Err(GeneratorError::InvalidOption {
                key: "enum_type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Options for one generator invocation
///
/// The configuration is established once and passed by reference into every
/// schema-building call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Prefix for every document's `$id`
    #[serde(default = "default_base_url", alias = "baseURL")]
    pub base_url: String,

    /// JSON Schema dialect URL written as `$schema`
    #[serde(default = "default_version")]
    pub version: String,

    /// Naming convention
    #[serde(default)]
    pub naming: Naming,

    /// Enum representation
    #[serde(default)]
    pub enum_type: EnumRepresentation,
}

fn default_base_url() -> String {
    "https://github.com/googleapis/googleapis/schemas/".to_string()
}

fn default_version() -> String {
    "http://json-schema.org/draft-07/schema#".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            naming: Naming::default(),
            enum_type: EnumRepresentation::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> GeneratorResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse a protoc plugin parameter string such as
    /// `baseURL=https://example.com/schemas,naming=proto`
    pub fn from_parameter(parameter: &str) -> GeneratorResult<Self> {
        let mut config = Self::default();

        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| GeneratorError::InvalidParameter(pair.to_string()))?;
            config.set(key.trim(), value.trim())?;
        }

        Ok(config)
    }

    /// Set a single option by its parameter key
    pub fn set(&mut self, key: &str, value: &str) -> GeneratorResult<()> {
        match key {
            "baseURL" | "base_url" => self.base_url = value.to_string(),
            "version" => self.version = value.to_string(),
            "naming" => self.naming = value.parse()?,
            "enum_type" => self.enum_type = value.parse()?,
            _ => return Err(GeneratorError::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    /// Base URL with a trailing slash enforced when non-empty
    pub fn base_url(&self) -> String {
        if self.base_url.is_empty() || self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    /// The `$id` of the document with the given name
    pub fn id_for(&self, document_name: &str) -> String {
        format!("{}{}.json", self.base_url(), document_name)
    }
}
