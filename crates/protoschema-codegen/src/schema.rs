//! JSON Schema node model.
//!
//! [`SchemaNode`] is a single record of optional JSON Schema keywords. Fields
//! serialize in declaration order and absent keywords are skipped, so output is
//! deterministic. Properties and definitions are ordered [`NamedSchemas`] lists
//! rather than maps, preserving the order in which the generator added them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// JSON primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

/// Value of the `type` keyword: one type or a list of types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(JsonType),
    Union(Vec<JsonType>),
}

/// A JSON Schema node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `Some(Value::Null)` serializes as an explicit `"default": null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(rename = "writeOnly", skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<Box<SchemaNode>>,

    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaNode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<NamedSchemas>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<NamedSchemas>,
}

impl SchemaNode {
    /// A node with a single `type`.
    pub fn typed(json_type: JsonType) -> Self {
        Self {
            schema_type: Some(SchemaType::Single(json_type)),
            ..Self::default()
        }
    }

    /// A node whose `type` is a list of types.
    pub fn union(types: Vec<JsonType>) -> Self {
        Self {
            schema_type: Some(SchemaType::Union(types)),
            ..Self::default()
        }
    }

    /// A `$ref` node.
    pub fn reference(target: impl Into<String>) -> Self {
        Self {
            reference: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref()?.get(name)
    }

    /// Look up a local definition by name.
    pub fn definition(&self, name: &str) -> Option<&SchemaNode> {
        self.definitions.as_ref()?.get(name)
    }
}

/// A schema paired with the key it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSchema {
    pub name: String,
    pub value: SchemaNode,
}

impl NamedSchema {
    pub fn new(name: impl Into<String>, value: SchemaNode) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered list of named schemas, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedSchemas(Vec<NamedSchema>);

impl NamedSchemas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, schema: NamedSchema) {
        self.0.push(schema);
    }

    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.0
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedSchema> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NamedSchema> for NamedSchemas {
    fn from_iter<I: IntoIterator<Item = NamedSchema>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for NamedSchemas {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

/// One generated output document.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    /// Document name; the output file is `<name>.json`.
    pub name: String,

    /// Root schema.
    pub root: SchemaNode,
}

impl SchemaDocument {
    /// Output file name.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(&self.root)?;
        json.push('\n');
        Ok(json)
    }

    /// The document's root as a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(&self.root)
    }
}
