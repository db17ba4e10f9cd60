//! Intermediate representation for protobuf message types.
//!
//! This module defines the IR consumed by the schema generator. It is a
//! simplified, already-resolved view of a protobuf descriptor tree: every
//! message-typed field carries a [`MessageRef`] to its target, every enum field
//! carries its declared values, and comments are attached directly.
//!
//! # Structure
//!
//! - [`MessageDescriptor`]: a message with fields, nested messages and oneofs
//! - [`FieldDescriptor`]: a field with its kind, cardinality and annotations
//! - [`FieldKind`]: scalar, enum, message, map or group
//! - [`OneofGroup`]: a set of mutually exclusive fields
//!
//! # Examples
//!
//! ```
//! use protoschema_core::{FieldDescriptor, FieldKind, MessageDescriptor, ScalarKind};
//!
//! let book = MessageDescriptor::new("library.v1", "Book")
//!     .with_field(FieldDescriptor::new("title", FieldKind::Scalar(ScalarKind::String)))
//!     .with_field(FieldDescriptor::new("page_count", FieldKind::Scalar(ScalarKind::Int32)));
//!
//! assert_eq!(book.full_name(), "library.v1.Book");
//! assert_eq!(book.fields[1].json_name, "pageCount");
//! ```

/// Scalar protobuf field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarKind {
    /// The protobuf name of this kind, as written in `.proto` files.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Double => "double",
            ScalarKind::Float => "float",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Sint32 => "sint32",
            ScalarKind::Sint64 => "sint64",
            ScalarKind::Fixed32 => "fixed32",
            ScalarKind::Fixed64 => "fixed64",
            ScalarKind::Sfixed32 => "sfixed32",
            ScalarKind::Sfixed64 => "sfixed64",
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
        }
    }

    /// Whether this kind is one of the integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ScalarKind::Int32
                | ScalarKind::Int64
                | ScalarKind::Uint32
                | ScalarKind::Uint64
                | ScalarKind::Sint32
                | ScalarKind::Sint64
                | ScalarKind::Fixed32
                | ScalarKind::Fixed64
                | ScalarKind::Sfixed32
                | ScalarKind::Sfixed64
        )
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A reference to a message type, located by package and enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageRef {
    /// Package of the file declaring the message (may be empty).
    pub package: String,

    /// Names of the enclosing messages, outermost first.
    pub scope: Vec<String>,

    /// Local message name.
    pub name: String,
}

impl MessageRef {
    /// Reference to a top-level message.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            scope: Vec::new(),
            name: name.into(),
        }
    }

    /// Reference to a message nested inside the given scope.
    pub fn nested(
        package: impl Into<String>,
        scope: impl IntoIterator<Item = impl Into<String>>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            scope: scope.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    /// Fully-qualified name without a leading dot, e.g. `google.protobuf.Timestamp`.
    pub fn full_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.scope.len() + 2);
        if !self.package.is_empty() {
            parts.push(&self.package);
        }
        parts.extend(self.scope.iter().map(String::as_str));
        parts.push(&self.name);
        parts.join(".")
    }
}

/// A declared enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// Shape of a field's values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Scalar value.
    Scalar(ScalarKind),

    /// Enum value; the declared values in declaration order.
    Enum(Vec<EnumValue>),

    /// Message value.
    Message(MessageRef),

    /// Map field; the entry's value field. Keys are always JSON strings.
    Map(Box<FieldDescriptor>),

    /// Proto2 group, named by its message type.
    Group(String),
}

/// Whether a field holds one value or a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cardinality {
    #[default]
    Singular,
    Repeated,
}

/// `google.api.field_behavior` annotation values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBehavior {
    /// Set by the server only.
    OutputOnly,

    /// Sent by the client only, never returned.
    InputOnly,

    /// Any other declared behavior, by number.
    Other(i32),
}

impl FieldBehavior {
    /// Map a `google.api.FieldBehavior` enum number.
    pub fn from_number(number: i32) -> Self {
        match number {
            3 => FieldBehavior::OutputOnly,
            4 => FieldBehavior::InputOnly,
            other => FieldBehavior::Other(other),
        }
    }
}

/// A field in a message type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: String,

    /// JSON name (declared `json_name`, or the lowerCamelCase default).
    pub json_name: String,

    /// Value shape.
    pub kind: FieldKind,

    /// Singular or repeated.
    pub cardinality: Cardinality,

    /// Behavior annotations in declaration order.
    pub behaviors: Vec<FieldBehavior>,

    /// Leading comment text.
    pub comment: Option<String>,

    /// Index into the owning message's `oneofs`.
    pub oneof: Option<usize>,
}

impl FieldDescriptor {
    /// Create a singular field with the default JSON name.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            json_name: json_name_for(&name),
            name,
            kind,
            cardinality: Cardinality::Singular,
            behaviors: Vec::new(),
            comment: None,
            oneof: None,
        }
    }

    /// Mark the field as repeated.
    pub fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = json_name.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_behavior(mut self, behavior: FieldBehavior) -> Self {
        self.behaviors.push(behavior);
        self
    }

    /// Place the field in the oneof at `index`.
    pub fn in_oneof(mut self, index: usize) -> Self {
        self.oneof = Some(index);
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }

    pub fn has_behavior(&self, behavior: FieldBehavior) -> bool {
        self.behaviors.contains(&behavior)
    }
}

/// A oneof group declared on a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneofGroup {
    /// Group name as declared.
    pub name: String,

    /// Leading comment text.
    pub comment: Option<String>,

    /// Synthetic group created by protoc for a proto3 `optional` field.
    pub synthetic: bool,
}

impl OneofGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            synthetic: false,
        }
    }

    pub fn synthetic(name: impl Into<String>) -> Self {
        Self {
            synthetic: true,
            ..Self::new(name)
        }
    }
}

/// A message type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    /// Package of the declaring file.
    pub package: String,

    /// Enclosing message names, outermost first.
    pub scope: Vec<String>,

    /// Local message name.
    pub name: String,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,

    /// Nested message types in declaration order.
    pub messages: Vec<MessageDescriptor>,

    /// Oneof groups in declaration order.
    pub oneofs: Vec<OneofGroup>,

    /// Leading comment text.
    pub comment: Option<String>,

    /// Synthetic map entry type generated for a map field.
    pub map_entry: bool,
}

impl MessageDescriptor {
    /// Create an empty top-level message.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            scope: Vec::new(),
            name: name.into(),
            fields: Vec::new(),
            messages: Vec::new(),
            oneofs: Vec::new(),
            comment: None,
            map_entry: false,
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_oneof(mut self, oneof: OneofGroup) -> Self {
        self.oneofs.push(oneof);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Add a nested message, rewriting its package and scope to sit inside this one.
    pub fn with_message(mut self, mut nested: MessageDescriptor) -> Self {
        let mut scope = self.scope.clone();
        scope.push(self.name.clone());
        nested.rescope(&self.package, scope);
        self.messages.push(nested);
        self
    }

    fn rescope(&mut self, package: &str, scope: Vec<String>) {
        self.package = package.to_string();
        self.scope = scope;
        let mut child_scope = self.scope.clone();
        child_scope.push(self.name.clone());
        for nested in &mut self.messages {
            nested.rescope(package, child_scope.clone());
        }
    }

    /// A reference to this message.
    pub fn reference(&self) -> MessageRef {
        MessageRef {
            package: self.package.clone(),
            scope: self.scope.clone(),
            name: self.name.clone(),
        }
    }

    /// Fully-qualified name without a leading dot.
    pub fn full_name(&self) -> String {
        self.reference().full_name()
    }

    /// Whether the field is expanded as part of a (non-synthetic) oneof group.
    pub fn is_oneof_member(&self, field: &FieldDescriptor) -> bool {
        field
            .oneof
            .and_then(|index| self.oneofs.get(index))
            .is_some_and(|group| !group.synthetic)
    }

    /// Members of the oneof at `index`, in field declaration order.
    pub fn oneof_members(&self, index: usize) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |field| field.oneof == Some(index))
    }

    /// Fields that are emitted as plain properties.
    pub fn plain_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |field| !self.is_oneof_member(field))
    }
}

/// Default JSON name of a field, following protoc's lowerCamelCase rule.
///
/// Underscores are removed and the character following each one is upper-cased.
///
/// # Examples
///
/// ```
/// use protoschema_core::json_name_for;
///
/// assert_eq!(json_name_for("display_name"), "displayName");
/// assert_eq!(json_name_for("title"), "title");
/// ```
pub fn json_name_for(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for c in name.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
