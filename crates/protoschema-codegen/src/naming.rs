//! Naming convention utilities.
//!
//! | Name | `proto` | `json` |
//! |------|---------|--------|
//! | field | declared name | declared JSON name |
//! | message document | verbatim | first character upper-cased |
//! | oneof property | verbatim | first character lower-cased |

use protoschema_core::{FieldDescriptor, Naming};

/// Property name of a field.
pub fn format_field_name(field: &FieldDescriptor, naming: Naming) -> String {
    match naming {
        Naming::Proto => field.name.clone(),
        Naming::Json => field.json_name.clone(),
    }
}

/// Document name of a message from its definition name.
///
/// Under `json` naming the first character is upper-cased; a single-character
/// name is lower-cased instead.
///
/// # Examples
///
/// ```
/// use protoschema_codegen::naming::format_message_name;
/// use protoschema_core::Naming;
///
/// assert_eq!(format_message_name("book", Naming::Json), "Book");
/// assert_eq!(format_message_name("B", Naming::Json), "b");
/// assert_eq!(format_message_name("book", Naming::Proto), "book");
/// ```
pub fn format_message_name(name: &str, naming: Naming) -> String {
    match naming {
        Naming::Proto => name.to_string(),
        Naming::Json if name.chars().count() == 1 => name.to_lowercase(),
        Naming::Json => capitalize(name),
    }
}

/// Property name of a oneof group.
pub fn format_oneof_name(name: &str, naming: Naming) -> String {
    match naming {
        Naming::Proto => name.to_string(),
        Naming::Json => uncapitalize(name),
    }
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use protoschema_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}
