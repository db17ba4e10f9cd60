//! Document names and cross-document references.
//!
//! A message's definition name is its scope path and local name joined with
//! `_`, relative to its package: `library.v1.Shelf.Book` becomes `Shelf_Book`.
//! Documents are named after the definition name as declared. The naming
//! convention only touches the document title, so `book` and `Book` in one
//! package still land in separate files. The builder and the type mapper both
//! go through [`document_name`], so a `$ref` always names the document
//! generated for its target.

use protoschema_core::MessageRef;

/// Definition name of a message, before naming conventions apply.
pub fn definition_name(target: &MessageRef) -> String {
    let mut name = target.scope.join(".");
    if !name.is_empty() {
        name.push('.');
    }
    name.push_str(&target.name);
    name.replace('.', "_")
}

/// Name of the document generated for a message.
pub fn document_name(target: &MessageRef) -> String {
    definition_name(target)
}

/// `$ref` value pointing at a message's document.
pub fn reference_for(target: &MessageRef) -> String {
    format!("{}.json", document_name(target))
}

/// `$ref` value pointing at a local definition of the current document.
pub fn local_reference(definition: &str) -> String {
    format!("#/definitions/{definition}")
}
