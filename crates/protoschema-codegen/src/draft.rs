//! JSON Schema draft detection from the `$schema` dialect URL.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)] // Safe: the pattern is a literal
static SCHEMA_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https*://json-schema.org/draft[/-]([^/]+)/schema")
        .expect("schema version pattern is valid")
});

/// Oldest draft that defines `readOnly` and `writeOnly`.
pub const READ_WRITE_ONLY_DRAFT: &str = "07";

/// Draft identifier of a dialect URL, or `""` when it is not recognized.
///
/// # Examples
///
/// ```
/// use protoschema_codegen::draft::draft_version;
///
/// assert_eq!(draft_version("http://json-schema.org/draft-07/schema#"), "07");
/// assert_eq!(draft_version("https://json-schema.org/draft/2020-12/schema"), "2020-12");
/// assert_eq!(draft_version("urn:custom"), "");
/// ```
pub fn draft_version(schema_url: &str) -> &str {
    SCHEMA_VERSION
        .captures(schema_url)
        .and_then(|captures| captures.get(1))
        .map_or("", |m| m.as_str())
}

/// Whether `readOnly`/`writeOnly` may be emitted for this dialect.
///
/// Drafts compare lexically, so `"2019-09"` and `"2020-12"` qualify while
/// `"04"` and `"06"` do not.
pub fn supports_read_write_only(schema_url: &str) -> bool {
    draft_version(schema_url) >= READ_WRITE_ONLY_DRAFT
}
