//! Description extraction from descriptor comments.

use once_cell::sync::Lazy;
use regex::Regex;

/// API linter directives such as `(-- api-linter: core::0131=disabled --)`.
#[allow(clippy::expect_used)] // Safe: the pattern is a literal
static LINTER_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(-- .* --\)").expect("linter rule pattern is valid"));

/// Turn a leading comment into a description.
///
/// Line breaks are removed when `remove_newlines` is set, linter directives are
/// stripped, and the result is trimmed. Returns `None` when nothing remains.
///
/// # Examples
///
/// ```
/// use protoschema_codegen::comments::format_comment;
///
/// let comment = " The title.\n (-- api-linter: core::0122=disabled --)\n";
/// assert_eq!(format_comment(Some(comment), true).as_deref(), Some("The title."));
/// assert_eq!(format_comment(Some("  \n"), true), None);
/// ```
pub fn format_comment(comment: Option<&str>, remove_newlines: bool) -> Option<String> {
    let comment = comment?;
    let comment = if remove_newlines {
        comment.replace('\n', "")
    } else {
        comment.to_string()
    };
    let comment = LINTER_RULE.replace_all(&comment, "");
    let comment = comment.trim();

    if comment.is_empty() {
        None
    } else {
        Some(comment.to_string())
    }
}

#[cfg(test)]
#[path = "comments/comments_tests.rs"]
mod comments_tests;
