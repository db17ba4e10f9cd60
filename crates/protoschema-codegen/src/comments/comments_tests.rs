#![allow(non_snake_case)]

use super::*;

#[test]
fn format_comment___none___returns_none() {
    assert_eq!(format_comment(None, true), None);
}

#[test]
fn format_comment___trims_whitespace() {
    assert_eq!(
        format_comment(Some("  A shelf of books.  \n"), true).as_deref(),
        Some("A shelf of books.")
    );
}

#[test]
fn format_comment___remove_newlines___joins_lines() {
    let comment = " First line.\n Second line.\n";

    assert_eq!(
        format_comment(Some(comment), true).as_deref(),
        Some("First line. Second line.")
    );
}

#[test]
fn format_comment___keep_newlines___preserves_inner_breaks() {
    let comment = " First line.\n Second line.\n";

    assert_eq!(
        format_comment(Some(comment), false).as_deref(),
        Some("First line.\n Second line.")
    );
}

#[test]
fn format_comment___strips_linter_directive() {
    let comment = "The book title. (-- api-linter: core::0122::name-suffix=disabled --)";

    assert_eq!(
        format_comment(Some(comment), true).as_deref(),
        Some("The book title.")
    );
}

#[test]
fn format_comment___directive_across_lines___stripped_once_joined() {
    let comment = "Title.\n(-- api-linter: core::0122=disabled\n aip.dev/not-precedent: legacy --)\n";

    assert_eq!(format_comment(Some(comment), true).as_deref(), Some("Title."));
}

#[test]
fn format_comment___only_directive___returns_none() {
    assert_eq!(
        format_comment(Some("(-- api-linter: all=disabled --)"), true),
        None
    );
}

#[test]
fn format_comment___unclosed_directive___left_in_place() {
    assert_eq!(
        format_comment(Some("Keep (-- this"), true).as_deref(),
        Some("Keep (-- this")
    );
}
