//! Text helpers shared by titles, search and the search index
//!
//! Matching follows the user's perspective rather than bytes: comparisons
//! are Unicode case-insensitive, and URL slugs fold diacritics so that
//! "Dvořák" and "Dvorak" land on the same thumbnail.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Trim surrounding whitespace, as editors do before saving a name
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Replace every run of whitespace with a single space
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").into_owned()
}

/// Case-insensitive substring test using Unicode lowercase mapping
///
/// An empty needle is contained in everything.
pub fn localized_contains(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Remove diacritics (canonical decomposition minus combining marks)
pub fn fold_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Slug suitable for file names and URLs
///
/// Diacritics are folded, letters lowercased, every non-alphanumeric
/// character becomes `-`, dash runs collapse to one and leading/trailing
/// dashes are removed.
///
/// - "Johann Sebastian Bach" -> "johann-sebastian-bach"
/// - "Antonín Dvořák" -> "antonin-dvorak"
/// - "Orquestra Sinfônica (OSESP)" -> "orquestra-sinfonica-osesp"
pub fn normalize_for_url(value: &str) -> String {
    let slug: String = fold_diacritics(value)
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    DASH_RUN
        .replace_all(&slug, "-")
        .trim_matches('-')
        .to_string()
}

/// First character of a value, used as the key of alphabetical sections
///
/// Case is kept, so "bach" and "Brahms" land in different sections.
/// Returns an empty string for empty input.
pub fn initial(value: &str) -> String {
    value.chars().next().map(String::from).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\t\nc"), "a b c");
        assert_eq!(collapse_whitespace("  lead"), " lead");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_localized_contains() {
        assert!(localized_contains("Johann Sebastian Bach", "bach"));
        assert!(localized_contains("Antonín Dvořák", "DVOŘÁK"));
        assert!(localized_contains("anything", ""));
        assert!(!localized_contains("Dvořák", "dvorak"));
        assert!(!localized_contains("", "x"));
    }

    #[test]
    fn test_normalize_for_url() {
        assert_eq!(normalize_for_url("Johann Sebastian Bach"), "johann-sebastian-bach");
        assert_eq!(normalize_for_url("Antonín Dvořák"), "antonin-dvorak");
        assert_eq!(
            normalize_for_url("Orquestra Sinfônica (OSESP)"),
            "orquestra-sinfonica-osesp"
        );
        assert_eq!(normalize_for_url("  --Mahler--  "), "mahler");
        assert_eq!(normalize_for_url("C. P. E. Bach"), "c-p-e-bach");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("bach"), "b");
        assert_eq!(initial("Bach"), "B");
        assert_eq!(initial("Élgar"), "É");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed("  Sala Cecília Meireles \n"), "Sala Cecília Meireles");
    }
}
