//! Pure utility functions for post content
//!
//! These functions contain NO side effects - they take inputs and return outputs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Any markup tag, opening or closing, attributes included
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Remove HTML markup from a rich-text body.
///
/// Only tags are removed; text between them is kept as-is, including the
/// whitespace the editor produced.
pub fn strip_html(body: &str) -> String {
    TAG_REGEX.replace_all(body, "").into_owned()
}

/// Generate an excerpt from a rich-text body.
///
/// Takes the first `max_chars` characters of the stripped body. No ellipsis
/// is appended and the cut is not word-aligned.
pub fn generate_excerpt(body: &str, max_chars: usize) -> String {
    strip_html(body).chars().take(max_chars).collect()
}

/// Estimated reading time in whole minutes, rounded up.
///
/// Words are counted by splitting the stripped body on single spaces, the
/// same way the reader page does it, so runs of spaces count as extra words.
pub fn reading_time_minutes(body: &str, words_per_minute: usize) -> usize {
    let words = strip_html(body).split(' ').count();
    words.div_ceil(words_per_minute.max(1))
}

/// Parse a comma-separated tag field ("rust, wasm ,,web") into tags.
///
/// Entries are trimmed and blanks dropped. Order and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags_keeps_text() {
        let body = "<h2>Intro</h2>\n<p>Hello <strong>world</strong></p>";
        assert_eq!(strip_html(body), "Intro\nHello world");
    }

    #[test]
    fn test_strip_html_removes_attributes() {
        assert_eq!(strip_html(r#"<a href="https://x.io">link</a>"#), "link");
    }

    #[test]
    fn test_generate_excerpt_truncates_plain_text() {
        let body = format!("<p>{}</p>", "a".repeat(300));
        let excerpt = generate_excerpt(&body, 200);
        assert_eq!(excerpt.chars().count(), 200);
        assert!(!excerpt.contains('<'));
    }

    #[test]
    fn test_generate_excerpt_short_body_unchanged() {
        assert_eq!(generate_excerpt("<p>Short</p>", 200), "Short");
    }

    #[test]
    fn test_generate_excerpt_is_char_safe() {
        let excerpt = generate_excerpt("héllo wörld", 4);
        assert_eq!(excerpt, "héll");
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let body = vec!["word"; 201].join(" ");
        assert_eq!(reading_time_minutes(&body, 200), 2);
        assert_eq!(reading_time_minutes("one two", 200), 1);
    }

    #[test]
    fn test_reading_time_zero_rate_does_not_panic() {
        assert_eq!(reading_time_minutes("one two three", 0), 3);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags("rust, wasm ,,  web "),
            vec!["rust".to_string(), "wasm".to_string(), "web".to_string()]
        );
        assert!(parse_tags("  ,  ").is_empty());
    }

    #[test]
    fn test_contains_lowercase() {
        assert!(contains_lowercase("Designing for Accessibility", "accessibility"));
        assert!(!contains_lowercase("Remote Work", "design"));
    }
}
