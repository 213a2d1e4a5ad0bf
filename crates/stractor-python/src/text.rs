//! Text-range helpers shared by the extractors
//!
//! All extracted text is sliced from the input `&str` by node byte ranges,
//! so multi-byte characters come back exactly as written.

use std::ops::Range;
use tree_sitter::Node;

/// Prefix characters allowed in front of a Python string literal
const STRING_PREFIX: &[char] = &['r', 'R', 'u', 'U', 'b', 'B', 'f', 'F'];

/// Verbatim source text covered by a node
pub fn node_text<'s>(source: &'s str, node: Node) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Prefix letters written before a literal's opening quote
pub fn string_prefix(literal: &str) -> &str {
    let unprefixed = literal.trim_start_matches(STRING_PREFIX);
    &literal[..literal.len() - unprefixed.len()]
}

/// Remove one layer of quotes (and any string prefix) from a string literal
///
/// Triple quotes are tried before single quotes. Text that is not a
/// recognizable literal is returned unchanged.
pub fn strip_quotes(literal: &str) -> &str {
    let unprefixed = literal.trim_start_matches(STRING_PREFIX);
    // Only accept the prefix when a quote follows it
    let text = if unprefixed.starts_with(['"', '\'']) && literal.len() - unprefixed.len() <= 2 {
        unprefixed
    } else {
        literal
    };

    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if text.len() >= 2 * quote.len() && text.starts_with(quote) && text.ends_with(quote) {
            return &text[quote.len()..text.len() - quote.len()];
        }
    }
    text
}

/// Remove exactly one outer `open`/`close` pair, if present
pub fn strip_outer_pair(text: &str, open: char, close: char) -> &str {
    if text.len() >= 2 && text.starts_with(open) && text.ends_with(close) {
        &text[open.len_utf8()..text.len() - close.len_utf8()]
    } else {
        text
    }
}

/// Trim, mapping an empty result to `None`
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Copy of `text` with `range` cut out
///
/// `range` is relative to `text` and is clamped to its bounds.
pub fn cut_range(text: &str, range: Range<usize>) -> String {
    let start = range.start.min(text.len());
    let end = range.end.clamp(start, text.len());
    let mut out = String::with_capacity(text.len() - (end - start));
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes_forms() {
        assert_eq!(strip_quotes(r#"""" top level docs """"#), " top level docs ");
        assert_eq!(strip_quotes("'''single triple'''"), "single triple");
        assert_eq!(strip_quotes(r#""double""#), "double");
        assert_eq!(strip_quotes("'single'"), "single");
    }

    #[test]
    fn test_strip_quotes_only_one_layer() {
        // Quote characters inside the literal survive
        assert_eq!(strip_quotes(r#""'quoted'""#), "'quoted'");
        assert_eq!(strip_quotes(r#"""""inner"""""#), r#""inner""#);
    }

    #[test]
    fn test_strip_quotes_prefixes() {
        assert_eq!(strip_quotes(r#"r"""raw \d""""#), r"raw \d");
        assert_eq!(strip_quotes("u'text'"), "text");
        assert_eq!(strip_quotes(r#"Rb"bytes""#), "bytes");
    }

    #[test]
    fn test_strip_quotes_empty_and_unrecognized() {
        assert_eq!(strip_quotes(r#""""""""#), "");
        assert_eq!(strip_quotes(r#""""#), "");
        assert_eq!(strip_quotes("not a literal"), "not a literal");
        assert_eq!(strip_quotes("'"), "'");
    }

    #[test]
    fn test_string_prefix() {
        assert_eq!(string_prefix(r#""plain""#), "");
        assert_eq!(string_prefix("rb'raw bytes'"), "rb");
        assert_eq!(string_prefix(r#"F"{x}""#), "F");
    }

    #[test]
    fn test_strip_outer_pair() {
        assert_eq!(strip_outer_pair("(a, b=(1, 2))", '(', ')'), "a, b=(1, 2)");
        assert_eq!(strip_outer_pair("()", '(', ')'), "");
        assert_eq!(strip_outer_pair("{x}", '{', '}'), "x");
        assert_eq!(strip_outer_pair("(", '(', ')'), "(");
        assert_eq!(strip_outer_pair("a, b", '(', ')'), "a, b");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  pass \n"), Some("pass".to_string()));
        assert_eq!(non_empty(" \n\t "), None);
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn test_cut_range() {
        assert_eq!(cut_range("abcdef", 1..3), "adef");
        assert_eq!(cut_range("abcdef", 0..6), "");
        assert_eq!(cut_range("abc", 2..10), "ab");
        assert_eq!(cut_range("héllo", 1..3), "hllo");
    }
}
