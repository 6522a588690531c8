//! Greedy word wrapping for fixed-width columns.
//!
//! Lines are filled word by word. A token that is wider than the column on
//! its own is broken into column-wide pieces, optionally hyphenated, so the
//! caller always gets lines it can justify to the requested width.
//!
//! # Example
//!
//! ```rust
//! use columnar_text::wrap_text;
//!
//! let lines = wrap_text("hello world foo bar", 11, true);
//! assert_eq!(lines, vec!["hello world", "foo bar"]);
//!
//! // A token wider than the column is broken
//! let lines = wrap_text("abcdefgh", 5, true);
//! assert_eq!(lines, vec!["abcd-", "efgh"]);
//! ```

use crate::util::{display_width, split_at_width};

/// Wraps `text` into lines no wider than `width` display columns.
///
/// - Paragraphs are split on `\n` and never joined.
/// - Runs of whitespace collapse to a single space; lines carry no leading
///   or trailing whitespace.
/// - When `width >= longest_word(text)` no token is ever split.
/// - Wider tokens are cut into pieces; with `hyphenate` (and `width > 1`)
///   every non-final piece ends in `-` and still fits the width.
///
/// Empty or whitespace-only text, and a zero width, produce no lines.
pub fn wrap_text(text: &str, width: usize, hyphenate: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);
            let gap = usize::from(!current.is_empty());

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            let tail = if word_width > width {
                break_word(word, width, hyphenate, &mut lines)
            } else {
                word
            };
            current.push_str(tail);
            current_width = display_width(tail);
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Pushes full-width pieces of `word` onto `lines` and returns the tail that
/// fits within `width`.
fn break_word<'a>(
    word: &'a str,
    width: usize,
    hyphenate: bool,
    lines: &mut Vec<String>,
) -> &'a str {
    let hyphen = hyphenate && width > 1;
    let piece_width = if hyphen { width - 1 } else { width };

    let mut rest = word;
    while display_width(rest) > width {
        let (head, tail) = split_at_width(rest, piece_width);
        let mut piece = head.to_string();
        if hyphen {
            piece.push('-');
        }
        lines.push(piece);
        rest = tail;
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_no_wrap_needed() {
        assert_eq!(wrap_text("red", 10, true), vec!["red"]);
    }

    #[test]
    fn wrap_empty_yields_no_lines() {
        assert!(wrap_text("", 10, true).is_empty());
        assert!(wrap_text("   ", 10, true).is_empty());
        assert!(wrap_text("\n\n", 10, true).is_empty());
    }

    #[test]
    fn wrap_zero_width_yields_no_lines() {
        assert!(wrap_text("hello", 0, true).is_empty());
    }

    #[test]
    fn wrap_fills_greedily() {
        assert_eq!(
            wrap_text("a very long line of words", 10, true),
            vec!["a very", "long line", "of words"]
        );
    }

    #[test]
    fn wrap_exact_width() {
        assert_eq!(wrap_text("abcde fghij", 5, true), vec!["abcde", "fghij"]);
        assert_eq!(wrap_text("ab cd", 5, true), vec!["ab cd"]);
    }

    #[test]
    fn wrap_collapses_whitespace() {
        assert_eq!(wrap_text("  a   b  ", 10, true), vec!["a b"]);
    }

    #[test]
    fn wrap_preserves_paragraphs() {
        assert_eq!(wrap_text("one\ntwo", 10, true), vec!["one", "two"]);
    }

    #[test]
    fn wrap_hyphenates_long_words() {
        assert_eq!(
            wrap_text("description", 6, true),
            vec!["descr-", "iption"]
        );
    }

    #[test]
    fn wrap_breaks_without_hyphen() {
        assert_eq!(wrap_text("description", 6, false), vec!["descri", "ption"]);
    }

    #[test]
    fn wrap_long_word_tail_joins_next_word() {
        assert_eq!(
            wrap_text("long description that", 10, true),
            vec!["long", "descripti-", "on that"]
        );
    }

    #[test]
    fn wrap_width_one_never_hyphenates() {
        assert_eq!(wrap_text("abc", 1, true), vec!["a", "b", "c"]);
    }

    #[test]
    fn wrap_wide_characters() {
        assert_eq!(wrap_text("日本語 テスト", 6, true), vec!["日本語", "テスト"]);
    }
}
