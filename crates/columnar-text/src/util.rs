//! ANSI-aware measurement, justification and truncation.
//!
//! All functions in this module handle ANSI escape codes: they are preserved
//! in output but don't count toward display width calculations.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// CJK characters count as two columns, combining marks as zero.
///
/// # Example
///
/// ```rust
/// use columnar_text::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Width of the longest whitespace-delimited token in `s`.
///
/// This is the narrowest width a word wrap can reach without splitting a
/// token, so columns report it as their minimum width.
///
/// ```rust
/// use columnar_text::longest_word;
///
/// assert_eq!(longest_word("a very long description"), 11);
/// assert_eq!(longest_word("   "), 0);
/// ```
pub fn longest_word(s: &str) -> usize {
    s.split_whitespace().map(display_width).max().unwrap_or(0)
}

/// Width of the longest `\n`-separated line in `s`.
pub fn longest_line(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Strings already wider than `width` are returned unchanged.
///
/// ```rust
/// use columnar_text::left_justify;
///
/// assert_eq!(left_justify("red", 6), "red   ");
/// assert_eq!(left_justify("hello", 3), "hello");
/// ```
pub fn left_justify(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// ```rust
/// use columnar_text::right_justify;
///
/// assert_eq!(right_justify("42", 5), "   42");
/// ```
pub fn right_justify(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Truncates a string from the end to fit within `max_width`, appending
/// `marker` when anything was removed.
///
/// If the string already fits it is returned unchanged. When `max_width` is
/// narrower than the marker, the marker itself is cut.
///
/// ```rust
/// use columnar_text::truncate;
///
/// assert_eq!(truncate("Hello World", 8, "..."), "Hello...");
/// assert_eq!(truncate("Short", 10, "..."), "Short");
/// ```
pub fn truncate(s: &str, max_width: usize, marker: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let marker_width = measure_text_width(marker);
    if max_width <= marker_width {
        return truncate_to_display_width(marker, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - marker_width);
    result.push_str(marker);
    result
}

/// Splits `s` so that the head is at most `max_width` columns wide.
///
/// The head always holds at least one character so callers that loop on the
/// tail make progress even when a single wide character exceeds `max_width`.
pub(crate) fn split_at_width(s: &str, max_width: usize) -> (&str, &str) {
    let mut current_width = 0;

    for (i, c) in s.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width && i > 0 {
            return s.split_at(i);
        }
        current_width += char_width;
    }

    (s, "")
}

/// Truncate string to fit display width, keeping characters from the start.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }

        if in_escape {
            result.push(c);
            // CSI sequences end with a letter (@ through ~)
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width(" "), 1);
    }

    #[test]
    fn display_width_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn longest_word_picks_widest_token() {
        assert_eq!(longest_word("red"), 3);
        assert_eq!(longest_word("a bb ccc dd"), 3);
        assert_eq!(longest_word("one\ntwo three"), 5);
    }

    #[test]
    fn longest_word_empty() {
        assert_eq!(longest_word(""), 0);
        assert_eq!(longest_word(" \t\n"), 0);
    }

    #[test]
    fn longest_line_splits_on_newlines() {
        assert_eq!(longest_line("ab\nabcd\nabc"), 4);
        assert_eq!(longest_line(""), 0);
    }

    #[test]
    fn left_justify_pads_right() {
        assert_eq!(left_justify("red", 10), "red       ");
        assert_eq!(left_justify("", 3), "   ");
    }

    #[test]
    fn left_justify_never_truncates() {
        assert_eq!(left_justify("hello", 5), "hello");
        assert_eq!(left_justify("hello", 2), "hello");
    }

    #[test]
    fn left_justify_ansi() {
        let styled = "\x1b[31mhi\x1b[0m";
        let result = left_justify(styled, 5);
        assert!(result.starts_with("\x1b[31m"));
        assert_eq!(display_width(&result), 5);
    }

    #[test]
    fn right_justify_pads_left() {
        assert_eq!(right_justify("7", 3), "  7");
        assert_eq!(right_justify("1234", 3), "1234");
    }

    #[test]
    fn truncate_basic() {
        assert_eq!(truncate("hello world", 8, "..."), "hello...");
        assert_eq!(truncate("hello world", 6, "…"), "hello…");
    }

    #[test]
    fn truncate_exact_fit() {
        assert_eq!(truncate("hello", 5, "..."), "hello");
    }

    #[test]
    fn truncate_tiny_width() {
        assert_eq!(truncate("hello", 2, "..."), "..");
        assert_eq!(truncate("hello", 0, "..."), "");
    }

    #[test]
    fn split_at_width_respects_limit() {
        assert_eq!(split_at_width("abcdef", 4), ("abcd", "ef"));
        assert_eq!(split_at_width("abc", 4), ("abc", ""));
    }

    #[test]
    fn split_at_width_always_makes_progress() {
        assert_eq!(split_at_width("日本", 1), ("日", "本"));
        assert_eq!(split_at_width("abc", 0), ("a", "bc"));
    }
}
