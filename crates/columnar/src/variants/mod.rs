//! Concrete column implementations, one type per catalog entry.

mod color;
mod date;
mod depends;
mod description;
mod id;
mod literal;
mod mask;
mod parent;
mod priority;
mod project;
mod recur;
mod status;
mod tags;
mod urgency;
mod uuid;

pub use color::{Bg, Fg};
pub use date::{Due, End, Entry, Start, Until, Wait};
pub use depends::Depends;
pub use description::Description;
pub use id::Id;
pub use literal::Literal;
pub use mask::{IMask, Mask};
pub use parent::Parent;
pub use priority::Priority;
pub use project::Project;
pub use recur::Recur;
pub use status::Status;
pub use tags::Tags;
pub use urgency::Urgency;
pub use uuid::Uuid;

use columnar_text::{left_justify, right_justify, wrap_text, Color};

/// Wraps `text`, left-justifies every line and applies `color`.
pub(crate) fn wrapped(text: &str, width: usize, color: &Color, hyphenate: bool) -> Vec<String> {
    wrap_text(text, width, hyphenate)
        .iter()
        .map(|line| color.colorize(&left_justify(line, width)))
        .collect()
}

/// Wraps `text`, right-justifies every line and applies `color`.
pub(crate) fn wrapped_right(
    text: &str,
    width: usize,
    color: &Color,
    hyphenate: bool,
) -> Vec<String> {
    wrap_text(text, width, hyphenate)
        .iter()
        .map(|line| color.colorize(&right_justify(line, width)))
        .collect()
}

/// One left-justified line, or none for empty text.
pub(crate) fn single_left(text: &str, width: usize, color: &Color) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![color.colorize(&left_justify(text, width))]
}

/// One right-justified line, or none for empty text.
pub(crate) fn single_right(text: &str, width: usize, color: &Color) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![color.colorize(&right_justify(text, width))]
}

/// Splits a comma-separated list attribute, dropping empty entries.
pub(crate) fn list_items(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// The first `n` characters of `value`.
pub(crate) fn prefix(value: &str, n: usize) -> &str {
    match value.char_indices().nth(n) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_lines_are_exact_width() {
        let lines = wrapped("a very long line", 8, &Color::nocolor(), true);
        assert_eq!(lines, vec!["a very  ", "long    ", "line    "]);
    }

    #[test]
    fn wrapped_right_pads_left() {
        assert_eq!(
            wrapped_right("ab cd", 4, &Color::nocolor(), true),
            vec!["  ab", "  cd"]
        );
    }

    #[test]
    fn single_line_helpers_skip_empty() {
        assert!(single_left("", 4, &Color::nocolor()).is_empty());
        assert!(single_right("", 4, &Color::nocolor()).is_empty());
        assert_eq!(single_right("7", 3, &Color::nocolor()), vec!["  7"]);
    }

    #[test]
    fn list_items_trims_and_drops_blanks() {
        assert_eq!(list_items("a, b,,c "), vec!["a", "b", "c"]);
        assert!(list_items("").is_empty());
    }

    #[test]
    fn prefix_counts_characters() {
        assert_eq!(prefix("abcdefghij", 8), "abcdefgh");
        assert_eq!(prefix("abc", 8), "abc");
        assert_eq!(prefix("日本語", 2), "日本");
    }
}
