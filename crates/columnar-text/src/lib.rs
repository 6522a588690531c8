//! # columnar-text - layout primitives for report columns
//!
//! The building blocks every report column uses to turn a value into
//! fixed-width terminal lines:
//!
//! - [`wrap_text`]: greedy word wrap that never splits a token when the width
//!   allows it
//! - [`longest_word`]: the narrowest width a wrap can reach
//! - [`left_justify`] / [`right_justify`]: pad a line to an exact width
//! - [`truncate`]: cut a line with a marker
//! - [`Color`]: parse, blend and apply color specifications
//!
//! Width calculations are Unicode-aware (CJK characters count as two
//! columns) and ignore ANSI escape codes.
//!
//! ```rust
//! use columnar_text::{left_justify, wrap_text, Color};
//!
//! let color = Color::parse("green").unwrap();
//! let lines: Vec<String> = wrap_text("a very long line of words", 10, true)
//!     .iter()
//!     .map(|line| color.colorize(&left_justify(line, 10)))
//!     .collect();
//!
//! assert_eq!(lines.len(), 3);
//! ```

mod color;
mod error;
mod util;
mod wrap;

pub use color::Color;
pub use error::ColorError;
pub use util::{
    display_width, left_justify, longest_line, longest_word, right_justify, truncate,
};
pub use wrap::wrap_text;
