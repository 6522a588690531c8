//! Columnar - pluggable report columns for terminal task lists.
//!
//! A report is a list of columns, each one formatting a single attribute of
//! a record. This crate owns the columns; laying them out into a table and
//! allocating widths is the caller's job. Every column answers three
//! questions:
//!
//! - how wide could this value be? ([`Column::measure`])
//! - what lines does it occupy at a given width? ([`Column::render`])
//! - what goes in the header? ([`Column::render_header`])
//!
//! # Quick Start
//!
//! ```rust
//! use columnar::{column, Color, ReportConfig, Task};
//!
//! let description = column("description", "next").unwrap();
//! let task = Task::new().with("description", "a very long description that must wrap");
//!
//! // The engine picks a width between the bounds
//! let measure = description.measure(&task).unwrap();
//! assert_eq!(measure.minimum, 11);
//! assert_eq!(measure.maximum, 38);
//!
//! let lines = description.render(&task, 11, &Color::nocolor()).unwrap();
//! assert_eq!(lines[0], "a very long");
//! assert_eq!(lines.len(), 4);
//!
//! let header = description.render_header(11, &Color::nocolor(), &ReportConfig::default());
//! assert_eq!(header.len(), 1);
//! ```
//!
//! # Column Specifications
//!
//! Reports name their columns as `<name>[.<style>]`:
//!
//! | Spec | Output |
//! |------|--------|
//! | `due` | `2024-03-09` |
//! | `due.iso` | `20240309T143000Z` |
//! | `tags.count` | `[3]` |
//! | `description.truncated` | `Move your clothes...` |
//! | `string.right` | static text, right-aligned |
//!
//! [`catalog`] lists every column with its styles and examples.
//!
//! # Rendering Contract
//!
//! - every rendered line is exactly `width` display columns, before color
//! - an empty value renders as no lines
//! - when `width >= minimum`, no token is split across lines
//! - rendering is pure: it reads only the record, the width and the color
//!
//! Records are anything implementing [`Record`]; [`Task`] is a simple
//! attribute map for callers without their own type.

mod column;
mod config;
mod error;
mod factory;
mod kind;
mod record;
mod traits;
mod variants;

pub use column::{Column, Measure, ValueType, DEFAULT_STYLE};
pub use config::ReportConfig;
pub use error::{ColumnError, Result};
pub use factory::{catalog, column, ColumnSpec};
pub use kind::ColumnKind;
pub use record::{Record, Task};
pub use traits::{Defaults, RecordColumn, ValueColumn, Variant};

pub use columnar_text::{
    display_width, left_justify, longest_word, right_justify, truncate, wrap_text, Color,
    ColorError,
};
