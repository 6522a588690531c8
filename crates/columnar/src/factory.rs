//! Building columns from report specifications.
//!
//! A report lists its columns as `<name>[.<style>]` strings, e.g.
//! `description.truncated` or `due`. [`column`] turns one of those into a
//! [`Column`] bound to the report; [`catalog`] builds one default instance of
//! every known column for help and preview output.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::column::{Column, DEFAULT_STYLE};
use crate::error::{ColumnError, Result};
use crate::kind::ColumnKind;

/// A parsed `<name>[.<style>]` column specification.
///
/// The name must be a catalog entry; the style is not checked until the
/// column measures or renders.
///
/// ```rust
/// use columnar::{ColumnKind, ColumnSpec};
///
/// let spec: ColumnSpec = "due.iso".parse().unwrap();
/// assert_eq!(spec.kind, ColumnKind::Due);
/// assert_eq!(spec.style, "iso");
///
/// let spec: ColumnSpec = "project".parse().unwrap();
/// assert_eq!(spec.to_string(), "project.default");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    pub style: String,
}

impl FromStr for ColumnSpec {
    type Err = ColumnError;

    fn from_str(spec: &str) -> Result<Self> {
        let (name, style) = spec.split_once('.').unwrap_or((spec, ""));
        let kind = ColumnKind::from_name(name)
            .ok_or_else(|| ColumnError::UnknownColumnName(name.to_string()))?;
        let style = if style.is_empty() { DEFAULT_STYLE } else { style };

        Ok(ColumnSpec {
            kind,
            style: style.to_string(),
        })
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.style)
    }
}

/// Builds the column named by `spec` for `report`.
///
/// Only the first `.` separates name from style, so `string.left_fixed` and
/// a style containing dots both work. Lookup is exact and case-sensitive.
///
/// # Errors
///
/// [`ColumnError::UnknownColumnName`] when the name isn't in the catalog.
///
/// ```rust
/// use columnar::column;
///
/// let col = column("description.oneline", "next").unwrap();
/// assert_eq!(col.name(), "description");
/// assert_eq!(col.style(), "oneline");
/// assert_eq!(col.report(), "next");
///
/// assert!(column("descr", "next").is_err());
/// ```
pub fn column(spec: &str, report: &str) -> Result<Column> {
    let parsed: ColumnSpec = spec.parse()?;
    debug!(%parsed, report, "building column");
    Ok(Column::new(parsed.kind).bind(&parsed.style, report))
}

/// One default column per catalog entry, keyed by name.
///
/// Instances have style `default` and are not bound to any report.
pub fn catalog() -> BTreeMap<String, Column> {
    ColumnKind::ALL
        .into_iter()
        .map(|kind| (kind.name().to_string(), Column::new(kind)))
        .collect()
}
