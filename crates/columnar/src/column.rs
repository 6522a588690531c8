//! The column contract shared by every catalog entry.

use std::fmt;

use columnar_text::{display_width, left_justify, longest_word, Color};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::config::ReportConfig;
use crate::error::{ColumnError, Result};
use crate::kind::ColumnKind;
use crate::record::Record;
use crate::traits::{RecordColumn, ValueColumn};

/// Style every column starts with.
pub const DEFAULT_STYLE: &str = "default";

/// Semantic kind of a column's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    String,
    Date,
    Numeric,
    Duration,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Date => "date",
            ValueType::Numeric => "numeric",
            ValueType::Duration => "duration",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display width bounds for one value.
///
/// `minimum` is the narrowest width the value renders at without splitting a
/// token; `maximum` is its unwrapped width. `minimum <= maximum` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measure {
    pub minimum: usize,
    pub maximum: usize,
}

impl Measure {
    pub fn new(minimum: usize, maximum: usize) -> Self {
        Measure {
            minimum,
            maximum: maximum.max(minimum),
        }
    }

    /// Both bounds equal `width`, for values that never wrap.
    pub fn fixed(width: usize) -> Self {
        Measure::new(width, width)
    }

    /// Bounds of wrappable text: longest token to full width.
    pub fn text(value: &str) -> Self {
        Measure::new(longest_word(value), display_width(value))
    }

    /// Bounds of a value rendered on a single line.
    pub fn single_line(value: &str) -> Self {
        Measure::fixed(display_width(value))
    }
}

/// A report column: one record attribute's formatting rules.
///
/// Columns are created by [`column`](fn@crate::column) or
/// [`catalog`](crate::catalog) and owned by the report that asked for them.
///
/// ```rust
/// use columnar::{column, Color, Task};
///
/// let fg = column("fg", "list").unwrap();
/// let task = Task::new().with("fg", "red");
///
/// let measure = fg.measure(&task).unwrap();
/// assert_eq!((measure.minimum, measure.maximum), (3, 3));
///
/// let lines = fg.render(&task, 10, &Color::nocolor()).unwrap();
/// assert_eq!(lines, vec!["red       "]);
/// ```
#[derive(Clone, Debug)]
pub struct Column {
    kind: ColumnKind,
    value_type: ValueType,
    style: String,
    label: String,
    report: String,
    modifiable: bool,
    styles: &'static [&'static str],
    examples: &'static [&'static str],
    hyphenate: bool,
}

impl Column {
    pub(crate) fn new(kind: ColumnKind) -> Self {
        let defaults = kind.variant().defaults();
        Column {
            kind,
            value_type: defaults.value_type,
            style: DEFAULT_STYLE.to_string(),
            label: defaults.label.to_string(),
            report: String::new(),
            modifiable: defaults.modifiable,
            styles: defaults.styles,
            examples: defaults.examples,
            hyphenate: true,
        }
    }

    /// Binds the parsed style and owning report. An empty style stays default.
    pub(crate) fn bind(mut self, style: &str, report: &str) -> Self {
        if !style.is_empty() {
            self.style = style.to_string();
        }
        self.report = report.to_string();
        self
    }

    /// Replaces the built-in label, e.g. with a localized one.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether tokens wider than the column are hyphenated when broken.
    pub fn with_hyphenate(mut self, hyphenate: bool) -> Self {
        self.hyphenate = hyphenate;
        self
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Report this column is bound to; empty for catalog instances.
    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn is_modifiable(&self) -> bool {
        self.modifiable
    }

    pub fn styles(&self) -> &'static [&'static str] {
        self.styles
    }

    pub fn examples(&self) -> &'static [&'static str] {
        self.examples
    }

    pub fn hyphenate(&self) -> bool {
        self.hyphenate
    }

    /// Whether `value` is acceptable input for this column's attribute.
    pub fn validate(&self, value: &str) -> bool {
        self.kind.variant().validate(value)
    }

    /// Width bounds for this column's value in `record`.
    pub fn measure(&self, record: &dyn Record) -> Result<Measure> {
        let measure = self.record_capability("measure")?.measure(self, record)?;
        trace!(column = self.name(), style = %self.style, ?measure, "measured");
        Ok(measure)
    }

    /// Renders this column's value in `record` into lines of exactly `width`.
    ///
    /// An empty value renders as no lines at all.
    pub fn render(&self, record: &dyn Record, width: usize, color: &Color) -> Result<Vec<String>> {
        let lines = self
            .record_capability("render")?
            .render(self, record, width, color)?;
        trace!(column = self.name(), width, lines = lines.len(), "rendered");
        Ok(lines)
    }

    /// Width bounds for a raw value.
    pub fn measure_value(&self, value: &str) -> Result<Measure> {
        self.value_capability("measure_value")?
            .measure_value(self, value)
    }

    /// Renders a raw value into lines of exactly `width`.
    pub fn render_value(&self, value: &str, width: usize, color: &Color) -> Result<Vec<String>> {
        self.value_capability("render_value")?
            .render_value(self, value, width, color)
    }

    /// Renders the column header: nothing, the label, or the label plus a
    /// dashed separator.
    ///
    /// Labels are suppressed when `config.verbose_label` is off or the label
    /// is blank. With underlining enabled the label line is underlined in
    /// place; otherwise a line of `width` dashes follows it.
    pub fn render_header(&self, width: usize, color: &Color, config: &ReportConfig) -> Vec<String> {
        if !config.verbose_label || self.label.trim().is_empty() {
            return Vec::new();
        }

        let header = left_justify(&self.label, width);
        let mut color = color.clone();

        if config.underline_headers() {
            color.blend(&Color::underline());
            vec![color.colorize(&header)]
        } else {
            vec![color.colorize(&header), color.colorize(&"-".repeat(width))]
        }
    }

    /// Error for a style this column's variant doesn't render.
    pub(crate) fn unsupported_style(&self) -> ColumnError {
        warn!(column = self.name(), style = %self.style, report = %self.report, "unsupported column style");
        ColumnError::UnsupportedStyle {
            column: self.name().to_string(),
            style: self.style.clone(),
        }
    }

    fn record_capability(&self, operation: &'static str) -> Result<&'static dyn RecordColumn> {
        self.kind
            .variant()
            .as_record()
            .ok_or_else(|| self.unimplemented(operation))
    }

    fn value_capability(&self, operation: &'static str) -> Result<&'static dyn ValueColumn> {
        self.kind
            .variant()
            .as_value()
            .ok_or_else(|| self.unimplemented(operation))
    }

    fn unimplemented(&self, operation: &'static str) -> ColumnError {
        ColumnError::UnimplementedCapability {
            column: self.name().to_string(),
            operation,
        }
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.value_type == other.value_type
            && self.style == other.style
            && self.label == other.label
            && self.report == other.report
            && self.modifiable == other.modifiable
    }
}

impl Eq for Column {}
