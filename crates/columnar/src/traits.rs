//! Capability traits implemented by column variants.
//!
//! Every catalog entry is a [`Variant`]. What it can format is split into two
//! capabilities:
//!
//! - [`RecordColumn`]: reads its attribute from a [`Record`]
//! - [`ValueColumn`]: formats a raw string handed in by the caller
//!
//! A variant exposes the capabilities it has through [`Variant::as_record`]
//! and [`Variant::as_value`]. [`Column`] turns a missing capability into
//! [`ColumnError::UnimplementedCapability`](crate::ColumnError).

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;

/// Identity a freshly constructed column starts with.
#[derive(Clone, Copy, Debug)]
pub struct Defaults {
    pub value_type: ValueType,
    pub label: &'static str,
    pub styles: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub modifiable: bool,
}

/// A concrete column implementation.
pub trait Variant: Sync {
    /// Identity for a new column of this kind.
    fn defaults(&self) -> Defaults;

    /// Accepts user input for the attribute. Any non-empty value by default.
    fn validate(&self, value: &str) -> bool {
        !value.is_empty()
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        None
    }

    fn as_value(&self) -> Option<&dyn ValueColumn> {
        None
    }
}

/// Formats an attribute read from a record.
pub trait RecordColumn {
    /// Minimum and maximum display width of the column's value in `record`.
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure>;

    /// Lines for the column's value in `record`, each exactly `width` wide.
    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>>;
}

/// Formats a raw value supplied by the caller.
pub trait ValueColumn {
    fn measure_value(&self, column: &Column, value: &str) -> Result<Measure>;

    fn render_value(
        &self,
        column: &Column,
        value: &str,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>>;
}
