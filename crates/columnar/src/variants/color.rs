//! Literal color columns.
//!
//! `fg` and `bg` hold a raw color specification attached to a record. The
//! value is shown as plain text: it is never parsed, and any string is valid.
//!
//! - `measure`: minimum is the longest whitespace-delimited token, maximum the
//!   full value width
//! - `render`: word-wrap to the width, left-justify each line, apply the
//!   supplied color to every line in order
//!
//! Only the `default` style exists.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::wrapped;

const STYLES: &[&str] = &["default"];

/// The `fg` column: a record's foreground color specification.
pub struct Fg;

/// The `bg` column: a record's background color specification.
pub struct Bg;

impl Variant for Fg {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Foreground color",
            styles: STYLES,
            examples: &["red"],
            modifiable: true,
        }
    }

    fn validate(&self, _value: &str) -> bool {
        true
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Fg {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        measure_literal(column, record)
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        render_literal(column, record, width, color)
    }
}

impl Variant for Bg {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Background color",
            styles: STYLES,
            examples: &["on red"],
            modifiable: true,
        }
    }

    fn validate(&self, _value: &str) -> bool {
        true
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Bg {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        measure_literal(column, record)
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        render_literal(column, record, width, color)
    }
}

fn measure_literal(column: &Column, record: &dyn Record) -> Result<Measure> {
    match column.style() {
        "default" => Ok(Measure::text(&record.get(column.name()))),
        _ => Err(column.unsupported_style()),
    }
}

fn render_literal(
    column: &Column,
    record: &dyn Record,
    width: usize,
    color: &Color,
) -> Result<Vec<String>> {
    match column.style() {
        "default" => Ok(wrapped(
            &record.get(column.name()),
            width,
            color,
            column.hyphenate(),
        )),
        _ => Err(column.unsupported_style()),
    }
}
