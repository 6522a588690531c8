//! The `urgency` column: the computed urgency score, right-aligned.
//!
//! `default` shows one decimal place, `integer` rounds to a whole number.
//! Values that aren't numbers are shown as they are.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::single_right;

pub struct Urgency;

fn urgency_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    let value = value.trim();
    let score = value.parse::<f64>().ok().filter(|score| score.is_finite());

    match (column.style(), score) {
        ("default", Some(score)) => Ok(format!("{score:.1}")),
        ("integer", Some(score)) => Ok(format!("{:.0}", score.round())),
        ("default" | "integer", None) => Ok(value.to_string()),
        _ => Err(column.unsupported_style()),
    }
}

impl Variant for Urgency {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::Numeric,
            label: "Urgency",
            styles: &["default", "integer"],
            examples: &["4.6", "5"],
            modifiable: false,
        }
    }

    fn validate(&self, value: &str) -> bool {
        value.trim().parse::<f64>().is_ok_and(f64::is_finite)
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Urgency {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        Ok(Measure::single_line(&urgency_text(column, record)?))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        Ok(single_right(&urgency_text(column, record)?, width, color))
    }
}
