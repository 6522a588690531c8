//! The `priority` column. Values are `H`, `M` or `L`; `long` spells them out.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::single_left;

pub struct Priority;

fn long_name(value: &str) -> &str {
    match value {
        "H" | "h" => "High",
        "M" | "m" => "Medium",
        "L" | "l" => "Low",
        other => other,
    }
}

fn priority_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    match column.style() {
        "default" => Ok(value),
        "long" => Ok(long_name(value.trim()).to_string()),
        _ => Err(column.unsupported_style()),
    }
}

impl Variant for Priority {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Pri",
            styles: &["default", "long"],
            examples: &["M", "Medium"],
            modifiable: true,
        }
    }

    fn validate(&self, value: &str) -> bool {
        matches!(value.trim(), "H" | "M" | "L" | "h" | "m" | "l")
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Priority {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        Ok(Measure::single_line(&priority_text(column, record)?))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        Ok(single_left(&priority_text(column, record)?, width, color))
    }
}
