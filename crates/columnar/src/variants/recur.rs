//! The `recur` column: a recurring task's period (`weekly`, `3d`, ...).

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::single_left;

const INDICATOR: &str = "R";

pub struct Recur;

fn recur_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    match column.style() {
        "default" => Ok(value),
        "indicator" if value.trim().is_empty() => Ok(String::new()),
        "indicator" => Ok(INDICATOR.to_string()),
        _ => Err(column.unsupported_style()),
    }
}

impl Variant for Recur {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::Duration,
            label: "Recur",
            styles: &["default", "indicator"],
            examples: &["weekly", "R"],
            modifiable: true,
        }
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Recur {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        Ok(Measure::single_line(&recur_text(column, record)?))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        Ok(single_left(&recur_text(column, record)?, width, color))
    }
}
