//! The `project` column.
//!
//! Projects nest with dots (`home.garden`). `parent` shows only the top
//! level.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::wrapped;

pub struct Project;

fn project_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    match column.style() {
        "default" => Ok(value),
        "parent" => Ok(match value.split_once('.') {
            Some((top, _)) => top.to_string(),
            None => value,
        }),
        _ => Err(column.unsupported_style()),
    }
}

impl Variant for Project {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Project",
            styles: &["default", "parent"],
            examples: &["home.garden", "home"],
            modifiable: true,
        }
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Project {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        Ok(Measure::text(&project_text(column, record)?))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        let text = project_text(column, record)?;
        Ok(wrapped(&text, width, color, column.hyphenate()))
    }
}
