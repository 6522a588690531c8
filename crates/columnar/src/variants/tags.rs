//! The `tags` column.
//!
//! The attribute holds a comma-separated tag list. `default` shows the tags
//! space-separated and wraps them, `indicator` shows `+` when any tag is set,
//! `count` shows `[N]`.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::{list_items, single_left, wrapped};

const INDICATOR: &str = "+";

pub struct Tags;

impl Tags {
    fn text(column: &Column, record: &dyn Record) -> Result<String> {
        let value = record.get(column.name());
        let tags = list_items(&value);

        Ok(match column.style() {
            "default" => tags.join(" "),
            "indicator" if tags.is_empty() => String::new(),
            "indicator" => INDICATOR.to_string(),
            "count" if tags.is_empty() => String::new(),
            "count" => format!("[{}]", tags.len()),
            _ => return Err(column.unsupported_style()),
        })
    }
}

impl Variant for Tags {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Tags",
            styles: &["default", "indicator", "count"],
            examples: &["home @chore next", "+", "[2]"],
            modifiable: true,
        }
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Tags {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        let text = Tags::text(column, record)?;
        Ok(match column.style() {
            "default" => Measure::text(&text),
            _ => Measure::single_line(&text),
        })
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        let text = Tags::text(column, record)?;
        Ok(match column.style() {
            "default" => wrapped(&text, width, color, column.hyphenate()),
            _ => single_left(&text, width, color),
        })
    }
}
