//! The `description` column.
//!
//! Styles:
//!
//! - `default`: the description, wrapped, line breaks kept
//! - `oneline`: line breaks folded into spaces, then wrapped
//! - `truncated`: a single line cut to the width with `...`
//! - `count`: the description followed by ` [N]` when the record has `N`
//!   annotations (read from the `annotations` attribute)

use columnar_text::{display_width, truncate, Color};

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::{single_left, wrapped};

const TRUNCATION_MARKER: &str = "...";

/// Attribute holding the number of annotations on the record.
const ANNOTATIONS: &str = "annotations";

pub struct Description;

fn annotation_count(record: &dyn Record) -> usize {
    record.get(ANNOTATIONS).trim().parse().unwrap_or(0)
}

fn with_count(description: String, record: &dyn Record) -> String {
    match annotation_count(record) {
        0 => description,
        n => format!("{description} [{n}]"),
    }
}

fn oneline(description: &str) -> String {
    description.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Variant for Description {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Description",
            styles: &["default", "oneline", "truncated", "count"],
            examples: &[
                "Move your clothes down on to the lower peg",
                "Move your clothes down on to the lower peg",
                "Move your clothes do...",
                "Move your clothes down on to the lower peg [1]",
            ],
            modifiable: true,
        }
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Description {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        let description = record.get(column.name());

        match column.style() {
            "default" => Ok(Measure::text(&description)),
            "oneline" => Ok(Measure::text(&oneline(&description))),
            "truncated" => {
                let text = oneline(&description);
                let full = display_width(&text);
                Ok(Measure::new(full.min(TRUNCATION_MARKER.len() + 1), full))
            }
            "count" if description.is_empty() => Ok(Measure::default()),
            "count" => Ok(Measure::text(&with_count(description, record))),
            _ => Err(column.unsupported_style()),
        }
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        let description = record.get(column.name());
        let hyphenate = column.hyphenate();

        match column.style() {
            "default" => Ok(wrapped(&description, width, color, hyphenate)),
            "oneline" => Ok(wrapped(&oneline(&description), width, color, hyphenate)),
            "truncated" => {
                let text = truncate(&oneline(&description), width, TRUNCATION_MARKER);
                Ok(single_left(&text, width, color))
            }
            "count" if description.is_empty() => Ok(Vec::new()),
            "count" => Ok(wrapped(
                &with_count(description, record),
                width,
                color,
                hyphenate,
            )),
            _ => Err(column.unsupported_style()),
        }
    }
}
