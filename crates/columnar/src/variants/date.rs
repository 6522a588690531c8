//! Date columns: `due`, `end`, `entry`, `start`, `until`, `wait`.
//!
//! Values are epoch seconds. Styles:
//!
//! | Style | Output |
//! |-------|--------|
//! | `default` | `2024-03-09` |
//! | `iso` | `20240309T143000Z` |
//! | `epoch` | the stored seconds |
//! | `julian` | `2024.069` (year and day of year) |
//! | `active` (`start` only) | `*` when the task has started |
//!
//! Values that aren't epoch seconds are shown verbatim.

use chrono::{DateTime, NaiveDate, Utc};
use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::single_left;

const STYLES: &[&str] = &["default", "iso", "epoch", "julian"];
const START_STYLES: &[&str] = &["default", "iso", "epoch", "julian", "active"];
const EXAMPLES: &[&str] = &["2024-03-09", "20240309T143000Z", "1709994600", "2024.069"];

/// Marker shown by `start.active`.
const ACTIVE_INDICATOR: &str = "*";

/// Formats a date value for the column's style.
///
/// Styles outside the column's own list are rejected before the value is
/// looked at, so `active` only works on `start`.
fn format_date(column: &Column, value: &str) -> Result<String> {
    if !column.styles().contains(&column.style()) {
        return Err(column.unsupported_style());
    }
    if value.is_empty() {
        return Ok(String::new());
    }

    let format = match column.style() {
        "default" => "%Y-%m-%d",
        "iso" => "%Y%m%dT%H%M%SZ",
        "julian" => "%Y.%j",
        "epoch" => return Ok(value.to_string()),
        "active" => return Ok(ACTIVE_INDICATOR.to_string()),
        _ => return Err(column.unsupported_style()),
    };

    Ok(match parse_epoch(value) {
        Some(date) => date.format(format).to_string(),
        None => value.to_string(),
    })
}

fn parse_epoch(value: &str) -> Option<DateTime<Utc>> {
    let seconds = value.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0)
}

/// Epoch seconds or a `YYYY-MM-DD` date.
fn is_date(value: &str) -> bool {
    parse_epoch(value).is_some() || NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok()
}

macro_rules! date_column {
    ($(#[$meta:meta])* $ty:ident, $label:literal, $modifiable:literal, $styles:expr) => {
        $(#[$meta])*
        pub struct $ty;

        impl Variant for $ty {
            fn defaults(&self) -> Defaults {
                Defaults {
                    value_type: ValueType::Date,
                    label: $label,
                    styles: $styles,
                    examples: EXAMPLES,
                    modifiable: $modifiable,
                }
            }

            fn validate(&self, value: &str) -> bool {
                is_date(value)
            }

            fn as_record(&self) -> Option<&dyn RecordColumn> {
                Some(self)
            }
        }

        impl RecordColumn for $ty {
            fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
                let text = format_date(column, &record.get(column.name()))?;
                Ok(Measure::single_line(&text))
            }

            fn render(
                &self,
                column: &Column,
                record: &dyn Record,
                width: usize,
                color: &Color,
            ) -> Result<Vec<String>> {
                let text = format_date(column, &record.get(column.name()))?;
                Ok(single_left(&text, width, color))
            }
        }
    };
}

date_column!(
    /// The `due` column: when the task is due.
    Due, "Due", true, STYLES
);
date_column!(
    /// The `end` column: when the task was completed or deleted.
    End, "Completed", false, STYLES
);
date_column!(
    /// The `entry` column: when the task was added.
    Entry, "Added", false, STYLES
);
date_column!(
    /// The `start` column: when work on the task began.
    Start, "Started", true, START_STYLES
);
date_column!(
    /// The `until` column: when a recurring task expires.
    Until, "Until", true, STYLES
);
date_column!(
    /// The `wait` column: when a hidden task reappears.
    Wait, "Wait", true, STYLES
);
