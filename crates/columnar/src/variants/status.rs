//! The `status` column.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::single_left;

const STATUSES: &[&str] = &["pending", "completed", "deleted", "recurring", "waiting"];

pub struct Status;

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn status_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    let value = value.trim();
    match column.style() {
        "default" => Ok(capitalize(value)),
        "short" => Ok(value
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default()),
        _ => Err(column.unsupported_style()),
    }
}

impl Variant for Status {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Status",
            styles: &["default", "short"],
            examples: &["Pending", "P"],
            modifiable: true,
        }
    }

    fn validate(&self, value: &str) -> bool {
        STATUSES.contains(&value.trim())
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Status {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        Ok(Measure::single_line(&status_text(column, record)?))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        Ok(single_left(&status_text(column, record)?, width, color))
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::ColumnKind;
    use crate::record::Task;
    use crate::Column;
    use columnar_text::Color;

    fn status(style: &str) -> Column {
        Column::new(ColumnKind::Status).bind(style, "all")
    }

    #[test]
    fn default_capitalizes() {
        let task = Task::new().with("status", "completed");
        assert_eq!(
            status("default").render(&task, 10, &Color::nocolor()).unwrap(),
            vec!["Completed "]
        );
    }

    #[test]
    fn short_is_one_letter() {
        let task = Task::new().with("status", "waiting");
        assert_eq!(
            status("short").render(&task, 2, &Color::nocolor()).unwrap(),
            vec!["W "]
        );
    }

    #[test]
    fn validate_known_statuses() {
        let col = status("default");
        assert!(col.validate("pending"));
        assert!(col.validate("recurring"));
        assert!(!col.validate("Pending"));
        assert!(!col.validate("done"));
    }
}
