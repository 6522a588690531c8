//! The `id` column: the working-set number, right-aligned.
//!
//! Tasks outside the working set carry id `0`, shown as `-`.

use columnar_text::{display_width, Color};

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::single_right;

const NO_ID: &str = "-";

pub struct Id;

fn id_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    match column.style() {
        "default" if value.trim() == "0" => Ok(NO_ID.to_string()),
        "default" => Ok(value.trim().to_string()),
        _ => Err(column.unsupported_style()),
    }
}

impl Variant for Id {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::Numeric,
            label: "ID",
            styles: &["default"],
            examples: &["123"],
            modifiable: false,
        }
    }

    fn validate(&self, value: &str) -> bool {
        value.trim().parse::<u64>().is_ok()
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Id {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        let text = id_text(column, record)?;
        Ok(Measure::fixed(display_width(&text)))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        let text = id_text(column, record)?;
        Ok(single_right(&text, width, color))
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::ColumnKind;
    use crate::record::Task;
    use crate::{Column, Measure};
    use columnar_text::Color;

    fn id() -> Column {
        Column::new(ColumnKind::Id).bind("default", "list")
    }

    #[test]
    fn right_aligned() {
        let task = Task::new().with("id", "42");
        assert_eq!(id().measure(&task).unwrap(), Measure::fixed(2));
        assert_eq!(
            id().render(&task, 4, &Color::nocolor()).unwrap(),
            vec!["  42"]
        );
    }

    #[test]
    fn zero_id_is_a_dash() {
        let task = Task::new().with("id", "0");
        assert_eq!(
            id().render(&task, 2, &Color::nocolor()).unwrap(),
            vec![" -"]
        );
    }

    #[test]
    fn missing_id_renders_nothing() {
        assert!(id()
            .render(&Task::new(), 3, &Color::nocolor())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn validate_numbers_only() {
        assert!(id().validate("7"));
        assert!(!id().validate("seven"));
        assert!(!id().validate("-1"));
        assert!(!id().is_modifiable());
    }
}
