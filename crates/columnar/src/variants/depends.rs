//! The `depends` column: tasks this one is blocked by.
//!
//! The attribute holds comma-separated task uuids.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::{list_items, single_left, wrapped};

const INDICATOR: &str = "D";

pub struct Depends;

fn depends_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    let uuids = list_items(&value);

    Ok(match column.style() {
        "default" => uuids.join(" "),
        "count" if uuids.is_empty() => String::new(),
        "count" => format!("[{}]", uuids.len()),
        "indicator" if uuids.is_empty() => String::new(),
        "indicator" => INDICATOR.to_string(),
        _ => return Err(column.unsupported_style()),
    })
}

impl Variant for Depends {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Depends",
            styles: &["default", "count", "indicator"],
            examples: &["2d9a7b0c-3e4f-4a1b-9c8d-7e6f5a4b3c2d", "[1]", "D"],
            modifiable: true,
        }
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Depends {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        let text = depends_text(column, record)?;
        Ok(if column.style() == "default" {
            Measure::text(&text)
        } else {
            Measure::single_line(&text)
        })
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        let text = depends_text(column, record)?;
        Ok(if column.style() == "default" {
            wrapped(&text, width, color, column.hyphenate())
        } else {
            single_left(&text, width, color)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::ColumnKind;
    use crate::record::Task;
    use crate::Column;
    use columnar_text::Color;

    const A: &str = "2d9a7b0c-3e4f-4a1b-9c8d-7e6f5a4b3c2d";
    const B: &str = "8f1e2d3c-4b5a-4968-8776-655443322110";

    fn depends(style: &str) -> Column {
        Column::new(ColumnKind::Depends).bind(style, "blocked")
    }

    #[test]
    fn default_puts_one_uuid_per_line_when_narrow() {
        let task = Task::new().with("depends", format!("{A},{B}"));
        let col = depends("default");
        let m = col.measure(&task).unwrap();
        assert_eq!((m.minimum, m.maximum), (36, 73));
        assert_eq!(
            col.render(&task, 36, &Color::nocolor()).unwrap(),
            vec![A.to_string(), B.to_string()]
        );
    }

    #[test]
    fn count_and_indicator() {
        let task = Task::new().with("depends", A);
        assert_eq!(
            depends("count").render(&task, 4, &Color::nocolor()).unwrap(),
            vec!["[1] "]
        );
        assert_eq!(
            depends("indicator").render(&task, 1, &Color::nocolor()).unwrap(),
            vec!["D"]
        );
    }

    #[test]
    fn unblocked_task_renders_nothing() {
        for style in ["default", "count", "indicator"] {
            assert!(depends(style)
                .render(&Task::new(), 4, &Color::nocolor())
                .unwrap()
                .is_empty());
        }
    }
}
