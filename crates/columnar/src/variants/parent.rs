//! The `parent` column: uuid of the recurring template that generated a task.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::{prefix, single_left};

const SHORT_LEN: usize = 8;

pub struct Parent;

fn parent_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    match column.style() {
        "default" => Ok(value),
        "short" => Ok(prefix(&value, SHORT_LEN).to_string()),
        _ => Err(column.unsupported_style()),
    }
}

impl Variant for Parent {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Parent",
            styles: &["default", "short"],
            examples: &["f30cb9c3-3fc0-483f-bfb2-3bf134f00694", "f30cb9c3"],
            modifiable: false,
        }
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Parent {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        Ok(Measure::single_line(&parent_text(column, record)?))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        Ok(single_left(&parent_text(column, record)?, width, color))
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::ColumnKind;
    use crate::record::Task;
    use crate::{Column, Measure};
    use columnar_text::Color;

    const UUID: &str = "f30cb9c3-3fc0-483f-bfb2-3bf134f00694";

    #[test]
    fn default_shows_full_uuid() {
        let col = Column::new(ColumnKind::Parent).bind("default", "list");
        let task = Task::new().with("parent", UUID);
        assert_eq!(col.measure(&task).unwrap(), Measure::fixed(36));
        assert_eq!(col.render(&task, 36, &Color::nocolor()).unwrap(), vec![UUID]);
    }

    #[test]
    fn short_shows_prefix() {
        let col = Column::new(ColumnKind::Parent).bind("short", "list");
        let task = Task::new().with("parent", UUID);
        assert_eq!(col.measure(&task).unwrap(), Measure::fixed(8));
        assert_eq!(
            col.render(&task, 9, &Color::nocolor()).unwrap(),
            vec!["f30cb9c3 "]
        );
    }

    #[test]
    fn no_parent_renders_nothing() {
        let col = Column::new(ColumnKind::Parent).bind("short", "list");
        assert!(col
            .render(&Task::new(), 8, &Color::nocolor())
            .unwrap()
            .is_empty());
    }
}
