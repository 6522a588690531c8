//! The `uuid` column.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::{prefix, single_left};

const SHORT_LEN: usize = 8;

pub struct Uuid;

fn uuid_text(column: &Column, record: &dyn Record) -> Result<String> {
    let value = record.get(column.name());
    match column.style() {
        "default" => Ok(value),
        "short" => Ok(prefix(&value, SHORT_LEN).to_string()),
        _ => Err(column.unsupported_style()),
    }
}

/// 8-4-4-4-12 hex digits.
fn is_uuid(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    groups.len() == 5
        && groups
            .iter()
            .zip([8, 4, 4, 4, 12])
            .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit()))
}

impl Variant for Uuid {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "UUID",
            styles: &["default", "short"],
            examples: &["f30cb9c3-3fc0-483f-bfb2-3bf134f00694", "f30cb9c3"],
            modifiable: false,
        }
    }

    fn validate(&self, value: &str) -> bool {
        is_uuid(value.trim())
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Uuid {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        Ok(Measure::single_line(&uuid_text(column, record)?))
    }

    fn render(
        &self,
        column: &Column,
        record: &dyn Record,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        Ok(single_left(&uuid_text(column, record)?, width, color))
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
    fn short_is_first_eight() {
        let col = Column::new(ColumnKind::Uuid).bind("short", "list");
        let task = Task::new().with("uuid", UUID);
        assert_eq!(col.measure(&task).unwrap(), Measure::fixed(8));
        assert_eq!(
            col.render(&task, 8, &Color::nocolor()).unwrap(),
            vec!["f30cb9c3"]
        );
    }

    #[test]
    fn validate_uuid_shape() {
        let col = Column::new(ColumnKind::Uuid);
        assert!(col.validate(UUID));
        assert!(!col.validate("f30cb9c3"));
        assert!(!col.validate("g30cb9c3-3fc0-483f-bfb2-3bf134f00694"));
        assert!(!col.is_modifiable());
    }
}
