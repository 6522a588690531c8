//! Recurrence bookkeeping columns.
//!
//! A recurring template's `mask` holds one character per generated instance
//! (`-` pending, `+` completed, `X` deleted, `W` waiting). Each instance
//! records its position in that mask as `imask`.

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::record::Record;
use crate::traits::{Defaults, RecordColumn, Variant};

use super::{single_left, single_right};

/// The `mask` column.
pub struct Mask;

/// The `imask` column.
pub struct IMask;

impl Variant for Mask {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "Mask",
            styles: &["default"],
            examples: &["++++---"],
            modifiable: false,
        }
    }

    fn validate(&self, value: &str) -> bool {
        value.chars().all(|c| matches!(c, '-' | '+' | 'X' | 'W'))
    }

    fn as_record(&self) -> Option<&dyn RecordColumn> {
        Some(self)
    }
}

impl RecordColumn for Mask {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        match column.style() {
            "default" => Ok(Measure::single_line(&record.get(column.name()))),
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
        match column.style() {
            "default" => Ok(single_left(&record.get(column.name()), width, color)),
            _ => Err(column.unsupported_style()),
        }
    }
}

impl Variant for IMask {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::Numeric,
            label: "Mask Index",
            styles: &["default"],
            examples: &["12"],
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

impl RecordColumn for IMask {
    fn measure(&self, column: &Column, record: &dyn Record) -> Result<Measure> {
        match column.style() {
            "default" => Ok(Measure::single_line(record.get(column.name()).trim())),
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
        match column.style() {
            "default" => Ok(single_right(
                record.get(column.name()).trim(),
                width,
                color,
            )),
            _ => Err(column.unsupported_style()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::ColumnKind;
    use crate::record::Task;
    use crate::{Column, Measure};
    use columnar_text::Color;

    #[test]
    fn mask_is_left_aligned() {
        let col = Column::new(ColumnKind::Mask).bind("default", "recurring");
        let task = Task::new().with("mask", "++-X");
        assert_eq!(col.measure(&task).unwrap(), Measure::fixed(4));
        assert_eq!(
            col.render(&task, 6, &Color::nocolor()).unwrap(),
            vec!["++-X  "]
        );
        assert!(col.validate("++-XW"));
        assert!(!col.validate("++?"));
    }

    #[test]
    fn imask_is_right_aligned() {
        let col = Column::new(ColumnKind::IMask).bind("default", "recurring");
        let task = Task::new().with("imask", "3");
        assert_eq!(
            col.render(&task, 4, &Color::nocolor()).unwrap(),
            vec!["   3"]
        );
        assert_eq!(col.label(), "Mask Index");
    }

    #[test]
    fn imask_measures_trimmed_value() {
        let col = Column::new(ColumnKind::IMask).bind("", "recurring");
        let task = Task::new().with("imask", " 12 ");
        assert_eq!(col.measure(&task).unwrap(), Measure::fixed(2));
        assert!(col.measure(&Task::new()).is_ok());
        assert!(Column::new(ColumnKind::IMask)
            .bind("number", "recurring")
            .measure(&task)
            .is_err());
    }

    #[test]
    fn neither_is_modifiable() {
        assert!(!Column::new(ColumnKind::Mask).is_modifiable());
        assert!(!Column::new(ColumnKind::IMask).is_modifiable());
    }
}
