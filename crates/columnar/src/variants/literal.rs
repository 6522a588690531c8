//! The `string` column: fixed text supplied by the report rather than read
//! from a record.
//!
//! Reports use it for separators and inline notes. It only offers the value
//! capability, so `measure` and `render` on it fail.
//!
//! Styles:
//!
//! - `default`, `left`: wrapped, left-justified
//! - `right`: wrapped, right-justified
//! - `left_fixed`, `right_fixed`: never wrapped, one justified line

use columnar_text::Color;

use crate::column::{Column, Measure, ValueType};
use crate::error::Result;
use crate::traits::{Defaults, ValueColumn, Variant};

use super::{single_left, single_right, wrapped, wrapped_right};

pub struct Literal;

impl Variant for Literal {
    fn defaults(&self) -> Defaults {
        Defaults {
            value_type: ValueType::String,
            label: "",
            styles: &["default", "left", "right", "left_fixed", "right_fixed"],
            examples: &[
                "Text",
                "Text",
                "      Text",
                "Text",
                "      Text",
            ],
            modifiable: false,
        }
    }

    fn validate(&self, _value: &str) -> bool {
        true
    }

    fn as_value(&self) -> Option<&dyn ValueColumn> {
        Some(self)
    }
}

impl ValueColumn for Literal {
    fn measure_value(&self, column: &Column, value: &str) -> Result<Measure> {
        match column.style() {
            "default" | "left" | "right" => Ok(Measure::text(value)),
            "left_fixed" | "right_fixed" => Ok(Measure::single_line(value)),
            _ => Err(column.unsupported_style()),
        }
    }

    fn render_value(
        &self,
        column: &Column,
        value: &str,
        width: usize,
        color: &Color,
    ) -> Result<Vec<String>> {
        let hyphenate = column.hyphenate();
        match column.style() {
            "default" | "left" => Ok(wrapped(value, width, color, hyphenate)),
            "right" => Ok(wrapped_right(value, width, color, hyphenate)),
            "left_fixed" => Ok(single_left(value, width, color)),
            "right_fixed" => Ok(single_right(value, width, color)),
            _ => Err(column.unsupported_style()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::ColumnKind;
    use crate::{Column, ColumnError, Measure};
    use columnar_text::Color;

    fn literal(style: &str) -> Column {
        Column::new(ColumnKind::Literal).bind(style, "list")
    }

    #[test]
    fn name_is_string() {
        assert_eq!(literal("default").name(), "string");
        assert_eq!(literal("default").label(), "");
    }

    #[test]
    fn default_wraps_left() {
        let col = literal("default");
        assert_eq!(col.measure_value("see notes").unwrap(), Measure::new(5, 9));
        assert_eq!(
            col.render_value("see notes", 6, &Color::nocolor()).unwrap(),
            vec!["see   ", "notes "]
        );
    }

    #[test]
    fn right_wraps_right() {
        assert_eq!(
            literal("right")
                .render_value("see notes", 6, &Color::nocolor())
                .unwrap(),
            vec!["   see", " notes"]
        );
    }

    #[test]
    fn fixed_styles_keep_one_line() {
        let col = literal("right_fixed");
        assert_eq!(col.measure_value("a | b").unwrap(), Measure::fixed(5));
        assert_eq!(
            col.render_value("a | b", 7, &Color::nocolor()).unwrap(),
            vec!["  a | b"]
        );
        assert_eq!(
            literal("left_fixed")
                .render_value("|", 2, &Color::nocolor())
                .unwrap(),
            vec!["| "]
        );
    }

    #[test]
    fn empty_value_renders_nothing() {
        for style in ["default", "left", "right", "left_fixed", "right_fixed"] {
            assert!(literal(style)
                .render_value("", 4, &Color::nocolor())
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn unknown_style_fails() {
        assert!(matches!(
            literal("centered").measure_value("x"),
            Err(ColumnError::UnsupportedStyle { .. })
        ));
    }
}
