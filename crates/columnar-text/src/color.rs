//! Color specifications for column output.
//!
//! A [`Color`] is parsed from a space-separated specification such as
//! `"bold red on blue"` and applied to whole lines with [`Color::colorize`].
//! Supported words:
//!
//! - Attributes: `bold`, `underline`, `inverse`, `bright`
//! - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`,
//!   `cyan`, `white` (and `bright_<name>` shorthands)
//! - 256-color palette: `color0` through `color255`
//! - RGB cube: `rgb000` through `rgb555`
//! - Grayscale ramp: `gray0` through `gray23` (`grey` also accepted)
//! - `on` switches the following color to the background
//!
//! ```rust
//! use columnar_text::Color;
//!
//! let color = Color::parse("bold red on blue").unwrap();
//! let line = color.colorize("red");
//! assert_eq!(console::strip_ansi_codes(&line), "red");
//!
//! // The empty specification decorates nothing
//! assert_eq!(Color::nocolor().colorize("plain"), "plain");
//! ```

use std::str::FromStr;

use console::Style;

use crate::error::ColorError;

/// Foreground/background colors plus text attributes.
///
/// Colors are applied unconditionally: deciding whether the terminal can show
/// them is the caller's job (pass [`Color::nocolor`] when it can't).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Color {
    fg: Option<console::Color>,
    bg: Option<console::Color>,
    bold: bool,
    underline: bool,
    inverse: bool,
}

impl Color {
    /// A color that leaves text untouched.
    pub fn nocolor() -> Self {
        Color::default()
    }

    /// Underline only, no colors. Blended into header colors.
    pub fn underline() -> Self {
        Color {
            underline: true,
            ..Color::default()
        }
    }

    /// A plain foreground color.
    pub fn fg(color: console::Color) -> Self {
        Color {
            fg: Some(color),
            ..Color::default()
        }
    }

    /// Adds a background color.
    pub fn on(mut self, color: console::Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Adds the bold attribute.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Parses a color specification. An empty specification is [`Color::nocolor`].
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let mut color = Color::default();
        let mut background = false;
        let mut bright = false;

        for token in spec.split_whitespace() {
            let word = token.to_lowercase();
            match word.as_str() {
                "bold" => color.bold = true,
                "underline" => color.underline = true,
                "inverse" => color.inverse = true,
                "bright" => bright = true,
                "on" => background = true,
                _ => {
                    let value = parse_color_word(&word, bright)?;
                    let slot = if background {
                        &mut color.bg
                    } else {
                        &mut color.fg
                    };
                    if slot.is_some() {
                        return Err(ColorError::Conflict(spec.to_string()));
                    }
                    *slot = Some(value);
                    bright = false;
                }
            }
        }

        Ok(color)
    }

    /// True when the color carries no colors and no attributes.
    pub fn is_nocolor(&self) -> bool {
        *self == Color::default()
    }

    pub fn foreground(&self) -> Option<console::Color> {
        self.fg
    }

    pub fn background(&self) -> Option<console::Color> {
        self.bg
    }

    pub fn is_underlined(&self) -> bool {
        self.underline
    }

    /// Merges `other` into this color.
    ///
    /// Attributes are combined; colors this value lacks are taken from
    /// `other`, colors it already has are kept.
    pub fn blend(&mut self, other: &Color) {
        self.bold |= other.bold;
        self.underline |= other.underline;
        self.inverse |= other.inverse;
        if self.fg.is_none() {
            self.fg = other.fg;
        }
        if self.bg.is_none() {
            self.bg = other.bg;
        }
    }

    /// Wraps `line` in the escape sequences for this color.
    ///
    /// Returns the line unchanged for [`Color::nocolor`].
    pub fn colorize(&self, line: &str) -> String {
        if self.is_nocolor() {
            return line.to_string();
        }
        self.to_style().apply_to(line).to_string()
    }

    /// Converts to a `console::Style` that always emits its escape codes.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new().force_styling(true);
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.bold();
        }
        if self.underline {
            style = style.underlined();
        }
        if self.inverse {
            style = style.reverse();
        }
        style
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

const NAMED: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

fn parse_color_word(word: &str, bright: bool) -> Result<console::Color, ColorError> {
    if let Some(base) = word.strip_prefix("bright_") {
        return parse_color_word(base, true);
    }

    if let Some(index) = NAMED.iter().position(|name| *name == word) {
        return Ok(named_color(index, bright));
    }

    if let Some(digits) = word.strip_prefix("color") {
        let index = parse_index(word, digits, 255)?;
        return Ok(console::Color::Color256(index));
    }

    if let Some(digits) = word.strip_prefix("rgb") {
        if digits.len() != 3 {
            return Err(ColorError::UnknownToken(word.to_string()));
        }
        let mut cube = [0u8; 3];
        for (slot, ch) in cube.iter_mut().zip(digits.chars()) {
            let value = ch
                .to_digit(10)
                .ok_or_else(|| ColorError::UnknownToken(word.to_string()))?;
            if value > 5 {
                return Err(ColorError::OutOfRange {
                    token: word.to_string(),
                    max: 5,
                });
            }
            *slot = value as u8;
        }
        return Ok(console::Color::Color256(
            16 + cube[0] * 36 + cube[1] * 6 + cube[2],
        ));
    }

    if let Some(digits) = word
        .strip_prefix("gray")
        .or_else(|| word.strip_prefix("grey"))
    {
        let level = parse_index(word, digits, 23)?;
        return Ok(console::Color::Color256(232 + level));
    }

    Err(ColorError::UnknownToken(word.to_string()))
}

fn parse_index(word: &str, digits: &str, max: u8) -> Result<u8, ColorError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ColorError::UnknownToken(word.to_string()));
    }
    match digits.parse::<u16>() {
        Ok(n) if n <= u16::from(max) => Ok(n as u8),
        _ => Err(ColorError::OutOfRange {
            token: word.to_string(),
            max,
        }),
    }
}

fn named_color(index: usize, bright: bool) -> console::Color {
    if bright {
        // console exposes bright variants through palette indices 8-15
        return console::Color::Color256(index as u8 + 8);
    }
    match index {
        0 => console::Color::Black,
        1 => console::Color::Red,
        2 => console::Color::Green,
        3 => console::Color::Yellow,
        4 => console::Color::Blue,
        5 => console::Color::Magenta,
        6 => console::Color::Cyan,
        _ => console::Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn parse_empty_is_nocolor() {
        assert!(Color::parse("").unwrap().is_nocolor());
        assert!(Color::parse("   ").unwrap().is_nocolor());
    }

    #[test]
    fn parse_named_foreground() {
        let c = Color::parse("red").unwrap();
        assert_eq!(c.foreground(), Some(console::Color::Red));
        assert_eq!(c.background(), None);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Color::parse("RED").unwrap(), Color::parse("red").unwrap());
    }

    #[test]
    fn parse_background() {
        let c = Color::parse("bold white on blue").unwrap();
        assert_eq!(c.foreground(), Some(console::Color::White));
        assert_eq!(c.background(), Some(console::Color::Blue));
        assert_eq!(c, Color::fg(console::Color::White).on(console::Color::Blue).bold());
    }

    #[test]
    fn parse_bright() {
        assert_eq!(
            Color::parse("bright red").unwrap().foreground(),
            Some(console::Color::Color256(9))
        );
        assert_eq!(
            Color::parse("on bright_black").unwrap().background(),
            Some(console::Color::Color256(8))
        );
    }

    #[test]
    fn parse_palette_forms() {
        assert_eq!(
            Color::parse("color208").unwrap().foreground(),
            Some(console::Color::Color256(208))
        );
        assert_eq!(
            Color::parse("rgb500").unwrap().foreground(),
            Some(console::Color::Color256(196))
        );
        assert_eq!(
            Color::parse("gray0").unwrap().foreground(),
            Some(console::Color::Color256(232))
        );
        assert_eq!(
            Color::parse("grey23").unwrap().foreground(),
            Some(console::Color::Color256(255))
        );
    }

    #[test]
    fn parse_out_of_range() {
        assert!(matches!(
            Color::parse("color256"),
            Err(ColorError::OutOfRange { max: 255, .. })
        ));
        assert!(matches!(
            Color::parse("rgb600"),
            Err(ColorError::OutOfRange { max: 5, .. })
        ));
        assert!(matches!(
            Color::parse("gray24"),
            Err(ColorError::OutOfRange { max: 23, .. })
        ));
    }

    #[test]
    fn parse_unknown_token() {
        assert_eq!(
            Color::parse("purple"),
            Err(ColorError::UnknownToken("purple".to_string()))
        );
        assert!(Color::parse("color").is_err());
        assert!(Color::parse("rgb12").is_err());
    }

    #[test]
    fn parse_conflict() {
        assert!(matches!(
            Color::parse("red green"),
            Err(ColorError::Conflict(_))
        ));
    }

    #[test]
    fn colorize_nocolor_is_identity() {
        assert_eq!(Color::nocolor().colorize("abc "), "abc ");
    }

    #[test]
    fn colorize_wraps_line() {
        let line = Color::parse("red").unwrap().colorize("red       ");
        assert!(line.starts_with("\x1b["));
        assert!(line.ends_with("\x1b[0m"));
        assert_eq!(strip_ansi_codes(&line), "red       ");
    }

    #[test]
    fn blend_adds_attributes_and_keeps_colors() {
        let mut c = Color::parse("red").unwrap();
        c.blend(&Color::parse("underline green on blue").unwrap());
        assert!(c.is_underlined());
        assert_eq!(c.foreground(), Some(console::Color::Red));
        assert_eq!(c.background(), Some(console::Color::Blue));
    }

    #[test]
    fn blend_underline_into_nocolor() {
        let mut c = Color::nocolor();
        c.blend(&Color::underline());
        assert_eq!(c, Color::underline());
        assert!(!c.is_nocolor());
    }
}
