//! Report configuration read by header rendering.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings that shape column headers.
///
/// Only [`Column::render_header`](crate::Column::render_header) reads these;
/// cell rendering is a pure function of the record, width and color.
///
/// Can be loaded from YAML, with every key optional:
///
/// ```rust
/// use columnar::ReportConfig;
///
/// let config = ReportConfig::from_yaml("font_underline: false").unwrap();
/// assert!(config.verbose_label);
/// assert!(!config.font_underline);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Show column labels at all.
    pub verbose_label: bool,
    /// Underline labels instead of adding a dashed separator line.
    pub font_underline: bool,
    /// The output supports color; underlining needs it.
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            verbose_label: true,
            font_underline: true,
            color: true,
        }
    }
}

impl ReportConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set whether labels are shown.
    pub fn verbose_label(mut self, show: bool) -> Self {
        self.verbose_label = show;
        self
    }

    /// Set whether labels are underlined rather than dashed.
    pub fn font_underline(mut self, underline: bool) -> Self {
        self.font_underline = underline;
        self
    }

    /// Set whether the output supports color.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Headers are underlined in place when this holds.
    pub fn underline_headers(&self) -> bool {
        self.color && self.font_underline
    }
}
