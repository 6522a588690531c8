//! Error types for color parsing.

use thiserror::Error;

/// Errors produced while parsing a color specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A word in the specification is not a color, attribute or `on`.
    #[error("unrecognized color token '{0}'")]
    UnknownToken(String),

    /// A numbered color is outside the range its form allows.
    #[error("color '{token}' is out of range (0-{max})")]
    OutOfRange { token: String, max: u8 },

    /// A second foreground or background color was given.
    #[error("color specification '{0}' sets the same color twice")]
    Conflict(String),
}
