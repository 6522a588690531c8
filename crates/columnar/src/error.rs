//! Error types for the columnar crate.

use thiserror::Error;

/// Errors raised while building or rendering report columns.
#[derive(Debug, Error)]
pub enum ColumnError {
    /// The column specification names no column in the catalog.
    #[error("Unrecognized column name '{0}'.")]
    UnknownColumnName(String),

    /// The column has no implementation for the requested capability.
    ///
    /// Raised when a record operation is invoked on a value-only column or
    /// the reverse. This is a wiring defect, not a user error.
    #[error("column '{column}' does not implement {operation}")]
    UnimplementedCapability {
        column: String,
        operation: &'static str,
    },

    /// The style selected in the column specification is not supported.
    #[error("column '{column}' does not support the '{style}' style")]
    UnsupportedStyle { column: String, style: String },

    /// Report configuration could not be parsed.
    #[error("invalid report configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for column operations.
pub type Result<T> = std::result::Result<T, ColumnError>;
