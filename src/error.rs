//! Error types for the decor_colors library

use thiserror::Error;

/// Result type alias for decor_colors operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color analysis operations
///
/// The analysis engine is total for well-typed input; errors only arise on
/// the strict parsing path and on aggregate queries over zero colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Hex color string could not be parsed strictly
    #[error("invalid hex color '{value}': {reason}")]
    InvalidHexColor { value: String, reason: String },

    /// Dominant-color aggregation requires at least one color
    #[error("cannot derive dominant colors from an empty palette")]
    EmptyPalette,
}

impl AnalysisError {
    /// Create an invalid-hex error with context
    pub fn invalid_hex(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHexColor {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
