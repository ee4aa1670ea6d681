//! Parse errors for core model types

use thiserror::Error;

/// Error raised when a textual representation of a core model cannot be
/// parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Region string is not of the form `chr`, `chr:start` or `chr:start-end`
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Variant type name is not part of the classification
    #[error("unknown variant type: {0}")]
    UnknownVariantType(String),
}
