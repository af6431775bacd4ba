//! Error types for the checked construction paths.

use thiserror::Error;

/// Errors raised when building a [`crate::ZMatrix`] from untrusted rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A row does not have the declared width.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised by [`crate::Cone::try_new`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConeError {
    /// Inequality or equation matrix width differs from the ambient dimension.
    #[error("{what} have width {found}, expected ambient dimension {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Result type for checked cone construction.
pub type ConeResult<T> = Result<T, ConeError>;
