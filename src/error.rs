//! Error types for cloth operations.

use core::fmt;

/// Errors reported by the cloth engine.
///
/// Numeric parameters are never rejected; these are the only conditions
/// surfaced to a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClothError {
    /// The grid has no particles, so there is nothing to pick.
    InvalidState,
    /// A pick radius is configured and no particle lies within it.
    NothingInRange,
    /// Grid index is out of bounds.
    ParticleOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidState => write!(f, "cloth grid has no particles"),
            ClothError::NothingInRange => write!(f, "no particle within pick radius"),
            ClothError::ParticleOutOfBounds { row, col, rows, cols } => {
                write!(f, "particle ({}, {}) out of bounds (grid: {}x{})", row, col, rows, cols)
            }
        }
    }
}

impl core::error::Error for ClothError {}
