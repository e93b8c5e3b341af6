//! Error types for secret reconstruction

use thiserror::Error;

/// Failures raised by the reconstruction core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoverError {
    /// A digit string contains a character that is not a digit of its base.
    #[error("Invalid character '{character}' at position {position} for base {base}")]
    InvalidCharacter {
        character: char,
        position: usize,
        base: u32,
    },

    /// A share declares a radix outside 2..=36.
    #[error("Base must be between 2 and 36 (got {0})")]
    InvalidBase(u32),

    /// Threshold below the minimum of 2.
    #[error("Threshold must be at least 2 (got {0})")]
    ThresholdTooLow(usize),

    /// Fewer usable shares than the threshold requires.
    #[error("Insufficient shares: need at least {required}, but only {available} available")]
    InsufficientShares { required: usize, available: usize },

    /// Interpolation needs at least two points.
    #[error("Interpolation needs at least 2 points (got {0})")]
    InsufficientPoints(usize),

    /// Two shares claim the same x-coordinate.
    #[error("Duplicate share x-coordinate {0}")]
    DuplicateCoordinate(u64),

    /// Every k-subset failed to interpolate.
    #[error("No valid combination of {threshold} shares among {shares}")]
    NoValidCombination { shares: usize, threshold: usize },
}

/// Result alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, RecoverError>;
