//! Sample generation error types.

use thiserror::Error;

/// Result type for sample generation.
pub type GenResult<T> = Result<T, GenError>;

/// Errors produced when generation options cannot be satisfied.
///
/// These surface to the caller instead of being patched over: quietly
/// emitting a "close enough" string would break the guarantee that every
/// generated sample passes its own tag's validator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenError {
    #[error("Empty integer range: {min}..={max}")]
    EmptyIntRange { min: i64, max: i64 },

    #[error("Empty float range: {min}..{max}")]
    EmptyFloatRange { min: f64, max: f64 },

    #[error("Non-negative range is empty: upper bound is {max}")]
    EmptyNonNegRange { max: i64 },

    #[error("Invalid token length range: {min}..={max} (tokens must be non-empty)")]
    InvalidTokenLength { min: usize, max: usize },
}

impl GenError {
    pub fn empty_int_range(min: i64, max: i64) -> Self {
        Self::EmptyIntRange { min, max }
    }

    pub fn empty_float_range(min: f64, max: f64) -> Self {
        Self::EmptyFloatRange { min, max }
    }

    pub fn empty_non_neg_range(max: i64) -> Self {
        Self::EmptyNonNegRange { max }
    }

    pub fn invalid_token_length(min: usize, max: usize) -> Self {
        Self::InvalidTokenLength { min, max }
    }
}
