//! Core error types.

use thiserror::Error;

/// Errors raised when mapping textual tag names to `TypeTag` values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagParseError {
    #[error("Unknown type tag: {name}")]
    UnknownTag { name: String },
}

impl TagParseError {
    pub fn unknown_tag(name: impl Into<String>) -> Self {
        Self::UnknownTag { name: name.into() }
    }
}
