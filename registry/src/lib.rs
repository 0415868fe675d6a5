//! Stringy Validator Registry, predicate half.
//!
//! Maps each `TypeTag` to a total predicate over transport values: given any
//! `Value`, `is_valid` answers whether it is a string whose text conforms to
//! the tag's shape. Non-strings are rejected, never raised on.
//!
//! The matching generator half lives in `stringy-testgen`; together they
//! uphold the round-trip law (every generated sample passes its own tag's
//! predicate).

mod pattern;
mod validate;

pub use pattern::*;
pub use validate::*;
