//! Predicate lookup and evaluation.

use stringy_core::{TypeTag, Value};

use crate::pattern::pattern;

/// Check a raw string against a tag's shape. Exact full-string match.
pub fn matches(tag: TypeTag, text: &str) -> bool {
    match pattern(tag) {
        Some(re) => re.is_match(text),
        // Name carries no shape constraint.
        None => true,
    }
}

/// Check a transport value against a tag.
///
/// Total over all inputs: any `Value` is accepted, and everything that is
/// not `Value::String` is invalid for every tag, `Name` included.
pub fn is_valid(tag: TypeTag, value: &Value) -> bool {
    match value.as_str() {
        Some(text) => matches(tag, text),
        None => false,
    }
}
