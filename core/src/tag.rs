//! The closed set of semantic string types.

use std::fmt;
use std::str::FromStr;

use crate::error::TagParseError;

/// A semantic type that a transport string can be checked against.
///
/// The set is closed. Adding a tag means adding a variant here plus one
/// match arm in the validator and one in the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Signed decimal integer, e.g. `"-42"` or `"+7"`.
    Int,
    /// Decimal float with a mandatory fractional part, e.g. `"3.25"`.
    Float,
    /// Unsigned decimal integer, e.g. `"0"` or `"12"`.
    NonNegInt,
    /// Exactly one of the literals `true`, `false`, `0`, `1`.
    Bool,
    /// Hyphenated `8-4-4-4-12` hexadecimal UUID, any case.
    Uuid,
    /// Word characters, spaces, hyphens and pluses only.
    UrlSafe,
    /// Free-form human name. Any string passes.
    Name,
}

impl TypeTag {
    /// All tags, in declaration order.
    pub fn all() -> [TypeTag; 7] {
        [
            TypeTag::Int,
            TypeTag::Float,
            TypeTag::NonNegInt,
            TypeTag::Bool,
            TypeTag::Uuid,
            TypeTag::UrlSafe,
            TypeTag::Name,
        ]
    }

    /// Canonical snake_case name of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::NonNegInt => "non_neg_int",
            TypeTag::Bool => "bool",
            TypeTag::Uuid => "uuid",
            TypeTag::UrlSafe => "url_safe",
            TypeTag::Name => "name",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = TagParseError;

    /// Parses the canonical name, plus the short aliases the original
    /// contract library exported (`pos`, `urlsafe`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "integer" => Ok(TypeTag::Int),
            "float" => Ok(TypeTag::Float),
            "non_neg_int" | "pos" => Ok(TypeTag::NonNegInt),
            "bool" | "boolean" => Ok(TypeTag::Bool),
            "uuid" => Ok(TypeTag::Uuid),
            "url_safe" | "urlsafe" => Ok(TypeTag::UrlSafe),
            "name" => Ok(TypeTag::Name),
            other => Err(TagParseError::unknown_tag(other)),
        }
    }
}
