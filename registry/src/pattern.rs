//! Immutable shape patterns.
//!
//! One compiled pattern per shaped tag, initialized on first use and shared
//! process-wide. All matching is anchored: a value conforms only if the
//! whole string does.

use std::sync::LazyLock;

use regex_lite::Regex;
use stringy_core::TypeTag;

/// Signed decimal integer: optional sign, one or more digits.
pub const INT_SHAPE: &str = r"^[-+]?\d+$";
/// Decimal float: optional sign, digits, a literal point, digits.
/// No exponent notation, no trailing-point forms.
pub const FLOAT_SHAPE: &str = r"^[-+]?\d+\.\d+$";
/// Non-negative decimal integer: digits only, no sign.
pub const NON_NEG_SHAPE: &str = r"^\d+$";
/// Boolean literals, case-sensitive.
pub const BOOL_SHAPE: &str = r"^(true|false|0|1)$";
/// Hyphenated 8-4-4-4-12 hexadecimal UUID, case-insensitive.
pub const UUID_SHAPE: &str =
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";
/// URL-safe token: ASCII word characters, space, hyphen, plus.
pub const URL_SAFE_SHAPE: &str = r"^[\w +-]+$";

static INT_RE: LazyLock<Regex> = LazyLock::new(|| compile(INT_SHAPE));
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| compile(FLOAT_SHAPE));
static NON_NEG_RE: LazyLock<Regex> = LazyLock::new(|| compile(NON_NEG_SHAPE));
static BOOL_RE: LazyLock<Regex> = LazyLock::new(|| compile(BOOL_SHAPE));
static UUID_RE: LazyLock<Regex> = LazyLock::new(|| compile(UUID_SHAPE));
static URL_SAFE_RE: LazyLock<Regex> = LazyLock::new(|| compile(URL_SAFE_SHAPE));

fn compile(shape: &str) -> Regex {
    // Shapes are fixed literals and always compile.
    Regex::new(shape).expect("static shape pattern compiles")
}

/// The compiled shape pattern for a tag.
///
/// `Name` has no shape constraint and returns `None`: any string passes.
// TODO: refine Name; it currently accepts any string, empty included.
pub fn pattern(tag: TypeTag) -> Option<&'static Regex> {
    match tag {
        TypeTag::Int => Some(&INT_RE),
        TypeTag::Float => Some(&FLOAT_RE),
        TypeTag::NonNegInt => Some(&NON_NEG_RE),
        TypeTag::Bool => Some(&BOOL_RE),
        TypeTag::Uuid => Some(&UUID_RE),
        TypeTag::UrlSafe => Some(&URL_SAFE_RE),
        TypeTag::Name => None,
    }
}
