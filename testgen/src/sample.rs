//! Per-tag sample generators.
//!
//! Each generator returns a string that the matching predicate in
//! `stringy-registry` accepts. Options that cannot be satisfied produce a
//! `GenError` instead of an out-of-shape string.

use rand::Rng;
use stringy_core::TypeTag;

use crate::config::GenConfig;
use crate::error::{GenError, GenResult};

/// Characters a URL-safe token may contain: ASCII word characters, space,
/// hyphen, plus.
const TOKEN_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_ -+";

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Annie", "Barbara", "Claude", "Dennis", "Donald", "Edsger",
    "Frances", "Grace", "John", "Katherine", "Ken", "Leslie", "Margaret", "Niklaus",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Dijkstra", "Easley", "Hamilton", "Hopper", "Johnson", "Kay",
    "Knuth", "Lamport", "Liskov", "Lovelace", "McCarthy", "Ritchie", "Shannon",
    "Thompson", "Wirth",
];

/// Generate one sample conforming to `tag`.
pub fn generate(tag: TypeTag, config: &GenConfig, rng: &mut impl Rng) -> GenResult<String> {
    match tag {
        TypeTag::Int => gen_int(config, rng),
        TypeTag::Float => gen_float(config, rng),
        TypeTag::NonNegInt => gen_non_neg_int(config, rng),
        TypeTag::Bool => Ok(gen_bool(rng)),
        TypeTag::Uuid => Ok(gen_uuid(rng)),
        TypeTag::UrlSafe => gen_token(config, rng),
        TypeTag::Name => Ok(gen_name(rng)),
    }
}

/// Canonical base-10 rendering of a random integer in the configured range.
pub fn gen_int(config: &GenConfig, rng: &mut impl Rng) -> GenResult<String> {
    if config.int_min > config.int_max {
        return Err(GenError::empty_int_range(config.int_min, config.int_max));
    }
    Ok(rng.gen_range(config.int_min..=config.int_max).to_string())
}

/// Random float rendered with 1..=`float_places_max` decimal places.
///
/// Fixed-precision formatting keeps at least one digit on each side of the
/// decimal point even for whole values, and never emits exponent notation.
pub fn gen_float(config: &GenConfig, rng: &mut impl Rng) -> GenResult<String> {
    if !(config.float_min < config.float_max) {
        return Err(GenError::empty_float_range(config.float_min, config.float_max));
    }
    let value = rng.gen_range(config.float_min..config.float_max);
    let places = rng.gen_range(1..=config.float_places_max.max(1));
    Ok(format!("{:.places$}", value))
}

/// Canonical rendering of a random non-negative integer.
///
/// Reuses the integer bounds clamped at zero. A range that lies entirely
/// below zero cannot satisfy the tag and is reported, not clamped into
/// silently emitting `"0"`.
pub fn gen_non_neg_int(config: &GenConfig, rng: &mut impl Rng) -> GenResult<String> {
    if config.int_min > config.int_max {
        return Err(GenError::empty_int_range(config.int_min, config.int_max));
    }
    if config.int_max < 0 {
        return Err(GenError::empty_non_neg_range(config.int_max));
    }
    Ok(rng.gen_range(config.int_min.max(0)..=config.int_max).to_string())
}

/// One of the four boolean literals.
///
/// Policy: a single uniform draw over `"true"`, `"false"`, `"0"`, `"1"`,
/// each with probability 1/4.
pub fn gen_bool(rng: &mut impl Rng) -> String {
    const LITERALS: [&str; 4] = ["true", "false", "0", "1"];
    LITERALS[rng.gen_range(0..LITERALS.len())].to_string()
}

/// Random UUID in canonical lowercase hyphenated form.
///
/// The version nibble is set to 4 and the variant bits to RFC 4122, so
/// output is indistinguishable in shape from a real v4 UUID. Randomness
/// strength is not a goal here.
pub fn gen_uuid(rng: &mut impl Rng) -> String {
    let mut bytes: [u8; 16] = rng.gen();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Random non-empty token from the URL-safe alphabet, with length drawn
/// from the configured range.
pub fn gen_token(config: &GenConfig, rng: &mut impl Rng) -> GenResult<String> {
    if config.token_len_min == 0 || config.token_len_min > config.token_len_max {
        return Err(GenError::invalid_token_length(
            config.token_len_min,
            config.token_len_max,
        ));
    }
    let len = rng.gen_range(config.token_len_min..=config.token_len_max);
    Ok((0..len)
        .map(|_| TOKEN_CHARS[rng.gen_range(0..TOKEN_CHARS.len())] as char)
        .collect())
}

/// A plausible "First Last" human name.
pub fn gen_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}
