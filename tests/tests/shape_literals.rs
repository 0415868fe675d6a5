//! Literal shape cases across the full tag set.

use stringy_core::{TypeTag, Value};
use stringy_registry::is_valid;

fn valid(tag: TypeTag, text: &str) -> bool {
    is_valid(tag, &Value::from(text))
}

#[test]
fn integer_literals() {
    assert!(valid(TypeTag::Int, "007"));
    assert!(valid(TypeTag::Int, "-42"));
    assert!(valid(TypeTag::Int, "+42"));
    assert!(!valid(TypeTag::Int, "12.3"));
    assert!(!valid(TypeTag::Int, "forty two"));
}

#[test]
fn float_literals() {
    assert!(valid(TypeTag::Float, "12.3"));
    assert!(valid(TypeTag::Float, "-12.0"));
    assert!(!valid(TypeTag::Float, "12"));
    assert!(!valid(TypeTag::Float, "12."));
    assert!(!valid(TypeTag::Float, ".3"));
    assert!(!valid(TypeTag::Float, "1.2e3"));
}

#[test]
fn non_negative_literals() {
    assert!(valid(TypeTag::NonNegInt, "0"));
    assert!(valid(TypeTag::NonNegInt, "5"));
    assert!(!valid(TypeTag::NonNegInt, "-5"));
    assert!(!valid(TypeTag::NonNegInt, "+5"));
}

#[test]
fn boolean_literals() {
    assert!(valid(TypeTag::Bool, "true"));
    assert!(valid(TypeTag::Bool, "false"));
    assert!(valid(TypeTag::Bool, "0"));
    assert!(valid(TypeTag::Bool, "1"));
    assert!(!valid(TypeTag::Bool, "maybe"));
    assert!(!valid(TypeTag::Bool, "True"));
}

#[test]
fn uuid_literals() {
    assert!(valid(TypeTag::Uuid, "550e8400-e29b-41d4-a716-446655440000"));
    assert!(valid(TypeTag::Uuid, "550E8400-E29B-41D4-A716-446655440000"));
    assert!(!valid(TypeTag::Uuid, "not-a-uuid"));
}

#[test]
fn url_safe_literals() {
    assert!(valid(TypeTag::UrlSafe, "hello world-1+2"));
    assert!(!valid(TypeTag::UrlSafe, "bad/char"));
}

#[test]
fn name_literals() {
    assert!(valid(TypeTag::Name, ""));
    assert!(valid(TypeTag::Name, "Grace Hopper"));
}

#[test]
fn non_string_values_fail_every_tag() {
    for tag in TypeTag::all() {
        assert!(!is_valid(tag, &Value::Int(123)), "{} accepted Int(123)", tag);
        assert!(!is_valid(tag, &Value::Float(12.3)), "{} accepted Float", tag);
        assert!(!is_valid(tag, &Value::Bool(true)), "{} accepted Bool", tag);
        assert!(!is_valid(tag, &Value::Null), "{} accepted Null", tag);
    }
}

#[test]
fn empty_string_is_valid_only_for_name() {
    for tag in TypeTag::all() {
        let expected = tag == TypeTag::Name;
        assert_eq!(valid(tag, ""), expected, "empty string for {}", tag);
    }
}

#[test]
fn validation_is_idempotent() {
    let cases = [
        (TypeTag::Int, Value::from("12")),
        (TypeTag::Bool, Value::from("maybe")),
        (TypeTag::Name, Value::Null),
    ];
    for (tag, value) in &cases {
        let first = is_valid(*tag, value);
        for _ in 0..100 {
            assert_eq!(is_valid(*tag, value), first);
        }
    }
}
