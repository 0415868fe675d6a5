//! Round-trip law: every generated sample passes its own tag's validator.

use stringy_core::{TypeTag, Value};
use stringy_registry::{is_valid, matches};
use stringy_testgen::GenConfig;
use stringy_tests::samples;

const N: usize = 1000;

#[test]
fn round_trip_holds_for_every_tag_under_default_config() {
    let config = GenConfig::default();
    for tag in TypeTag::all() {
        for sample in samples(tag, &config, N, 42) {
            assert!(matches(tag, &sample), "{} generated {:?}", tag, sample);
            assert!(
                is_valid(tag, &Value::from(sample.clone())),
                "{} rejected wrapped {:?}",
                tag,
                sample
            );
        }
    }
}

#[test]
fn round_trip_holds_under_narrow_integer_bounds() {
    let config = GenConfig::default().with_int_range(-3, 3);
    for sample in samples(TypeTag::Int, &config, N, 7) {
        assert!(matches(TypeTag::Int, &sample), "{:?}", sample);
        let parsed: i64 = sample.parse().expect("canonical base-10");
        assert!((-3..=3).contains(&parsed));
    }
}

#[test]
fn round_trip_holds_for_negative_only_integers() {
    // The signed tag may legitimately be confined below zero.
    let config = GenConfig::default().with_int_range(-1000, -1);
    for sample in samples(TypeTag::Int, &config, N, 11) {
        assert!(matches(TypeTag::Int, &sample), "{:?}", sample);
        assert!(sample.starts_with('-'));
    }
}

#[test]
fn round_trip_holds_under_shifted_float_bounds() {
    let config = GenConfig::default()
        .with_float_range(999.0, 1001.0)
        .with_float_places_max(1);
    for sample in samples(TypeTag::Float, &config, N, 13) {
        assert!(matches(TypeTag::Float, &sample), "{:?}", sample);
    }
}

#[test]
fn round_trip_holds_for_single_char_tokens() {
    let config = GenConfig::default().with_token_len(1, 1);
    for sample in samples(TypeTag::UrlSafe, &config, N, 17) {
        assert_eq!(sample.len(), 1, "{:?}", sample);
        assert!(matches(TypeTag::UrlSafe, &sample), "{:?}", sample);
    }
}

#[test]
fn round_trip_holds_under_minimal_config() {
    let config = GenConfig::minimal();
    for tag in TypeTag::all() {
        for sample in samples(tag, &config, 200, 19) {
            assert!(matches(tag, &sample), "{} generated {:?}", tag, sample);
        }
    }
}

#[test]
fn generation_is_deterministic_for_equal_seeds() {
    let config = GenConfig::default();
    for tag in TypeTag::all() {
        assert_eq!(
            samples(tag, &config, 50, 23),
            samples(tag, &config, 50, 23),
            "stream diverged for {}",
            tag
        );
    }
}
