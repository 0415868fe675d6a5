//! Shared support for stringy scenario tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use stringy_core::TypeTag;
use stringy_testgen::{generate, GenConfig};

/// Deterministic RNG for scenario tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate `n` samples for `tag` under `config`.
///
/// Scenario tests construct satisfiable configs, so generation errors are
/// treated as test failures here.
pub fn samples(tag: TypeTag, config: &GenConfig, n: usize, seed: u64) -> Vec<String> {
    let mut rng = seeded_rng(seed);
    (0..n)
        .map(|_| generate(tag, config, &mut rng).expect("satisfiable config"))
        .collect()
}
