//! Sample generation for stringy contracts
//!
//! This crate is the generator half of the validator registry: for every
//! `TypeTag` it synthesizes strings that the matching predicate in
//! `stringy-registry` accepts (the round-trip law). Impossible option sets
//! surface as errors instead of best-effort strings.
//!
//! Callers that manage their own RNG use [`sample::generate`] directly;
//! everyone else goes through [`SampleGenerator`], which owns a seeded
//! `StdRng` for reproducible output.

pub mod config;
pub mod error;
pub mod report;
pub mod sample;

pub use config::GenConfig;
pub use error::{GenError, GenResult};
pub use report::{AuditReport, TagAudit};
pub use sample::generate;

use rand::rngs::StdRng;
use rand::SeedableRng;
use stringy_core::TypeTag;

/// Main entry point for seeded sample generation.
pub struct SampleGenerator {
    pub config: GenConfig,
    pub rng: StdRng,
}

impl SampleGenerator {
    pub fn new(config: GenConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Generate one sample conforming to `tag`.
    pub fn sample(&mut self, tag: TypeTag) -> GenResult<String> {
        sample::generate(tag, &self.config, &mut self.rng)
    }

    /// Generate `n` samples conforming to `tag`.
    pub fn samples(&mut self, tag: TypeTag, n: usize) -> GenResult<Vec<String>> {
        (0..n).map(|_| self.sample(tag)).collect()
    }
}
