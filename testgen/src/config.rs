//! Configuration for sample generation

/// Options controlling sample generation.
///
/// Contradictory settings (an empty numeric range, a zero or inverted token
/// length range) are not rejected here; the generator that cannot satisfy
/// them reports a `GenError` at the point of use.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Inclusive lower bound for generated integers
    pub int_min: i64,
    /// Inclusive upper bound for generated integers
    pub int_max: i64,
    /// Lower bound for generated floats
    pub float_min: f64,
    /// Upper bound (exclusive) for generated floats
    pub float_max: f64,
    /// Maximum decimal places in rendered floats; at least one is always used
    pub float_places_max: usize,
    /// Minimum length of generated URL-safe tokens (must be at least 1)
    pub token_len_min: usize,
    /// Maximum length of generated URL-safe tokens
    pub token_len_max: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            int_min: -1_000_000,
            int_max: 1_000_000,
            float_min: -1_000_000.0,
            float_max: 1_000_000.0,
            float_places_max: 6,
            token_len_min: 1,
            token_len_max: 24,
        }
    }
}

impl GenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_int_range(mut self, min: i64, max: i64) -> Self {
        self.int_min = min;
        self.int_max = max;
        self
    }

    pub fn with_float_range(mut self, min: f64, max: f64) -> Self {
        self.float_min = min;
        self.float_max = max;
        self
    }

    pub fn with_float_places_max(mut self, places: usize) -> Self {
        self.float_places_max = places;
        self
    }

    pub fn with_token_len(mut self, min: usize, max: usize) -> Self {
        self.token_len_min = min;
        self.token_len_max = max;
        self
    }

    /// Tight ranges for quick, short samples.
    pub fn minimal() -> Self {
        Self {
            seed: 42,
            int_min: 0,
            int_max: 9,
            float_min: 0.0,
            float_max: 10.0,
            float_places_max: 1,
            token_len_min: 1,
            token_len_max: 4,
        }
    }
}
