//! Parsing and formatting of seed-weight strings.
//!
//! A seed-weight string is a comma-separated list of `seed:weight` pairs, e.g.
//! `"1234:0.1,5678:0.25"`. Each pair names an extra noise seed and the weight
//! with which it is blended into the running noise source.

use crate::error::SeedWeightError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single `(seed, weight)` pair used for variation blending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedWeightPair {
    pub seed: u32,
    pub weight: f32,
}

impl SeedWeightPair {
    pub fn new(seed: u32, weight: f32) -> Self {
        Self { seed, weight }
    }
}

impl fmt::Display for SeedWeightPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.seed, self.weight)
    }
}

impl FromStr for SeedWeightPair {
    type Err = SeedWeightError;

    fn from_str(pair: &str) -> Result<Self, Self::Err> {
        let pair = pair.trim();
        let (seed, weight) = pair
            .split(':')
            .map(str::trim)
            .collect_tuple()
            .ok_or_else(|| SeedWeightError::MalformedPair {
                pair: pair.to_string(),
            })?;

        let seed = seed.parse::<u32>().map_err(|_| SeedWeightError::InvalidSeed {
            pair: pair.to_string(),
            seed: seed.to_string(),
        })?;

        let weight = weight
            .parse::<f32>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| SeedWeightError::InvalidWeight {
                pair: pair.to_string(),
                weight: weight.to_string(),
            })?;

        Ok(Self { seed, weight })
    }
}

/// Parses a seed-weight string into its ordered pairs.
///
/// A blank string yields no pairs. Empty entries (e.g. a trailing comma) are
/// rejected rather than skipped.
pub fn parse_seed_weights(input: &str) -> Result<Vec<SeedWeightPair>, SeedWeightError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input.split(',').map(SeedWeightPair::from_str).collect()
}

/// Formats pairs back into `seed:weight,seed:weight` form.
pub fn seed_weights_to_string(pairs: &[SeedWeightPair]) -> String {
    pairs.iter().join(",")
}
