//! Seeded randomness helpers shared by all generators.
//!
//! Every draw goes through an explicitly passed `ChaCha8Rng`; there is no
//! ambient RNG state. Each pipeline stage gets its own sub-sequence so the
//! stage order is visible in code rather than an implicit contract.

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;

/// Derive the sub-sequence seed for a named pipeline stage.
///
/// FNV-1a over the stage name mixed with the run seed.
pub fn stage_seed(seed: u64, stage: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in stage.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Seeded generator for a named stage.
pub fn stage_rng(seed: u64, stage: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(stage_seed(seed, stage))
}

/// RFC-4122 v4 identifier drawn from the seeded generator, so identifiers
/// are reproducible for a fixed seed.
pub fn random_uuid(rng: &mut ChaCha8Rng) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}

/// True with probability `p`.
pub fn probability(rng: &mut ChaCha8Rng, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// Uniformly pick one item.
pub fn choose<'a, T>(rng: &mut ChaCha8Rng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Pick one item according to `weights`.
pub fn weighted_choice<'a, T>(
    rng: &mut ChaCha8Rng,
    items: &'a [T],
    weights: &[f64],
) -> Result<&'a T, GenerationError> {
    if items.is_empty() || items.len() != weights.len() {
        return Err(GenerationError::InvalidWeights(format!(
            "{} items with {} weights",
            items.len(),
            weights.len()
        )));
    }
    let dist =
        WeightedIndex::new(weights).map_err(|err| GenerationError::InvalidWeights(err.to_string()))?;
    Ok(&items[dist.sample(rng)])
}

/// Sample `k` distinct items without replacement.
///
/// Fails when `k` exceeds the population; callers that tolerate small
/// populations clamp the request with `min` before calling.
pub fn sample_without_replacement<'a, T>(
    rng: &mut ChaCha8Rng,
    pool: &'static str,
    items: &'a [T],
    k: usize,
) -> Result<Vec<&'a T>, GenerationError> {
    if k > items.len() {
        return Err(GenerationError::PoolExhausted {
            pool,
            requested: k,
            available: items.len(),
        });
    }
    let indices = rand::seq::index::sample(rng, items.len(), k);
    Ok(indices.into_iter().map(|index| &items[index]).collect())
}
