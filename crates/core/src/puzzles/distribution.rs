//! Synthetic guess distribution for a new puzzle.
//!
//! A play count `n` and a center `mean` are drawn uniformly, then `n` guess
//! counts are drawn from `Normal(mean, 1.2)`. Each draw is rounded to the
//! nearest integer and clamped into the 0..=6 buckets, so outliers pile up in
//! the edge buckets instead of being redrawn.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::puzzles_model::GuessDistribution;
use crate::constants::{
    DISTRIBUTION_BUCKETS, MAX_SIMULATED_MEAN, MAX_SIMULATED_PLAYS, MIN_SIMULATED_MEAN,
    MIN_SIMULATED_PLAYS, SIMULATED_STD_DEV,
};
use crate::errors::Result;

/// Parameters of one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParams {
    pub plays: u32,
    pub mean: f64,
}

impl DistributionParams {
    /// Draws `plays` in [15, 25] and `mean` in [2.8, 5.0].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            plays: rng.gen_range(MIN_SIMULATED_PLAYS..=MAX_SIMULATED_PLAYS),
            mean: rng.gen_range(MIN_SIMULATED_MEAN..=MAX_SIMULATED_MEAN),
        }
    }

    /// Raw Gaussian draws, before rounding.
    pub fn draws<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>> {
        let normal = Normal::new(self.mean, SIMULATED_STD_DEV)?;
        Ok((0..self.plays).map(|_| normal.sample(rng)).collect())
    }
}

/// Rounds, clamps and counts draws into the 7 buckets.
pub fn bucket_draws(draws: &[f64]) -> GuessDistribution {
    let max_bucket = (DISTRIBUTION_BUCKETS - 1) as f64;
    let mut distribution = GuessDistribution::default();
    for draw in draws {
        // NaN casts to 0
        let bucket = draw.round().clamp(0.0, max_bucket) as usize;
        distribution.record(bucket);
    }
    distribution
}

pub fn synthesize_distribution<R: Rng + ?Sized>(rng: &mut R) -> Result<GuessDistribution> {
    let params = DistributionParams::random(rng);
    let draws = params.draws(rng)?;
    Ok(bucket_draws(&draws))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bucket_listed_rounded_draws() {
        let draws = [
            3.0, 4.0, 4.0, 5.0, 3.0, 4.0, 6.0, 2.0, 4.0, 5.0, 3.0, 4.0, 5.0, 4.0, 3.0, 6.0, 4.0,
            5.0, 4.0, 3.0,
        ];
        let distribution = bucket_draws(&draws);
        assert_eq!(distribution.buckets(), &[0, 0, 1, 5, 8, 4, 2]);
        assert_eq!(distribution.total(), 20);
    }

    #[test]
    fn test_bucket_fractional_draws_around_mean_four() {
        let draws = [
            0.6, 2.2, 1.7, 2.4, 1.9, 3.1, 2.8, 3.4, 2.6, 3.0, 3.49, 4.2, 3.6, 4.4, 3.8, 4.0,
            4.49, 5.1, 4.6, 6.3,
        ];
        let distribution = bucket_draws(&draws);
        assert_eq!(distribution.buckets(), &[0, 1, 4, 6, 6, 2, 1]);
        assert_eq!(distribution.total(), 20);
    }

    #[test]
    fn test_bucket_clamps_outliers_to_edges() {
        let draws = [-3.2, -0.4, 0.2, 6.6, 9.9, 42.0];
        assert_eq!(bucket_draws(&draws).buckets(), &[3, 0, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn test_bucket_empty() {
        assert_eq!(bucket_draws(&[]).total(), 0);
    }

    #[test]
    fn test_params_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let params = DistributionParams::random(&mut rng);
            assert!((15..=25).contains(&params.plays));
            assert!((2.8..=5.0).contains(&params.mean));
        }
    }

    #[test]
    fn test_draws_count_matches_plays() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = DistributionParams {
            plays: 20,
            mean: 4.0,
        };
        let draws = params.draws(&mut rng).unwrap();
        assert_eq!(draws.len(), 20);
        assert_eq!(bucket_draws(&draws).total(), 20);
    }

    #[test]
    fn test_synthesized_distribution_invariants() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let distribution = synthesize_distribution(&mut rng).unwrap();
            let total = distribution.total();
            assert!((15..=25).contains(&total), "seed {} total {}", seed, total);
            assert!(distribution.buckets().iter().all(|&b| b <= total));
        }
    }

    #[test]
    fn test_synthesis_is_deterministic_for_seed() {
        let a = synthesize_distribution(&mut StdRng::seed_from_u64(99)).unwrap();
        let b = synthesize_distribution(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
