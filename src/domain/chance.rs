//! Weighted random choice between two outcomes.
//!
//! Seeding goes through [`WeightedChoice`] instead of a global generator so
//! callers can inject a seeded source and get reproducible boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one of two outcomes according to relative weights.
pub trait WeightedChoice {
    /// Returns `true` with probability `first / (first + second)`.
    /// Weights are non-negative and not both zero.
    fn pick_first(&mut self, first: f64, second: f64) -> bool;

    /// Choose between two weighted values.
    fn choose<T>(&mut self, first: (T, f64), second: (T, f64)) -> T
    where
        Self: Sized,
    {
        if self.pick_first(first.1, second.1) { first.0 } else { second.0 }
    }
}

/// [`WeightedChoice`] backed by a `rand` generator.
pub struct RandomWeightedChoice<R = StdRng> {
    rng: R,
}

impl RandomWeightedChoice<StdRng> {
    /// Deterministic source, same seed gives the same board
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl<R: Rng> RandomWeightedChoice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WeightedChoice for RandomWeightedChoice<R> {
    fn pick_first(&mut self, first: f64, second: f64) -> bool {
        let total = first + second;
        if total.is_nan() || total <= 0.0 {
            return false;
        }
        self.rng.random_bool((first / total).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weight_never_chosen() {
        let mut chance = RandomWeightedChoice::seeded(7);
        for _ in 0..1000 {
            assert_eq!(chance.choose(("alive", 0.0), ("dead", 1.0)), "dead");
            assert_eq!(chance.choose(("alive", 2.0), ("dead", 0.0)), "alive");
        }
    }

    #[test]
    fn test_weights_are_respected() {
        let mut chance = RandomWeightedChoice::seeded(42);
        let draws = 20_000;
        // 1 : 3 gives a quarter
        let hits = (0..draws).filter(|_| chance.pick_first(1.0, 3.0)).count();
        let fraction = hits as f64 / draws as f64;
        assert!((fraction - 0.25).abs() < 0.02, "got {fraction}");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomWeightedChoice::seeded(99);
        let mut b = RandomWeightedChoice::seeded(99);
        let xs: Vec<bool> = (0..64).map(|_| a.pick_first(1.0, 1.0)).collect();
        let ys: Vec<bool> = (0..64).map(|_| b.pick_first(1.0, 1.0)).collect();
        assert_eq!(xs, ys);
    }
}
