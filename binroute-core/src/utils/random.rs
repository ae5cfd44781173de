#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
///
/// Only `uniform_int` and `uniform_real` are required: the rest is expressed through them, so a
/// scripted implementation controls every random decision of the genetic operators.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool {
        if probability <= 0. {
            return false;
        }

        if probability >= 1. {
            return true;
        }

        self.uniform_real(0., 1.) < probability
    }

    /// Returns a random index in `0..length`. Length must be positive.
    fn uniform_index(&self, length: usize) -> usize {
        assert!(length > 0);
        self.uniform_int(0, length as i32 - 1) as usize
    }

    /// Shuffles values in place using Fisher-Yates algorithm.
    fn shuffle(&self, values: &mut [usize]) {
        for idx in (1..values.len()).rev() {
            let other = self.uniform_int(0, idx as i32) as usize;
            values.swap(idx, other);
        }
    }

    /// Samples `amount` distinct indices from `0..length` preserving the sampling order.
    /// When `amount` exceeds `length`, all indices are returned.
    fn sample_distinct(&self, length: usize, amount: usize) -> Vec<usize> {
        let mut pool = (0..length).collect::<Vec<_>>();
        let amount = amount.min(length);

        // partial Fisher-Yates from the front
        for idx in 0..amount {
            let other = self.uniform_int(idx as i32, length as i32 - 1) as usize;
            pool.swap(idx, other);
        }

        pool.truncate(amount);
        pool
    }
}

/// A default random implementation backed by a small fast generator.
///
/// Seeded instances produce the same sequence of values on every run.
pub struct DefaultRandom {
    seed: Option<u64>,
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance `DefaultRandom` with seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    /// Returns seed used to create the generator, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { seed: None, rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }
}
