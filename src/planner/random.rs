//! Random sources for clip planning

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::model::DurationRange;

/// Source of uniformly distributed lengths
pub trait RandomSource {
    /// Draw a value from `[range.min, range.max)`; a degenerate range yields `min`
    fn next_in(&mut self, range: &DurationRange) -> f64;
}

/// `StdRng`-backed source, reproducible when built from a seed
pub struct SeededRandom {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededRandom {
    /// Deterministic source for a given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Use `seed` when given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_in(&mut self, range: &DurationRange) -> f64 {
        if range.max > range.min {
            self.rng.gen_range(range.min..range.max)
        } else {
            range.min
        }
    }
}

/// Replays a fixed sequence of values, then falls back to each range's minimum
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Interleave clip and gap lengths in the order the planner draws them,
    /// stopping after the first clip that has no gap to follow it
    pub fn from_clips_and_gaps(clips: &[f64], gaps: &[f64]) -> Self {
        let mut values = Vec::with_capacity(clips.len() + gaps.len());
        for (i, clip) in clips.iter().enumerate() {
            values.push(*clip);
            match gaps.get(i) {
                Some(gap) => values.push(*gap),
                None => break,
            }
        }
        Self::new(values)
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in(&mut self, range: &DurationRange) -> f64 {
        self.values.pop_front().unwrap_or(range.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> DurationRange {
        DurationRange { min, max }
    }

    #[test]
    fn test_seeded_random_stays_in_range() {
        let mut rng = SeededRandom::from_seed(7);
        let r = range(3.0, 7.0);
        for _ in 0..1000 {
            let value = rng.next_in(&r);
            assert!((3.0..7.0).contains(&value));
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let r = range(5.0, 10.0);
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        let left: Vec<f64> = (0..20).map(|_| a.next_in(&r)).collect();
        let right: Vec<f64> = (0..20).map(|_| b.next_in(&r)).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), Some(42));
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = SeededRandom::from_entropy();
        assert_eq!(rng.next_in(&range(4.0, 4.0)), 4.0);
        assert_eq!(rng.seed(), None);
    }

    #[test]
    fn test_scripted_random_interleaves_and_falls_back() {
        let mut rng = ScriptedRandom::from_clips_and_gaps(&[4.0, 6.0], &[7.0]);
        let clip = range(3.0, 7.0);
        let gap = range(5.0, 10.0);
        assert_eq!(rng.remaining(), 3);
        assert_eq!(rng.next_in(&clip), 4.0);
        assert_eq!(rng.next_in(&gap), 7.0);
        assert_eq!(rng.next_in(&clip), 6.0);
        assert_eq!(rng.next_in(&gap), 5.0);
    }
}
