//! # Random Sources
//!
//! Every random decision in Warren goes through a [`Randomizer`] that is
//! injected at construction time. Two implementations are provided:
//!
//! - [`StdRandomizer`] wraps a `rand` [`StdRng`], either from entropy or from
//!   a seed for replayable sessions
//! - [`FixedRandomizer`] replays a fixed, cyclic sequence of integers and never
//!   reorders anything, which makes generated worlds exactly predictable

use crate::{WarrenError, WarrenResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

/// Source of bounded integers and orderings.
pub trait Randomizer: Debug {
    /// Returns an integer in `min..max_exclusive`.
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32;

    /// Reorders `order` in place.
    fn shuffle(&mut self, order: &mut [usize]);
}

/// Returns a copy of `items` in the order chosen by `rng`.
///
/// # Examples
///
/// ```
/// use warren::{shuffled, FixedRandomizer};
///
/// let mut rng = FixedRandomizer::new(vec![1]).unwrap();
/// assert_eq!(shuffled(&mut rng, &['a', 'b', 'c']), vec!['a', 'b', 'c']);
/// ```
pub fn shuffled<T: Clone>(rng: &mut dyn Randomizer, items: &[T]) -> Vec<T> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    rng.shuffle(&mut order);
    order.into_iter().map(|index| items[index].clone()).collect()
}

/// Non-deterministic random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandomizer {
    rng: StdRng,
}

impl StdRandomizer {
    /// Creates a randomizer seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a randomizer whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for StdRandomizer {
    fn next_int(&mut self, min: u32, max_exclusive: u32) -> u32 {
        if max_exclusive <= min {
            return min;
        }
        self.rng.gen_range(min..max_exclusive)
    }

    fn shuffle(&mut self, order: &mut [usize]) {
        order.shuffle(&mut self.rng);
    }
}

/// Deterministic random source replaying a fixed sequence.
///
/// The requested bounds are ignored: each call to
/// [`next_int`](Randomizer::next_int) returns the next value of the sequence,
/// wrapping back to the start when it runs out. Shuffling leaves the order
/// untouched.
///
/// # Examples
///
/// ```
/// use warren::{FixedRandomizer, Randomizer};
///
/// let mut rng = FixedRandomizer::new(vec![2, 3]).unwrap();
/// assert_eq!(rng.next_int(0, 10), 2);
/// assert_eq!(rng.next_int(0, 10), 3);
/// assert_eq!(rng.next_int(0, 10), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRandomizer {
    sequence: Vec<u32>,
    cursor: usize,
}

impl FixedRandomizer {
    /// Creates a randomizer replaying `sequence`.
    ///
    /// Fails if the sequence is empty.
    pub fn new(sequence: Vec<u32>) -> WarrenResult<Self> {
        if sequence.is_empty() {
            return Err(WarrenError::InvalidConfig(
                "Fixed random sequence must contain at least one value".to_string(),
            ));
        }
        Ok(Self {
            sequence,
            cursor: 0,
        })
    }
}

impl Randomizer for FixedRandomizer {
    fn next_int(&mut self, _min: u32, _max_exclusive: u32) -> u32 {
        let value = self.sequence[self.cursor];
        self.cursor = (self.cursor + 1) % self.sequence.len();
        value
    }

    fn shuffle(&mut self, _order: &mut [usize]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_randomizer_cycles() {
        let mut rng = FixedRandomizer::new(vec![4, 7, 1]).unwrap();
        let drawn: Vec<u32> = (0..7).map(|_| rng.next_int(0, 2)).collect();
        assert_eq!(drawn, vec![4, 7, 1, 4, 7, 1, 4]);
    }

    #[test]
    fn test_fixed_randomizer_rejects_empty_sequence() {
        assert!(matches!(
            FixedRandomizer::new(Vec::new()),
            Err(WarrenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_fixed_randomizer_keeps_order() {
        let mut rng = FixedRandomizer::new(vec![0]).unwrap();
        let mut order = vec![3, 1, 2];
        rng.shuffle(&mut order);
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_std_randomizer_respects_bounds() {
        let mut rng = StdRandomizer::seeded(12345);
        for _ in 0..500 {
            let value = rng.next_int(1, 10);
            assert!((1..10).contains(&value));
        }
    }

    #[test]
    fn test_std_randomizer_empty_range_returns_min() {
        let mut rng = StdRandomizer::new();
        assert_eq!(rng.next_int(0, 0), 0);
        assert_eq!(rng.next_int(5, 3), 5);
    }

    #[test]
    fn test_seeded_randomizers_agree() {
        let mut first = StdRandomizer::seeded(99);
        let mut second = StdRandomizer::seeded(99);
        let a: Vec<u32> = (0..20).map(|_| first.next_int(0, 100)).collect();
        let b: Vec<u32> = (0..20).map(|_| second.next_int(0, 100)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut rng = StdRandomizer::seeded(7);
        let items: Vec<u32> = (0..50).collect();
        let mut result = shuffled(&mut rng, &items);
        assert_eq!(result.len(), items.len());
        result.sort_unstable();
        assert_eq!(result, items);
    }
}
