//! In-process random sources.

use rand::Rng;

use crate::ports::RandomSource;

/// Draws from the thread-local generator, seeded from the OS.
///
/// Holds no state of its own, so concurrent requests never contend and no two
/// processes share a sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_inclusive(&self, low: i64, high: i64) -> i64 {
        rand::rng().random_range(low..=high)
    }

    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic source pinned to one end of every range.
///
/// Lets tests reach the exact boundaries of generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinnedRandom {
    /// Always the lower bound (and index `0`).
    Lowest,
    /// Always the upper bound (and the last index).
    Highest,
}

impl RandomSource for PinnedRandom {
    fn int_inclusive(&self, low: i64, high: i64) -> i64 {
        match self {
            Self::Lowest => low,
            Self::Highest => high,
        }
    }

    fn index(&self, len: usize) -> usize {
        match self {
            Self::Lowest => 0,
            Self::Highest => len - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stay_within_inclusive_bounds() {
        let random = ThreadRandom;
        for _ in 0..1_000 {
            let value = random.int_inclusive(-5, 5);
            assert!((-5..=5).contains(&value));
        }
    }

    #[test]
    fn should_eventually_hit_both_bounds() {
        let random = ThreadRandom;
        let draws: Vec<i64> = (0..1_000).map(|_| random.int_inclusive(0, 3)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&3));
    }

    #[test]
    fn should_draw_index_below_len() {
        let random = ThreadRandom;
        for _ in 0..1_000 {
            assert!(random.index(3) < 3);
        }
    }

    #[test]
    fn should_pin_to_range_ends() {
        assert_eq!(PinnedRandom::Lowest.int_inclusive(20, 65), 20);
        assert_eq!(PinnedRandom::Highest.int_inclusive(20, 65), 65);
        assert_eq!(PinnedRandom::Lowest.index(3), 0);
        assert_eq!(PinnedRandom::Highest.index(3), 2);
    }
}
