// ABOUTME: Seeded Fisher-Yates shuffle driven by a 31-bit linear congruential generator
// ABOUTME: Gives reproducible drill orderings across runs, platforms, and implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// LCG multiplier
const LCG_MULTIPLIER: i64 = 1_103_515_245;

/// LCG increment
const LCG_INCREMENT: i64 = 12_345;

/// Keeps the low 31 bits, i.e. reduction modulo 2^31
const LCG_MASK: i64 = 0x7fff_ffff;

/// Linear congruential generator with modulus 2^31
///
/// The state is kept in an `i64` and the product is computed with wrapping
/// arithmetic; only the low 31 bits survive the mask, so the result is exact
/// for every seed, negative seeds included.
#[derive(Debug, Clone, Copy)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    /// Start a generator at `seed`
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    /// Advance once and return the new state, always in `0..2^31`
    pub fn next_state(&mut self) -> i64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state
    }
}

/// Return a permutation of `items` determined entirely by `seed`
///
/// Fisher-Yates from the last index down to 1: advance the generator, pick
/// `j = state % (i + 1)`, swap `i` and `j`. The input slice is left as is.
#[must_use]
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut rng = Lcg::new(seed);
    for i in (1..shuffled.len()).rev() {
        // state is non-negative and below 2^31, so it fits in usize
        let j = rng.next_state() as usize % (i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_state_matches_reference_arithmetic() {
        let mut rng = Lcg::new(42);
        assert_eq!(rng.next_state(), 1_250_496_027);
    }

    #[test]
    fn test_known_permutations() {
        let six: Vec<u32> = (0..6).collect();
        assert_eq!(seeded_shuffle(&six, 42), vec![0, 2, 5, 1, 4, 3]);

        let ten: Vec<u32> = (0..10).collect();
        assert_eq!(seeded_shuffle(&ten, 0), vec![0, 2, 8, 4, 6, 9, 3, 7, 1, 5]);
    }

    #[test]
    fn test_negative_seed_is_masked_non_negative() {
        let mut rng = Lcg::new(-7);
        assert!(rng.next_state() >= 0);

        let six: Vec<u32> = (0..6).collect();
        assert_eq!(seeded_shuffle(&six, -7), vec![4, 3, 5, 0, 1, 2]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let items = ["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(seeded_shuffle(&items, 351), seeded_shuffle(&items, 351));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![1, 2, 3, 4, 5];
        let shuffled = seeded_shuffle(&items, 7);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);

        let mut sorted = shuffled;
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_trivial_inputs() {
        let empty: [u8; 0] = [];
        assert!(seeded_shuffle(&empty, 1).is_empty());
        assert_eq!(seeded_shuffle(&[9], 5), vec![9]);
    }
}
