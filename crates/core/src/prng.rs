//! Deterministic PRNG based on the Xorshift32 algorithm.
//!
//! Drives the micro-variation stage of palette generation. Same seed always
//! produces the same noise sequence across all platforms (pure integer
//! arithmetic in the core step). A generator is constructed fresh for every
//! generation call and threaded through as an explicit value, so concurrent
//! calls never share state.

/// Xorshift32 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the shift triple (13, 17, 5) over a 32-bit state. Seed of 0 is
/// replaced with 1 to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Creates a new PRNG with the given seed.
    ///
    /// If `seed` is 0, uses 1 instead: zero is a fixed point of the xorshift
    /// step and would produce a constant all-zero sequence.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advances the state and returns the next 32-bit value.
    ///
    /// Implements xorshift32 with shifts (13, 17, 5). Never returns 0.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns the next value mapped into the unit interval.
    ///
    /// The stepped state divided by `u32::MAX`; since the state is never 0
    /// the result lies in (0, 1].
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Golden value --

    #[test]
    fn next_u32_produces_known_golden_value_for_seed_42() {
        // Golden value for xorshift32(seed=42, shifts=13,17,5).
        // If this test breaks, every seeded palette changes.
        let mut rng = Xorshift32::new(42);
        assert_eq!(rng.next_u32(), 11_355_432);
    }

    // -- Seed=0 guard --

    #[test]
    fn seed_zero_is_remapped_to_one() {
        let mut zero = Xorshift32::new(0);
        let mut one = Xorshift32::new(1);
        for i in 0..100 {
            assert_eq!(
                zero.next_u32(),
                one.next_u32(),
                "seed 0 and seed 1 sequences diverged at index {i}"
            );
        }
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0, "seed=0 guard failed: first value is 0");
        assert_ne!(rng.next_u32(), 0);
        assert_ne!(rng.next_u32(), 0);
    }

    // -- Determinism --

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut rng_a = Xorshift32::new(8675309);
        let mut rng_b = Xorshift32::new(8675309);
        for i in 0..1000 {
            assert_eq!(
                rng_a.next_u32(),
                rng_b.next_u32(),
                "sequences diverged at index {i}"
            );
        }
    }

    // -- next_unit range --

    #[test]
    fn next_unit_always_in_half_open_unit_interval() {
        let mut rng = Xorshift32::new(12345);
        for i in 0..10_000 {
            let v = rng.next_unit();
            assert!(
                v > 0.0 && v <= 1.0,
                "next_unit() = {v} out of (0, 1] at iteration {i}"
            );
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_unit_in_range_for_any_seed(seed: u32) {
                let mut rng = Xorshift32::new(seed);
                for _ in 0..100 {
                    let v = rng.next_unit();
                    prop_assert!(
                        v > 0.0 && v <= 1.0,
                        "next_unit() = {v} out of (0, 1] for seed {seed}"
                    );
                }
            }

            #[test]
            fn next_u32_never_returns_zero(seed: u32) {
                let mut rng = Xorshift32::new(seed);
                for _ in 0..100 {
                    prop_assert_ne!(rng.next_u32(), 0);
                }
            }

            #[test]
            fn next_unit_approximate_uniformity(seed: u32) {
                let mut rng = Xorshift32::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let v = rng.next_unit();
                    let idx = (v * 10.0).min(9.0) as usize;
                    buckets[idx] += 1;
                }
                // Loose bound (expected ~1000 per bucket) to avoid flakiness.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(
                        count >= 500,
                        "bucket {i} has only {count} values (expected ~1000) for seed {seed}"
                    );
                }
            }
        }
    }
}
