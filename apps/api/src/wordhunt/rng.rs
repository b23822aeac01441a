//! Seeded letter stream for grid generation.
//!
//! A 48-bit linear congruential generator (multiplier `0x5DEECE66D`,
//! increment `0xB`, seed scrambled by XOR with the multiplier). Every seed
//! already persisted was rendered with this exact stream, so the constants,
//! the bit extraction and the bounded-draw rejection rule are frozen.
//! Changing any of them changes every historical grid.

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Deterministic PRNG over 48 bits of state.
///
/// Given the same seed it yields the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return its top `bits` bits (1..=32).
    #[inline]
    fn next_bits(&mut self, bits: u32) -> i32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as u32 as i32
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Power-of-two bounds take the high bits directly; any other bound uses
    /// rejection so the result is unbiased. `bound` is capped at `i32::MAX`
    /// and a zero bound yields 0.
    pub fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let bound = bound.min(i32::MAX as u32) as i32;

        if bound & bound.wrapping_neg() == bound {
            return ((bound as i64 * self.next_bits(31) as i64) >> 31) as u32;
        }

        loop {
            let bits = self.next_bits(31);
            let val = bits % bound;
            // Reject draws from the final partial bucket (detected by i32 overflow).
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // These values must never change: stored seeds depend on them.
        let mut rng = SeededRng::new(42);
        assert_eq!(rng.next_bits(32), -1_170_105_035);

        let mut rng = SeededRng::new(42);
        let draws: Vec<u32> = (0..5).map(|_| rng.next_int(10)).collect();
        assert_eq!(draws, vec![0, 3, 8, 4, 0]);
    }

    #[test]
    fn test_power_of_two_bound() {
        let mut rng = SeededRng::new(7);
        let draws: Vec<u32> = (0..5).map(|_| rng.next_int(16)).collect();
        assert_eq!(draws, vec![11, 10, 11, 0, 5]);
    }

    #[test]
    fn test_determinism() {
        let mut a = SeededRng::new(20_240_115);
        let mut b = SeededRng::new(20_240_115);
        for _ in 0..1000 {
            assert_eq!(a.next_int(99), b.next_int(99));
        }
    }

    #[test]
    fn test_next_int_in_range() {
        let mut rng = SeededRng::new(-1234);
        for _ in 0..1000 {
            assert!(rng.next_int(99) < 99);
        }
        assert_eq!(rng.next_int(0), 0);
        assert_eq!(rng.next_int(1), 0);
    }
}
