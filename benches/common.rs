//! common routines to be included by benches

use machin_pi::FixedPoint;

/// Deterministic fixed-point values for benchmark inputs
pub struct RandomDigits {
    rng: oorandom::Rand64,
}

impl RandomDigits {
    pub fn new(seed: u128) -> Self {
        Self {
            rng: oorandom::Rand64::new(seed),
        }
    }

    /// A value with every digit drawn at random
    pub fn value(&mut self, precision: usize) -> FixedPoint {
        let digits: Vec<u64> = (0..precision).map(|_| self.rng.rand_u64()).collect();
        FixedPoint::from_digits(digits)
    }

    /// A value below one half, so two of them sum below one
    pub fn summand(&mut self, precision: usize) -> FixedPoint {
        let mut digits: Vec<u64> = (0..precision).map(|_| self.rng.rand_u64()).collect();
        digits[0] >>= 1;
        FixedPoint::from_digits(digits)
    }
}
