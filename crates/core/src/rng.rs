//! RNG module - uniform random shape selection
//!
//! Each spawn picks one of the seven kinds with equal probability,
//! independently of previous picks. A small LCG keeps games reproducible
//! from a seed (tests, benches, restarts).

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    ///
    /// Multiply-shift keeps the high bits, which are the well-mixed ones in
    /// a power-of-two LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform shape generator
#[derive(Debug, Clone)]
pub struct ShapeRandomizer {
    seed: u32,
    rng: SimpleRng,
}

impl ShapeRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick the next kind uniformly from the catalog
    pub fn draw(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for ShapeRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ShapeRandomizer::new(99);
        let mut b = ShapeRandomizer::new(99);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_draw_is_roughly_uniform() {
        let mut randomizer = ShapeRandomizer::new(2024);
        let mut counts = [0u32; 7];
        let draws = 70_000;
        for _ in 0..draws {
            counts[randomizer.draw().index()] += 1;
        }

        let expected = draws / 7;
        for (i, &n) in counts.iter().enumerate() {
            let diff = (n as i64 - expected as i64).unsigned_abs();
            assert!(
                diff < (expected / 10) as u64,
                "{:?} drawn {} times, expected ~{}",
                ShapeKind::ALL[i],
                n,
                expected
            );
        }
    }
}
