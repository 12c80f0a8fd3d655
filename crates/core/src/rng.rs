//! RNG module - uniform piece selection
//!
//! A small LCG keeps games reproducible from a seed, which the tests and the
//! benches rely on. Each draw picks uniformly from the whole catalog; there is
//! no bag.

use crate::pieces::PieceShape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would repeat forever
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG are short-period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Pick one shape uniformly
    pub fn pick(&mut self, shapes: &'static [PieceShape]) -> &'static PieceShape {
        let idx = self.next_range(shapes.len() as u32) as usize;
        &shapes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::all_shapes;
    use std::collections::HashSet;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_pick_reaches_every_shape() {
        let mut rng = SimpleRng::new(42);
        let seen: HashSet<_> = (0..500).map(|_| rng.pick(all_shapes()).kind).collect();
        assert_eq!(seen.len(), 7);
    }
}
