//! RNG module - deterministic block color generation
//!
//! Block colors are purely cosmetic, but they should differ per block and be
//! reproducible from a seed. A simple LCG is plenty for that.

use crate::types::Rgb;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// A random display color with every channel in 55..=239.
    ///
    /// The floor keeps blocks visible against a dark background.
    pub fn next_color(&mut self) -> Rgb {
        let mut channel = |rng: &mut Self| (55 + rng.next_range(185)) as u8;
        let r = channel(self);
        let g = channel(self);
        let b = channel(self);
        Rgb::new(r, g, b)
    }
}
