//! RNG module - random piece selection
//!
//! Pieces are drawn independently and uniformly from the catalogue; there is
//! no bag and no anti-repeat rule. The engine only sees the [`Randomizer`]
//! trait, so tests can script the exact sequence of spawned kinds.

use crate::types::PieceKind;

/// Source of uniform indices used to pick the next piece kind
pub trait Randomizer {
    /// Return a value in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Draw a piece kind uniformly from the catalogue.
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_index(PieceKind::ALL.len()) % PieceKind::ALL.len()]
    }
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Randomizer for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.next_range(bound as u32) as usize
    }
}
