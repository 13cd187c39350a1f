//! Random piece selection.
//!
//! The hardware variants seed piece selection from timer bits sampled on key
//! presses; the desktop build calls libc `rand`. The core only requires a
//! uniform draw over the seven shapes, so selection is injected through the
//! `RandomSource` trait and the engine stays deterministic under test.

use crate::types::PieceId;

/// Anything that can pick the next piece. Must be uniform over the seven
/// shapes for fair play; tests substitute scripted sequences.
pub trait RandomSource {
    fn next_piece_id(&mut self) -> PieceId;
}

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// LCG-backed uniform piece source.
#[derive(Debug, Clone)]
pub struct LcgSource {
    rng: SimpleRng,
}

impl LcgSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl RandomSource for LcgSource {
    fn next_piece_id(&mut self) -> PieceId {
        PieceId::from_index(self.rng.next_range(7))
    }
}
