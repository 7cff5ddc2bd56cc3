//! RNG module - piece generation
//!
//! Every piece kind is drawn uniformly at random and stamped with the next id
//! from the generator's own counter. Ids start at 1 and are never rewound, so
//! a piece discarded by undo keeps its id out of circulation for good.
//!
//! Randomness comes from a small LCG so that a fixed seed replays the same
//! session exactly.

use crate::types::{Piece, PieceKind, PIECE_KIND_COUNT};

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
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Piece generator owning the id counter.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    next_id: u64,
    seed: u32,
}

impl PieceGenerator {
    /// Create a generator with the given seed; the first piece gets id 1.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 1,
            seed,
        }
    }

    /// Draw a uniformly random kind and assign the next id.
    ///
    /// Ids are `u64`, so the counter does not wrap within any realistic session.
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::from_index(self.rng.next_range(PIECE_KIND_COUNT as u32) as usize);
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        piece
    }

    /// Id the next generated piece will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
