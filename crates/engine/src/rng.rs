//! RNG module - spawn kind selection
//!
//! Each spawn draws one of the seven kinds uniformly at random. There is no
//! bag and no preview queue. A small LCG keeps games reproducible from a
//! seed, and a scripted mode replays a fixed cycle of kinds.

use crate::types::PieceKind;

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
    /// cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

#[derive(Debug, Clone)]
enum Source {
    Random(SimpleRng),
    Scripted { kinds: Vec<PieceKind>, next: usize },
}

/// Supplies the kind of every spawned piece.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    source: Source,
}

impl PieceGenerator {
    /// Uniform random kinds from a seeded RNG.
    pub fn random(seed: u32) -> Self {
        Self {
            source: Source::Random(SimpleRng::new(seed)),
        }
    }

    /// Cycle through `kinds` forever. Returns `None` for an empty slice.
    pub fn scripted(kinds: &[PieceKind]) -> Option<Self> {
        if kinds.is_empty() {
            return None;
        }
        Some(Self {
            source: Source::Scripted {
                kinds: kinds.to_vec(),
                next: 0,
            },
        })
    }

    pub fn is_scripted(&self) -> bool {
        matches!(self.source, Source::Scripted { .. })
    }

    /// Draw the kind for the next spawn
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Random(rng) => {
                let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Source::Scripted { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::random(1)
    }
}
