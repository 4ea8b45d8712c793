//! Roll execution and roll results.
//!
//! Randomness is injected through the [`FaceSource`] trait so rolls are
//! reproducible in tests: [`RngFaces`] wraps any `rand` generator, and
//! [`FixedFaces`] replays a pre-programmed face sequence.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::DiceResult;
use crate::symbol::Symbols;

/// A source of face draws for the roll engine.
pub trait FaceSource {
    /// Draw a face index uniformly from `1..=faces`.
    fn next_face(&mut self, faces: u32) -> u32;
}

/// Face source backed by a `rand` generator.
#[derive(Debug)]
pub struct RngFaces<R: Rng>(R);

impl<R: Rng> RngFaces<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngFaces<StdRng> {
    /// Deterministic source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> FaceSource for RngFaces<R> {
    fn next_face(&mut self, faces: u32) -> u32 {
        self.0.random_range(1..=faces)
    }
}

/// Test double replaying a fixed sequence of face indices.
///
/// Returns 1 once the sequence is exhausted.
#[derive(Debug, Clone, Default)]
pub struct FixedFaces {
    faces: VecDeque<u32>,
}

impl FixedFaces {
    /// Source that yields the given faces in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }
}

impl FaceSource for FixedFaces {
    fn next_face(&mut self, _faces: u32) -> u32 {
        self.faces.pop_front().unwrap_or(1)
    }
}

/// One die's outcome: the die that was rolled and the face it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRoll {
    /// The die that was rolled.
    pub die: Die,
    /// The face it landed on, 1-indexed.
    pub face: u32,
}

impl FaceRoll {
    /// The symbols shown on the rolled face.
    pub fn symbols(&self) -> DiceResult<Symbols> {
        self.die.face_symbols(self.face)
    }
}

/// The raw outcome of rolling a pool: one face per die, in pool order.
///
/// Immutable once rolled; plain data for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual face outcomes.
    pub faces: Vec<FaceRoll>,
}

impl RollResult {
    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The symbols shown by the die at `index` (pool order), or `None` if
    /// the index is out of range.
    pub fn symbols_of(&self, index: usize) -> Option<DiceResult<Symbols>> {
        self.faces.get(index).map(FaceRoll::symbols)
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .faces
            .iter()
            .map(|r| format!("{}:{}", r.die.code(), r.face))
            .collect();
        write!(f, "[{}]", parts.join(" "))
    }
}
