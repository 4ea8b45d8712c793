//! Dice pool construction, composition, and rolling.
//!
//! A pool is an ordered multiset of dice. Order affects display only; it
//! never influences the roll outcome. Composition operations never fail:
//! removal saturates at zero, and upgrades past the available dice degrade
//! gracefully into additions.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};
use crate::roll::{FaceRoll, FaceSource, RollResult};

/// A collection of narrative dice to be rolled together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    dice: Vec<Die>,
}

impl Pool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Parse a pool expression of one-letter die codes, e.g. `aapdd`.
    pub fn parse(expr: &str) -> DiceResult<Self> {
        let mut pool = Self::new();
        for code in expr.trim().chars() {
            if code.is_whitespace() {
                continue;
            }
            let die = Die::from_code(code).ok_or(DiceError::UnknownDieCode(code))?;
            pool.dice.push(die);
        }
        Ok(pool)
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Remove up to `count` dice of the given type.
    ///
    /// Removing more than are present removes only what exists.
    pub fn remove(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            match self.dice.iter().rposition(|d| *d == die) {
                Some(pos) => {
                    self.dice.remove(pos);
                }
                None => break,
            }
        }
        self
    }

    /// Upgrade `count` dice of the given type to its paired higher tier
    /// (Ability→Proficiency, Difficulty→Challenge).
    ///
    /// If fewer than `count` are present, the shortfall is satisfied by
    /// adding new higher-tier dice directly. Dice without an upgrade pair
    /// are left untouched.
    pub fn upgrade(mut self, die: Die, count: u32) -> Self {
        let Some(higher) = die.upgrades_to() else {
            tracing::warn!(die = %die, "die has no upgrade pair, ignoring");
            return self;
        };
        for _ in 0..count {
            match self.dice.iter().position(|d| *d == die) {
                Some(pos) => self.dice[pos] = higher,
                None => self.dice.push(higher),
            }
        }
        self
    }

    /// Downgrade `count` dice of the given type to its paired lower tier
    /// (Proficiency→Ability, Challenge→Difficulty).
    ///
    /// If fewer than `count` are present, the shortfall removes lower-tier
    /// dice instead (saturating once the pool is exhausted). Dice without a
    /// downgrade pair are left untouched.
    pub fn downgrade(mut self, die: Die, count: u32) -> Self {
        let Some(lower) = die.downgrades_to() else {
            tracing::warn!(die = %die, "die has no downgrade pair, ignoring");
            return self;
        };
        for _ in 0..count {
            match self.dice.iter().position(|d| *d == die) {
                Some(pos) => self.dice[pos] = lower,
                None => {
                    if let Some(pos) = self.dice.iter().rposition(|d| *d == lower) {
                        self.dice.remove(pos);
                    }
                }
            }
        }
        self
    }

    /// The dice in this pool, in display order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Total number of dice in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// How many dice of the given type the pool holds.
    pub fn count_of(&self, die: Die) -> u32 {
        self.dice.iter().filter(|d| **d == die).count() as u32
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll every die in the pool, drawing one face per die from `source`.
    ///
    /// Draws are independent; no die's outcome depends on another's.
    pub fn roll(&self, source: &mut impl FaceSource) -> RollResult {
        let faces = self
            .dice
            .iter()
            .map(|die| FaceRoll {
                die: *die,
                face: source.next_face(die.faces()),
            })
            .collect();
        RollResult { faces }
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for die in &self.dice {
            write!(f, "{}", die.code())?;
        }
        Ok(())
    }
}
