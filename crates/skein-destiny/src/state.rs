//! Destiny pool state: the shared two-sided light/dark counter.

use serde::{Deserialize, Serialize};

use crate::error::{DestinyError, DestinyResult};

/// One side of the destiny pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The light side.
    Light,
    /// The dark side.
    Dark,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light side"),
            Self::Dark => write!(f, "dark side"),
        }
    }
}

/// The destiny pool counters. Both sides are always non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinyPool {
    /// Light side points.
    pub light: u32,
    /// Dark side points.
    pub dark: u32,
}

impl DestinyPool {
    /// A pool with the given counts.
    pub fn new(light: u32, dark: u32) -> Self {
        Self { light, dark }
    }

    /// Total points across both sides. Flips preserve this.
    pub fn total(&self) -> u32 {
        self.light + self.dark
    }

    /// Points on one side.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Light => self.light,
            Side::Dark => self.dark,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Light => &mut self.light,
            Side::Dark => &mut self.dark,
        }
    }

    /// Move one point from `from` to the other side.
    ///
    /// Fails with [`DestinyError::InsufficientPool`] if `from` is empty.
    pub fn flip(&mut self, from: Side) -> DestinyResult<()> {
        if self.get(from) == 0 {
            return Err(DestinyError::InsufficientPool(from));
        }
        *self.get_mut(from) -= 1;
        *self.get_mut(from.other()) += 1;
        Ok(())
    }

    /// Add one point to a side.
    pub fn add(&mut self, side: Side) {
        *self.get_mut(side) += 1;
    }

    /// Remove one point from a side, saturating at zero.
    pub fn remove(&mut self, side: Side) {
        let count = self.get_mut(side);
        *count = count.saturating_sub(1);
    }
}

impl std::fmt::Display for DestinyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} light / {} dark", self.light, self.dark)
    }
}
