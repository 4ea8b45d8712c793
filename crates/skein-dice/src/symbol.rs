//! Symbol vectors produced by die faces.
//!
//! Narrative dice show symbols rather than numbers. A single face can carry
//! several symbols at once (e.g. one success and one advantage), so each face
//! is described by a full vector of symbol counts.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// The symbols on a single die face, or the field-wise sum over a roll.
///
/// All counts are non-negative; cancellation between opposed symbol pairs
/// happens later, in [`crate::aggregate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    /// Success symbols. Cancelled one-for-one by failures.
    pub success: u32,
    /// Failure symbols. Cancelled one-for-one by successes.
    pub failure: u32,
    /// Advantage symbols. Cancelled one-for-one by threats.
    pub advantage: u32,
    /// Threat symbols. Cancelled one-for-one by advantages.
    pub threat: u32,
    /// Triumph symbols. Never cancelled; always reported.
    pub triumph: u32,
    /// Despair symbols. Never cancelled; always reported.
    pub despair: u32,
    /// Light side points (Force dice only).
    pub light: u32,
    /// Dark side points (Force dice only).
    pub dark: u32,
}

impl Symbols {
    /// A face showing no symbols at all.
    pub const BLANK: Self = Self {
        success: 0,
        failure: 0,
        advantage: 0,
        threat: 0,
        triumph: 0,
        despair: 0,
        light: 0,
        dark: 0,
    };

    /// Returns true if every symbol count is zero.
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}

impl Add for Symbols {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            success: self.success + rhs.success,
            failure: self.failure + rhs.failure,
            advantage: self.advantage + rhs.advantage,
            threat: self.threat + rhs.threat,
            triumph: self.triumph + rhs.triumph,
            despair: self.despair + rhs.despair,
            light: self.light + rhs.light,
            dark: self.dark + rhs.dark,
        }
    }
}

impl AddAssign for Symbols {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for Symbols {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_blank() {
            return write!(f, "blank");
        }
        let mut parts = Vec::new();
        for (count, name) in [
            (self.success, "success"),
            (self.failure, "failure"),
            (self.advantage, "advantage"),
            (self.threat, "threat"),
            (self.triumph, "triumph"),
            (self.despair, "despair"),
            (self.light, "light"),
            (self.dark, "dark"),
        ] {
            if count > 0 {
                parts.push(format!("{count} {name}"));
            }
        }
        write!(f, "{}", parts.join(", "))
    }
}
