//! Symbol cancellation: reducing a raw roll into a net outcome.
//!
//! Opposed symbol pairs cancel one-for-one within their own axis: success
//! against failure, advantage against threat, light against dark. Triumph
//! and despair never cancel; they are reported whenever rolled. The face
//! tables already count a triumph as one success (and a despair as one
//! failure) on the face that shows it, so the subtraction here needs no
//! special casing.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::DiceResult;
use crate::roll::RollResult;
use crate::symbol::Symbols;

/// The post-cancellation summary of a roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetResult {
    /// Net successes (positive) or failures (negative) after cancellation.
    pub net_success: i32,
    /// Net advantages (positive) or threats (negative) after cancellation.
    pub net_advantage: i32,
    /// Triumphs rolled. Never cancelled.
    pub triumphs: u32,
    /// Despairs rolled. Never cancelled.
    pub despairs: u32,
    /// Net light (positive) or dark (negative) side points.
    pub net_force: i32,
    /// True if the roll contained only Force dice, in which case the
    /// success and advantage axes carry no meaning.
    pub force_only: bool,
}

impl NetResult {
    /// Whether the check succeeded: strictly more successes than failures.
    /// A net of exactly zero is a failure.
    pub fn is_success(&self) -> bool {
        self.net_success > 0
    }
}

impl std::fmt::Display for NetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.force_only {
            if self.is_success() {
                parts.push(format!("{} success", self.net_success));
            } else {
                parts.push(format!("failure ({})", self.net_success));
            }
            match self.net_advantage.signum() {
                1 => parts.push(format!("{} advantage", self.net_advantage)),
                -1 => parts.push(format!("{} threat", -self.net_advantage)),
                _ => {}
            }
            if self.triumphs > 0 {
                parts.push(format!("{} triumph", self.triumphs));
            }
            if self.despairs > 0 {
                parts.push(format!("{} despair", self.despairs));
            }
        }
        match self.net_force.signum() {
            1 => parts.push(format!("{} light", self.net_force)),
            -1 => parts.push(format!("{} dark", -self.net_force)),
            _ => {}
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// Field-wise sum of the symbols on every rolled face.
pub fn raw_totals(roll: &RollResult) -> DiceResult<Symbols> {
    let mut totals = Symbols::BLANK;
    for face_roll in &roll.faces {
        totals += face_roll.symbols()?;
    }
    Ok(totals)
}

/// Reduce a raw roll to its net outcome.
///
/// Pure and idempotent: the same `RollResult` always aggregates to the same
/// `NetResult`. An empty roll aggregates to all zeroes, classified failure.
pub fn aggregate(roll: &RollResult) -> DiceResult<NetResult> {
    let totals = raw_totals(roll)?;
    let force_only = !roll.is_empty() && roll.faces.iter().all(|r| r.die == Die::Force);
    Ok(NetResult {
        net_success: totals.success as i32 - totals.failure as i32,
        net_advantage: totals.advantage as i32 - totals.threat as i32,
        triumphs: totals.triumph,
        despairs: totals.despair,
        net_force: totals.light as i32 - totals.dark as i32,
        force_only,
    })
}
