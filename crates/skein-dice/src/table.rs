//! Canonical face tables for each die type.
//!
//! These tables are data, not logic: each entry is the symbol vector printed
//! on one face of the physical die, indexed by face number starting at 1.
//! Themes never change these values, only the artwork used to render them.

use crate::symbol::Symbols;

const BLANK: Symbols = Symbols::BLANK;

/// Ability die (green d8).
pub(crate) const ABILITY: [Symbols; 8] = [
    BLANK,
    Symbols { success: 1, ..BLANK },
    Symbols { success: 1, ..BLANK },
    Symbols { success: 2, ..BLANK },
    Symbols { advantage: 1, ..BLANK },
    Symbols { advantage: 1, ..BLANK },
    Symbols { success: 1, advantage: 1, ..BLANK },
    Symbols { advantage: 2, ..BLANK },
];

/// Proficiency die (yellow d12).
pub(crate) const PROFICIENCY: [Symbols; 12] = [
    BLANK,
    Symbols { success: 1, ..BLANK },
    Symbols { success: 1, ..BLANK },
    Symbols { success: 2, ..BLANK },
    Symbols { success: 2, ..BLANK },
    Symbols { advantage: 1, ..BLANK },
    Symbols { success: 1, advantage: 1, ..BLANK },
    Symbols { success: 1, advantage: 1, ..BLANK },
    Symbols { success: 1, advantage: 1, ..BLANK },
    Symbols { advantage: 2, ..BLANK },
    Symbols { advantage: 2, ..BLANK },
    Symbols { success: 1, triumph: 1, ..BLANK },
];

/// Boost die (blue d6).
pub(crate) const BOOST: [Symbols; 6] = [
    BLANK,
    BLANK,
    Symbols { success: 1, ..BLANK },
    Symbols { success: 1, advantage: 1, ..BLANK },
    Symbols { advantage: 2, ..BLANK },
    Symbols { advantage: 1, ..BLANK },
];

/// Setback die (black d6).
pub(crate) const SETBACK: [Symbols; 6] = [
    BLANK,
    BLANK,
    Symbols { failure: 1, ..BLANK },
    Symbols { failure: 1, ..BLANK },
    Symbols { threat: 1, ..BLANK },
    Symbols { threat: 1, ..BLANK },
];

/// Difficulty die (purple d8).
pub(crate) const DIFFICULTY: [Symbols; 8] = [
    BLANK,
    Symbols { failure: 1, ..BLANK },
    Symbols { failure: 2, ..BLANK },
    Symbols { threat: 1, ..BLANK },
    Symbols { threat: 1, ..BLANK },
    Symbols { threat: 1, ..BLANK },
    Symbols { threat: 2, ..BLANK },
    Symbols { failure: 1, threat: 1, ..BLANK },
];

/// Challenge die (red d12).
pub(crate) const CHALLENGE: [Symbols; 12] = [
    BLANK,
    Symbols { failure: 1, ..BLANK },
    Symbols { failure: 1, ..BLANK },
    Symbols { failure: 2, ..BLANK },
    Symbols { failure: 2, ..BLANK },
    Symbols { threat: 1, ..BLANK },
    Symbols { threat: 1, ..BLANK },
    Symbols { failure: 1, threat: 1, ..BLANK },
    Symbols { failure: 1, threat: 1, ..BLANK },
    Symbols { threat: 2, ..BLANK },
    Symbols { threat: 2, ..BLANK },
    Symbols { failure: 1, despair: 1, ..BLANK },
];

/// Force die (white d12).
pub(crate) const FORCE: [Symbols; 12] = [
    Symbols { dark: 1, ..BLANK },
    Symbols { dark: 1, ..BLANK },
    Symbols { dark: 1, ..BLANK },
    Symbols { dark: 1, ..BLANK },
    Symbols { dark: 1, ..BLANK },
    Symbols { dark: 1, ..BLANK },
    Symbols { dark: 2, ..BLANK },
    Symbols { light: 1, ..BLANK },
    Symbols { light: 1, ..BLANK },
    Symbols { light: 2, ..BLANK },
    Symbols { light: 2, ..BLANK },
    Symbols { light: 2, ..BLANK },
];
