//! Narrative die types and face lookups.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::symbol::Symbols;
use crate::table;

/// A narrative die type.
///
/// Dice are interchangeable within a type: an instance carries no state
/// beyond its type and, once rolled, the face it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Green d8 — a character's base aptitude.
    Ability,
    /// Yellow d12 — trained aptitude; upgraded Ability.
    Proficiency,
    /// Blue d6 — situational help.
    Boost,
    /// Black d6 — situational hindrance.
    Setback,
    /// Purple d8 — the task's base difficulty.
    Difficulty,
    /// Red d12 — heightened difficulty; upgraded Difficulty.
    Challenge,
    /// White d12 — light/dark side Force points.
    Force,
}

impl Die {
    /// All die types in canonical display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Ability,
            Self::Proficiency,
            Self::Boost,
            Self::Setback,
            Self::Difficulty,
            Self::Challenge,
            Self::Force,
        ]
    }

    /// Returns the number of faces on this die.
    pub fn faces(self) -> u32 {
        self.table().len() as u32
    }

    /// Look up the symbols on a face, indexed from 1.
    ///
    /// Fails with [`DiceError::InvalidFaceIndex`] for faces outside
    /// `1..=faces()`.
    pub fn face_symbols(self, face: u32) -> DiceResult<Symbols> {
        if face == 0 || face > self.faces() {
            return Err(DiceError::InvalidFaceIndex {
                die: self,
                face,
                max: self.faces(),
            });
        }
        Ok(self.table()[(face - 1) as usize])
    }

    /// The one-letter code used in pool expressions.
    pub fn code(self) -> char {
        match self {
            Self::Ability => 'a',
            Self::Proficiency => 'p',
            Self::Boost => 'b',
            Self::Setback => 's',
            Self::Difficulty => 'd',
            Self::Challenge => 'c',
            Self::Force => 'f',
        }
    }

    /// Parse a one-letter die code (case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'a' => Some(Self::Ability),
            'p' => Some(Self::Proficiency),
            'b' => Some(Self::Boost),
            's' => Some(Self::Setback),
            'd' => Some(Self::Difficulty),
            'c' => Some(Self::Challenge),
            'f' => Some(Self::Force),
            _ => None,
        }
    }

    /// The higher-tier die this one upgrades into, if it is part of an
    /// upgrade pair (Ability→Proficiency, Difficulty→Challenge).
    pub fn upgrades_to(self) -> Option<Self> {
        match self {
            Self::Ability => Some(Self::Proficiency),
            Self::Difficulty => Some(Self::Challenge),
            _ => None,
        }
    }

    /// The lower-tier die this one downgrades into, if any.
    pub fn downgrades_to(self) -> Option<Self> {
        match self {
            Self::Proficiency => Some(Self::Ability),
            Self::Challenge => Some(Self::Difficulty),
            _ => None,
        }
    }

    fn table(self) -> &'static [Symbols] {
        match self {
            Self::Ability => &table::ABILITY,
            Self::Proficiency => &table::PROFICIENCY,
            Self::Boost => &table::BOOST,
            Self::Setback => &table::SETBACK,
            Self::Difficulty => &table::DIFFICULTY,
            Self::Challenge => &table::CHALLENGE,
            Self::Force => &table::FORCE,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ability => write!(f, "Ability"),
            Self::Proficiency => write!(f, "Proficiency"),
            Self::Boost => write!(f, "Boost"),
            Self::Setback => write!(f, "Setback"),
            Self::Difficulty => write!(f, "Difficulty"),
            Self::Challenge => write!(f, "Challenge"),
            Self::Force => write!(f, "Force"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_counts() {
        assert_eq!(Die::Ability.faces(), 8);
        assert_eq!(Die::Proficiency.faces(), 12);
        assert_eq!(Die::Boost.faces(), 6);
        assert_eq!(Die::Setback.faces(), 6);
        assert_eq!(Die::Difficulty.faces(), 8);
        assert_eq!(Die::Challenge.faces(), 12);
        assert_eq!(Die::Force.faces(), 12);
    }

    #[test]
    fn golden_ability_table() {
        let expect: [(u32, u32); 8] = [
            // (success, advantage) per face
            (0, 0),
            (1, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (0, 1),
            (1, 1),
            (0, 2),
        ];
        for (i, (success, advantage)) in expect.iter().enumerate() {
            let s = Die::Ability.face_symbols(i as u32 + 1).unwrap();
            assert_eq!(s.success, *success, "face {}", i + 1);
            assert_eq!(s.advantage, *advantage, "face {}", i + 1);
            assert_eq!(s.failure + s.threat + s.triumph + s.despair + s.light + s.dark, 0);
        }
    }

    #[test]
    fn golden_proficiency_table() {
        // Face 12 carries one success alongside the triumph.
        let s = Die::Proficiency.face_symbols(12).unwrap();
        assert_eq!(s.success, 1);
        assert_eq!(s.triumph, 1);
        for face in [4, 5] {
            assert_eq!(Die::Proficiency.face_symbols(face).unwrap().success, 2);
        }
        for face in [7, 8, 9] {
            let s = Die::Proficiency.face_symbols(face).unwrap();
            assert_eq!((s.success, s.advantage), (1, 1));
        }
        for face in [10, 11] {
            assert_eq!(Die::Proficiency.face_symbols(face).unwrap().advantage, 2);
        }
    }

    #[test]
    fn golden_boost_and_setback_tables() {
        assert!(Die::Boost.face_symbols(1).unwrap().is_blank());
        assert!(Die::Boost.face_symbols(2).unwrap().is_blank());
        assert_eq!(Die::Boost.face_symbols(3).unwrap().success, 1);
        let s = Die::Boost.face_symbols(4).unwrap();
        assert_eq!((s.success, s.advantage), (1, 1));
        assert_eq!(Die::Boost.face_symbols(5).unwrap().advantage, 2);
        assert_eq!(Die::Boost.face_symbols(6).unwrap().advantage, 1);

        assert!(Die::Setback.face_symbols(1).unwrap().is_blank());
        assert!(Die::Setback.face_symbols(2).unwrap().is_blank());
        assert_eq!(Die::Setback.face_symbols(3).unwrap().failure, 1);
        assert_eq!(Die::Setback.face_symbols(4).unwrap().failure, 1);
        assert_eq!(Die::Setback.face_symbols(5).unwrap().threat, 1);
        assert_eq!(Die::Setback.face_symbols(6).unwrap().threat, 1);
    }

    #[test]
    fn golden_difficulty_table() {
        assert!(Die::Difficulty.face_symbols(1).unwrap().is_blank());
        assert_eq!(Die::Difficulty.face_symbols(2).unwrap().failure, 1);
        assert_eq!(Die::Difficulty.face_symbols(3).unwrap().failure, 2);
        for face in [4, 5, 6] {
            assert_eq!(Die::Difficulty.face_symbols(face).unwrap().threat, 1);
        }
        assert_eq!(Die::Difficulty.face_symbols(7).unwrap().threat, 2);
        let s = Die::Difficulty.face_symbols(8).unwrap();
        assert_eq!((s.failure, s.threat), (1, 1));
    }

    #[test]
    fn golden_challenge_table() {
        // Face 12 carries one failure alongside the despair.
        let s = Die::Challenge.face_symbols(12).unwrap();
        assert_eq!(s.failure, 1);
        assert_eq!(s.despair, 1);
        for face in [4, 5] {
            assert_eq!(Die::Challenge.face_symbols(face).unwrap().failure, 2);
        }
        for face in [8, 9] {
            let s = Die::Challenge.face_symbols(face).unwrap();
            assert_eq!((s.failure, s.threat), (1, 1));
        }
        for face in [10, 11] {
            assert_eq!(Die::Challenge.face_symbols(face).unwrap().threat, 2);
        }
    }

    #[test]
    fn golden_force_table() {
        for face in 1..=6 {
            assert_eq!(Die::Force.face_symbols(face).unwrap().dark, 1);
        }
        assert_eq!(Die::Force.face_symbols(7).unwrap().dark, 2);
        for face in [8, 9] {
            assert_eq!(Die::Force.face_symbols(face).unwrap().light, 1);
        }
        for face in [10, 11, 12] {
            assert_eq!(Die::Force.face_symbols(face).unwrap().light, 2);
        }
        // Force faces never show check symbols.
        for face in 1..=12 {
            let s = Die::Force.face_symbols(face).unwrap();
            assert_eq!(s.success + s.failure + s.advantage + s.threat, 0);
        }
    }

    #[test]
    fn face_index_bounds() {
        assert!(Die::Ability.face_symbols(0).is_err());
        assert!(Die::Ability.face_symbols(9).is_err());
        assert!(Die::Ability.face_symbols(8).is_ok());
        assert!(matches!(
            Die::Boost.face_symbols(7),
            Err(DiceError::InvalidFaceIndex { face: 7, max: 6, .. })
        ));
    }

    #[test]
    fn codes_round_trip() {
        for die in Die::all() {
            assert_eq!(Die::from_code(die.code()), Some(*die));
            assert_eq!(Die::from_code(die.code().to_ascii_uppercase()), Some(*die));
        }
        assert_eq!(Die::from_code('x'), None);
    }

    #[test]
    fn upgrade_pairs() {
        assert_eq!(Die::Ability.upgrades_to(), Some(Die::Proficiency));
        assert_eq!(Die::Difficulty.upgrades_to(), Some(Die::Challenge));
        assert_eq!(Die::Proficiency.downgrades_to(), Some(Die::Ability));
        assert_eq!(Die::Challenge.downgrades_to(), Some(Die::Difficulty));
        assert_eq!(Die::Boost.upgrades_to(), None);
        assert_eq!(Die::Force.downgrades_to(), None);
        assert_eq!(Die::Proficiency.upgrades_to(), None);
    }
}
