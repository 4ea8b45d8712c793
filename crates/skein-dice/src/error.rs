//! Error types for the dice engine.

use crate::die::Die;

/// Errors that can occur during dice operations.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A face index outside `1..=faces` was looked up. With a correct roll
    /// engine this indicates a programming error in the caller.
    #[error("face {face} is out of range for the {die} die (1-{max})")]
    InvalidFaceIndex {
        /// The die whose table was consulted.
        die: Die,
        /// The offending face index.
        face: u32,
        /// The number of faces on the die.
        max: u32,
    },

    /// A dice theme name is not registered.
    #[error("unknown dice theme: {0}")]
    UnknownTheme(String),

    /// A pool expression contained a letter that is not a die code.
    #[error("unknown die code '{0}'")]
    UnknownDieCode(char),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
