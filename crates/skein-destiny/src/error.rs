//! Error types for destiny pool operations.

use crate::state::Side;

/// Errors that can occur when mutating the destiny pool.
#[derive(Debug, thiserror::Error)]
pub enum DestinyError {
    /// A flip was attempted from a side with zero points remaining.
    #[error("cannot flip a {0} point; 0 remaining")]
    InsufficientPool(Side),

    /// A privileged operation was attempted by a non-authority participant.
    #[error("only the authority can {0} destiny points")]
    Unauthorized(&'static str),
}

/// Convenience result type for destiny operations.
pub type DestinyResult<T> = Result<T, DestinyError>;
