//! Wire messages for the destiny authority protocol.
//!
//! The protocol owns exactly two message kinds: a flip proposal from an
//! observer to the authority, and a state update replicated from the
//! authority to everyone. Payloads serialize with serde; the host's
//! broadcast channel carries them opaque.

use serde::{Deserialize, Serialize};

/// Topic for flip proposals (observer → authority).
pub const TOPIC_PROPOSAL: &str = "destiny.proposal";

/// Topic for replicated state updates (authority → everyone).
pub const TOPIC_STATE: &str = "destiny.state";

/// A message on the session's destiny channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DestinyMessage {
    /// An observer asks the authority to commit a flip, naming the counts
    /// it wants to result and the total it assumed when proposing. The
    /// authority rejects the proposal if that total no longer matches its
    /// live state.
    FlipProposal {
        /// Light side count the proposer wants to result.
        proposed_light: u32,
        /// Dark side count the proposer wants to result.
        proposed_dark: u32,
        /// Pool total the proposer observed when it proposed.
        assumed_prior_total: u32,
    },
    /// The authority's committed state, replicated to all observers.
    StateUpdate {
        /// Committed light side count.
        light: u32,
        /// Committed dark side count.
        dark: u32,
    },
}
