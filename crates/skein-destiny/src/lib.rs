//! Shared Destiny Pool authority protocol for Skein.
//!
//! The destiny pool is a two-sided light/dark counter shared by every
//! participant in a session. One participant — the authority — commits all
//! changes; observers hold read-only mirrors and propose flips over a
//! broadcast channel. The authority validates proposals against its live
//! state so two simultaneous flips cannot corrupt the pool, and replicates
//! every committed change back to the session.

pub mod channel;
pub mod error;
pub mod message;
pub mod participant;
pub mod state;
pub mod store;

pub use channel::{Envelope, SessionBus};
pub use error::{DestinyError, DestinyResult};
pub use message::{DestinyMessage, TOPIC_PROPOSAL, TOPIC_STATE};
pub use participant::{Participant, Role};
pub use state::{DestinyPool, Side};
pub use store::{DestinyStore, KEY_DARK, KEY_LIGHT, MemoryStore};
