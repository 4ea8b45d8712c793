//! Session participants and the single-writer authority protocol.
//!
//! Exactly one participant per session holds the [`Role::Authority`] and is
//! allowed to commit destiny pool changes. Everyone else is an observer
//! holding a read-only mirror. An observer flips by broadcasting a proposal
//! naming the counts it wants to result; the authority validates the
//! proposal against its live state, commits it, persists it, and replicates
//! the new state back out. Stale proposals are dropped, never retried.

use crossbeam_channel::Receiver;

use crate::channel::{Envelope, SessionBus};
use crate::error::{DestinyError, DestinyResult};
use crate::message::{DestinyMessage, TOPIC_PROPOSAL, TOPIC_STATE};
use crate::state::{DestinyPool, Side};
use crate::store::{DestinyStore, KEY_DARK, KEY_LIGHT};

/// A participant's role in the destiny protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The single participant permitted to commit shared-state changes.
    Authority,
    /// A participant mirroring replicated state; proposes, never commits.
    Observer,
}

/// One participant in a session's destiny protocol.
pub struct Participant {
    role: Role,
    state: DestinyPool,
    store: Option<Box<dyn DestinyStore>>,
    bus: SessionBus,
    inbox: Receiver<Envelope>,
}

impl Participant {
    /// Create the session's authority.
    ///
    /// Reads the initial counts from the store (missing keys default to
    /// zero) and replicates them so observer mirrors start in sync.
    pub fn authority(store: Box<dyn DestinyStore>, bus: &SessionBus) -> Self {
        let inbox = bus.subscribe();
        let state = DestinyPool::new(
            store.get(KEY_LIGHT).unwrap_or(0),
            store.get(KEY_DARK).unwrap_or(0),
        );
        let participant = Self {
            role: Role::Authority,
            state,
            store: Some(store),
            bus: bus.clone(),
            inbox,
        };
        participant.replicate();
        participant
    }

    /// Create an observer.
    ///
    /// The mirror starts at zero and tracks the authority's replicated
    /// state from the first update onward.
    pub fn observer(bus: &SessionBus) -> Self {
        Self {
            role: Role::Observer,
            state: DestinyPool::default(),
            store: None,
            bus: bus.clone(),
            inbox: bus.subscribe(),
        }
    }

    /// This participant's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The committed state (authority) or replicated mirror (observer).
    pub fn state(&self) -> DestinyPool {
        self.state
    }

    /// Flip one point from `from` to the other side.
    ///
    /// The authority commits immediately. An observer validates against its
    /// mirror, then sends a fire-and-forget proposal: its mirror does not
    /// change until the replicated update arrives, and a proposal that goes
    /// stale in flight is silently dropped by the authority.
    pub fn flip(&mut self, from: Side) -> DestinyResult<()> {
        match self.role {
            Role::Authority => {
                self.state.flip(from)?;
                self.commit();
                Ok(())
            }
            Role::Observer => {
                let mut proposed = self.state;
                proposed.flip(from)?;
                self.bus.send(
                    TOPIC_PROPOSAL,
                    DestinyMessage::FlipProposal {
                        proposed_light: proposed.light,
                        proposed_dark: proposed.dark,
                        assumed_prior_total: self.state.total(),
                    },
                );
                Ok(())
            }
        }
    }

    /// Add a point to one side. Authority only.
    pub fn add_point(&mut self, side: Side) -> DestinyResult<()> {
        if self.role != Role::Authority {
            return Err(DestinyError::Unauthorized("add"));
        }
        self.state.add(side);
        self.commit();
        Ok(())
    }

    /// Remove a point from one side (saturating at zero). Authority only.
    pub fn remove_point(&mut self, side: Side) -> DestinyResult<()> {
        if self.role != Role::Authority {
            return Err(DestinyError::Unauthorized("remove"));
        }
        self.state.remove(side);
        self.commit();
        Ok(())
    }

    /// Drain this participant's queue, handling each message in receipt
    /// order. The single cooperative step of the protocol.
    pub fn pump(&mut self) {
        while let Ok((topic, msg)) = self.inbox.try_recv() {
            self.handle_message(&topic, msg);
        }
    }

    /// Handle one delivered message.
    ///
    /// The authority applies valid flip proposals and drops stale ones; an
    /// observer mirrors state updates. Everything else is ignored.
    pub fn handle_message(&mut self, topic: &str, msg: DestinyMessage) {
        match (self.role, msg) {
            (
                Role::Authority,
                DestinyMessage::FlipProposal {
                    proposed_light,
                    proposed_dark,
                    assumed_prior_total,
                },
            ) if topic == TOPIC_PROPOSAL => {
                let live = self.state;
                // Checked arithmetic: a hostile payload near u32::MAX must
                // be dropped, not panic the authority.
                let total_matches = assumed_prior_total == live.total()
                    && proposed_light.checked_add(proposed_dark) == Some(live.total());
                // The proposal must be a one-point flip of the live state.
                let is_unit_flip = (live.light.checked_add(1) == Some(proposed_light)
                    && live.dark > 0)
                    || (live.dark.checked_add(1) == Some(proposed_dark) && live.light > 0);
                if total_matches && is_unit_flip {
                    self.state = DestinyPool::new(proposed_light, proposed_dark);
                    self.commit();
                } else {
                    tracing::debug!(
                        proposed_light,
                        proposed_dark,
                        assumed_prior_total,
                        live = %live,
                        "dropping stale destiny flip proposal"
                    );
                }
            }
            (Role::Observer, DestinyMessage::StateUpdate { light, dark })
                if topic == TOPIC_STATE =>
            {
                self.state = DestinyPool::new(light, dark);
            }
            _ => {}
        }
    }

    /// Persist the committed state and replicate it to the session.
    fn commit(&mut self) {
        if let Some(store) = &mut self.store {
            store.set(KEY_LIGHT, self.state.light);
            store.set(KEY_DARK, self.state.dark);
        }
        self.replicate();
    }

    fn replicate(&self) {
        self.bus.send(
            TOPIC_STATE,
            DestinyMessage::StateUpdate {
                light: self.state.light,
                dark: self.state.dark,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session(light: u32, dark: u32) -> (SessionBus, Participant, Participant) {
        let bus = SessionBus::new();
        let authority =
            Participant::authority(Box::new(MemoryStore::with_pool(light, dark)), &bus);
        let mut observer = Participant::observer(&bus);
        // Initial replication was sent before the observer subscribed;
        // push a fresh one so the mirror starts in sync.
        observer.handle_message(
            TOPIC_STATE,
            DestinyMessage::StateUpdate {
                light: authority.state().light,
                dark: authority.state().dark,
            },
        );
        (bus, authority, observer)
    }

    #[test]
    fn authority_loads_initial_state_from_store() {
        let bus = SessionBus::new();
        let authority = Participant::authority(Box::new(MemoryStore::with_pool(3, 2)), &bus);
        assert_eq!(authority.state(), DestinyPool::new(3, 2));
        // Missing keys default to zero.
        let authority = Participant::authority(Box::new(MemoryStore::new()), &bus);
        assert_eq!(authority.state(), DestinyPool::default());
    }

    #[test]
    fn authority_flip_commits_and_replicates() {
        let (_bus, mut authority, mut observer) = session(3, 2);
        authority.flip(Side::Dark).unwrap();
        assert_eq!(authority.state(), DestinyPool::new(4, 1));
        observer.pump();
        assert_eq!(observer.state(), DestinyPool::new(4, 1));
    }

    #[test]
    fn observer_flip_is_fire_and_forget() {
        let (_bus, mut authority, mut observer) = session(3, 2);
        observer.flip(Side::Dark).unwrap();
        // Mirror unchanged until replication arrives.
        assert_eq!(observer.state(), DestinyPool::new(3, 2));
        authority.pump();
        assert_eq!(authority.state(), DestinyPool::new(4, 1));
        observer.pump();
        assert_eq!(observer.state(), DestinyPool::new(4, 1));
    }

    #[test]
    fn stale_proposal_is_dropped() {
        let (_bus, mut authority, _observer) = session(3, 2);
        // First proposal against total 5 lands.
        authority.handle_message(
            TOPIC_PROPOSAL,
            DestinyMessage::FlipProposal {
                proposed_light: 4,
                proposed_dark: 1,
                assumed_prior_total: 5,
            },
        );
        assert_eq!(authority.state(), DestinyPool::new(4, 1));
        // A late proposal also assuming the old counts is rejected even
        // though the total still matches: it is not a unit flip of the
        // live state.
        authority.handle_message(
            TOPIC_PROPOSAL,
            DestinyMessage::FlipProposal {
                proposed_light: 2,
                proposed_dark: 3,
                assumed_prior_total: 5,
            },
        );
        assert_eq!(authority.state(), DestinyPool::new(4, 1));
        // And one whose assumed total diverges is rejected outright.
        authority.add_point(Side::Light).unwrap();
        authority.handle_message(
            TOPIC_PROPOSAL,
            DestinyMessage::FlipProposal {
                proposed_light: 5,
                proposed_dark: 0,
                assumed_prior_total: 5,
            },
        );
        assert_eq!(authority.state(), DestinyPool::new(5, 1));
    }

    #[test]
    fn hostile_proposal_near_u32_max_is_dropped() {
        let (_bus, mut authority, _observer) = session(3, 2);
        // Proposed counts whose sum overflows u32 must be rejected without
        // panicking.
        authority.handle_message(
            TOPIC_PROPOSAL,
            DestinyMessage::FlipProposal {
                proposed_light: u32::MAX,
                proposed_dark: 1,
                assumed_prior_total: 5,
            },
        );
        assert_eq!(authority.state(), DestinyPool::new(3, 2));
        authority.handle_message(
            TOPIC_PROPOSAL,
            DestinyMessage::FlipProposal {
                proposed_light: u32::MAX,
                proposed_dark: u32::MAX,
                assumed_prior_total: u32::MAX,
            },
        );
        assert_eq!(authority.state(), DestinyPool::new(3, 2));
    }

    #[test]
    fn observer_flip_from_empty_side_fails_locally() {
        let (_bus, _authority, mut observer) = session(2, 0);
        assert!(matches!(
            observer.flip(Side::Dark),
            Err(DestinyError::InsufficientPool(Side::Dark))
        ));
    }

    #[test]
    fn add_and_remove_are_authority_only() {
        let (_bus, mut authority, mut observer) = session(1, 1);
        assert!(matches!(
            observer.add_point(Side::Light),
            Err(DestinyError::Unauthorized("add"))
        ));
        assert!(matches!(
            observer.remove_point(Side::Dark),
            Err(DestinyError::Unauthorized("remove"))
        ));
        authority.add_point(Side::Light).unwrap();
        authority.remove_point(Side::Dark).unwrap();
        assert_eq!(authority.state(), DestinyPool::new(2, 0));
        observer.pump();
        assert_eq!(observer.state(), DestinyPool::new(2, 0));
    }

    #[test]
    fn proposals_apply_in_receipt_order() {
        let (_bus, mut authority, mut observer_a) = session(2, 2);
        let mut observer_b = Participant::observer(&_bus);
        observer_b.handle_message(TOPIC_STATE, DestinyMessage::StateUpdate { light: 2, dark: 2 });

        observer_a.flip(Side::Dark).unwrap();
        observer_b.flip(Side::Light).unwrap();
        authority.pump();
        // First proposal (dark→light) applied; second assumed {2,2} and is
        // stale against the now-live {3,1}.
        assert_eq!(authority.state(), DestinyPool::new(3, 1));
    }

    #[test]
    fn proposal_with_no_authority_is_dropped() {
        let bus = SessionBus::new();
        let mut observer = Participant::observer(&bus);
        observer.handle_message(TOPIC_STATE, DestinyMessage::StateUpdate { light: 1, dark: 1 });
        observer.flip(Side::Dark).unwrap();
        // An authority arriving later starts from its store, not from the
        // lost proposal.
        let authority = Participant::authority(Box::new(MemoryStore::with_pool(1, 1)), &bus);
        assert_eq!(authority.state(), DestinyPool::new(1, 1));
    }

    #[test]
    fn authority_ignores_its_own_replication() {
        let (_bus, mut authority, _observer) = session(3, 2);
        authority.flip(Side::Light).unwrap();
        let before = authority.state();
        // The StateUpdate it just broadcast is sitting in its own inbox.
        authority.pump();
        assert_eq!(authority.state(), before);
    }

    #[test]
    fn commit_persists_to_store() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct SharedStore(Arc<Mutex<MemoryStore>>);

        impl DestinyStore for SharedStore {
            fn get(&self, name: &str) -> Option<u32> {
                self.0.lock().unwrap().get(name)
            }
            fn set(&mut self, name: &str, value: u32) {
                self.0.lock().unwrap().set(name, value);
            }
        }

        let store = SharedStore(Arc::new(Mutex::new(MemoryStore::with_pool(3, 2))));
        let bus = SessionBus::new();
        let mut authority = Participant::authority(Box::new(store.clone()), &bus);
        authority.flip(Side::Dark).unwrap();
        assert_eq!(store.get(KEY_LIGHT), Some(4));
        assert_eq!(store.get(KEY_DARK), Some(1));

        // A successor authority resumes from the persisted counts.
        let successor = Participant::authority(Box::new(store), &bus);
        assert_eq!(successor.state(), DestinyPool::new(4, 1));
    }
}
