//! In-memory broadcast channel for a session.
//!
//! Stands in for the host's pub/sub transport: `send` fans a message out to
//! every subscriber's queue. Delivery to a single subscriber is in send
//! order, which gives the authority its apply-in-receipt-order guarantee.
//! A message sent while nobody is subscribed is dropped, so proposals made
//! with no live authority are lost rather than queued.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::message::DestinyMessage;

/// A topic-tagged message as delivered to subscribers.
pub type Envelope = (String, DestinyMessage);

/// Shared in-memory pub/sub bus for one session.
#[derive(Debug, Clone, Default)]
pub struct SessionBus {
    subscribers: Arc<Mutex<Vec<Sender<Envelope>>>>,
}

impl SessionBus {
    /// A bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to all topics, returning this subscriber's queue.
    pub fn subscribe(&self) -> Receiver<Envelope> {
        let (tx, rx) = unbounded();
        self.lock().push(tx);
        rx
    }

    /// Publish a message to every live subscriber.
    pub fn send(&self, topic: &str, msg: DestinyMessage) {
        // Prune subscribers whose receiver has been dropped.
        self.lock()
            .retain(|tx| tx.send((topic.to_string(), msg)).is_ok());
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Sender<Envelope>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
