//! Persistence surface for the destiny pool.
//!
//! The authority reads its initial counts at startup and writes on every
//! committed change. The host supplies real storage; [`MemoryStore`] backs
//! tests and ephemeral sessions.

use std::collections::HashMap;

/// Store key for the light side count.
pub const KEY_LIGHT: &str = "destiny.light";

/// Store key for the dark side count.
pub const KEY_DARK: &str = "destiny.dark";

/// A named-value store the authority persists its counts into.
pub trait DestinyStore {
    /// Read a stored value by name.
    fn get(&self, name: &str) -> Option<u32>;

    /// Write a value by name.
    fn set(&mut self, name: &str, value: u32);
}

/// In-memory store for tests and sessions without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with destiny counts.
    pub fn with_pool(light: u32, dark: u32) -> Self {
        let mut store = Self::new();
        store.set(KEY_LIGHT, light);
        store.set(KEY_DARK, dark);
        store
    }
}

impl DestinyStore for MemoryStore {
    fn get(&self, name: &str) -> Option<u32> {
        self.values.get(name).copied()
    }

    fn set(&mut self, name: &str, value: u32) {
        self.values.insert(name.to_string(), value);
    }
}
