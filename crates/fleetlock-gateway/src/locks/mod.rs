//! Lock backend seam.
//!
//! Grant policy lives behind `LockBackend`; the gateway only relays
//! requests and reports whether the lease state changed so the lock
//! gauges can follow.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use fleetlock_core::error::{FleetLockError, Result};

/// Outcome of a lock or unlock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The group's lease state flipped.
    Changed,
    /// The request was a no-op (already held by the caller / not held).
    Unchanged,
}

#[async_trait]
pub trait LockBackend: Send + Sync {
    async fn lock(&self, group: &str, id: &str) -> Result<Transition>;
    async fn unlock(&self, group: &str, id: &str) -> Result<Transition>;
}

/// In-process backend: at most one holder per group.
#[derive(Debug, Default)]
pub struct MemoryLocks {
    holders: DashMap<String, String>,
}

impl MemoryLocks {
    pub fn new() -> Self {
        Self {
            holders: DashMap::new(),
        }
    }

    /// Current holder of `group`, if any.
    pub fn holder(&self, group: &str) -> Option<String> {
        self.holders.get(group).map(|h| h.value().clone())
    }
}

#[async_trait]
impl LockBackend for MemoryLocks {
    async fn lock(&self, group: &str, id: &str) -> Result<Transition> {
        match self.holders.entry(group.to_string()) {
            Entry::Occupied(e) if e.get() == id => Ok(Transition::Unchanged),
            Entry::Occupied(e) => Err(FleetLockError::LockHeld {
                group: group.to_string(),
                holder: e.get().clone(),
            }),
            Entry::Vacant(e) => {
                e.insert(id.to_string());
                Ok(Transition::Changed)
            }
        }
    }

    async fn unlock(&self, group: &str, id: &str) -> Result<Transition> {
        match self.holders.remove_if(group, |_, holder| holder == id) {
            Some(_) => Ok(Transition::Changed),
            None => Ok(Transition::Unchanged),
        }
    }
}
