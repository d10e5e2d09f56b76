//! Keyed reader/writer locks for per-user and per-lot serialization.
//!
//! `KeyedLock` hands out one `tokio::sync::RwLock` per key, created on first use and
//! removed again when the last guard for it is released with nobody waiting. Guards
//! own their lock, so they can be held across awaits and outlive the transaction
//! they protect.
//!
//! Callers must acquire keyed locks before opening a transaction and always in the
//! order user lock, then lot lock.

use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

/// Guard over one key of a `KeyedLock`.
///
/// Dropping it releases the lock and prunes the key's entry when no other guard or
/// waiter still refers to it.
pub struct KeyedGuard<'a, K: Eq + Hash, G> {
    owner: &'a KeyedLock<K>,
    key: K,
    guard: Option<G>,
}

impl<K: Eq + Hash, G> Drop for KeyedGuard<'_, K, G> {
    fn drop(&mut self) {
        self.guard.take();
        self.owner.prune(&self.key);
    }
}

pub type ExclusiveGuard<'a, K> = KeyedGuard<'a, K, OwnedRwLockWriteGuard<()>>;
pub type SharedGuard<'a, K> = KeyedGuard<'a, K, OwnedRwLockReadGuard<()>>;

/// Map from key to a lazily created reader/writer lock.
pub struct KeyedLock<K> {
    locks: DashMap<K, Arc<RwLock<()>>>,
}

impl<K: Eq + Hash> KeyedLock<K> {
    /// Removes the entry for `key` if the map holds the only reference to its lock.
    ///
    /// Every holder and waiter clones the `Arc` under the shard lock, and `remove_if`
    /// checks the count under the same shard lock, so a lock in use is never removed.
    fn prune(&self, key: &K) {
        self.locks
            .remove_if(key, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl<K: Eq + Hash + Clone> KeyedLock<K> {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Returns the lock for `key`, inserting it if absent.
    ///
    /// The map shard guard is dropped before returning so no shard lock is held
    /// while the caller awaits the returned lock.
    fn entry(&self, key: &K) -> Arc<RwLock<()>> {
        if let Some(lock) = self.locks.get(key) {
            return lock.value().clone();
        }

        self.locks.entry(key.clone()).or_default().value().clone()
    }

    /// Waits for exclusive access to `key`.
    pub async fn exclusive(&self, key: &K) -> ExclusiveGuard<'_, K> {
        let guard = self.entry(key).write_owned().await;
        KeyedGuard {
            owner: self,
            key: key.clone(),
            guard: Some(guard),
        }
    }

    /// Waits for shared access to `key`. Any number of shared holders may coexist.
    pub async fn shared(&self, key: &K) -> SharedGuard<'_, K> {
        let guard = self.entry(key).read_owned().await;
        KeyedGuard {
            owner: self,
            key: key.clone(),
            guard: Some(guard),
        }
    }

    /// Number of keys currently held or waited on.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for KeyedLock<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Locks guarding the parking lifecycle.
///
/// - `users`: exclusive for park and unpark, so one user's lifecycle operations never
///   interleave and "one active session per user" holds.
/// - `lots`: shared for park, exclusive for lot deletion, so no park can commit into a
///   lot after its deletion check passed.
#[derive(Default)]
pub struct ParkingLocks {
    pub users: KeyedLock<i32>,
    pub lots: KeyedLock<i32>,
}

impl ParkingLocks {
    pub fn new() -> Self {
        Self::default()
    }
}
