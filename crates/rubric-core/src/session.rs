//! Editing-session registry
//!
//! At most one editing session may be open per key (typically a gradable
//! part plus a group). Acquiring a key hands out a [`SessionHandle`]; the
//! key is released when the handle is dropped.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Result, RubricError};

/// Registry of open editing sessions
#[derive(Debug)]
pub struct SessionRegistry<K> {
    open: Arc<Mutex<HashSet<K>>>,
}

impl<K> Default for SessionRegistry<K> {
    fn default() -> Self {
        SessionRegistry {
            open: Arc::new(Mutex::new(HashSet::new())),
        }
    }
}

impl<K> Clone for SessionRegistry<K> {
    fn clone(&self) -> Self {
        SessionRegistry {
            open: Arc::clone(&self.open),
        }
    }
}

impl<K> SessionRegistry<K>
where
    K: Eq + Hash + Clone + Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `key`, failing with `AlreadyOpen` if one exists
    pub fn acquire(&self, key: K) -> Result<SessionHandle<K>> {
        let mut open = lock(&self.open);
        if !open.insert(key.clone()) {
            tracing::debug!(key = %key, "session already open");
            return Err(RubricError::AlreadyOpen {
                key: key.to_string(),
            });
        }
        tracing::debug!(key = %key, "session opened");
        Ok(SessionHandle {
            key,
            open: Arc::clone(&self.open),
        })
    }

    pub fn is_open(&self, key: &K) -> bool {
        lock(&self.open).contains(key)
    }

    /// Number of open sessions
    pub fn len(&self) -> usize {
        lock(&self.open).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned set is still consistent: every mutation is a single insert or remove.
fn lock<K>(open: &Mutex<HashSet<K>>) -> MutexGuard<'_, HashSet<K>> {
    open.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Exclusive claim on one key; releases it on drop
#[derive(Debug)]
pub struct SessionHandle<K: Eq + Hash> {
    key: K,
    open: Arc<Mutex<HashSet<K>>>,
}

impl<K: Eq + Hash> SessionHandle<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Eq + Hash> Drop for SessionHandle<K> {
    fn drop(&mut self) {
        lock(&self.open).remove(&self.key);
    }
}
