//! In-memory entity storage.
//!
//! The only production implementation of
//! [`EntityRepository`](crate::domain::ports::EntityRepository): a map and
//! an identity counter owned together behind one lock. Each store instance
//! is constructed explicitly and passed to the service; there is no
//! process-wide singleton. State lives in process memory only and does not
//! survive a restart.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{EntityRepository, EntityRepositoryError};

struct Inner<T> {
    entries: HashMap<i64, T>,
    next_id: i64,
}

/// Keyed in-memory collection over one entity kind.
///
/// Generic over the stored payload, instantiated once per entity kind
/// (one store of ads, one of users). Every operation takes the single
/// internal lock for its full duration, so callers never observe a
/// partially applied mutation.
pub struct MemoryRepository<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> MemoryRepository<T> {
    /// Create an empty store. The first allocated identity is `0`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                next_id: 0,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the map itself is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityRepository<T> for MemoryRepository<T>
where
    T: Clone + Send + 'static,
{
    fn next_id(&self) -> i64 {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    fn add(&self, entity: T) -> Result<(), EntityRepositoryError> {
        let mut inner = self.lock();
        // Callers pair every `add` with a preceding `next_id`; the record
        // lands at the identity issued by that call.
        let id = inner.next_id - 1;
        inner.entries.insert(id, entity);
        Ok(())
    }

    fn get(&self, id: i64) -> Result<T, EntityRepositoryError> {
        self.lock()
            .entries
            .get(&id)
            .cloned()
            .ok_or(EntityRepositoryError::NoSuchEntity { id })
    }

    fn update(&self, id: i64, entity: T) -> Result<(), EntityRepositoryError> {
        let mut inner = self.lock();
        match inner.entries.get_mut(&id) {
            Some(slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(EntityRepositoryError::NoSuchEntity { id }),
        }
    }

    fn delete(&self, id: i64) -> Result<(), EntityRepositoryError> {
        self.lock()
            .entries
            .remove(&id)
            .map(|_| ())
            .ok_or(EntityRepositoryError::NoSuchEntity { id })
    }

    fn exists(&self, id: i64) -> bool {
        self.lock().entries.contains_key(&id)
    }

    fn snapshot(&self) -> Vec<T> {
        self.lock().entries.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests;
