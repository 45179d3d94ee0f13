//! In-memory session store

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use nhdss_api::{Error, Result, SessionId, SessionStore};

type Slot<R> = Arc<Mutex<R>>;

/// `RwLock<HashMap>` of per-session `Mutex` slots
///
/// The map lock is held only to look a slot up; work on a record runs under
/// that record's own lock, so sessions never wait on each other. Lock
/// poisoning surfaces as `Error::Other`.
#[derive(Debug)]
pub struct InMemorySessionStore<R> {
    sessions: RwLock<HashMap<SessionId, Slot<R>>>,
}

impl<R> Default for InMemorySessionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> Error {
    Error::other("session store", "lock poisoned")
}

fn not_found(id: &SessionId) -> Error {
    Error::SessionNotFound {
        id: id.as_str().to_string(),
    }
}

fn lock<R>(slot: &Slot<R>) -> Result<MutexGuard<'_, R>> {
    slot.lock().map_err(|_| poisoned())
}

impl<R> InMemorySessionStore<R> {
    pub fn new() -> Self {
        InMemorySessionStore {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<SessionId, Slot<R>>>> {
        self.sessions.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<SessionId, Slot<R>>>> {
        self.sessions.write().map_err(|_| poisoned())
    }

    fn slot(&self, id: &SessionId) -> Result<Slot<R>> {
        self.read()?.get(id).cloned().ok_or_else(|| not_found(id))
    }
}

impl<R: Clone + Send> SessionStore<R> for InMemorySessionStore<R> {
    fn insert(&self, id: SessionId, record: R) -> Result<()> {
        self.write()?.insert(id, Arc::new(Mutex::new(record)));
        Ok(())
    }

    fn get(&self, id: &SessionId) -> Result<R> {
        let slot = self.slot(id)?;
        let record = lock(&slot)?;
        Ok(record.clone())
    }

    fn update<T, F>(&self, id: &SessionId, f: F) -> Result<T>
    where
        F: FnOnce(&mut R) -> Result<T>,
    {
        let slot = self.slot(id)?;
        let mut record = lock(&slot)?;
        f(&mut *record)
    }

    fn remove(&self, id: &SessionId) -> Result<R> {
        let slot = self.write()?.remove(id).ok_or_else(|| not_found(id))?;
        // waits for any update still holding the slot
        let record = lock(&slot)?;
        Ok(record.clone())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
