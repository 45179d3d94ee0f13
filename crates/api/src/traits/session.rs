//! Session storage abstraction
//!
//! The store is an injected collaborator: the service owns one instance and
//! never reaches for global state. Expiry is the caller's policy.

use crate::types::SessionId;
use crate::Result;

/// Keyed storage for per-session records
pub trait SessionStore<R>: Send + Sync {
    /// Store a record under `id`, replacing any previous one
    fn insert(&self, id: SessionId, record: R) -> Result<()>;

    /// Fetch a copy of the record, or `Error::SessionNotFound`
    fn get(&self, id: &SessionId) -> Result<R>;

    /// Mutate the record in place while holding that record's lock
    ///
    /// Updates to different sessions must not block each other.
    fn update<T, F>(&self, id: &SessionId, f: F) -> Result<T>
    where
        F: FnOnce(&mut R) -> Result<T>;

    /// Remove and return the record, or `Error::SessionNotFound`
    fn remove(&self, id: &SessionId) -> Result<R>;

    /// Number of live sessions
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
