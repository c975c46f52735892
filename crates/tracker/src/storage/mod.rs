//! String key-value storage behind the stores.
//!
//! Every persistent store in Verdant is one UTF-8 JSON document under a
//! fixed key. [`StorageBackend`] is the injected handle the repositories
//! operate through; [`FileBackend`] keeps one file per key under the
//! profile directory, [`MemoryBackend`] backs tests.
//!
//! [`KvSlot`] is the typed wrapper over a single key. Reading runs strict
//! shape validation; a value that fails to parse is reported as
//! [`StorageError::MalformedPersistedData`]. Callers that want the
//! degradation policy - treat the store as empty and discard the corrupt
//! value - use [`KvSlot::read_or_clear`].

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys for persisted stores.
///
/// These exact strings are the persisted contract; profile data written
/// by earlier versions lives under them.
pub mod keys {
    /// Key for the current logged-in user.
    pub const CURRENT_USER: &str = "plant-tracker-user";

    /// Key for the registered-users list.
    pub const REGISTERED_USERS: &str = "plant-tracker-registered-users";

    /// Key for the personal plant collection.
    pub const MY_PLANTS: &str = "plant-tracker-my-plants";
}

/// Errors raised at the storage boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend read or write failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted text under a key failed to parse as the expected shape.
    #[error("malformed persisted data under {key}: {reason}")]
    MalformedPersistedData {
        /// The key whose value failed to parse.
        key: &'static str,
        /// Parser diagnostic.
        reason: String,
    },
}

/// A synchronous string key-value store.
///
/// One writer (the local profile), no suspension points: every operation
/// completes before the next one starts.
pub trait StorageBackend {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// A typed view of one storage key.
pub struct KvSlot<'a, T> {
    backend: &'a dyn StorageBackend,
    key: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, T> KvSlot<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a slot to a backend and a fixed key.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, key: &'static str) -> Self {
        Self {
            backend,
            key,
            _marker: PhantomData,
        }
    }

    /// The key this slot is bound to.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Read and strictly parse the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::MalformedPersistedData`] when the stored
    /// text does not parse into `T`, and [`StorageError::Io`] on backend
    /// failure.
    pub fn read(&self) -> Result<Option<T>, StorageError> {
        match self.backend.get(self.key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                StorageError::MalformedPersistedData {
                    key: self.key,
                    reason: e.to_string(),
                }
            }),
        }
    }

    /// Read the stored value, discarding it if malformed.
    ///
    /// Corrupt state degrades to "empty": the key is cleared, a warning
    /// is logged, and `None` is returned. This is the documented recovery
    /// policy for every store; corruption is never surfaced to callers.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on backend failure.
    pub fn read_or_clear(&self) -> Result<Option<T>, StorageError> {
        match self.read() {
            Ok(value) => Ok(value),
            Err(StorageError::MalformedPersistedData { key, reason }) => {
                tracing::warn!(key, %reason, "discarding malformed persisted data");
                self.backend.remove(key)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist `value` under the slot's key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on backend failure.
    pub fn write(&self, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| {
            // Serialization of our own types only fails on pathological
            // states (non-string map keys etc.); fold it into Io.
            StorageError::Io(std::io::Error::other(e))
        })?;
        self.backend.set(self.key, &raw)
    }

    /// Remove the slot's value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on backend failure.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(self.key)
    }
}
