//! Session repository.

use crate::models::User;
use crate::storage::{KvSlot, StorageBackend, keys};

use super::RepositoryResult;

/// The single current-user record.
///
/// Holds zero or one [`User`] at any time: setting it is login, clearing
/// it is logout. An unparsable stored record degrades to "no session" and
/// the stored value is discarded; no error is surfaced for that case.
pub struct SessionRepository<'a> {
    slot: KvSlot<'a, User>,
}

impl<'a> SessionRepository<'a> {
    /// Create a session repository over `backend`.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend) -> Self {
        Self {
            slot: KvSlot::new(backend, keys::CURRENT_USER),
        }
    }

    /// The currently logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Storage`] only on backend I/O
    /// failure; malformed data reads as absent.
    pub fn current_user(&self) -> RepositoryResult<Option<User>> {
        Ok(self.slot.read_or_clear()?)
    }

    /// Persist `user` as the current session. This is login.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Storage`] on backend I/O failure.
    pub fn set_current_user(&self, user: &User) -> RepositoryResult<()> {
        Ok(self.slot.write(user)?)
    }

    /// Remove the current session. This is logout.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::Storage`] on backend I/O failure.
    pub fn clear_current_user(&self) -> RepositoryResult<()> {
        Ok(self.slot.clear()?)
    }
}
