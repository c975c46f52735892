//! Registered-users repository.

use verdant_core::Email;

use crate::models::User;
use crate::storage::{KvSlot, StorageBackend, keys};

use super::{RepositoryError, RepositoryResult};

/// The append-only registered-users list.
///
/// Only used to validate login by email match; records are never updated
/// or deleted. Lookup is linear in insertion order.
pub struct UserRepository<'a> {
    slot: KvSlot<'a, Vec<User>>,
}

impl<'a> UserRepository<'a> {
    /// Create a user repository over `backend`.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend) -> Self {
        Self {
            slot: KvSlot::new(backend, keys::REGISTERED_USERS),
        }
    }

    /// All registered users, in registration order.
    ///
    /// Missing or malformed data reads as an empty list (malformed data
    /// is discarded).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend I/O failure.
    pub fn list(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.slot.read_or_clear()?.unwrap_or_default())
    }

    /// Append a new user.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if any existing entry has
    /// the same email (exact, case-sensitive match). The store is left
    /// unchanged in that case.
    pub fn create(&self, user: User) -> RepositoryResult<User> {
        let mut users = self.list()?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        users.push(user.clone());
        self.slot.write(&users)?;

        Ok(user)
    }

    /// First user whose email matches exactly, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend I/O failure.
    pub fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        Ok(self.list()?.into_iter().find(|u| u.email == *email))
    }
}
