//! Repositories over the persisted stores.
//!
//! Three independent stores, one key each:
//!
//! - [`session`] - zero or one current [`crate::models::User`]
//! - [`users`] - the append-only registered-users list
//! - [`plants`] - the mutable personal plant collection
//!
//! Each repository borrows an injected [`crate::storage::StorageBackend`]
//! handle, so tests can substitute an in-memory backend. Every operation
//! re-reads its store from the backend; nothing is cached across calls.
//! Corruption of one store never affects another - each parses and
//! self-resets independently.

pub mod plants;
pub mod session;
pub mod users;

pub use plants::PlantRepository;
pub use session::SessionRepository;
pub use users::UserRepository;

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur in repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The referenced entry does not exist.
    #[error("not found")]
    NotFound,
}

/// Result type alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
