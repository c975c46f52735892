//! Unified error handling.
//!
//! Provides a unified [`AppError`] for callers that drive the tracker as
//! a whole (the CLI), with a user-facing message for each failure. No
//! condition in this crate is fatal: corrupt state degrades to empty
//! stores, and everything else is reported and recoverable.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::services::{AuthError, CollectionError};
use crate::storage::StorageError;

/// Application-level error type for the tracker.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Collection operation failed.
    #[error("collection error: {0}")]
    Collection(#[from] CollectionError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Operation requires a logged-in session.
    #[error("not logged in")]
    Unauthorized,
}

impl AppError {
    /// The message shown to the user for this error.
    ///
    /// Internal detail (backend paths, parser diagnostics) is logged, not
    /// shown.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(err) => match err {
                AuthError::UserAlreadyExists => {
                    "An account with this email already exists.".to_owned()
                }
                AuthError::UserNotFound => {
                    "No account found with that email. Please register.".to_owned()
                }
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::InvalidEmail(_) => "Invalid email address.".to_owned(),
                AuthError::Repository(_) => "Something went wrong. Please try again.".to_owned(),
            },
            Self::Collection(err) => match err {
                CollectionError::MissingField(_) => {
                    "Please fill in all required fields.".to_owned()
                }
                CollectionError::PlantNotFound => "Plant not found".to_owned(),
                CollectionError::Repository(_) => {
                    "Something went wrong. Please try again.".to_owned()
                }
            },
            Self::Unauthorized => "You must be logged in to manage your collection.".to_owned(),
            Self::Config(err) => err.to_string(),
            Self::Catalog(_) => "The plant catalog could not be loaded.".to_owned(),
            Self::Repository(_) | Self::Storage(_) => {
                "Something went wrong. Please try again.".to_owned()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
