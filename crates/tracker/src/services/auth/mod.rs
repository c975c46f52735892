//! Authentication service.
//!
//! Registration and login are simulated: there is no backend to talk to
//! and no credential store. Registration validates the chosen password
//! and then discards it; login is an exact email match against the
//! registered-users store. Both leave the matched record in the session
//! store, which is what "logged in" means here.

mod error;

pub use error::AuthError;

use verdant_core::Email;

use crate::db::{RepositoryError, SessionRepository, UserRepository};
use crate::models::User;
use crate::storage::StorageBackend;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication service.
///
/// Handles user registration, login, and logout over the registered-users
/// and session stores.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    session: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service over `backend`.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend) -> Self {
        Self {
            users: UserRepository::new(backend),
            session: SessionRepository::new(backend),
        }
    }

    /// Register a new user and log them in.
    ///
    /// The password is validated against the strength rules and then
    /// dropped; it is never persisted anywhere.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        photo_url: Option<&str>,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        validate_password(password)?;

        let user = self
            .users
            .create(User::new(name, email, photo_url.map(str::to_owned)))
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        // Registration logs the new user in.
        self.session.set_current_user(&user)?;

        tracing::info!(user_id = %user.id, "Registered new user");
        Ok(user)
    }

    /// Log in by email match.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no registered user has this
    /// exact email.
    pub fn login(&self, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let user = self
            .users
            .find_by_email(&email)?
            .ok_or(AuthError::UserNotFound)?;

        self.session.set_current_user(&user)?;

        tracing::info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    /// Log out, clearing the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on backend I/O failure.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.clear_current_user()?;
        Ok(())
    }

    /// The currently logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on backend I/O failure.
    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.session.current_user()?)
    }
}

/// Validate password strength.
///
/// Rules: at least [`MIN_PASSWORD_LENGTH`] characters, at least one
/// uppercase letter, at least one lowercase letter.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long."
        )));
    }

    if !password.chars().any(char::is_uppercase) {
        return Err(AuthError::WeakPassword(
            "Password must contain an uppercase letter.".to_owned(),
        ));
    }

    if !password.chars().any(char::is_lowercase) {
        return Err(AuthError::WeakPassword(
            "Password must contain a lowercase letter.".to_owned(),
        ));
    }

    Ok(())
}
