//! Command implementations.

pub mod auth;
pub mod catalog;
pub mod plants;
pub mod show;

use verdant_tracker::AppError;
use verdant_tracker::catalog::Catalog;
use verdant_tracker::config::TrackerConfig;
use verdant_tracker::models::User;
use verdant_tracker::services::AuthService;
use verdant_tracker::storage::FileBackend;

/// Everything a command needs: the profile-directory backend and the
/// loaded catalog, both selected by configuration.
pub struct Context {
    pub backend: FileBackend,
    pub catalog: Catalog,
}

impl Context {
    /// Load configuration and open the profile.
    pub fn load() -> Result<Self, AppError> {
        let config = TrackerConfig::from_env()?;
        let catalog = config.catalog()?;
        let backend = FileBackend::new(config.profile_dir);

        Ok(Self { backend, catalog })
    }

    /// The logged-in user, or [`AppError::Unauthorized`].
    ///
    /// Collection-mutating commands call this first; browsing does not.
    pub fn require_login(&self) -> Result<User, AppError> {
        AuthService::new(&self.backend)
            .current_user()
            .map_err(AppError::from)?
            .ok_or(AppError::Unauthorized)
    }
}
