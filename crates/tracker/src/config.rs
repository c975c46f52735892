//! Tracker configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VERDANT_PROFILE_DIR` - Profile directory holding the persisted
//!   stores (default: `~/.verdant`)
//! - `VERDANT_CATALOG_PATH` - JSON file replacing the built-in catalog
//! - `VERDANT_LOG` - Log filter directive (read by the CLI's subscriber)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a home directory; set VERDANT_PROFILE_DIR")]
    NoProfileDir,
}

/// Tracker application configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Directory the persisted stores live in.
    pub profile_dir: PathBuf,
    /// Catalog file overriding the built-in catalog, if set.
    pub catalog_path: Option<PathBuf>,
}

impl TrackerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoProfileDir`] when no profile directory is
    /// configured and the platform home directory cannot be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        let profile_dir = env::var_os("VERDANT_PROFILE_DIR")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".verdant")))
            .ok_or(ConfigError::NoProfileDir)?;

        let catalog_path = env::var_os("VERDANT_CATALOG_PATH").map(PathBuf::from);

        Ok(Self {
            profile_dir,
            catalog_path,
        })
    }

    /// Load the catalog this configuration selects: the override file if
    /// one is set, otherwise the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the override file cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
