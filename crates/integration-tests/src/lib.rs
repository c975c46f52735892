//! Integration tests for Verdant.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p verdant-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - registration, login, logout, session persistence
//! - `plant_collection` - collection add/update/remove properties
//! - `detail_resolution` - merged-view lookups and id shadowing
//! - `corrupt_storage` - per-store corruption recovery
//! - `profile_persistence` - file-backed profiles across "restarts"
//!
//! Tests drive the tracker library directly: flows run against an
//! in-memory backend, persistence tests against a throwaway profile
//! directory.

use std::path::PathBuf;

use verdant_tracker::catalog::Catalog;
use verdant_tracker::services::{AuthService, PlantService};
use verdant_tracker::storage::MemoryBackend;

/// In-memory profile plus the built-in catalog, for flow tests.
pub struct TestContext {
    pub backend: MemoryBackend,
    pub catalog: Catalog,
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: MemoryBackend::new(),
            catalog: Catalog::builtin(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.backend)
    }

    #[must_use]
    pub fn plants(&self) -> PlantService<'_> {
        PlantService::new(&self.backend, &self.catalog)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A unique scratch profile directory under the system temp dir.
///
/// Callers remove it when the test is done.
#[must_use]
pub fn scratch_profile() -> PathBuf {
    std::env::temp_dir()
        .join("verdant-integration-tests")
        .join(uuid::Uuid::new_v4().to_string())
}
