//! The fixed plant catalog shipped with the application.
//!
//! The catalog is an immutable sequence of plants loaded once at process
//! start. The built-in catalog is compiled into the binary; deployments
//! can replace it with a JSON file via configuration. The tracker only
//! ever reads it - personal collections live in their own store.

use std::path::Path;
use std::sync::LazyLock;

use verdant_core::PlantId;

use crate::models::Plant;

/// Catalog shipped with the binary.
static BUILTIN: LazyLock<Vec<Plant>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../assets/catalog.json"))
        .expect("embedded catalog is valid")
});

/// Number of plants the featured view shows by default.
pub const FEATURED_COUNT: usize = 6;

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The read-only plant catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    plants: Vec<Plant>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            plants: BUILTIN.clone(),
        }
    }

    /// Load a catalog from a JSON file of plants.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as
    /// a sequence of plants.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let plants: Vec<Plant> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(count = plants.len(), path = %path.display(), "Loaded catalog");
        Ok(Self { plants })
    }

    /// All catalog plants, in shipped order.
    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// The first `limit` plants, for the featured view.
    #[must_use]
    pub fn featured(&self, limit: usize) -> &[Plant] {
        self.plants
            .get(..limit.min(self.plants.len()))
            .unwrap_or(&[])
    }

    /// Look up a catalog plant by id.
    #[must_use]
    pub fn get(&self, id: &PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == *id)
    }
}
