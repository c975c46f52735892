//! Personal collection operations and the detail resolver.

use thiserror::Error;

use verdant_core::PlantId;

use crate::catalog::Catalog;
use crate::db::{PlantRepository, RepositoryError};
use crate::models::Plant;
use crate::storage::StorageBackend;

/// Errors that can occur in collection operations.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A required field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The referenced plant is not in the collection.
    #[error("plant not found")]
    PlantNotFound,

    /// Repository/storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Collection service over the personal store, with read access to the
/// catalog for merged-view lookups.
pub struct PlantService<'a> {
    plants: PlantRepository<'a>,
    catalog: &'a Catalog,
}

impl<'a> PlantService<'a> {
    /// Create a plant service over `backend` and `catalog`.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend, catalog: &'a Catalog) -> Self {
        Self {
            plants: PlantRepository::new(backend),
            catalog,
        }
    }

    /// The personal collection, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Repository` on backend I/O failure.
    pub fn my_plants(&self) -> Result<Vec<Plant>, CollectionError> {
        Ok(self.plants.list()?)
    }

    /// Add a plant to the collection.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::MissingField` when the name, image URL,
    /// or watering frequency is empty.
    pub fn add(&self, plant: Plant) -> Result<Plant, CollectionError> {
        validate(&plant)?;
        let added = self.plants.add(plant)?;
        tracing::info!(plant_id = %added.id, "Added plant to collection");
        Ok(added)
    }

    /// Replace the collection entry sharing `plant`'s id.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::PlantNotFound` if no entry matches, and
    /// `CollectionError::MissingField` when a required field is empty.
    pub fn update(&self, plant: &Plant) -> Result<(), CollectionError> {
        validate(plant)?;
        self.plants.update(plant).map_err(|e| match e {
            RepositoryError::NotFound => CollectionError::PlantNotFound,
            other => CollectionError::Repository(other),
        })
    }

    /// Remove a plant from the collection. Absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Repository` on backend I/O failure.
    pub fn remove(&self, id: &PlantId) -> Result<(), CollectionError> {
        self.plants.remove(id)?;
        Ok(())
    }

    /// Resolve a plant id against the merged view: the personal
    /// collection first, then the catalog.
    ///
    /// Ids are compared as strings, so a personal plant shadows a catalog
    /// plant that shares its id.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Repository` on backend I/O failure.
    pub fn resolve(&self, id: &PlantId) -> Result<Option<Plant>, CollectionError> {
        let mine = self.plants.list()?;
        if let Some(plant) = mine.into_iter().find(|p| p.id == *id) {
            return Ok(Some(plant));
        }
        Ok(self.catalog.get(id).cloned())
    }
}

/// Required fields, per the add/edit forms: name, image URL, watering
/// frequency.
fn validate(plant: &Plant) -> Result<(), CollectionError> {
    if plant.name.is_empty() {
        return Err(CollectionError::MissingField("name"));
    }
    if plant.image_url.is_empty() {
        return Err(CollectionError::MissingField("image URL"));
    }
    if plant.watering_frequency.is_empty() {
        return Err(CollectionError::MissingField("watering frequency"));
    }
    Ok(())
}
