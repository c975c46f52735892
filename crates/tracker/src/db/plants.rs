//! Personal plant collection repository.

use verdant_core::PlantId;

use crate::models::Plant;
use crate::storage::{KvSlot, StorageBackend, keys};

use super::{RepositoryError, RepositoryResult};

/// The mutable personal plant collection.
///
/// Reconstructed from storage on every call - there is no in-memory copy
/// to go stale across processes. Ids are caller-supplied and never
/// collision-checked against this store or the catalog.
pub struct PlantRepository<'a> {
    slot: KvSlot<'a, Vec<Plant>>,
}

impl<'a> PlantRepository<'a> {
    /// Create a plant repository over `backend`.
    #[must_use]
    pub const fn new(backend: &'a dyn StorageBackend) -> Self {
        Self {
            slot: KvSlot::new(backend, keys::MY_PLANTS),
        }
    }

    /// The collection, in insertion order.
    ///
    /// Missing or malformed data reads as an empty list (malformed data
    /// is discarded).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend I/O failure.
    pub fn list(&self) -> RepositoryResult<Vec<Plant>> {
        Ok(self.slot.read_or_clear()?.unwrap_or_default())
    }

    /// Append a plant to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend I/O failure.
    pub fn add(&self, plant: Plant) -> RepositoryResult<Plant> {
        let mut plants = self.list()?;
        plants.push(plant.clone());
        self.slot.write(&plants)?;
        Ok(plant)
    }

    /// Replace the entry whose id equals `plant.id` with `plant`.
    ///
    /// All other entries are left untouched and relative order is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no entry matches; the
    /// store is left unchanged in that case.
    pub fn update(&self, plant: &Plant) -> RepositoryResult<()> {
        let mut plants = self.list()?;

        let Some(entry) = plants.iter_mut().find(|p| p.id == plant.id) else {
            return Err(RepositoryError::NotFound);
        };
        *entry = plant.clone();

        self.slot.write(&plants)?;
        Ok(())
    }

    /// Remove the entry with the given id. Absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend I/O failure.
    pub fn remove(&self, id: &PlantId) -> RepositoryResult<()> {
        let mut plants = self.list()?;
        plants.retain(|p| p.id != *id);
        self.slot.write(&plants)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use verdant_core::{CareLevel, Category};

    fn plant(id: &str, name: &str) -> Plant {
        Plant {
            id: PlantId::new(id),
            name: name.to_owned(),
            category: Category::Tropical,
            description: String::new(),
            image_url: "https://example.com/plant.jpg".to_owned(),
            care_level: CareLevel::Easy,
            watering_frequency: "Weekly".to_owned(),
            last_watered: None,
            next_watering: None,
            health_status: Some("healthy".to_owned()),
        }
    }

    #[test]
    fn test_add_then_list_contains_exactly_one_more() {
        let backend = MemoryBackend::new();
        let plants = PlantRepository::new(&backend);

        plants.add(plant("1", "Monstera")).unwrap();
        let before = plants.list().unwrap();

        let added = plants.add(plant("2", "Fern")).unwrap();
        let after = plants.list().unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&added));
    }

    #[test]
    fn test_update_replaces_only_target() {
        let backend = MemoryBackend::new();
        let plants = PlantRepository::new(&backend);

        let untouched = plants.add(plant("1", "Monstera")).unwrap();
        plants.add(plant("2", "Fern")).unwrap();

        let mut renamed = plant("2", "Boston Fern");
        renamed.care_level = CareLevel::Moderate;
        plants.update(&renamed).unwrap();

        let listed = plants.list().unwrap();
        assert_eq!(listed, vec![untouched, renamed]);
    }

    #[test]
    fn test_update_missing_id_is_not_found_and_store_unchanged() {
        let backend = MemoryBackend::new();
        let plants = PlantRepository::new(&backend);

        plants.add(plant("1", "Monstera")).unwrap();
        let before = plants.list().unwrap();

        let result = plants.update(&plant("99", "Ghost"));
        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(plants.list().unwrap(), before);
    }

    #[test]
    fn test_remove_existing_and_absent() {
        let backend = MemoryBackend::new();
        let plants = PlantRepository::new(&backend);

        plants.add(plant("1", "Monstera")).unwrap();
        plants.remove(&PlantId::new("1")).unwrap();
        // Removing an id that was never there is not an error.
        plants.remove(&PlantId::new("1")).unwrap();

        assert!(
            !plants
                .list()
                .unwrap()
                .iter()
                .any(|p| p.id == PlantId::new("1"))
        );
    }

    #[test]
    fn test_duplicate_ids_are_not_rejected() {
        let backend = MemoryBackend::new();
        let plants = PlantRepository::new(&backend);

        plants.add(plant("5", "First")).unwrap();
        plants.add(plant("5", "Second")).unwrap();
        assert_eq!(plants.list().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_store_reads_empty_and_clears() {
        let backend = MemoryBackend::new();
        backend.set(keys::MY_PLANTS, "{not json").unwrap();

        let plants = PlantRepository::new(&backend);
        assert!(plants.list().unwrap().is_empty());
        assert_eq!(backend.get(keys::MY_PLANTS).unwrap(), None);
    }
}
