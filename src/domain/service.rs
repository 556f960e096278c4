//! # Planet Service
//!
//! The orchestration layer and the only place business rules live. Each
//! operation is a single synchronous arbitration over the store's current
//! state: no retries, no caching, no locking of its own. The uniqueness
//! check on create is deliberately left to the store so that concurrent
//! creates race inside its constraint, not in a check-then-act sequence
//! here.

use crate::store::{PlanetStore, StoreError};

use super::errors::{ServiceError, ServiceResult};
use super::filter::PlanetFilter;
use super::planet::Planet;

/// Business-rule layer over a [`PlanetStore`] backend.
pub struct PlanetService<S: PlanetStore> {
    store: S,
}

impl<S: PlanetStore> PlanetService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert a transient planet.
    ///
    /// The store's duplicate-name rejection is classified as a conflict
    /// right here; every other store failure stays opaque.
    pub fn create(&self, planet: Planet) -> ServiceResult<Planet> {
        match self.store.insert(planet) {
            Ok(persisted) => Ok(persisted),
            Err(StoreError::DuplicateName(name)) => Err(ServiceError::Conflict(name)),
            Err(other) => Err(ServiceError::Store(other)),
        }
    }

    /// Exact lookup by id. Absence is an error, never an empty success.
    pub fn find_by_id(&self, id: u64) -> ServiceResult<Planet> {
        self.store
            .find_by_id(id)
            .map_err(ServiceError::Store)?
            .ok_or(ServiceError::NotFound)
    }

    /// Exact-match lookup by name (not substring).
    pub fn find_by_name(&self, name: &str) -> ServiceResult<Planet> {
        self.store
            .find_by_name(name)
            .map_err(ServiceError::Store)?
            .ok_or(ServiceError::NotFound)
    }

    /// All planets matching the optional terrain/climate values.
    ///
    /// Empty and absent arguments are equivalent; an empty result is a
    /// success.
    pub fn find_all(
        &self,
        terrain: Option<&str>,
        climate: Option<&str>,
    ) -> ServiceResult<Vec<Planet>> {
        let template = Planet::template(climate, terrain);
        let filter = PlanetFilter::from_template(&template);
        self.store.find_matching(&filter).map_err(ServiceError::Store)
    }

    /// Delete by id, with an existence pre-check.
    ///
    /// The store's raw delete is idempotent and cannot distinguish
    /// "deleted" from "nothing to delete"; the pre-check makes a missing
    /// id observable as not-found with no side effect.
    pub fn delete_by_id(&self, id: u64) -> ServiceResult<()> {
        let exists = self.store.exists_by_id(id).map_err(ServiceError::Store)?;
        if !exists {
            return Err(ServiceError::NotFound);
        }
        self.store.delete_by_id(id).map_err(ServiceError::Store)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> PlanetService<MemoryStore> {
        PlanetService::new(MemoryStore::new())
    }

    fn seeded() -> PlanetService<MemoryStore> {
        let service = service();
        service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();
        service
            .create(Planet::new("Alderaan", "temperate", "grasslands, mountains"))
            .unwrap();
        service
            .create(Planet::new("Yavin IV", "temperate, tropical", "jungle, rainforest"))
            .unwrap();
        service
    }

    #[test]
    fn test_create_returns_persisted_planet() {
        let service = service();
        let created = service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();
        assert!(created.is_persisted());
        assert_eq!(created.name, "Tatooine");
    }

    #[test]
    fn test_create_duplicate_name_is_conflict() {
        let service = seeded();
        let err = service
            .create(Planet::new("Tatooine", "frozen", "tundra"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref name) if name == "Tatooine"));
    }

    #[test]
    fn test_find_by_id_missing_is_not_found() {
        let service = seeded();
        assert!(matches!(service.find_by_id(99), Err(ServiceError::NotFound)));
    }

    #[test]
    fn test_find_by_name_is_exact_not_substring() {
        let service = seeded();
        assert_eq!(service.find_by_name("Yavin IV").unwrap().terrain, "jungle, rainforest");
        assert!(matches!(service.find_by_name("Yavin"), Err(ServiceError::NotFound)));
    }

    #[test]
    fn test_find_all_unfiltered_returns_everything() {
        let service = seeded();
        assert_eq!(service.find_all(None, None).unwrap().len(), 3);
    }

    #[test]
    fn test_find_all_filters_by_substring_case_insensitively() {
        let service = seeded();

        let jungles = service.find_all(Some("jungle"), None).unwrap();
        assert_eq!(jungles.len(), 1);
        assert_eq!(jungles[0].name, "Yavin IV");

        let temperate = service.find_all(None, Some("TEMPERATE")).unwrap();
        assert_eq!(temperate.len(), 2);
    }

    #[test]
    fn test_find_all_no_match_is_empty_success() {
        let service = seeded();
        assert!(service.find_all(Some("ICE"), None).unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let service = seeded();
        assert!(matches!(service.delete_by_id(99), Err(ServiceError::NotFound)));
        assert_eq!(service.find_all(None, None).unwrap().len(), 3);
    }

    #[test]
    fn test_delete_then_lookup_is_not_found() {
        let service = seeded();
        let id = service.find_by_name("Alderaan").unwrap().id.unwrap();
        service.delete_by_id(id).unwrap();
        assert!(matches!(service.find_by_id(id), Err(ServiceError::NotFound)));
        assert_eq!(service.find_all(None, None).unwrap().len(), 2);
    }
}
