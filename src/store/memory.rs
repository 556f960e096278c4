//! In-memory planet table
//!
//! The canonical table implementation: rows keyed by surrogate id, a unique
//! secondary index on `name`, and a monotonic id counter. Natural order is
//! insertion order, which the monotonic ids make identical to id order.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::domain::{Planet, PlanetFilter};

use super::errors::{StoreError, StoreResult};
use super::PlanetStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<u64, Planet>,
    name_index: HashMap<String, u64>,
    next_id: u64,
}

/// In-memory store backend.
#[derive(Debug)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                name_index: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Re-apply a persisted row during journal replay.
    ///
    /// The row keeps its original id; the id counter advances past it so
    /// later inserts never collide.
    pub(crate) fn restore(&self, planet: Planet) -> StoreResult<()> {
        let id = planet
            .id
            .ok_or_else(|| StoreError::corruption_at_offset(0, "replayed row without id"))?;
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;
        table.name_index.insert(planet.name.clone(), id);
        table.rows.insert(id, planet);
        if id >= table.next_id {
            table.next_id = id + 1;
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanetStore for MemoryStore {
    fn insert(&self, planet: Planet) -> StoreResult<Planet> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;

        if table.name_index.contains_key(&planet.name) {
            return Err(StoreError::DuplicateName(planet.name));
        }

        let id = table.next_id;
        table.next_id += 1;

        let persisted = planet.with_id(id);
        table.name_index.insert(persisted.name.clone(), id);
        table.rows.insert(id, persisted.clone());

        Ok(persisted)
    }

    fn find_by_id(&self, id: u64) -> StoreResult<Option<Planet>> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Planet>> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        let id = match table.name_index.get(name) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(table.rows.get(&id).cloned())
    }

    fn find_matching(&self, filter: &PlanetFilter) -> StoreResult<Vec<Planet>> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table
            .rows
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<bool> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;
        match table.rows.remove(&id) {
            Some(removed) => {
                table.name_index.remove(&removed.name);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn exists_by_id(&self, id: u64) -> StoreResult<bool> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table.rows.contains_key(&id))
    }

    fn count(&self) -> StoreResult<usize> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let store = MemoryStore::new();
        let a = store.insert(Planet::new("Tatooine", "arid", "desert")).unwrap();
        let b = store
            .insert(Planet::new("Alderaan", "temperate", "grasslands, mountains"))
            .unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn test_duplicate_name_rejected_without_partial_state() {
        let store = MemoryStore::new();
        store.insert(Planet::new("Tatooine", "arid", "desert")).unwrap();

        let err = store
            .insert(Planet::new("Tatooine", "frozen", "tundra"))
            .unwrap_err();
        assert!(err.is_duplicate_name());
        assert_eq!(store.count().unwrap(), 1);

        // The original row is untouched.
        let kept = store.find_by_name("Tatooine").unwrap().unwrap();
        assert_eq!(kept.climate, "arid");
    }

    #[test]
    fn test_name_uniqueness_is_case_sensitive() {
        let store = MemoryStore::new();
        store.insert(Planet::new("Tatooine", "arid", "desert")).unwrap();
        assert!(store.insert(Planet::new("tatooine", "arid", "desert")).is_ok());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_delete_frees_the_name() {
        let store = MemoryStore::new();
        let planet = store.insert(Planet::new("Tatooine", "arid", "desert")).unwrap();
        assert!(store.delete_by_id(planet.id.unwrap()).unwrap());
        assert!(store.insert(Planet::new("Tatooine", "arid", "desert")).is_ok());
    }

    #[test]
    fn test_delete_missing_id_is_idempotent() {
        let store = MemoryStore::new();
        assert!(!store.delete_by_id(99).unwrap());
    }

    #[test]
    fn test_find_matching_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert(Planet::new("Tatooine", "arid", "desert")).unwrap();
        store
            .insert(Planet::new("Alderaan", "temperate", "grasslands, mountains"))
            .unwrap();
        store
            .insert(Planet::new("Yavin IV", "temperate, tropical", "jungle, rainforest"))
            .unwrap();

        let all = store.find_matching(&PlanetFilter::default()).unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tatooine", "Alderaan", "Yavin IV"]);
    }

    #[test]
    fn test_restore_after_delete_reinstates_row_and_name_index() {
        let store = MemoryStore::new();
        let planet = store.insert(Planet::new("Tatooine", "arid", "desert")).unwrap();
        let id = planet.id.unwrap();

        assert!(store.delete_by_id(id).unwrap());
        store.restore(planet.clone()).unwrap();

        assert_eq!(store.find_by_id(id).unwrap(), Some(planet));
        // The name index came back with the row.
        assert!(store.find_by_name("Tatooine").unwrap().is_some());
        assert!(store
            .insert(Planet::new("Tatooine", "arid", "desert"))
            .unwrap_err()
            .is_duplicate_name());
    }

    #[test]
    fn test_restore_advances_id_counter() {
        let store = MemoryStore::new();
        store
            .restore(Planet::new("Yavin IV", "temperate, tropical", "jungle, rainforest").with_id(7))
            .unwrap();
        let next = store.insert(Planet::new("Hoth", "frozen", "tundra")).unwrap();
        assert_eq!(next.id, Some(8));
    }
}
