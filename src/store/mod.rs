//! # Planet Store
//!
//! The persistence collaborator: a single table of planet records keyed by a
//! surrogate id, with a unique secondary index on `name` and a "find by
//! template" primitive driven by [`PlanetFilter`](crate::domain::PlanetFilter).
//!
//! Two backends share identical semantics:
//!
//! - [`MemoryStore`] — the canonical in-process table, also used by tests.
//! - [`JournalStore`] — the same table fronted by an append-only,
//!   checksum-verified journal that is replayed on open. Corruption is an
//!   explicit open-time failure, never ignored.

mod errors;
mod journal;
mod memory;
mod record;

pub use errors::{StoreError, StoreResult};
pub use journal::JournalStore;
pub use memory::MemoryStore;
pub use record::JournalEntry;

use crate::domain::{Planet, PlanetFilter};

/// Operations every store backend provides.
///
/// The uniqueness constraint on `name` is enforced here, at the storage
/// seam, so concurrent creates race inside the store rather than in any
/// caller-side check-then-act sequence.
pub trait PlanetStore: Send + Sync {
    /// Insert a transient planet, assigning the next surrogate id.
    ///
    /// A duplicate `name` yields [`StoreError::DuplicateName`] and leaves
    /// the table untouched.
    fn insert(&self, planet: Planet) -> StoreResult<Planet>;

    /// Exact lookup by surrogate id.
    fn find_by_id(&self, id: u64) -> StoreResult<Option<Planet>>;

    /// Exact, case-sensitive lookup by name.
    fn find_by_name(&self, name: &str) -> StoreResult<Option<Planet>>;

    /// All records matching the filter, in natural (insertion) order.
    fn find_matching(&self, filter: &PlanetFilter) -> StoreResult<Vec<Planet>>;

    /// Raw idempotent delete. Reports whether a record was removed.
    fn delete_by_id(&self, id: u64) -> StoreResult<bool>;

    /// Whether a record with this id exists.
    fn exists_by_id(&self, id: u64) -> StoreResult<bool>;

    /// Number of persisted records.
    fn count(&self) -> StoreResult<usize>;
}
