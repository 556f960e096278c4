//! Journal-backed planet store
//!
//! Wraps [`MemoryStore`] with an append-only on-disk journal. Every
//! successful mutation appends one framed entry and is fsynced before the
//! call returns; opening a data directory replays the journal to rebuild
//! the table. Replay halts on the first corrupt frame.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{Planet, PlanetFilter};

use super::errors::{StoreError, StoreResult};
use super::memory::MemoryStore;
use super::record::JournalEntry;
use super::PlanetStore;

/// Journal file name inside the data directory.
pub const JOURNAL_FILE: &str = "planets.journal";

/// Durable store backend: in-memory table plus append-only journal.
#[derive(Debug)]
pub struct JournalStore {
    table: MemoryStore,
    journal: Mutex<File>,
}

impl JournalStore {
    /// Create the data directory and an empty journal.
    ///
    /// Fails if the journal already exists.
    pub fn init(data_dir: &Path) -> StoreResult<()> {
        fs::create_dir_all(data_dir)?;
        let path = Self::journal_path(data_dir);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        Ok(())
    }

    /// Whether a data directory has been initialized.
    pub fn is_initialized(data_dir: &Path) -> bool {
        Self::journal_path(data_dir).is_file()
    }

    /// Open a data directory, replaying the journal into memory.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let path = Self::journal_path(data_dir);
        let bytes = fs::read(&path)?;
        let entries = JournalEntry::decode_all(&bytes)?;

        let table = MemoryStore::new();
        for entry in entries {
            match entry {
                JournalEntry::Insert { planet } => table.restore(planet)?,
                JournalEntry::Delete { id } => {
                    table.delete_by_id(id)?;
                }
            }
        }

        let file = OpenOptions::new().append(true).open(&path)?;
        Ok(Self {
            table,
            journal: Mutex::new(file),
        })
    }

    fn journal_path(data_dir: &Path) -> PathBuf {
        data_dir.join(JOURNAL_FILE)
    }

    /// Append one entry and fsync it.
    fn append(&self, entry: &JournalEntry) -> StoreResult<()> {
        let frame = entry.encode()?;
        let mut file = self.journal.lock().map_err(|_| StoreError::LockPoisoned)?;
        file.write_all(&frame)?;
        file.sync_data()?;
        Ok(())
    }
}

impl PlanetStore for JournalStore {
    fn insert(&self, planet: Planet) -> StoreResult<Planet> {
        // The table arbitrates uniqueness and assigns the id; only a row
        // that actually landed is journaled.
        let persisted = self.table.insert(planet)?;

        if let Err(e) = self.append(&JournalEntry::Insert {
            planet: persisted.clone(),
        }) {
            // Unjournaled rows must not survive in memory.
            let _ = self.table.delete_by_id(persisted.id.unwrap_or_default());
            return Err(e);
        }

        Ok(persisted)
    }

    fn find_by_id(&self, id: u64) -> StoreResult<Option<Planet>> {
        self.table.find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Planet>> {
        self.table.find_by_name(name)
    }

    fn find_matching(&self, filter: &PlanetFilter) -> StoreResult<Vec<Planet>> {
        self.table.find_matching(filter)
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<bool> {
        let row = match self.table.find_by_id(id)? {
            Some(row) => row,
            None => return Ok(false),
        };

        if !self.table.delete_by_id(id)? {
            return Ok(false);
        }

        if let Err(e) = self.append(&JournalEntry::Delete { id }) {
            // A row the journal still considers live must stay in memory,
            // mirroring the insert rollback.
            self.table.restore(row)?;
            return Err(e);
        }

        Ok(true)
    }

    fn exists_by_id(&self, id: u64) -> StoreResult<bool> {
        self.table.exists_by_id(id)
    }

    fn count(&self) -> StoreResult<usize> {
        self.table.count()
    }
}
