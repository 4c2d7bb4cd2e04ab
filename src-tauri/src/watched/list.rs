use tracing::{info, warn};

use super::store::{PersistentCell, StorageError, TextStorage};
use super::types::{average, WatchedEntry, WatchedSummary};

/// Storage key holding the JSON array of watched entries.
pub const WATCHED_KEY: &str = "watched";

/// The user's watched movies, in the order they were added, kept in sync
/// with storage on every change.
pub struct WatchedList {
    cell: PersistentCell<Vec<WatchedEntry>>,
}

impl WatchedList {
    pub fn load(storage: Box<dyn TextStorage>) -> Result<Self, StorageError> {
        let cell = PersistentCell::load(storage, WATCHED_KEY, Vec::new())?;
        info!("Watched list loaded with {} entries", cell.get().len());
        Ok(Self { cell })
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        self.cell.get()
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.entries().iter().any(|e| e.imdb_id == imdb_id)
    }

    pub fn user_rating_for(&self, imdb_id: &str) -> Option<u8> {
        self.entries()
            .iter()
            .find(|e| e.imdb_id == imdb_id)
            .map(|e| e.user_rating)
    }

    /// Append `entry` unless its id is already on the list.
    /// Returns whether the list changed.
    pub fn add(&mut self, entry: WatchedEntry) -> Result<bool, StorageError> {
        if self.contains(&entry.imdb_id) {
            warn!("{} is already on the watched list", entry.imdb_id);
            return Ok(false);
        }
        info!("Adding {} ({}) to watched list", entry.title, entry.imdb_id);
        self.cell.update(|entries| entries.push(entry))?;
        Ok(true)
    }

    /// Remove the entry with `imdb_id`. Absent ids leave the list (and
    /// storage) untouched. Returns whether an entry was removed.
    pub fn delete(&mut self, imdb_id: &str) -> Result<bool, StorageError> {
        if !self.contains(imdb_id) {
            return Ok(false);
        }
        info!("Removing {} from watched list", imdb_id);
        self.cell
            .update(|entries| entries.retain(|e| e.imdb_id != imdb_id))?;
        Ok(true)
    }

    pub fn summary(&self) -> WatchedSummary {
        let entries = self.entries();
        WatchedSummary {
            count: entries.len(),
            avg_imdb_rating: average(entries.iter().map(|e| e.imdb_rating)),
            avg_user_rating: average(entries.iter().map(|e| f64::from(e.user_rating))),
            avg_runtime: average(entries.iter().map(|e| f64::from(e.runtime))),
        }
    }
}
