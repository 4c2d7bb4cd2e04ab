//! The watched list and the storage it is persisted to.

mod list;
mod store;
mod types;

pub use list::{WatchedList, WATCHED_KEY};
pub use store::{MemoryStorage, PersistentCell, PluginStorage, StorageError, TextStorage};
pub use types::{
    average, parse_rating, parse_runtime_minutes, WatchedEntry, WatchedSummary, MAX_USER_RATING,
};
