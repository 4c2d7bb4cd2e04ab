use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tauri::Runtime;
use tauri_plugin_store::Store;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to save '{key}': {message}")]
    Write { key: String, message: String },
}

/// Key-value text storage scoped to the application.
pub trait TextStorage: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, text: &str) -> Result<(), StorageError>;
}

/// Storage backed by a `tauri-plugin-store` file in the app data directory.
/// Each key holds a JSON string value; the file is saved on every write.
pub struct PluginStorage<R: Runtime> {
    store: Arc<Store<R>>,
}

impl<R: Runtime> PluginStorage<R> {
    pub fn new(store: Arc<Store<R>>) -> Self {
        Self { store }
    }
}

impl<R: Runtime> TextStorage for PluginStorage<R> {
    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).and_then(|value| stored_text(key, value))
    }

    fn write(&self, key: &str, text: &str) -> Result<(), StorageError> {
        self.store
            .set(key, serde_json::Value::String(text.to_string()));
        self.store.save().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// The text held by a store value. Anything but a string was not written by
/// [`PluginStorage`] and is treated as an empty slot.
fn stored_text(key: &str, value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        other => {
            warn!("Stored '{}' is not text, using default: {}", key, other);
            None
        }
    }
}

/// In-process storage, used by tests and when the store file cannot be opened.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, text: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), text.to_string());
        Ok(())
    }
}

/// A value mirrored to one storage slot.
///
/// The slot is read exactly once, in [`PersistentCell::load`]. Every change
/// after that serializes the whole value and overwrites the slot.
pub struct PersistentCell<T> {
    key: String,
    value: T,
    storage: Box<dyn TextStorage>,
}

impl<T> PersistentCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read `key` from `storage`, falling back to `default` when the slot is
    /// empty or holds text that does not deserialize, then write the initial
    /// value back.
    pub fn load(
        storage: Box<dyn TextStorage>,
        key: impl Into<String>,
        default: T,
    ) -> Result<Self, StorageError> {
        let key = key.into();
        let value = match storage.read(&key) {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => {
                    info!("Restored '{}' from storage", key);
                    value
                }
                Err(e) => {
                    warn!("Stored '{}' is unreadable, using default: {}", key, e);
                    default
                }
            },
            None => default,
        };

        let cell = Self {
            key,
            value,
            storage,
        };
        cell.persist()?;
        Ok(cell)
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutate in place and persist the result.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Result<R, StorageError> {
        let out = f(&mut self.value);
        self.persist()?;
        Ok(out)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let text = serde_json::to_string(&self.value).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.storage.write(&self.key, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts reads so tests can check the slot is only loaded once.
    struct CountingStorage {
        inner: MemoryStorage,
        reads: Arc<AtomicUsize>,
    }

    impl TextStorage for CountingStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read(key)
        }

        fn write(&self, key: &str, text: &str) -> Result<(), StorageError> {
            self.inner.write(key, text)
        }
    }

    #[test]
    fn test_load_uses_default_when_empty() {
        let storage = MemoryStorage::new();
        let cell = PersistentCell::load(Box::new(storage.clone()), "numbers", vec![1, 2]).unwrap();
        assert_eq!(cell.get(), &vec![1, 2]);
        // The initial value is written back immediately.
        assert_eq!(storage.read("numbers").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_load_restores_stored_value() {
        let storage = MemoryStorage::new();
        storage.write("numbers", "[5,6,7]").unwrap();
        let cell = PersistentCell::load(Box::new(storage), "numbers", Vec::<i32>::new()).unwrap();
        assert_eq!(cell.get(), &vec![5, 6, 7]);
    }

    #[test]
    fn test_malformed_text_falls_back_and_is_overwritten() {
        let storage = MemoryStorage::new();
        storage.write("numbers", "{not json").unwrap();
        let cell = PersistentCell::load(Box::new(storage.clone()), "numbers", vec![0]).unwrap();
        assert_eq!(cell.get(), &vec![0]);
        assert_eq!(storage.read("numbers").as_deref(), Some("[0]"));
    }

    #[test]
    fn test_every_change_is_written() {
        let storage = MemoryStorage::new();
        let mut cell = PersistentCell::load(Box::new(storage.clone()), "numbers", vec![]).unwrap();

        cell.update(|v| *v = vec![3]).unwrap();
        assert_eq!(storage.read("numbers").as_deref(), Some("[3]"));

        let len = cell.update(|v| {
            v.push(4);
            v.len()
        })
        .unwrap();
        assert_eq!(len, 2);
        assert_eq!(storage.read("numbers").as_deref(), Some("[3,4]"));
    }

    #[test]
    fn test_non_text_store_value_is_treated_as_empty() {
        assert_eq!(
            stored_text("watched", serde_json::Value::String("[]".into())).as_deref(),
            Some("[]")
        );
        assert_eq!(stored_text("watched", serde_json::json!([1, 2])), None);
        assert_eq!(stored_text("watched", serde_json::Value::Null), None);
    }

    #[test]
    fn test_storage_read_happens_once() {
        let reads = Arc::new(AtomicUsize::new(0));
        let storage = CountingStorage {
            inner: MemoryStorage::new(),
            reads: Arc::clone(&reads),
        };
        let mut cell = PersistentCell::load(Box::new(storage), "numbers", vec![1]).unwrap();
        for i in 0..5 {
            cell.update(|v| v.push(i)).unwrap();
            let _ = cell.get();
        }
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }
}
