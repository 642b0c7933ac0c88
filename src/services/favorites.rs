use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Namespace key under which the favorite id list is persisted
const FAVORITES_KEY: &str = "tottrot.favorites";

/// Errors that can occur with the favorites store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value storage capability
///
/// The persistence seam for user-local state. Implementations must be
/// usable behind a shared reference from concurrent handlers.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one JSON document per key under a state directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral deployments
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = lock_unpoisoned(&self.entries);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = lock_unpoisoned(&self.entries);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The user's saved location ids
///
/// Reads the persisted list once at startup and rewrites it on every
/// change. A missing key, an unreadable store, or a malformed document all
/// degrade to the empty set; only writes surface errors to the caller.
/// Insertion order is preserved.
pub struct FavoritesStore {
    store: Box<dyn KeyValueStore>,
    ids: Mutex<Vec<u32>>,
}

impl FavoritesStore {
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<u32>>(&json) {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::warn!("Discarding unreadable favorites document: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites, starting empty: {}", e);
                Vec::new()
            }
        };

        tracing::info!("Favorites loaded ({} saved)", ids.len());

        Self {
            store,
            ids: Mutex::new(ids),
        }
    }

    pub fn ids(&self) -> Vec<u32> {
        lock_unpoisoned(&self.ids).clone()
    }

    pub fn contains(&self, id: u32) -> bool {
        lock_unpoisoned(&self.ids).contains(&id)
    }

    pub fn len(&self) -> usize {
        lock_unpoisoned(&self.ids).len()
    }

    pub fn is_empty(&self) -> bool {
        lock_unpoisoned(&self.ids).is_empty()
    }

    /// Flip membership for `id` and persist the new list
    ///
    /// Returns the new saved state and count. The lock is held across the
    /// write so concurrent toggles cannot interleave their read-modify-
    /// write cycles.
    pub fn toggle(&self, id: u32) -> Result<(bool, usize), StoreError> {
        let mut ids = lock_unpoisoned(&self.ids);

        let saved = match ids.iter().position(|&existing| existing == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };

        self.store
            .set(FAVORITES_KEY, &serde_json::to_string(&*ids)?)?;

        Ok((saved, ids.len()))
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
