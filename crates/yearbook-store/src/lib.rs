pub mod backend;
pub mod error;
pub mod seed;

mod codes;
mod comments;
mod friends;

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub use backend::{Backend, FileBackend};
pub use error::{Result, StoreError};

/// One of the three persisted record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Friends,
    Codes,
    Comments,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Friends, Collection::Codes, Collection::Comments];

    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Friends => "friends.json",
            Collection::Codes => "codes.json",
            Collection::Comments => "comments.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Typed whole-collection access over a [`Backend`].
///
/// Every call re-reads or rewrites the full collection. Read-modify-write
/// cycles go through [`Store::update`], which serializes them within this
/// process. Other processes sharing the data directory are not coordinated.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
    writer: Arc<Mutex<()>>,
}

impl Store {
    /// Open a file-backed store rooted at `dir`, seeding any collection
    /// whose file does not exist yet.
    pub fn open(dir: &Path) -> Result<Self> {
        let store = Self::new(Arc::new(FileBackend::new(dir)?));
        seed::ensure_seeded(&store)?;
        info!("Store opened at {}", dir.display());
        Ok(store)
    }

    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn exists(&self, collection: Collection) -> Result<bool> {
        self.backend.exists(collection)
    }

    /// Load and validate a collection. Shape mismatches surface as
    /// [`StoreError::Corrupt`] rather than leaking into responses.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<T> {
        let bytes = self.backend.read(collection)?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt { collection, source })
    }

    pub fn save<T: Serialize>(&self, collection: Collection, value: &T) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(value)
            .map_err(|source| StoreError::Encode { collection, source })?;
        bytes.push(b'\n');
        self.backend.write(collection, &bytes)?;
        debug!("Saved {} ({} bytes)", collection, bytes.len());
        Ok(())
    }

    /// Load, mutate and save a collection while holding the writer lock.
    pub fn update<T, R, F>(&self, collection: Collection, f: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T) -> R,
    {
        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let mut value: T = self.load(collection)?;
        let out = f(&mut value);
        self.save(collection, &value)?;
        Ok(out)
    }
}
