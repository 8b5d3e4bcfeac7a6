use std::fs;
use std::io::{ErrorKind, Write};

use tempfile::NamedTempFile;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StoreError};
use crate::Collection;

/// Raw byte storage for whole collections.
///
/// Implementations must make `write` atomic from the point of view of a
/// later `read`: either the old or the new contents, never a mix.
pub trait Backend: Send + Sync {
    fn exists(&self, collection: Collection) -> Result<bool>;
    fn read(&self, collection: Collection) -> Result<Vec<u8>>;
    fn write(&self, collection: Collection, bytes: &[u8]) -> Result<()>;
}

/// One JSON file per collection inside a data directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|source| StoreError::DataDir {
            path: dir.to_path_buf(),
            source,
        })?;
        info!("Data directory: {}", dir.display());
        Ok(Self { dir: dir.to_path_buf() })
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }
}

impl Backend for FileBackend {
    fn exists(&self, collection: Collection) -> Result<bool> {
        self.path(collection)
            .try_exists()
            .map_err(|source| StoreError::Io { collection, source })
    }

    fn read(&self, collection: Collection) -> Result<Vec<u8>> {
        match fs::read(self.path(collection)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::Missing { collection }),
            Err(source) => Err(StoreError::Io { collection, source }),
        }
    }

    fn write(&self, collection: Collection, bytes: &[u8]) -> Result<()> {
        let io_err = |source: std::io::Error| StoreError::Io { collection, source };

        // Each write gets its own temp file in the same directory, so the
        // final rename is atomic and concurrent writers never share an inode.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        tmp.write_all(bytes).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(self.path(collection))
            .map_err(|e| io_err(e.error))?;
        Ok(())
    }
}
