use std::path::PathBuf;

use thiserror::Error;

use crate::Collection;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Every variant means the backing store is unavailable for this request.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot create data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{collection} does not exist")]
    Missing { collection: Collection },

    #[error("I/O error on {collection}: {source}")]
    Io {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    #[error("{collection} is corrupt: {source}")]
    Corrupt {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {collection}: {source}")]
    Encode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}
