use std::path::PathBuf;

/// All errors that can be returned by a store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key cannot be used as a storage slot (empty, or contains a path
    /// separator or `..`).
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Reading or writing a backing file failed.
    #[error("storage I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized before being stored.
    #[error("could not serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A backend-specific failure (lock poisoning and the like).
    #[error("storage backend error: {0}")]
    Backend(String),
}
