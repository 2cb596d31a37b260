use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("revision mismatch for {key} (expected {expected}, got {actual})")]
    RevisionMismatch {
        key: String,
        expected: u64,
        actual: u64,
    },

    #[error("could not lock {key}: {source}")]
    Lock {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error for {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("write error for {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
