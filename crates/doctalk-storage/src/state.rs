//! Revisioned JSON documents on top of [`crate::objects`].
//!
//! Every write holds the key's exclusive lock across the read, the revision
//! check and the rename, so writers in different processes (or different
//! store instances) serialize on the document.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::objects;

/// On-disk envelope. `revision` plays the role of an ETag: it increases by
/// one on every successful write.
#[derive(Debug, Serialize, Deserialize)]
struct Revisioned<T> {
    revision: u64,
    value: T,
}

/// Load a JSON state document. Returns the value and its revision.
pub async fn load_state<T: DeserializeOwned>(
    root: &Path,
    key: &str,
) -> Result<(T, u64), StorageError> {
    let body = blocking(root, key, |root, key| objects::get_object(root, key)).await?;
    let doc: Revisioned<T> = serde_json::from_slice(&body)?;
    Ok((doc.value, doc.revision))
}

/// Current revision of a document, 0 if it does not exist yet.
pub async fn current_revision(root: &Path, key: &str) -> Result<u64, StorageError> {
    blocking(root, key, |root, key| read_revision(root, key)).await
}

/// Save a JSON state document only if it is still at `expected_revision`
/// (0 for a document that must not exist yet). Returns the new revision.
pub async fn save_state_if_match<T: Serialize>(
    root: &Path,
    key: &str,
    value: &T,
    expected_revision: u64,
) -> Result<u64, StorageError> {
    let value = serde_json::to_value(value)?;
    blocking(root, key, move |root, key| {
        objects::with_exclusive_lock(root, key, || {
            let actual = read_revision(root, key)?;
            if actual != expected_revision {
                return Err(StorageError::RevisionMismatch {
                    key: key.to_string(),
                    expected: expected_revision,
                    actual,
                });
            }
            write_document(root, key, actual + 1, &value)?;
            Ok(actual + 1)
        })
    })
    .await
}

/// Read-modify-write a document under its lock. A missing document starts
/// from `T::default()`. Returns the stored value and its new revision.
pub async fn update_state<T, F>(root: &Path, key: &str, mutate: F) -> Result<(T, u64), StorageError>
where
    T: Serialize + DeserializeOwned + Default + Send + 'static,
    F: FnOnce(&mut T) + Send + 'static,
{
    blocking(root, key, move |root, key| {
        objects::with_exclusive_lock(root, key, || {
            let (mut value, revision) = match read_document::<T>(root, key) {
                Err(StorageError::NotFound { .. }) => (T::default(), 0),
                other => other?,
            };
            mutate(&mut value);
            write_document(root, key, revision + 1, &value)?;
            Ok((value, revision + 1))
        })
    })
    .await
}

async fn blocking<R, F>(root: &Path, key: &str, f: F) -> Result<R, StorageError>
where
    R: Send + 'static,
    F: FnOnce(&Path, &str) -> Result<R, StorageError> + Send + 'static,
{
    let root = root.to_path_buf();
    let key = key.to_string();
    tokio::task::spawn_blocking(move || f(&root, &key)).await?
}

fn read_document<T: DeserializeOwned>(root: &Path, key: &str) -> Result<(T, u64), StorageError> {
    let body = objects::get_object(root, key)?;
    let doc: Revisioned<T> = serde_json::from_slice(&body)?;
    Ok((doc.value, doc.revision))
}

fn read_revision(root: &Path, key: &str) -> Result<u64, StorageError> {
    match read_document::<serde_json::Value>(root, key) {
        Ok((_, revision)) => Ok(revision),
        Err(StorageError::NotFound { .. }) => Ok(0),
        Err(e) => Err(e),
    }
}

fn write_document<T: Serialize>(
    root: &Path,
    key: &str,
    revision: u64,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(&Revisioned { revision, value })?;
    objects::put_object(root, key, &body)
}
