//! Keyed blobs in a local directory. One file per key, named by
//! [`doctalk_core::storage_keys::file_name`], plus a sidecar `.lock` file
//! that writers hold while they read, check and replace the blob.
//!
//! Everything here is blocking file I/O; async callers go through
//! [`crate::state`], which runs it on the blocking pool.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use doctalk_core::storage_keys;
use tempfile::NamedTempFile;

use crate::error::StorageError;

pub fn object_path(root: &Path, key: &str) -> PathBuf {
    root.join(storage_keys::file_name(key))
}

pub fn lock_path(root: &Path, key: &str) -> PathBuf {
    root.join(format!("{}.lock", storage_keys::file_name(key)))
}

/// Read an object.
pub fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    std::fs::read(object_path(root, key)).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Read {
                key: key.to_string(),
                source: e,
            }
        }
    })
}

/// Write an object. The body goes to a uniquely named temp file in `root`
/// and is renamed over the target, so readers never see a partial write and
/// concurrent writers never share a temp file.
pub fn put_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let write_err = |source| StorageError::Write {
        key: key.to_string(),
        source,
    };

    std::fs::create_dir_all(root).map_err(write_err)?;

    // Created 0600 on Unix.
    let mut tmp = NamedTempFile::new_in(root).map_err(write_err)?;
    tmp.write_all(body).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(object_path(root, key))
        .map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Run `f` while holding an exclusive advisory lock on the key's lock file.
/// The lock is shared by every process and every store instance using the
/// same directory, and is released when `f` returns.
pub fn with_exclusive_lock<R>(
    root: &Path,
    key: &str,
    f: impl FnOnce() -> Result<R, StorageError>,
) -> Result<R, StorageError> {
    let lock_err = |source| StorageError::Lock {
        key: key.to_string(),
        source,
    };

    std::fs::create_dir_all(root).map_err(lock_err)?;
    let file = File::options()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(lock_path(root, key))
        .map_err(lock_err)?;

    let mut lock = fd_lock::RwLock::new(file);
    let _guard = lock.write().map_err(lock_err)?;
    f()
}
