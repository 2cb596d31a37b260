use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;

use doctalk_core::models::{QuizResult, UserId};
use doctalk_core::storage_keys;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::state;

/// Per-user, append-only list of completed quiz results.
pub trait QuizHistoryStore: Send + Sync {
    /// Add a result to the end of the user's history. Existing entries are
    /// never modified or deduplicated.
    fn append(
        &self,
        user: &UserId,
        result: &QuizResult,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// All results for the user, oldest first. Empty if none were saved.
    fn list(
        &self,
        user: &UserId,
    ) -> impl Future<Output = Result<Vec<QuizResult>, StorageError>> + Send;
}

/// Keeps history in process memory. Lost on exit.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    results: RwLock<HashMap<UserId, Vec<QuizResult>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuizHistoryStore for MemoryHistoryStore {
    async fn append(&self, user: &UserId, result: &QuizResult) -> Result<(), StorageError> {
        self.results
            .write()
            .await
            .entry(user.clone())
            .or_default()
            .push(result.clone());
        Ok(())
    }

    async fn list(&self, user: &UserId) -> Result<Vec<QuizResult>, StorageError> {
        Ok(self
            .results
            .read()
            .await
            .get(user)
            .cloned()
            .unwrap_or_default())
    }
}

/// Keeps each user's history as one revisioned JSON document in a local
/// directory. Any number of instances, in any number of processes, may
/// share the directory.
#[derive(Debug)]
pub struct FileHistoryStore {
    root: PathBuf,
}

impl FileHistoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl QuizHistoryStore for FileHistoryStore {
    async fn append(&self, user: &UserId, result: &QuizResult) -> Result<(), StorageError> {
        let key = storage_keys::quiz_results(user);
        let tier = result.overall_tier;
        let result = result.clone();

        let (results, revision) =
            state::update_state::<Vec<QuizResult>, _>(&self.root, &key, move |results| {
                results.push(result)
            })
            .await?;

        tracing::info!(
            user = %user,
            revision,
            entries = results.len(),
            tier = %tier,
            "quiz result appended"
        );
        Ok(())
    }

    async fn list(&self, user: &UserId) -> Result<Vec<QuizResult>, StorageError> {
        let key = storage_keys::quiz_results(user);
        let (results, revision) = match state::load_state(&self.root, &key).await {
            Err(StorageError::NotFound { .. }) => (Vec::new(), 0),
            other => other?,
        };
        tracing::debug!(user = %user, revision, entries = results.len(), "quiz history loaded");
        Ok(results)
    }
}
