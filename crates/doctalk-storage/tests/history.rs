use std::sync::Arc;

use doctalk_core::models::{CategoryScore, CategoryScores, QuizResult, RiskTier, UserId};
use doctalk_core::storage_keys;
use doctalk_storage::error::StorageError;
use doctalk_storage::history::{FileHistoryStore, MemoryHistoryStore, QuizHistoryStore};
use doctalk_storage::state;

fn result(tier: RiskTier, minute: u32) -> QuizResult {
    QuizResult {
        timestamp: format!("2026-04-02T09:{minute:02}:00Z").parse().unwrap(),
        overall_tier: tier,
        category_scores: CategoryScores::from_fn(|category| CategoryScore {
            category,
            raw_score: 2,
            max_score: 10,
            tier: RiskTier::LowRisk,
        }),
        recommendations: Vec::new(),
    }
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

#[tokio::test]
async fn memory_store_appends_in_order() {
    let store = MemoryHistoryStore::new();
    let alice = user("alice");

    store.append(&alice, &result(RiskTier::LowRisk, 1)).await.unwrap();
    store.append(&alice, &result(RiskTier::HighRisk, 2)).await.unwrap();

    let history = store.list(&alice).await.unwrap();
    let tiers: Vec<_> = history.iter().map(|r| r.overall_tier).collect();
    assert_eq!(tiers, vec![RiskTier::LowRisk, RiskTier::HighRisk]);
    assert!(store.list(&user("bob")).await.unwrap().is_empty());
}

#[tokio::test]
async fn file_store_keeps_duplicates_and_users_apart() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path());
    let alice = user("alice");
    let bob = user("bob");

    let same = result(RiskTier::MediumRisk, 5);
    store.append(&alice, &same).await.unwrap();
    store.append(&alice, &same).await.unwrap();
    store.append(&bob, &result(RiskTier::LowRisk, 6)).await.unwrap();

    assert_eq!(store.list(&alice).await.unwrap(), vec![same.clone(), same]);
    assert_eq!(store.list(&bob).await.unwrap().len(), 1);
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let alice = user("alice");

    FileHistoryStore::new(dir.path())
        .append(&alice, &result(RiskTier::NeedsFurtherCheck, 7))
        .await
        .unwrap();

    let reopened = FileHistoryStore::new(dir.path());
    let history = reopened.list(&alice).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].overall_tier, RiskTier::NeedsFurtherCheck);

    let key = storage_keys::quiz_results(&alice);
    assert_eq!(state::current_revision(dir.path(), &key).await.unwrap(), 1);
}

#[tokio::test]
async fn missing_history_lists_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("not-created-yet"));
    assert!(store.list(&user("carol")).await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_appends_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileHistoryStore::new(dir.path()));
    let alice = user("alice");

    let mut tasks = Vec::new();
    for minute in 0..10 {
        let store = Arc::clone(&store);
        let alice = alice.clone();
        tasks.push(tokio::spawn(async move {
            store.append(&alice, &result(RiskTier::LowRisk, minute)).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.list(&alice).await.unwrap().len(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn stores_sharing_a_directory_do_not_lose_appends() {
    let dir = tempfile::tempdir().unwrap();
    let stores = [
        Arc::new(FileHistoryStore::new(dir.path())),
        Arc::new(FileHistoryStore::new(dir.path())),
    ];
    let alice = user("alice");

    let mut tasks = Vec::new();
    for minute in 0..40 {
        let store = Arc::clone(&stores[minute as usize % 2]);
        let alice = alice.clone();
        tasks.push(tokio::spawn(async move {
            store.append(&alice, &result(RiskTier::LowRisk, minute)).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    for store in &stores {
        assert_eq!(store.list(&alice).await.unwrap().len(), 40);
    }
    let key = storage_keys::quiz_results(&alice);
    assert_eq!(state::current_revision(dir.path(), &key).await.unwrap(), 40);

    // Only the document and its lock file remain; no temp files leak.
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "doctalk-quiz-results-alice.json".to_string(),
            "doctalk-quiz-results-alice.json.lock".to_string(),
        ]
    );
}

#[tokio::test]
async fn ids_differing_only_in_punctuation_keep_separate_histories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path());
    let at = user("alice@x.com");
    let underscore = user("alice_x.com");

    store.append(&at, &result(RiskTier::HighRisk, 1)).await.unwrap();
    store.append(&underscore, &result(RiskTier::LowRisk, 2)).await.unwrap();
    store.append(&underscore, &result(RiskTier::LowRisk, 3)).await.unwrap();

    let at_history = store.list(&at).await.unwrap();
    assert_eq!(at_history.len(), 1);
    assert_eq!(at_history[0].overall_tier, RiskTier::HighRisk);
    assert_eq!(store.list(&underscore).await.unwrap().len(), 2);
}

#[tokio::test]
async fn stale_revision_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let key = "doctalk-quiz-results-dave";

    let first = state::save_state_if_match(dir.path(), key, &vec![1u32], 0)
        .await
        .unwrap();
    assert_eq!(first, 1);

    let err = state::save_state_if_match(dir.path(), key, &vec![1u32, 2], 0)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::RevisionMismatch {
            expected: 0,
            actual: 1,
            ..
        }
    ));

    let (value, revision): (Vec<u32>, u64) = state::load_state(dir.path(), key).await.unwrap();
    assert_eq!(value, vec![1]);
    assert_eq!(revision, 1);
}

#[tokio::test]
async fn update_state_starts_from_default_and_bumps_revision() {
    let dir = tempfile::tempdir().unwrap();
    let key = "doctalk-quiz-results-erin";

    let (value, revision) = state::update_state::<Vec<u32>, _>(dir.path(), key, |v| v.push(7))
        .await
        .unwrap();
    assert_eq!((value, revision), (vec![7], 1));

    let (value, revision) = state::update_state::<Vec<u32>, _>(dir.path(), key, |v| v.push(8))
        .await
        .unwrap();
    assert_eq!((value, revision), (vec![7, 8], 2));

    let err = state::save_state_if_match(dir.path(), key, &vec![0u32], 1)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::RevisionMismatch {
            expected: 1,
            actual: 2,
            ..
        }
    ));
}
