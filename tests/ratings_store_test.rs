//! Store-level tests: the reactive wrapper plus an injected storage backend,
//! run under a manual Leptos runtime so no browser is involved.

use std::rc::Rc;

use leptos::create_runtime;

use readspace::models::review::{Review, ReviewId};
use readspace::ratings::storage::{MemoryStorage, ReviewStorage, SharedStorage, StorageError};
use readspace::ratings::RatingsStore;

fn review(id: i64, rating: u8) -> Review {
    Review {
        id: ReviewId::Submitted(id),
        resource_id: 0,
        name: "Integration Tester".into(),
        initials: "IT".into(),
        color: "#3b82f6".into(),
        rating,
        text: "Long enough to clear the submission form's check.".into(),
        date: "Mar 2026".into(),
        is_new: false,
    }
}

struct FailingStorage;

impl ReviewStorage for FailingStorage {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&self, _payload: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteRejected("quota exceeded".into()))
    }
}

#[test]
fn mutations_survive_a_reload_from_the_same_backend() {
    let runtime = create_runtime();
    let backend = MemoryStorage::new();

    {
        let store = RatingsStore::new(Some(Rc::new(backend.clone()) as SharedStorage));
        store.add_review(3, review(100, 5));
        store.add_review(3, review(200, 4));
        store.add_review(8, review(300, 2));
    }

    // A "fresh tab": new store over the same slot.
    let reloaded = RatingsStore::new(Some(Rc::new(backend.clone()) as SharedStorage));
    assert_eq!(reloaded.user_review_count(3), 2);
    assert_eq!(reloaded.user_review_count(8), 1);

    reloaded.delete_review(3, &ReviewId::Submitted(200));
    let again = RatingsStore::new(Some(Rc::new(backend) as SharedStorage));
    assert_eq!(again.user_review_count(3), 1);

    runtime.dispose();
}

#[test]
fn corrupted_backend_yields_an_empty_store() {
    let runtime = create_runtime();
    let backend = MemoryStorage::new();
    backend.set_raw("{\"version\": \"not even close\"");

    let store = RatingsStore::new(Some(Rc::new(backend) as SharedStorage));
    assert_eq!(store.global_stats().total_user_reviews, 0);
    // Seeds still show even with nothing persisted.
    assert_eq!(store.reviews(1).len(), 3);

    runtime.dispose();
}

#[test]
fn write_failures_leave_the_in_memory_state_authoritative() {
    let runtime = create_runtime();
    let store = RatingsStore::new(Some(Rc::new(FailingStorage) as SharedStorage));

    store.add_review(5, review(100, 4));
    // The write was rejected, but the session state still updated.
    assert_eq!(store.user_review_count(5), 1);
    assert_eq!(store.reviews(5).first().map(|r| r.id.clone()), Some(ReviewId::Submitted(100)));

    runtime.dispose();
}

#[test]
fn store_without_a_backend_works_in_memory_only() {
    let runtime = create_runtime();
    let store = RatingsStore::new(None);

    store.add_review(1, review(100, 5));
    assert_eq!(store.user_review_count(1), 1);
    assert_eq!(store.avg_rating(1, 4.2), 4.4);

    runtime.dispose();
}

#[test]
fn global_stats_track_mutations() {
    let runtime = create_runtime();
    let store = RatingsStore::new(Some(Rc::new(MemoryStorage::new()) as SharedStorage));

    assert_eq!(store.global_stats().avg_rating, None);

    store.add_review(1, review(100, 5));
    store.add_review(2, review(200, 4));
    let stats = store.global_stats();
    assert_eq!(stats.total_user_reviews, 2);
    assert_eq!(stats.avg_rating, Some(4.5));

    store.delete_review(1, &ReviewId::Submitted(100));
    store.delete_review(2, &ReviewId::Submitted(200));
    assert_eq!(store.global_stats().avg_rating, None);

    runtime.dispose();
}

#[test]
fn moderation_list_is_newest_first_across_resources() {
    let runtime = create_runtime();
    let store = RatingsStore::new(None);

    store.add_review(1, review(10, 4));
    store.add_review(2, review(30, 5));
    store.add_review(1, review(20, 3));

    let all = store.all_user_reviews();
    let order: Vec<(u32, i64)> = all.iter().map(|r| (r.resource_id, r.id.recency())).collect();
    assert_eq!(order, vec![(2, 30), (1, 20), (1, 10)]);

    runtime.dispose();
}
