//! The shared ratings/reviews store.
//!
//! One [`RatingsStore`] is created at application start and handed to every
//! consumer through the Leptos context; components call [`use_ratings`]
//! rather than reaching for a global. The store owns an injected storage
//! backend; swapping it for [`storage::MemoryStorage`] is how the
//! integration tests run without a browser.

pub mod seed;
pub mod state;
pub mod storage;

#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

use leptos::*;

use crate::models::review::{Review, ReviewId};
use state::{GlobalStats, ReviewMap};
#[cfg(not(feature = "ssr"))]
use storage::{LocalStorage, STORAGE_KEY};
use storage::SharedStorage;

/// Reactive wrapper around the pure [`ReviewMap`]. All operations run
/// synchronously on the UI thread; every mutation re-persists the whole
/// mapping and invalidates the derived stats memo.
#[derive(Clone, Copy)]
pub struct RatingsStore {
    reviews: RwSignal<ReviewMap>,
    storage: StoredValue<Option<SharedStorage>>,
    stats: Memo<GlobalStats>,
}

impl RatingsStore {
    /// Build a store over the given backend, seeding the in-memory state
    /// from whatever the backend holds (empty on absence or corruption).
    pub fn new(storage: Option<SharedStorage>) -> Self {
        let initial = storage
            .as_deref()
            .map(storage::load_reviews)
            .unwrap_or_default();
        let reviews = create_rw_signal(initial);
        let stats = create_memo(move |_| reviews.with(|map| map.global_stats()));
        Self {
            reviews,
            storage: store_value(storage),
            stats,
        }
    }

    /// Prepend a fully-formed review. The caller is responsible for id,
    /// date and display fields; the store performs no validation.
    pub fn add_review(&self, resource_id: u32, review: Review) {
        self.reviews.update(|map| map.add(resource_id, review));
        self.persist();
    }

    /// Remove one review (admin moderation). Unknown ids are a no-op.
    pub fn delete_review(&self, resource_id: u32, review_id: &ReviewId) {
        self.reviews.update(|map| map.remove(resource_id, review_id));
        self.persist();
    }

    /// User reviews newest-first, then the three seed reviews.
    pub fn reviews(&self, resource_id: u32) -> Vec<Review> {
        self.reviews.with(|map| map.reviews_with_seed(resource_id))
    }

    /// Blended average; the base rating passes through untouched while the
    /// resource has no user reviews.
    pub fn avg_rating(&self, resource_id: u32, base_rating: f64) -> f64 {
        self.reviews
            .with(|map| map.avg_rating(resource_id, base_rating))
    }

    /// Count of user-submitted reviews only.
    pub fn user_review_count(&self, resource_id: u32) -> usize {
        self.reviews.with(|map| map.user_count(resource_id))
    }

    /// Flat moderation list, newest first, tagged with resource ids.
    pub fn all_user_reviews(&self) -> Vec<Review> {
        self.reviews.with(|map| map.all_user_reviews())
    }

    pub fn global_stats(&self) -> GlobalStats {
        self.stats.get()
    }

    fn persist(&self) {
        self.storage.with_value(|storage| {
            if let Some(storage) = storage {
                self.reviews
                    .with_untracked(|map| storage::persist_reviews(storage.as_ref(), map));
            }
        });
    }
}

/// Storage for the running app: localStorage in the browser, nothing on the
/// server (the shell renders with an empty store and hydration reloads it).
#[cfg(not(feature = "ssr"))]
pub fn default_storage() -> Option<SharedStorage> {
    LocalStorage::open(STORAGE_KEY).map(|backend| Rc::new(backend) as SharedStorage)
}

#[cfg(feature = "ssr")]
pub fn default_storage() -> Option<SharedStorage> {
    None
}

pub fn provide_ratings(storage: Option<SharedStorage>) {
    provide_context(RatingsStore::new(storage));
}

pub fn use_ratings() -> RatingsStore {
    expect_context::<RatingsStore>()
}
