//! Durable storage for user-submitted reviews.
//!
//! The store talks to a [`ReviewStorage`] backend holding one string slot.
//! Browser builds use localStorage; tests and embedded use get an in-memory
//! slot. The payload is a versioned JSON envelope so the schema can evolve;
//! anything unreadable (missing slot, malformed JSON, unknown version)
//! degrades to the empty mapping, and write failures are logged and dropped
//! while the in-memory state stays authoritative for the session.

use std::rc::Rc;

use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ratings::state::ReviewMap;

/// localStorage key holding the persisted review mapping.
pub const STORAGE_KEY: &str = "readspace_reviews_v2";

/// Bumped whenever the persisted shape changes. Unknown versions load as
/// empty rather than erroring.
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// A single durable string slot. Implementations must tolerate being called
/// from UI event handlers: no blocking, no panics.
pub trait ReviewStorage {
    /// Raw contents of the slot, if any.
    fn read(&self) -> Option<String>;
    /// Replace the slot contents. Quota and availability failures surface
    /// here; callers decide whether to swallow them.
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}

pub type SharedStorage = Rc<dyn ReviewStorage>;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    reviews: &'a ReviewMap,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    reviews: ReviewMap,
}

/// Decode the slot into a review map. Every failure mode is "no data".
pub fn load_reviews(storage: &dyn ReviewStorage) -> ReviewMap {
    let Some(raw) = storage.read() else {
        return ReviewMap::default();
    };
    match serde_json::from_str::<Envelope>(&raw) {
        Ok(envelope) if envelope.version == SCHEMA_VERSION => envelope.reviews,
        Ok(envelope) => {
            warn!(
                "[storage] discarding reviews with unknown schema version {}",
                envelope.version
            );
            ReviewMap::default()
        }
        Err(err) => {
            warn!("[storage] malformed review data, starting empty: {err}");
            ReviewMap::default()
        }
    }
}

/// Serialize and write the whole mapping. Failures are logged and swallowed;
/// the in-memory store remains the source of truth for the session.
pub fn persist_reviews(storage: &dyn ReviewStorage, reviews: &ReviewMap) {
    let envelope = EnvelopeRef {
        version: SCHEMA_VERSION,
        reviews,
    };
    let payload = match serde_json::to_string(&envelope) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("[storage] failed to serialize reviews: {err}");
            return;
        }
    };
    if let Err(err) = storage.write(&payload) {
        warn!("[storage] failed to persist reviews: {err}");
    }
}

/// Browser localStorage backend. `open` fails when the API is unavailable
/// (storage disabled, non-browser context).
pub struct LocalStorage {
    key: &'static str,
}

impl LocalStorage {
    pub fn open(key: &'static str) -> Option<Self> {
        Self::slot().map(|_| Self { key })
    }

    fn slot() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ReviewStorage for LocalStorage {
    fn read(&self) -> Option<String> {
        Self::slot()?.get_item(self.key).ok().flatten()
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        let slot = Self::slot().ok_or(StorageError::Unavailable)?;
        slot.set_item(self.key, payload)
            .map_err(|err| StorageError::WriteRejected(format!("{err:?}")))
    }
}

/// In-memory backend for tests and the server-rendered shell. Clones share
/// the same slot, which lets a test reload a "fresh" store from the same
/// storage.
#[derive(Default, Clone)]
pub struct MemoryStorage {
    slot: Rc<std::cell::RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot contents, for asserting on the persisted payload.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn set_raw(&self, payload: &str) {
        *self.slot.borrow_mut() = Some(payload.to_string());
    }
}

impl ReviewStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::{Review, ReviewId};

    fn review(id: i64, rating: u8) -> Review {
        Review {
            id: ReviewId::Submitted(id),
            resource_id: 0,
            name: "Round Tripper".into(),
            initials: "RT".into(),
            color: "#ef4444".into(),
            rating,
            text: "Persisted and restored without structural drift.".into(),
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
    fn round_trip_is_structurally_identical() {
        let mut map = ReviewMap::default();
        map.add(1, review(10, 5));
        map.add(1, review(20, 3));
        map.add(7, review(30, 4));

        let storage = MemoryStorage::new();
        persist_reviews(&storage, &map);
        assert_eq!(load_reviews(&storage), map);
    }

    #[test]
    fn envelope_carries_the_schema_version() {
        let storage = MemoryStorage::new();
        persist_reviews(&storage, &ReviewMap::default());

        let raw = storage.raw().expect("slot written");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], SCHEMA_VERSION);
        assert!(value["reviews"].is_object());
    }

    #[test]
    fn missing_slot_loads_empty() {
        let storage = MemoryStorage::new();
        assert_eq!(load_reviews(&storage), ReviewMap::default());
    }

    #[test]
    fn corrupted_slot_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set_raw("{not json at all");
        assert_eq!(load_reviews(&storage), ReviewMap::default());

        storage.set_raw("[1, 2, 3]");
        assert_eq!(load_reviews(&storage), ReviewMap::default());
    }

    #[test]
    fn unknown_schema_version_loads_empty() {
        let mut map = ReviewMap::default();
        map.add(1, review(10, 5));
        let storage = MemoryStorage::new();
        persist_reviews(&storage, &map);

        let bumped = storage
            .raw()
            .unwrap()
            .replace(&format!("\"version\":{SCHEMA_VERSION}"), "\"version\":99");
        storage.set_raw(&bumped);
        assert_eq!(load_reviews(&storage), ReviewMap::default());
    }

    #[test]
    fn write_failure_is_swallowed() {
        let mut map = ReviewMap::default();
        map.add(1, review(10, 5));
        // Must not panic or surface the error.
        persist_reviews(&FailingStorage, &map);
    }

    #[test]
    fn transient_flag_is_not_persisted() {
        let mut map = ReviewMap::default();
        let mut fresh = review(10, 5);
        fresh.is_new = true;
        map.add(1, fresh);

        let storage = MemoryStorage::new();
        persist_reviews(&storage, &map);
        let restored = load_reviews(&storage);
        assert!(!restored.user_reviews(1)[0].is_new);
        assert!(!storage.raw().unwrap().contains("is_new"));
    }
}
