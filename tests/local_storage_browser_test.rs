//! Browser tests for the localStorage adapter. Run with
//! `wasm-pack test --headless --chrome -- --features wasm-test`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use readspace::models::review::{Review, ReviewId};
use readspace::ratings::state::ReviewMap;
use readspace::ratings::storage::{
    load_reviews, persist_reviews, LocalStorage, ReviewStorage, SCHEMA_VERSION,
};

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "readspace_reviews_test";

fn clear_slot() {
    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    storage.remove_item(TEST_KEY).unwrap();
}

fn raw_slot() -> Option<String> {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(TEST_KEY)
        .unwrap()
}

fn review(id: i64, rating: u8) -> Review {
    Review {
        id: ReviewId::Submitted(id),
        resource_id: 0,
        name: "Browser Tester".into(),
        initials: "BT".into(),
        color: "#10b981".into(),
        rating,
        text: "Written from inside a headless browser test.".into(),
        date: "Mar 2026".into(),
        is_new: false,
    }
}

#[wasm_bindgen_test]
fn open_succeeds_in_a_browser() {
    assert!(LocalStorage::open(TEST_KEY).is_some());
}

#[wasm_bindgen_test]
fn round_trip_through_real_local_storage() {
    clear_slot();
    let backend = LocalStorage::open(TEST_KEY).unwrap();

    let mut map = ReviewMap::default();
    map.add(1, review(10, 5));
    map.add(4, review(20, 3));

    persist_reviews(&backend, &map);
    assert_eq!(load_reviews(&backend), map);

    // The envelope on disk carries the schema version.
    let raw = raw_slot().expect("slot written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], SCHEMA_VERSION);

    clear_slot();
}

#[wasm_bindgen_test]
fn corrupted_slot_degrades_to_empty() {
    clear_slot();
    let backend = LocalStorage::open(TEST_KEY).unwrap();

    backend.write("}}} definitely not json").unwrap();
    assert_eq!(load_reviews(&backend), ReviewMap::default());

    clear_slot();
}

#[wasm_bindgen_test]
fn missing_slot_reads_as_none() {
    clear_slot();
    let backend = LocalStorage::open(TEST_KEY).unwrap();
    assert!(backend.read().is_none());
    assert_eq!(load_reviews(&backend), ReviewMap::default());
}
