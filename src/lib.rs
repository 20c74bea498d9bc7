pub mod app;
pub mod auth;
pub mod components;
pub mod data;
pub mod models;
pub mod pages;
pub mod ratings;
pub mod theme;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
