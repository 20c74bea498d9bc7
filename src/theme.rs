//! Light/dark theme, mirrored onto `<html data-theme>` and persisted under
//! its own localStorage key. Resolution of the stored choice (or the OS
//! preference) happens in a client-only effect so server rendering never
//! touches the DOM APIs.

use leptos::*;

pub const THEME_KEY: &str = "readspace_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

impl ThemeStore {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
    }
}

/// Stored choice first, then the `prefers-color-scheme` media query.
fn initial_preference() -> Option<Theme> {
    let window = web_sys::window()?;
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(stored)) = storage.get_item(THEME_KEY) {
            if let Some(theme) = Theme::from_str(&stored) {
                return Some(theme);
            }
        }
    }
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) if query.matches() => Some(Theme::Dark),
        _ => Some(Theme::Light),
    }
}

fn apply_theme(theme: Theme) {
    let document = gloo_utils::document();
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }
}

pub fn provide_theme() {
    let theme = create_rw_signal(Theme::Light);

    // Client only: resolve the real preference once after mount.
    create_effect(move |_| {
        if let Some(initial) = initial_preference() {
            theme.set(initial);
        }
    });

    // Mirror every change onto the document and into storage.
    create_effect(move |_| apply_theme(theme.get()));

    provide_context(ThemeStore { theme });
}

pub fn use_theme() -> ThemeStore {
    expect_context::<ThemeStore>()
}
