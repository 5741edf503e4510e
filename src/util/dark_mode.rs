//! Dark mode persistence and document wiring.
//!
//! Reads the visitor's choice from `localStorage`, falling back to the OS
//! `prefers-color-scheme` query, and mirrors the active flag onto the `<html>`
//! element as Tailwind's `dark` class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a blocked or full storage area drops the write
//! with a console warning while the visible class change still lands, so
//! theming keeps working in private-browsing modes. Non-WASM builds no-op so
//! the pure state layer stays testable off-browser.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(any(test, target_arch = "wasm32"))]
const STORAGE_KEY: &str = "portfolio-theme";

/// Decodes a persisted value. Anything other than `"dark"` selects light, so
/// a corrupted entry degrades to the default scheme instead of erroring.
#[cfg(any(test, target_arch = "wasm32"))]
fn stored_preference(raw: &str) -> bool {
    raw == "dark"
}

/// Reads the initial dark-mode flag.
///
/// A stored choice wins outright, even over the OS preference; with nothing
/// stored the OS `prefers-color-scheme` query decides, and light is the final
/// fallback. Storage failures count as "nothing stored".
#[must_use]
pub fn read_initial() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                return stored_preference(&raw);
            }
        }

        // Fall back to system preference.
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Mirrors the flag onto `<html>` as the `dark` class Tailwind keys off.
pub fn apply(is_dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if is_dark {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = is_dark;
    }
}

/// Persists the flag as `"dark"` / `"light"`. Best effort; a failed write is
/// logged to the console and the visible theme change proceeds without it.
pub fn persist(is_dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = if is_dark { "dark" } else { "light" };
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.local_storage() {
            Ok(Some(storage)) => {
                if storage.set_item(STORAGE_KEY, value).is_err() {
                    leptos::logging::warn!("theme choice not persisted; storage write failed");
                }
            }
            _ => {
                leptos::logging::warn!("theme choice not persisted; storage unavailable");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = is_dark;
    }
}

/// Applies and persists in one step. The document class goes first so a
/// failed storage write never blocks the visible change.
pub fn sync(is_dark: bool) {
    apply(is_dark);
    persist(is_dark);
}
