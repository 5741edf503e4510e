#![cfg(not(target_arch = "wasm32"))]

use super::*;

// ============================================================
// Persisted-value decoding
// ============================================================

#[test]
fn storage_key_is_stable() {
    // Changing this key would silently reset every returning visitor's theme.
    assert_eq!(STORAGE_KEY, "portfolio-theme");
}

#[test]
fn stored_dark_selects_dark() {
    assert!(stored_preference("dark"));
}

#[test]
fn stored_light_selects_light() {
    assert!(!stored_preference("light"));
}

#[test]
fn corrupted_values_fall_back_to_light() {
    assert!(!stored_preference(""));
    assert!(!stored_preference("DARK"));
    assert!(!stored_preference("true"));
}

// ============================================================
// Off-browser behavior
// ============================================================

#[test]
fn read_initial_defaults_to_light_off_browser() {
    assert!(!read_initial());
}

#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(true);
    persist(true);
    sync(false);
}
