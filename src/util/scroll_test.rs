#![cfg(not(target_arch = "wasm32"))]

use super::*;

// ============================================================
// Scroll target math
// ============================================================

#[test]
fn targets_land_below_the_fixed_navbar() {
    assert!((scroll_target_y(800.0) - 720.0).abs() < f64::EPSILON);
}

#[test]
fn targets_near_the_top_clamp_to_zero() {
    assert!(scroll_target_y(0.0).abs() < f64::EPSILON);
    assert!(scroll_target_y(40.0).abs() < f64::EPSILON);
}

// ============================================================
// Off-browser behavior
// ============================================================

#[test]
fn scroll_to_section_is_a_noop_off_browser() {
    scroll_to_section("about");
}

#[test]
fn scroll_position_reads_zero_off_browser() {
    assert!(current_scroll_y().abs() < f64::EPSILON);
}
