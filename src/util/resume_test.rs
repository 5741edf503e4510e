#![cfg(not(target_arch = "wasm32"))]

use super::*;

// ============================================================
// Paths and filenames
// ============================================================

#[test]
fn resume_path_points_at_a_pdf() {
    assert!(RESUME_PATH.starts_with('/'));
    assert!(RESUME_PATH.ends_with(".pdf"));
}

#[test]
fn fallback_is_a_served_page() {
    assert!(FALLBACK_PATH.starts_with('/'));
    assert!(FALLBACK_PATH.ends_with(".html"));
}

#[test]
fn filename_strips_leading_directories() {
    assert_eq!(filename_for("/Divy_Kalathiya_Resume.pdf"), "Divy_Kalathiya_Resume.pdf");
    assert_eq!(filename_for("/a/b/c.pdf"), "c.pdf");
}

#[test]
fn bare_filenames_pass_through() {
    assert_eq!(filename_for("resume.pdf"), "resume.pdf");
}

#[test]
fn suggested_save_name_matches_the_served_file() {
    assert_eq!(filename_for(RESUME_PATH), "Divy_Kalathiya_Resume.pdf");
}
