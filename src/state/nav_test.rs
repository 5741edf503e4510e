use super::*;

fn page_offsets() -> Vec<(Section, f64)> {
    vec![
        (Section::Home, 0.0),
        (Section::About, 800.0),
        (Section::Skills, 1600.0),
        (Section::Projects, 2400.0),
        (Section::Contact, 3200.0),
    ]
}

// ============================================================
// Section registry
// ============================================================

#[test]
fn sections_are_listed_in_document_order() {
    assert_eq!(Section::ALL[0], Section::Home);
    assert_eq!(Section::ALL[4], Section::Contact);
    assert_eq!(Section::ALL.len(), 5);
}

#[test]
fn ids_and_labels_line_up() {
    for section in Section::ALL {
        assert_eq!(section.id(), section.label().to_lowercase());
    }
}

#[test]
fn default_section_is_home() {
    assert_eq!(Section::default(), Section::Home);
}

// ============================================================
// Scroll posture
// ============================================================

#[test]
fn top_of_page_is_not_scrolled() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
}

#[test]
fn past_the_threshold_is_scrolled() {
    assert!(is_scrolled(51.0));
    assert!(is_scrolled(5000.0));
}

// ============================================================
// Active-section scan
// ============================================================

#[test]
fn top_of_page_activates_home() {
    assert_eq!(active_section(0.0, &page_offsets()), Section::Home);
}

#[test]
fn probe_offset_activates_the_next_section_early() {
    // About starts at 800; with the 100px probe it activates at 700.
    assert_eq!(active_section(699.0, &page_offsets()), Section::Home);
    assert_eq!(active_section(700.0, &page_offsets()), Section::About);
}

#[test]
fn deepest_matching_section_wins() {
    assert_eq!(active_section(2500.0, &page_offsets()), Section::Projects);
    assert_eq!(active_section(9000.0, &page_offsets()), Section::Contact);
}

#[test]
fn empty_offsets_fall_back_to_home() {
    assert_eq!(active_section(1234.0, &[]), Section::Home);
}

#[test]
fn exact_boundary_belongs_to_the_deeper_section() {
    // Probe of 1600 lands exactly on the Skills top offset.
    assert_eq!(active_section(1500.0, &page_offsets()), Section::Skills);
}
