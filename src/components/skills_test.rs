use super::*;

// ============================================================================
// Category data
// ============================================================================

#[test]
fn every_category_carries_seven_skills() {
    for category in &CATEGORIES {
        assert_eq!(category.skills.len(), 7, "{}", category.title);
    }
}

#[test]
fn levels_are_percentages() {
    for category in &CATEGORIES {
        for (name, level) in category.skills {
            assert!(*level <= 100, "{name} is over 100%");
            assert!(*level > 0, "{name} has no level");
        }
    }
}

#[test]
fn category_titles_are_unique() {
    let mut titles: Vec<_> = CATEGORIES.iter().map(|c| c.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), CATEGORIES.len());
}

// ============================================================================
// Proficiency dots
// ============================================================================

#[test]
fn dots_round_the_average_level_up() {
    // Average 82.86% lands in the fifth bucket.
    let frontend = &CATEGORIES[0];
    assert_eq!(proficiency_dots(frontend.skills), 5);
}

#[test]
fn a_lower_average_lights_fewer_dots() {
    // Databases average 78.1%, one bucket down.
    let databases = &CATEGORIES[2];
    assert_eq!(proficiency_dots(databases.skills), 4);
}

#[test]
fn dots_never_exceed_the_row() {
    for category in &CATEGORIES {
        assert!(proficiency_dots(category.skills) <= 5, "{}", category.title);
    }
}

#[test]
fn uniform_levels_map_onto_exact_buckets() {
    assert_eq!(proficiency_dots(&[("a", 20), ("b", 20)]), 1);
    assert_eq!(proficiency_dots(&[("a", 100)]), 5);
    assert_eq!(proficiency_dots(&[("a", 1)]), 1);
}
