use super::*;

// ============================================================================
// Technology preview
// ============================================================================

#[test]
fn long_stacks_fold_into_a_more_pill() {
    let stack: &'static [&'static str] = &["a", "b", "c", "d", "e"];
    let (shown, extra) = tech_preview(stack);
    assert_eq!(shown, &["a", "b", "c"]);
    assert_eq!(extra, 2);
}

#[test]
fn short_stacks_show_everything() {
    let stack: &'static [&'static str] = &["a", "b"];
    let (shown, extra) = tech_preview(stack);
    assert_eq!(shown, stack);
    assert_eq!(extra, 0);
}

#[test]
fn exactly_three_needs_no_pill() {
    let stack: &'static [&'static str] = &["a", "b", "c"];
    let (shown, extra) = tech_preview(stack);
    assert_eq!(shown.len(), 3);
    assert_eq!(extra, 0);
}

#[test]
fn empty_stacks_are_harmless() {
    let (shown, extra) = tech_preview(&[]);
    assert!(shown.is_empty());
    assert_eq!(extra, 0);
}

// ============================================================================
// Project records
// ============================================================================

#[test]
fn both_projects_fold_their_stacks() {
    for project in &PROJECTS {
        let (_, extra) = tech_preview(project.technologies);
        assert!(extra > 0, "{} shows its whole stack", project.title);
    }
}

#[test]
fn links_are_absolute() {
    for project in &PROJECTS {
        assert!(project.live_demo.starts_with("https://"), "{}", project.title);
        assert!(project.source_code.starts_with("https://"), "{}", project.title);
    }
}

#[test]
fn modal_content_is_populated() {
    for project in &PROJECTS {
        assert!(!project.full_description.is_empty());
        assert!(!project.key_features.is_empty());
        assert!(project.full_description.len() > project.short_description.len());
    }
}
