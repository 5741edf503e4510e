use super::*;

// ============================================================================
// Headline reveal
// ============================================================================

#[test]
fn reveal_steps_one_character_per_tick() {
    let total = HEADLINE.chars().count();
    assert_eq!(step_reveal(0, total), (1, false));
    assert_eq!(step_reveal(1, total), (2, false));
}

#[test]
fn reveal_reports_completion_on_the_last_character() {
    let total = HEADLINE.chars().count();
    assert_eq!(step_reveal(total - 1, total), (total, true));
}

#[test]
fn reveal_saturates_once_complete() {
    let total = HEADLINE.chars().count();
    assert_eq!(step_reveal(total, total), (total, true));
    assert_eq!(step_reveal(total + 10, total), (total, true));
}

#[test]
fn empty_headline_completes_immediately() {
    assert_eq!(step_reveal(0, 0), (0, true));
}

#[test]
fn stagger_grows_linearly_with_position() {
    assert_eq!(reveal_delay_ms(0), 0);
    assert_eq!(reveal_delay_ms(1), 50);
    assert_eq!(reveal_delay_ms(10), 500);
}

// ============================================================================
// Character rendering
// ============================================================================

#[test]
fn spaces_render_as_no_break_spaces() {
    assert_eq!(display_char(' '), '\u{a0}');
}

#[test]
fn letters_render_unchanged() {
    assert_eq!(display_char('C'), 'C');
    assert_eq!(display_char('z'), 'z');
}

#[test]
fn headline_spans_never_collapse() {
    // Every headline character must occupy width inside an inline-block span.
    for ch in HEADLINE.chars() {
        assert_ne!(display_char(ch), ' ');
    }
}
