use super::*;

// ============================================================================
// Form state
// ============================================================================

#[test]
fn fields_start_empty() {
    let form = ContactForm::default();
    for field in [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ] {
        assert_eq!(form.field(field), "");
    }
}

#[test]
fn set_writes_only_the_named_field() {
    let mut form = ContactForm::default();
    form.set(FormField::Email, "a@b.c".into());
    assert_eq!(form.field(FormField::Email), "a@b.c");
    assert_eq!(form.field(FormField::Name), "");
    assert_eq!(form.field(FormField::Message), "");
}

#[test]
fn clear_resets_every_field() {
    let mut form = ContactForm::default();
    form.set(FormField::Name, "Divy".into());
    form.set(FormField::Subject, "Hi".into());
    form.set(FormField::Message, "Hello there".into());
    form.clear();
    assert_eq!(form, ContactForm::default());
}

#[test]
fn field_ids_match_their_labels() {
    assert_eq!(FormField::Name.id(), "name");
    assert_eq!(FormField::Email.id(), "email");
    assert_eq!(FormField::Subject.id(), "subject");
    assert_eq!(FormField::Message.id(), "message");
}

// ============================================================================
// Floating labels
// ============================================================================

#[test]
fn labels_rest_on_empty_unfocused_fields() {
    assert!(!label_active(false, ""));
}

#[test]
fn focus_floats_the_label() {
    assert!(label_active(true, ""));
}

#[test]
fn text_keeps_the_label_floating_after_blur() {
    assert!(label_active(false, "hello"));
}

#[test]
fn active_fields_get_the_highlight_border() {
    let active = input_classes(true);
    let resting = input_classes(false);
    assert!(active.contains("border-blue-500"));
    assert!(resting.contains("border-gray-600"));
    assert_ne!(active, resting);
}

#[test]
fn floating_labels_move_above_the_border() {
    assert!(label_classes(true).contains("-top-2"));
    assert!(label_classes(false).contains("top-3"));
}

// ============================================================================
// Contact methods
// ============================================================================

#[test]
fn email_opens_in_the_same_tab() {
    let email = &METHODS[0];
    assert_eq!(email.title, "Email");
    assert!(!email.external);
    assert!(email.link.starts_with("mailto:"));
}

#[test]
fn web_profiles_open_in_a_new_tab() {
    for method in METHODS.iter().filter(|m| m.title != "Email") {
        assert!(method.external, "{}", method.title);
        assert!(method.link.starts_with("https://"), "{}", method.title);
    }
}
