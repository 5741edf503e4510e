use super::*;

// ============================================================
// ThemeState
// ============================================================

#[test]
fn default_theme_is_light() {
    let theme = ThemeState::default();
    assert!(!theme.is_dark);
}

#[test]
fn toggle_flips_the_flag() {
    let mut theme = ThemeState::default();
    theme.toggle();
    assert!(theme.is_dark);
}

#[test]
fn toggling_twice_restores_the_original_value() {
    for start in [false, true] {
        let mut theme = ThemeState { is_dark: start };
        theme.toggle();
        theme.toggle();
        assert_eq!(theme.is_dark, start);
    }
}

// ============================================================
// Palette derivation
// ============================================================

#[test]
fn palettes_differ_between_schemes() {
    let dark = ThemeState { is_dark: true }.palette();
    let light = ThemeState { is_dark: false }.palette();
    assert_ne!(dark, light);
    assert_eq!(dark.primary, "bg-gray-900");
    assert_eq!(light.primary, "bg-white");
}

#[test]
fn palette_is_a_pure_function_of_the_flag() {
    let theme = ThemeState { is_dark: true };
    assert_eq!(theme.palette(), theme.palette());
}

#[test]
fn brand_gradients_are_scheme_independent() {
    let dark = ThemeState { is_dark: true }.palette();
    let light = ThemeState { is_dark: false }.palette();
    assert_eq!(dark.gradient, light.gradient);
    assert_eq!(dark.gradient_hover, light.gradient_hover);
    assert_eq!(dark.text_gradient, light.text_gradient);
}

#[test]
fn hero_background_follows_the_scheme() {
    let dark = ThemeState { is_dark: true }.palette();
    let light = ThemeState { is_dark: false }.palette();
    assert!(dark.hero_background.contains("slate-900"));
    assert!(light.hero_background.contains("blue-50"));
}
