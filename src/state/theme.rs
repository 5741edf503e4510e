//! Theme state: the page-wide dark-mode flag and the palette derived from it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Tailwind utility classes for one color scheme.
///
/// Components compose these into `class` strings instead of branching on
/// `is_dark` themselves, so both schemes are defined in exactly one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    // Backgrounds
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,

    // Text
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,

    // Borders
    pub border: &'static str,
    pub border_light: &'static str,

    // Hover states
    pub hover: &'static str,
    pub hover_secondary: &'static str,

    // Brand gradients, identical in both schemes
    pub gradient: &'static str,
    pub gradient_hover: &'static str,
    pub text_gradient: &'static str,

    // Section-specific surfaces
    pub hero_background: &'static str,
    pub card: &'static str,
    pub card_hover: &'static str,
    pub glass: &'static str,
}

const DARK: Palette = Palette {
    primary: "bg-gray-900",
    secondary: "bg-gray-800",
    tertiary: "bg-gray-700",
    text_primary: "text-white",
    text_secondary: "text-gray-300",
    text_muted: "text-gray-400",
    border: "border-gray-700",
    border_light: "border-gray-600",
    hover: "hover:bg-gray-700",
    hover_secondary: "hover:bg-gray-600",
    gradient: "bg-gradient-to-r from-blue-500 to-purple-600",
    gradient_hover: "hover:from-blue-600 hover:to-purple-700",
    text_gradient: "bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-transparent",
    hero_background: "bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900",
    card: "bg-gray-800/50",
    card_hover: "hover:bg-gray-700/50",
    glass: "bg-gray-900/80 backdrop-blur-md border-gray-700/20",
};

const LIGHT: Palette = Palette {
    primary: "bg-white",
    secondary: "bg-gray-50",
    tertiary: "bg-gray-100",
    text_primary: "text-gray-900",
    text_secondary: "text-gray-600",
    text_muted: "text-gray-500",
    border: "border-gray-200",
    border_light: "border-gray-300",
    hover: "hover:bg-gray-100",
    hover_secondary: "hover:bg-gray-200",
    gradient: "bg-gradient-to-r from-blue-500 to-purple-600",
    gradient_hover: "hover:from-blue-600 hover:to-purple-700",
    text_gradient: "bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-transparent",
    hero_background: "bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50",
    card: "bg-white/50",
    card_hover: "hover:bg-gray-50/50",
    glass: "bg-white/80 backdrop-blur-md border-gray-200/20",
};

/// Page-wide theme flag. Defaults to light; startup may override it from the
/// persisted choice or the OS preference before the first render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    /// Flips between dark and light.
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    /// Palette matching the current flag.
    #[must_use]
    pub const fn palette(self) -> Palette {
        if self.is_dark { DARK } else { LIGHT }
    }
}
