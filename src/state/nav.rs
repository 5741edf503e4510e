//! Navigation state: the section registry, scroll posture, and the
//! active-section scan that keeps the navbar highlight in sync.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll depth past which the navbar swaps its transparent backdrop for the
/// glass one.
pub const SCROLLED_AT_PX: f64 = 50.0;

/// Probe offset added to the scroll position when deciding which section is
/// active, so the section under the fixed navbar wins rather than the one at
/// the very top edge.
pub const PROBE_OFFSET_PX: f64 = 100.0;

/// The five page sections, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// DOM id of the section element.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// State the navbar renders from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub active: Section,
    pub menu_open: bool,
}

/// Whether the page has scrolled far enough for the navbar backdrop swap.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AT_PX
}

/// Picks the active section for a scroll position.
///
/// `offsets` holds each section's document-order top offset. The scan walks
/// them deepest-first and the first section whose top sits at or above the
/// probe line wins, so the section currently under the navbar is highlighted.
#[must_use]
pub fn active_section(scroll_y: f64, offsets: &[(Section, f64)]) -> Section {
    let probe = scroll_y + PROBE_OFFSET_PX;
    for &(section, top) in offsets.iter().rev() {
        if top <= probe {
            return section;
        }
    }
    Section::default()
}
