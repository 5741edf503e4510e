//! Smooth-scroll navigation between page sections.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed navbar; scroll targets land just below it.
pub const NAV_HEIGHT_PX: f64 = 80.0;

/// Scroll destination for an element top, leaving room for the navbar.
#[must_use]
pub fn scroll_target_y(element_top: f64) -> f64 {
    (element_top - NAV_HEIGHT_PX).max(0.0)
}

/// Smooth-scrolls the viewport to the section with the given DOM id.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target_y(f64::from(element.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Current vertical scroll position, or zero off-browser.
#[must_use]
pub fn current_scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}
