//! Sun/moon button that flips the page theme.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

/// Toggle button with cross-fading sun and moon icons. `class` lets callers
/// bolt on sizing tweaks, e.g. the navbar's mobile scale-down.
#[component]
pub fn ThemeToggle(#[prop(optional, into)] class: String) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let is_dark = move || theme.get().is_dark;

    let button_class = move || {
        let scheme = if is_dark() {
            "bg-gray-700 hover:bg-gray-600 text-yellow-400"
        } else {
            "bg-gray-200 hover:bg-gray-300 text-gray-700"
        };
        format!(
            "relative p-2 rounded-full transition-all duration-300 {scheme} hover:scale-110 active:scale-95 focus:outline-none focus:ring-2 focus:ring-blue-500 {class}"
        )
    };

    let sun_class = move || {
        let state = if is_dark() {
            "opacity-0 rotate-90 scale-0"
        } else {
            "opacity-100 rotate-0 scale-100"
        };
        format!("absolute inset-0 w-6 h-6 transition-all duration-300 {state}")
    };

    let moon_class = move || {
        let state = if is_dark() {
            "opacity-100 rotate-0 scale-100"
        } else {
            "opacity-0 -rotate-90 scale-0"
        };
        format!("absolute inset-0 w-6 h-6 transition-all duration-300 {state}")
    };

    view! {
        <button
            class=button_class
            aria-label=move || {
                if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=move |_| theme.update(ThemeState::toggle)
        >
            <div class="relative w-6 h-6">
                // Sun
                <svg class=sun_class fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
                    ></path>
                </svg>

                // Moon
                <svg class=moon_class fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
                    ></path>
                </svg>
            </div>
        </button>
    }
}
