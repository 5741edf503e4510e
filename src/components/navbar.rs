//! Fixed top navigation with scroll-aware styling and active-section
//! highlighting.
//!
//! A single window scroll listener drives two things: the backdrop swap once
//! the page leaves the very top, and the deepest-first scan that decides
//! which section's menu entry is highlighted. The listener is registered on
//! mount and removed on unmount.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::{NavState, Section, active_section, is_scrolled};
use crate::state::theme::ThemeState;
use crate::util::scroll;

#[cfg(target_arch = "wasm32")]
fn section_offsets() -> Vec<(Section, f64)> {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let element = document.get_element_by_id(section.id())?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some((section, f64::from(element.offset_top())))
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let palette = move || theme.get().palette();

    let go_to = move |section: Section| {
        scroll::scroll_to_section(section.id());
        nav.update(|n| n.menu_open = false);
    };

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let listener: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        Effect::new({
            let listener = Rc::clone(&listener);
            move |_| {
                if listener.borrow().is_some() {
                    return;
                }
                let update = move || {
                    let y = scroll::current_scroll_y();
                    let scrolled = is_scrolled(y);
                    let active = active_section(y, &section_offsets());
                    let current = nav.get_untracked();
                    if current.scrolled != scrolled || current.active != active {
                        nav.update(|n| {
                            n.scrolled = scrolled;
                            n.active = active;
                        });
                    }
                };
                // Check the initial position before the first scroll event.
                update();
                let cb = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
                }
                *listener.borrow_mut() = Some(cb);
            }
        });

        on_cleanup(move || {
            if let Some(cb) = listener.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    let nav_class = move || {
        let backdrop = if nav.get().scrolled {
            format!("{} shadow-lg", palette().glass)
        } else {
            "bg-transparent".to_string()
        };
        format!("fixed top-0 w-full z-50 transition-all duration-300 {backdrop}")
    };

    let logo_class = move || {
        let color = if nav.get().scrolled {
            palette().text_primary
        } else {
            "text-white"
        };
        format!("text-2xl font-bold transition-colors duration-300 {color}")
    };

    let desktop_items = Section::ALL
        .iter()
        .map(|&section| {
            let item_class = move || {
                let state = nav.get();
                let color = if state.active == section {
                    if state.scrolled { "text-blue-600".to_string() } else { "text-blue-400".to_string() }
                } else if state.scrolled {
                    format!("{} hover:text-blue-600", palette().text_secondary)
                } else {
                    "text-white/80 hover:text-white".to_string()
                };
                format!(
                    "relative px-3 py-2 text-sm font-medium transition-all duration-300 hover:scale-105 group {color}"
                )
            };
            let underline_class = move || {
                let grow = if nav.get().active == section {
                    "scale-x-100"
                } else {
                    "scale-x-0 group-hover:scale-x-100"
                };
                format!(
                    "absolute bottom-0 left-0 w-full h-0.5 bg-gradient-to-r from-blue-500 to-purple-600 transform transition-all duration-300 {grow}"
                )
            };
            view! {
                <button class=item_class on:click=move |_| go_to(section)>
                    {section.label()}
                    <span class=underline_class></span>
                </button>
            }
        })
        .collect_view();

    let mobile_button_class = move || {
        let color = if nav.get().scrolled {
            let palette = palette();
            format!("{} {}", palette.text_secondary, palette.hover)
        } else {
            "text-white hover:bg-white/10".to_string()
        };
        format!("p-2 rounded-lg transition-colors duration-300 {color}")
    };

    let mobile_menu_class = move || {
        let reveal = if nav.get().menu_open {
            "max-h-screen opacity-100"
        } else {
            "max-h-0 opacity-0"
        };
        format!("md:hidden transition-all duration-300 overflow-hidden {reveal}")
    };

    let mobile_items = Section::ALL
        .iter()
        .enumerate()
        .map(|(index, &section)| {
            let item_class = move || {
                let color = if nav.get().active == section {
                    "text-blue-600 bg-blue-50 scale-105".to_string()
                } else {
                    let palette = palette();
                    format!(
                        "{} hover:text-blue-600 {} hover:scale-105",
                        palette.text_secondary, palette.hover
                    )
                };
                format!(
                    "block w-full text-left px-4 py-3 text-sm font-medium rounded-lg transition-all duration-300 transform {color}"
                )
            };
            view! {
                <button
                    class=item_class
                    style:animation=move || {
                        if nav.get().menu_open { "fadeInUp 0.3s ease forwards" } else { "none" }
                    }
                    style:animation-delay=format!("{}ms", index * 100)
                    on:click=move |_| go_to(section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    // Logo
                    <div class="flex-shrink-0 cursor-pointer" on:click=move |_| go_to(Section::Home)>
                        <div class=logo_class>
                            <span class="bg-gradient-to-r from-blue-500 to-purple-600 bg-clip-text text-transparent">
                                "DK"
                            </span>
                            <span class=move || {
                                if nav.get().scrolled { "text-gray-900" } else { "text-white" }
                            }>"ivy"</span>
                        </div>
                    </div>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-4">
                        <div class="flex items-center space-x-8">{desktop_items}</div>
                        <ThemeToggle/>
                    </div>

                    // Mobile menu button and theme toggle
                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle class="scale-90"/>
                        <button
                            class=mobile_button_class
                            on:click=move |_| nav.update(|n| n.menu_open = !n.menu_open)
                        >
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=move || {
                                        if nav.get().menu_open {
                                            "M6 18L18 6M6 6l12 12"
                                        } else {
                                            "M4 6h16M4 12h16M4 18h16"
                                        }
                                    }
                                ></path>
                            </svg>
                        </button>
                    </div>
                </div>

                // Mobile navigation
                <div class=mobile_menu_class>
                    <div class=move || {
                        format!("px-2 pt-2 pb-6 space-y-2 {} rounded-lg mt-2", palette().glass)
                    }>{mobile_items}</div>
                </div>
            </div>
        </nav>
    }
}
