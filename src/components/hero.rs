//! Landing section: staggered typewriter headline, call-to-action buttons,
//! and the resume download.

use leptos::prelude::*;

use crate::state::nav::Section;
use crate::state::theme::ThemeState;
#[cfg(target_arch = "wasm32")]
use crate::util::resume;
use crate::util::scroll;

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

/// Headline revealed one character at a time.
const HEADLINE: &str = "Crafting Digital Solutions with Code";

#[cfg(target_arch = "wasm32")]
const REVEAL_START_MS: u32 = 500;
#[cfg(target_arch = "wasm32")]
const REVEAL_TICK_MS: u32 = 50;
#[cfg(target_arch = "wasm32")]
const SUBTEXT_DELAY_MS: u32 = 200;
#[cfg(target_arch = "wasm32")]
const BUTTONS_DELAY_MS: u32 = 800;

/// Spaces render as no-break spaces so the inline-block character spans keep
/// their gaps.
fn display_char(ch: char) -> char {
    if ch == ' ' { '\u{a0}' } else { ch }
}

/// Per-character transition stagger across the headline.
fn reveal_delay_ms(index: usize) -> usize {
    index * 50
}

/// Advances the reveal count by one tick, saturating at `total`; the flag
/// reports completion so the caller can stop ticking.
#[cfg(any(test, target_arch = "wasm32"))]
fn step_reveal(shown: usize, total: usize) -> (usize, bool) {
    let next = (shown + 1).min(total);
    (next, next >= total)
}

#[component]
pub fn Hero() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let palette = move || theme.get().palette();
    let is_dark = move || theme.get().is_dark;

    let is_loaded = RwSignal::new(false);
    let shown_chars = RwSignal::new(0usize);
    let show_subtext = RwSignal::new(false);
    let show_buttons = RwSignal::new(false);
    let downloading = RwSignal::new(false);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::{Interval, Timeout};

        let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let ticker_for_start = Rc::clone(&ticker);
        Timeout::new(REVEAL_START_MS, move || {
            is_loaded.set(true);
            let total = HEADLINE.chars().count();
            let ticker_for_tick = Rc::clone(&ticker_for_start);
            let interval = Interval::new(REVEAL_TICK_MS, move || {
                let (next, done) = step_reveal(shown_chars.get_untracked(), total);
                shown_chars.set(next);
                if done {
                    // The interval drops itself; gloo cancels it on drop.
                    ticker_for_tick.borrow_mut().take();
                    Timeout::new(SUBTEXT_DELAY_MS, move || show_subtext.set(true)).forget();
                    Timeout::new(BUTTONS_DELAY_MS, move || show_buttons.set(true)).forget();
                }
            });
            *ticker_for_start.borrow_mut() = Some(interval);
        })
        .forget();

        on_cleanup(move || {
            ticker.borrow_mut().take();
        });
    }

    let on_download = {
        #[cfg(target_arch = "wasm32")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                downloading.set(true);
                leptos::task::spawn_local(async move {
                    resume::download_resume().await;
                    downloading.set(false);
                });
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let headline_chars = HEADLINE
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let span_class = move || {
                let state = if index < shown_chars.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-4"
                };
                format!("inline-block transition-all duration-300 {state}")
            };
            view! {
                <span
                    class=span_class
                    style:transition-delay=format!("{}ms", reveal_delay_ms(index))
                    style:transform-origin="bottom"
                >
                    {display_char(ch).to_string()}
                </span>
            }
        })
        .collect_view();

    let section_class = move || {
        format!(
            "min-h-screen {} flex items-center justify-center px-4 relative overflow-hidden transition-colors duration-500",
            palette().hero_background
        )
    };

    let content_class = move || {
        let reveal = if is_loaded.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!(
            "max-w-4xl mx-auto text-center {} relative z-10 transition-all duration-1000 {reveal}",
            palette().text_primary
        )
    };

    let greeting_class = move || {
        let color = if is_dark() { "text-blue-400" } else { "text-blue-600" };
        let reveal = if is_loaded.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-4"
        };
        format!(
            "text-lg md:text-xl mb-1 font-extrabold {color} uppercase tracking-widest transition-all duration-800 {reveal}"
        )
    };

    let intro_class = move || {
        let reveal = if show_subtext.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        };
        format!(
            "text-xl md:text-2xl mb-8 {} max-w-3xl mx-auto leading-relaxed transition-all duration-800 {reveal}",
            palette().text_secondary
        )
    };

    let buttons_class = move || {
        let reveal = if show_buttons.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        };
        format!("flex flex-col sm:flex-row gap-4 justify-center transition-all duration-800 {reveal}")
    };

    let resume_class = move || {
        let scheme = if is_dark() {
            "border-white text-white hover:bg-white hover:text-slate-900"
        } else {
            "border-gray-800 text-gray-800 hover:bg-gray-800 hover:text-white"
        };
        format!(
            "group border-2 {scheme} font-semibold py-4 px-8 rounded-lg transform transition-all duration-300 hover:-translate-y-1 hover:shadow-xl active:translate-y-0 active:scale-95 disabled:opacity-50 disabled:cursor-not-allowed disabled:transform-none"
        )
    };

    let indicator_class = move || {
        let reveal = if show_buttons.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-4"
        };
        format!(
            "absolute bottom-8 left-1/2 transform -translate-x-1/2 transition-all duration-1000 {reveal}"
        )
    };

    view! {
        <section class=section_class>
            // Background accents
            <div class="absolute inset-0 overflow-hidden">
                <div class=move || {
                    format!(
                        "absolute -top-40 -right-40 w-80 h-80 {} rounded-full animate-pulse",
                        if is_dark() { "bg-blue-500/10" } else { "bg-blue-500/20" },
                    )
                }></div>
                <div
                    class=move || {
                        format!(
                            "absolute -bottom-40 -left-40 w-80 h-80 {} rounded-full animate-pulse",
                            if is_dark() { "bg-purple-500/10" } else { "bg-purple-500/20" },
                        )
                    }
                    style:animation-delay="1s"
                ></div>
            </div>

            <div class=content_class>
                <p class=greeting_class>"Welcome to my Portfolio"</p>

                <h1 class="text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-transparent min-h-[4rem] md:min-h-[6rem]">
                    {headline_chars}
                </h1>

                <p class=intro_class>
                    "I'm a passionate B.Tech IT student and Full-Stack MERN Developer who \
                     transforms ideas into powerful web applications. With a strong foundation \
                     in modern web technologies and a keen eye for user experience, I build \
                     scalable solutions that make a difference."
                </p>

                <div class=buttons_class>
                    <button
                        class="group bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white font-semibold py-4 px-8 rounded-lg transform transition-all duration-300 hover:-translate-y-1 hover:shadow-2xl active:translate-y-0 active:scale-95"
                        on:click=move |_| scroll::scroll_to_section(Section::Projects.id())
                    >
                        <span class="flex items-center justify-center space-x-2">
                            <span>"View My Projects"</span>
                            <svg
                                class="w-4 h-4 transform group-hover:translate-x-1 transition-transform duration-300"
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M9 5l7 7-7 7"
                                ></path>
                            </svg>
                        </span>
                    </button>
                    <button
                        class=resume_class
                        prop:disabled=move || downloading.get()
                        on:click=on_download
                    >
                        <span class="flex items-center justify-center space-x-2">
                            <Show
                                when=move || downloading.get()
                                fallback=|| {
                                    view! {
                                        <svg
                                            class="w-4 h-4 transform group-hover:scale-110 transition-transform duration-300"
                                            fill="none"
                                            stroke="currentColor"
                                            viewBox="0 0 24 24"
                                        >
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
                                            ></path>
                                        </svg>
                                        <span>"Download Resume"</span>
                                    }
                                }
                            >
                                <svg
                                    class="w-4 h-4 animate-spin"
                                    fill="none"
                                    stroke="currentColor"
                                    viewBox="0 0 24 24"
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"
                                    ></path>
                                </svg>
                                <span>"Downloading..."</span>
                            </Show>
                        </span>
                    </button>
                </div>

                // Scroll indicator
                <div class=indicator_class>
                    <div
                        class="animate-bounce cursor-pointer group"
                        on:click=move |_| scroll::scroll_to_section(Section::About.id())
                    >
                        <div class=move || {
                            format!(
                                "p-2 rounded-full border {} transition-colors duration-300",
                                if is_dark() {
                                    "border-white/30 group-hover:border-white/60"
                                } else {
                                    "border-gray-800/30 group-hover:border-gray-800/60"
                                },
                            )
                        }>
                            <svg
                                class=move || {
                                    format!(
                                        "w-6 h-6 {} transition-colors duration-300",
                                        if is_dark() {
                                            "text-white group-hover:text-blue-400"
                                        } else {
                                            "text-gray-800 group-hover:text-blue-600"
                                        },
                                    )
                                }
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M19 14l-7 7m0 0l-7-7m7 7V3"
                                ></path>
                            </svg>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
