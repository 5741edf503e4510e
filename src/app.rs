//! Application shell: provides theme and navigation context, gates the page
//! behind the preloader, and lays out the sections.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::preloader::Preloader;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::state::nav::NavState;
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

#[cfg(target_arch = "wasm32")]
const PRELOAD_MS: u32 = 2000;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState {
        is_dark: dark_mode::read_initial(),
    });
    let nav = RwSignal::new(NavState::default());
    provide_context(theme);
    provide_context(nav);

    // Mirror the flag onto <html> and storage, on startup and after each toggle.
    Effect::new(move |_| dark_mode::sync(theme.get().is_dark));

    let loading = RwSignal::new(true);

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Timeout;

        Timeout::new(PRELOAD_MS, move || loading.set(false)).forget();
    }

    view! {
        <Title text="Divy Kalathiya | Portfolio"/>
        <Show when=move || !loading.get() fallback=|| view! { <Preloader/> }>
            <div class="scroll-smooth transition-colors duration-300">
                <Navbar/>
                <section id="home">
                    <Hero/>
                </section>
                <section id="about">
                    <About/>
                </section>
                <section id="skills">
                    <Skills/>
                </section>
                <section id="projects">
                    <Projects/>
                </section>
                <section id="contact">
                    <Contact/>
                </section>
            </div>
        </Show>
    }
}
