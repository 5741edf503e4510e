//! About section: bio paragraphs, trait tags, and the profile card with a
//! photo-to-initials fallback.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::visibility::use_reveal;

const TAGS: [(&str, &str); 4] = [
    ("Problem Solver", "bg-blue-100 text-blue-800"),
    ("Fast Learner", "bg-purple-100 text-purple-800"),
    ("Team Player", "bg-green-100 text-green-800"),
    ("Innovation Focused", "bg-orange-100 text-orange-800"),
];

const STATS: [(&str, &str, &str); 3] = [
    ("7+", "Projects", "text-blue-500"),
    ("2+", "Years Learning", "text-purple-500"),
    ("100%", "Dedicated", "text-green-500"),
];

#[component]
pub fn About() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let palette = move || theme.get().palette();

    let (title_ref, title_in_view) = use_reveal(0.3);
    let (text_ref, text_in_view) = use_reveal(0.3);
    let (profile_ref, profile_in_view) = use_reveal(0.3);

    // Swaps the photo for initials if the image fails to load.
    let photo_error = RwSignal::new(false);

    let title_class = move || {
        let reveal = if title_in_view.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!("text-center mb-16 transition-all duration-800 {reveal}")
    };

    let text_class = move || {
        let reveal = if text_in_view.get() {
            "opacity-100 -translate-x-0"
        } else {
            "opacity-0 -translate-x-8"
        };
        format!("space-y-6 transition-all duration-800 delay-200 {reveal}")
    };

    let profile_class = move || {
        let reveal = if profile_in_view.get() {
            "opacity-100 translate-x-0"
        } else {
            "opacity-0 translate-x-8"
        };
        format!("relative transition-all duration-800 delay-400 {reveal}")
    };

    let paragraph_class = move || {
        format!(
            "text-lg {} leading-relaxed hover:{} transition-colors duration-300",
            palette().text_secondary,
            palette().text_primary
        )
    };

    let tags = TAGS
        .iter()
        .enumerate()
        .map(|(index, (text, tone))| {
            let tag_class = move || {
                let reveal = if text_in_view.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-4"
                };
                format!(
                    "{tone} px-4 py-2 rounded-full text-sm font-medium transform transition-all duration-500 hover:scale-110 hover:shadow-md cursor-default {reveal}"
                )
            };
            view! {
                <span class=tag_class style:transition-delay=format!("{}ms", 400 + index * 100)>
                    {*text}
                </span>
            }
        })
        .collect_view();

    let stats = STATS
        .iter()
        .map(|(number, label, color)| {
            view! {
                <div class="text-center group cursor-pointer">
                    <div class=format!(
                        "text-2xl font-bold {color} group-hover:scale-125 transition-transform duration-300"
                    )>{*number}</div>
                    <div class=move || {
                        format!(
                            "text-sm {} group-hover:{} transition-colors duration-300",
                            palette().text_secondary,
                            palette().text_primary,
                        )
                    }>{*label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class=move || format!("py-20 {} transition-colors duration-500", palette().primary)>
            <div class="max-w-6xl mx-auto px-4">
                <div node_ref=title_ref class=title_class>
                    <h2 class=move || {
                        format!("text-4xl md:text-5xl font-bold {} mb-4", palette().text_primary)
                    }>"About Me"</h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-600 mx-auto transform scale-x-0 animate-[scale-x_1s_ease-out_0.5s_forwards] origin-center"></div>
                </div>

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div node_ref=text_ref class=text_class>
                        <p class=paragraph_class>
                            "As a dedicated B.Tech Information Technology student, I've channeled \
                             my academic foundation into mastering the art of full-stack web \
                             development. My journey in technology is driven by an insatiable \
                             curiosity to solve complex problems and create meaningful digital \
                             experiences."
                        </p>

                        <p class=paragraph_class>
                            "Specializing in the MERN stack (MongoDB, Express.js, React, Node.js), \
                             I bring together robust backend architectures with intuitive frontend \
                             interfaces. My approach combines theoretical knowledge from my IT \
                             studies with hands-on experience in modern web technologies, enabling \
                             me to deliver scalable, efficient, and user-centric solutions."
                        </p>

                        <p class=move || {
                            format!(
                                "text-lg {} leading-relaxed transition-colors duration-300",
                                palette().text_secondary,
                            )
                        }>
                            "I thrive on challenges that push the boundaries of conventional web \
                             development, constantly learning new technologies and methodologies \
                             to stay at the forefront of the ever-evolving tech landscape. My goal \
                             is to contribute to innovative projects that make a positive impact \
                             on users' lives while growing as a professional developer."
                        </p>

                        <div class="flex flex-wrap gap-4 pt-4">{tags}</div>
                    </div>

                    <div node_ref=profile_ref class=profile_class>
                        <div class="bg-gradient-to-br from-blue-400 to-purple-600 rounded-2xl p-1 hover:shadow-2xl transition-shadow duration-500">
                            <div class=move || {
                                format!(
                                    "{} rounded-2xl p-8 {} transition-colors duration-300",
                                    palette().card,
                                    palette().card_hover,
                                )
                            }>
                                <div class="text-center">
                                    // Profile photo
                                    <div class="w-48 h-48 mx-auto mb-8 relative group">
                                        <div class="absolute inset-0 bg-gradient-to-br from-blue-400 to-purple-600 rounded-full animate-pulse group-hover:animate-none transition-all duration-500"></div>
                                        <div class="relative w-full h-full rounded-full overflow-hidden border-4 border-white shadow-xl group-hover:scale-105 transition-transform duration-500">
                                            <img
                                                src="/ProfilePhoto.jpg"
                                                alt="Divy Kalathiya"
                                                class=move || {
                                                    if photo_error.get() {
                                                        "hidden"
                                                    } else {
                                                        "w-full h-full object-cover object-top scale-110"
                                                    }
                                                }
                                                on:error=move |_| photo_error.set(true)
                                            />
                                            // Fallback initials
                                            <div class=move || {
                                                let shown = if photo_error.get() { "flex" } else { "hidden" };
                                                format!(
                                                    "absolute inset-0 bg-gradient-to-br from-blue-400 to-purple-600 rounded-full items-center justify-center text-white text-5xl font-bold {shown}"
                                                )
                                            }>"DK"</div>
                                        </div>
                                        // Hover overlay
                                        <div class="absolute inset-0 bg-black bg-opacity-0 group-hover:bg-opacity-10 rounded-full transition-all duration-300 flex items-center justify-center">
                                            <span class="text-white opacity-0 group-hover:opacity-100 transition-opacity duration-300 text-sm font-medium">
                                                "👋 Hey there!"
                                            </span>
                                        </div>
                                    </div>

                                    <h3 class=move || {
                                        format!(
                                            "text-2xl font-bold {} mb-2 hover:text-blue-600 transition-colors duration-300",
                                            palette().text_primary,
                                        )
                                    }>"Divy Kalathiya"</h3>
                                    <p class=move || {
                                        format!("{} mb-4", palette().text_secondary)
                                    }>"B.Tech IT Student & MERN Developer"</p>
                                    <div class="flex justify-center space-x-4">{stats}</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
