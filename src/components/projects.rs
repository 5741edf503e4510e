//! Projects section: showcase cards with a details modal per project.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::visibility::use_reveal;

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

struct Project {
    title: &'static str,
    short_description: &'static str,
    full_description: &'static str,
    technologies: &'static [&'static str],
    key_features: &'static [&'static str],
    live_demo: &'static str,
    source_code: &'static str,
    image: &'static str,
    gradient: &'static str,
    category: &'static str,
}

static PROJECTS: [Project; 2] = [
    Project {
        title: "Student-Faculty Doubt Solving Platform",
        short_description: "Full-stack web platform connecting students with faculty members for \
                            academic doubt resolution with role-based access.",
        full_description: "Developed a comprehensive MERN stack platform that facilitates \
                           seamless communication between students and faculty for academic \
                           support. The platform features secure JWT-based authentication with \
                           three distinct roles: Student, Faculty, and Admin. Students can submit \
                           academic queries with file attachments (PDF/images) using Multer \
                           integration, while faculty members can provide detailed responses. The \
                           system includes intelligent status tracking (Pending, Answered) with \
                           automatic updates and maintains proper data relationships in MongoDB \
                           for efficient query management.",
        technologies: &[
            "React.js",
            "Node.js",
            "Express.js",
            "MongoDB",
            "JWT",
            "Multer",
            "Tailwind CSS",
            "ShadCN UI",
        ],
        key_features: &[
            "Role-based Authentication (Student, Faculty, Admin)",
            "File Upload System for Attachments",
            "Real-time Status Tracking",
            "Secure JWT Authentication",
            "Responsive UI with ShadCN Components",
            "MongoDB Data Relationships",
        ],
        live_demo: "https://doubt-solver-demo.vercel.app",
        source_code: "https://github.com/divy1710/SGPPROJECT",
        image: "🎓",
        gradient: "from-blue-400 to-indigo-600",
        category: "Education",
    },
    Project {
        title: "AgriRant - Agricultural Equipment Rental Platform",
        short_description: "Digital rental platform helping farmers access modern farming \
                            equipment through hierarchical resource management.",
        full_description: "AgriRant is a comprehensive MERN stack solution designed to \
                           revolutionize agricultural equipment accessibility for farmers. The \
                           platform implements a sophisticated hierarchical resource management \
                           system (State → District → Taluka → Village) ensuring efficient \
                           distribution and monitoring of farming equipment. Features include \
                           real-time tracking of equipment assignments, detailed rental history \
                           to prevent misuse, and integrated Stripe payment gateway for secure \
                           transactions. The platform automates manual processes, reduces \
                           inefficiencies, and enables transparent, data-driven decision-making \
                           for administrators while improving agricultural resource utilization.",
        technologies: &[
            "React.js",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Stripe API",
            "TailwindCSS",
            "JWT",
        ],
        key_features: &[
            "Hierarchical Resource Management System",
            "Real-time Equipment Tracking",
            "Stripe Payment Integration",
            "Rental History & Analytics",
            "Location-based Equipment Distribution",
            "Administrative Dashboard",
        ],
        live_demo: "https://agrirant-demo.vercel.app",
        source_code: "https://github.com/vinitsaspara/AgriRent",
        image: "🚜",
        gradient: "from-green-400 to-emerald-600",
        category: "Agriculture",
    },
];

/// Splits a technology list into the three tags shown on the card and the
/// count folded into a "+N more" pill.
fn tech_preview(technologies: &'static [&'static str]) -> (&'static [&'static str], usize) {
    let shown = technologies.len().min(3);
    (&technologies[..shown], technologies.len() - shown)
}

#[component]
pub fn Projects() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let palette = move || theme.get().palette();
    let is_dark = move || theme.get().is_dark;

    let (title_ref, title_in_view) = use_reveal(0.3);
    let (projects_ref, projects_in_view) = use_reveal(0.2);

    let selected = RwSignal::new(None::<usize>);

    let section_class = move || {
        let scheme = if is_dark() {
            "bg-gray-900 text-white"
        } else {
            "bg-gray-100 text-gray-900"
        };
        format!("py-20 {scheme} relative overflow-hidden transition-colors duration-500")
    };

    let title_class = move || {
        let reveal = if title_in_view.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!("text-center mb-16 transition-all duration-800 {reveal}")
    };

    let grid_class = move || {
        let reveal = if projects_in_view.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!("grid md:grid-cols-2 gap-8 transition-all duration-800 {reveal}")
    };

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let (shown_techs, extra) = tech_preview(project.technologies);
            let tech_tags = shown_techs
                .iter()
                .map(|tech| {
                    view! {
                        <span class=move || {
                            format!(
                                "px-2 py-1 rounded text-xs {} {}",
                                palette().tertiary,
                                palette().text_muted,
                            )
                        }>{*tech}</span>
                    }
                })
                .collect_view();
            let more_tag = (extra > 0).then(|| {
                view! {
                    <span class=move || {
                        format!("px-2 py-1 rounded text-xs {}", palette().text_muted)
                    }>{format!("+{extra} more")}</span>
                }
            });

            view! {
                <div
                    class=move || {
                        format!(
                            "group {} rounded-xl p-6 shadow-lg hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2 border {}",
                            palette().card,
                            palette().border,
                        )
                    }
                    style:animation-delay=format!("{}ms", index * 100)
                >
                    // Project icon and category
                    <div class="flex items-center justify-between mb-4">
                        <div class=format!(
                            "text-4xl p-3 rounded-lg bg-gradient-to-r {} text-white",
                            project.gradient,
                        )>{project.image}</div>
                        <span class=move || {
                            format!(
                                "px-3 py-1 rounded-full text-xs font-medium {} {}",
                                palette().tertiary,
                                palette().text_secondary,
                            )
                        }>{project.category}</span>
                    </div>

                    <h3 class=move || {
                        format!(
                            "text-xl font-bold {} mb-3 group-hover:text-transparent group-hover:bg-clip-text group-hover:bg-gradient-to-r group-hover:{} transition-all duration-300",
                            palette().text_primary,
                            project.gradient,
                        )
                    }>{project.title}</h3>

                    <p class=move || {
                        format!("{} mb-6 leading-relaxed line-clamp-3", palette().text_secondary)
                    }>{project.short_description}</p>

                    <div class="mb-6">
                        <div class="flex flex-wrap gap-1">{tech_tags} {more_tag}</div>
                    </div>

                    // Action buttons
                    <div class="flex space-x-3">
                        <a
                            href=project.source_code
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 bg-gray-800 hover:bg-gray-700 text-white px-4 py-2 rounded-lg text-sm font-medium transition-all duration-300 text-center flex items-center justify-center space-x-2 group"
                        >
                            <svg
                                class="w-4 h-4 group-hover:scale-110 transition-transform duration-300"
                                fill="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"></path>
                            </svg>
                            <span>"View GitHub"</span>
                        </a>
                        <button
                            class=format!(
                                "flex-1 bg-gradient-to-r {} text-white px-4 py-2 rounded-lg text-sm font-medium transition-all duration-300 transform hover:scale-105 hover:shadow-lg flex items-center justify-center space-x-2",
                                project.gradient,
                            )
                            on:click=move |_| selected.set(Some(index))
                        >
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
                                ></path>
                            </svg>
                            <span>"More Details"</span>
                        </button>
                    </div>

                    // Live demo link
                    <div class="mt-3">
                        <a
                            href=project.live_demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class=move || {
                                format!(
                                    "block w-full text-center {} hover:text-blue-500 text-sm transition-colors duration-300 flex items-center justify-center space-x-1",
                                    palette().text_secondary,
                                )
                            }
                        >
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"
                                ></path>
                            </svg>
                            <span>"View Live Demo"</span>
                        </a>
                    </div>
                </div>
            }
        })
        .collect_view();

    // Details modal for the selected project.
    let modal = move || {
        selected.get().map(|index| {
            let project = &PROJECTS[index];
            let features = project
                .key_features
                .iter()
                .map(|feature| {
                    view! {
                        <div class=move || {
                            format!("flex items-center space-x-2 {}", palette().text_secondary)
                        }>
                            <span class="text-green-500">"✓"</span>
                            <span>{*feature}</span>
                        </div>
                    }
                })
                .collect_view();
            let techs = project
                .technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class=move || {
                            format!(
                                "px-3 py-1 rounded-full text-sm {} {}",
                                palette().tertiary,
                                palette().text_secondary,
                            )
                        }>{*tech}</span>
                    }
                })
                .collect_view();

            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black bg-opacity-75 backdrop-blur-sm">
                    <div class=move || {
                        format!(
                            "max-w-4xl w-full max-h-[90vh] overflow-y-auto {} rounded-2xl shadow-2xl",
                            palette().card,
                        )
                    }>
                        <div class=move || {
                            format!(
                                "sticky top-0 flex justify-between items-center p-6 border-b {} bg-opacity-95 backdrop-blur-sm",
                                palette().border,
                            )
                        }>
                            <h3 class=move || {
                                format!("text-2xl font-bold {}", palette().text_primary)
                            }>{project.title}</h3>
                            <button
                                class=move || {
                                    format!(
                                        "p-2 rounded-full {} transition-colors duration-200",
                                        palette().hover,
                                    )
                                }
                                on:click=move |_| selected.set(None)
                            >
                                <svg
                                    class="w-6 h-6"
                                    fill="none"
                                    stroke="currentColor"
                                    viewBox="0 0 24 24"
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    ></path>
                                </svg>
                            </button>
                        </div>

                        <div class="p-6 space-y-6">
                            <div class=move || {
                                format!("text-lg {} leading-relaxed", palette().text_secondary)
                            }>{project.full_description}</div>

                            <div>
                                <h4 class=move || {
                                    format!("text-xl font-semibold {} mb-3", palette().text_primary)
                                }>"Key Features"</h4>
                                <div class="grid md:grid-cols-2 gap-2">{features}</div>
                            </div>

                            <div>
                                <h4 class=move || {
                                    format!("text-xl font-semibold {} mb-3", palette().text_primary)
                                }>"Technologies Used"</h4>
                                <div class="flex flex-wrap gap-2">{techs}</div>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <section class=section_class>
            // Background accents
            <div class="absolute inset-0 overflow-hidden">
                <div class=move || {
                    format!(
                        "absolute -top-40 -right-40 w-80 h-80 {} rounded-full blur-3xl",
                        if is_dark() { "bg-blue-500/5" } else { "bg-blue-500/10" },
                    )
                }></div>
                <div class=move || {
                    format!(
                        "absolute -bottom-40 -left-40 w-80 h-80 {} rounded-full blur-3xl",
                        if is_dark() { "bg-purple-500/5" } else { "bg-purple-500/10" },
                    )
                }></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 relative z-10">
                <div node_ref=title_ref class=title_class>
                    <h2 class=move || {
                        format!("text-4xl md:text-5xl font-bold {} mb-4", palette().text_primary)
                    }>"Featured Projects"</h2>
                    <p class=move || {
                        format!("text-xl {} max-w-3xl mx-auto", palette().text_secondary)
                    }>
                        "A showcase of my recent work, featuring modern web applications built \
                         with cutting-edge technologies"
                    </p>
                    <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-600 mx-auto mt-6"></div>
                </div>

                <div node_ref=projects_ref class=grid_class>{cards}</div>
            </div>

            {modal}
        </section>
    }
}
