//! Skills section: per-category cards with animated proficiency bars and a
//! core-competencies summary.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::visibility::use_reveal;

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

struct SkillCategory {
    title: &'static str,
    icon: &'static str,
    color: &'static str,
    skills: &'static [(&'static str, usize)],
}

const CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        icon: "🎨",
        color: "from-blue-400 to-cyan-400",
        skills: &[
            ("React.js", 90),
            ("JavaScript (ES6+)", 88),
            ("HTML5 & CSS3", 92),
            ("Tailwind CSS", 85),
            ("Bootstrap", 80),
            ("Redux", 75),
            ("TypeScript", 70),
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: "⚙️",
        color: "from-green-400 to-emerald-400",
        skills: &[
            ("Node.js", 85),
            ("Express.js", 88),
            ("RESTful APIs", 90),
            ("JWT Authentication", 82),
            ("Socket.io", 75),
            ("Middleware", 80),
            ("Server Security", 78),
        ],
    },
    SkillCategory {
        title: "Databases",
        icon: "🗄️",
        color: "from-purple-400 to-pink-400",
        skills: &[
            ("MongoDB", 87),
            ("Mongoose ODM", 85),
            ("MySQL", 75),
            ("PostgreSQL", 70),
            ("Database Design", 80),
            ("Query Optimization", 72),
            ("Data Modeling", 78),
        ],
    },
    SkillCategory {
        title: "Tools & Platforms",
        icon: "🛠️",
        color: "from-orange-400 to-red-400",
        skills: &[
            ("Git & GitHub", 90),
            ("VS Code", 95),
            ("Postman", 85),
            ("Docker", 65),
            ("AWS Basics", 60),
            ("Netlify/Vercel", 80),
            ("npm/yarn", 88),
        ],
    },
];

const COMPETENCIES: [(&str, &str, &str, &str); 3] = [
    (
        "🧠",
        "Problem Solving",
        "Breaking down complex challenges into manageable solutions",
        "from-blue-50 to-cyan-50",
    ),
    (
        "📚",
        "Continuous Learning",
        "Staying updated with latest technologies and best practices",
        "from-purple-50 to-pink-50",
    ),
    (
        "🤝",
        "Collaboration",
        "Working effectively in teams and communicating technical concepts",
        "from-green-50 to-emerald-50",
    ),
];

/// How many of the five proficiency dots light up for a category: the average
/// skill level mapped onto a 0..=5 scale, rounded up.
fn proficiency_dots(skills: &[(&str, usize)]) -> usize {
    let total: usize = skills.iter().map(|(_, level)| level).sum();
    total.div_ceil(20 * skills.len())
}

#[component]
pub fn Skills() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let palette = move || theme.get().palette();

    let (title_ref, title_in_view) = use_reveal(0.3);
    let (skills_ref, skills_in_view) = use_reveal(0.2);

    // Cards pop in one at a time once the grid scrolls into view.
    let visible_cards = RwSignal::new(0usize);

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Timeout;

        Effect::new(move |_| {
            if skills_in_view.get() {
                for index in 0..CATEGORIES.len() {
                    let delay = u32::try_from(index * 150).unwrap_or(u32::MAX);
                    Timeout::new(delay, move || {
                        visible_cards.update(|count| *count = (*count).max(index + 1));
                    })
                    .forget();
                }
            }
        });
    }

    let title_class = move || {
        let reveal = if title_in_view.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!("text-center mb-16 transition-all duration-800 {reveal}")
    };

    let cards = CATEGORIES
        .iter()
        .enumerate()
        .map(|(category_index, category)| {
            let card_class = move || {
                let reveal = if visible_cards.get() > category_index {
                    "opacity-100 translate-y-0 scale-100"
                } else {
                    "opacity-0 translate-y-8 scale-95"
                };
                format!(
                    "bg-white rounded-2xl shadow-xl p-6 hover:shadow-2xl transition-all duration-500 transform hover:-translate-y-3 hover:scale-105 group {reveal}"
                )
            };

            let bars = category
                .skills
                .iter()
                .enumerate()
                .map(|(skill_index, (name, level))| {
                    let level = *level;
                    let width = move || {
                        if visible_cards.get() > category_index {
                            format!("{level}%")
                        } else {
                            "0%".to_string()
                        }
                    };
                    view! {
                        <div class="group/skill">
                            <div class="flex justify-between items-center mb-2">
                                <span class="text-sm font-medium text-gray-700 group-hover/skill:text-gray-900 group-hover/skill:font-semibold transition-all duration-200">
                                    {*name}
                                </span>
                                <span class="text-xs text-gray-500 group-hover/skill:text-gray-700 group-hover/skill:font-medium transition-all duration-200">
                                    {level}"%"
                                </span>
                            </div>
                            <div class="w-full bg-gray-200 rounded-full h-2 overflow-hidden group-hover/skill:bg-gray-300 transition-colors duration-200">
                                <div
                                    class=format!(
                                        "h-2 bg-gradient-to-r {} rounded-full transition-all duration-1000 ease-out transform group-hover/skill:scale-105 animate-[width_2s_ease-out_1s_forwards] origin-left",
                                        category.color,
                                    )
                                    style:width=width
                                    style:animation-delay=format!(
                                        "{}ms",
                                        category_index * 150 + skill_index * 100,
                                    )
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            let lit = proficiency_dots(category.skills);
            let dots = (0..5)
                .map(|i| {
                    let dot_class = if i < lit {
                        format!(
                            "w-2 h-2 rounded-full transition-all duration-300 hover:scale-150 bg-gradient-to-r {} group-hover:shadow-lg",
                            category.color,
                        )
                    } else {
                        "w-2 h-2 rounded-full transition-all duration-300 hover:scale-150 bg-gray-200 group-hover:bg-gray-300"
                            .to_string()
                    };
                    view! { <div class=dot_class></div> }
                })
                .collect_view();

            view! {
                <div
                    class=card_class
                    style:transition-delay=format!("{}ms", category_index * 150)
                >
                    <div class="text-center mb-6">
                        <div class="text-4xl mb-3 group-hover:scale-125 group-hover:rotate-12 transition-transform duration-300">
                            {category.icon}
                        </div>
                        <h3 class="text-2xl font-bold text-gray-900 group-hover:text-transparent group-hover:bg-clip-text group-hover:bg-gradient-to-r group-hover:from-blue-500 group-hover:to-purple-600 transition-all duration-300">
                            {category.title}
                        </h3>
                        <div class=format!(
                            "w-16 h-1 bg-gradient-to-r {} mx-auto mt-2 rounded-full group-hover:w-20 transition-all duration-300",
                            category.color,
                        )></div>
                    </div>

                    <div class="space-y-4">{bars}</div>

                    <div class="mt-6 pt-4 border-t border-gray-100 group-hover:border-gray-200 transition-colors duration-300">
                        <div class="text-center">
                            <span class="text-sm text-gray-500 group-hover:text-gray-600 transition-colors duration-300">
                                "Proficiency Level"
                            </span>
                            <div class="flex justify-center space-x-1 mt-2">{dots}</div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let summary_class = move || {
        let reveal = if skills_in_view.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!(
            "mt-16 bg-white rounded-2xl shadow-xl p-8 transition-all duration-800 delay-700 {reveal}"
        )
    };

    let competencies = COMPETENCIES
        .iter()
        .enumerate()
        .map(|(index, (icon, title, description, tone))| {
            let competency_class = move || {
                let reveal = if skills_in_view.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!(
                    "text-center p-6 bg-gradient-to-br {tone} rounded-xl hover:shadow-lg hover:-translate-y-2 transition-all duration-300 group cursor-pointer {reveal}"
                )
            };
            view! {
                <div
                    class=competency_class
                    style:transition-delay=format!("{}ms", 800 + index * 200)
                >
                    <div class="text-3xl mb-3 group-hover:scale-125 group-hover:rotate-6 transition-transform duration-300">
                        {*icon}
                    </div>
                    <h4 class="text-lg font-semibold text-gray-900 mb-2 group-hover:text-blue-600 transition-colors duration-300">
                        {*title}
                    </h4>
                    <p class="text-gray-600 text-sm group-hover:text-gray-700 transition-colors duration-300">
                        {*description}
                    </p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class=move || {
            format!("py-20 {} transition-colors duration-500", palette().secondary)
        }>
            <div class="max-w-7xl mx-auto px-4">
                <div node_ref=title_ref class=title_class>
                    <h2 class=move || {
                        format!("text-4xl md:text-5xl font-bold {} mb-4", palette().text_primary)
                    }>"Technical Skills"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "A comprehensive toolkit of modern web development technologies and frameworks"
                    </p>
                    <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-600 mx-auto mt-4"></div>
                </div>

                <div node_ref=skills_ref class="grid lg:grid-cols-2 xl:grid-cols-4 gap-8">
                    {cards}
                </div>

                // Additional skills summary
                <div class=summary_class>
                    <div class="text-center mb-8">
                        <h3 class="text-2xl font-bold text-gray-900 mb-4">"Core Competencies"</h3>
                        <p class="text-gray-600">
                            "Beyond technical skills, here's what makes me effective as a developer"
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6">{competencies}</div>
                </div>
            </div>
        </section>
    }
}
