//! Contact section: contact methods, the message form with floating labels,
//! and the page footer.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::visibility::use_reveal;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

#[cfg(target_arch = "wasm32")]
const SUBMIT_MS: u32 = 2000;

struct ContactMethod {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    link: &'static str,
    color: &'static str,
    icon_hover: &'static str,
    external: bool,
}

static METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "📧",
        title: "Email",
        value: "divykalathiya17@gmail.com",
        link: "mailto:divy.kalathiya@email.com",
        color: "from-blue-400 to-cyan-400",
        icon_hover: "group-hover:scale-110 group-hover:animate-bounce",
        external: false,
    },
    ContactMethod {
        icon: "💼",
        title: "LinkedIn",
        value: "linkedin.com/in/divykalathiya",
        link: "https://www.linkedin.com/in/divy-kalathiya-96324a2a1?utm_source=share&utm_campaign=share_via&utm_content=profile&utm_medium=android_app",
        color: "from-blue-600 to-blue-800",
        icon_hover: "group-hover:scale-110 group-hover:rotate-6",
        external: true,
    },
    ContactMethod {
        icon: "🐱",
        title: "GitHub",
        value: "github.com/divykalathiya",
        link: "https://github.com/divy1710",
        color: "from-gray-700 to-gray-900",
        icon_hover: "group-hover:scale-110 group-hover:-rotate-6",
        external: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactForm {
    fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A label floats up while its field is focused or holds text.
fn label_active(focused: bool, value: &str) -> bool {
    focused || !value.is_empty()
}

fn input_classes(active: bool) -> String {
    let border = if active {
        "border-blue-500 shadow-lg shadow-blue-500/20"
    } else {
        "border-gray-600 hover:border-gray-500"
    };
    format!(
        "w-full px-4 py-3 bg-white/10 border-2 rounded-lg text-white placeholder-transparent focus:outline-none transition-all duration-300 {border}"
    )
}

fn label_classes(active: bool) -> &'static str {
    if active {
        "absolute left-4 transition-all duration-300 pointer-events-none -top-2 text-sm text-blue-400 bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 px-2"
    } else {
        "absolute left-4 transition-all duration-300 pointer-events-none top-3 text-gray-400"
    }
}

fn field_input(
    form: RwSignal<ContactForm>,
    focused: RwSignal<Option<FormField>>,
    field: FormField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let active = move || form.with(|f| label_active(focused.get() == Some(field), f.field(field)));
    view! {
        <div class="relative">
            <input
                type=input_type
                id=field.id()
                name=field.id()
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=move |_| focused.set(Some(field))
                on:blur=move |_| focused.set(None)
                required
                class=move || input_classes(active())
                placeholder=placeholder
            />
            <label for=field.id() class=move || label_classes(active())>
                {placeholder}
            </label>
        </div>
    }
}

fn field_textarea(
    form: RwSignal<ContactForm>,
    focused: RwSignal<Option<FormField>>,
    field: FormField,
    placeholder: &'static str,
) -> impl IntoView {
    let active = move || form.with(|f| label_active(focused.get() == Some(field), f.field(field)));
    view! {
        <div class="relative">
            <textarea
                id=field.id()
                name=field.id()
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=move |_| focused.set(Some(field))
                on:blur=move |_| focused.set(None)
                required
                rows=5
                class=move || format!("{} resize-none", input_classes(active()))
                placeholder=placeholder
            ></textarea>
            <label for=field.id() class=move || label_classes(active())>
                {placeholder}
            </label>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let is_dark = move || theme.get().is_dark;

    let (title_ref, title_in_view) = use_reveal(0.3);
    let (form_ref, form_in_view) = use_reveal(0.3);

    let form = RwSignal::new(ContactForm::default());
    let focused = RwSignal::new(None::<FormField>);
    let sending = RwSignal::new(false);

    let on_submit = {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo_timers::callback::Timeout;

            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                sending.set(true);
                // The form has no backend; acknowledge and reset after a beat.
                Timeout::new(SUBMIT_MS, move || {
                    sending.set(false);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(
                            "Thank you for your message! I'll get back to you soon.",
                        );
                    }
                    form.update(ContactForm::clear);
                })
                .forget();
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
            }
        }
    };

    let section_class = move || {
        let scheme = if is_dark() {
            "bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900"
        } else {
            "bg-gradient-to-br from-blue-900 via-purple-900 to-pink-900"
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

    let info_class = move || {
        let reveal = if title_in_view.get() {
            "opacity-100 translate-x-0"
        } else {
            "opacity-0 -translate-x-8"
        };
        format!("space-y-8 transition-all duration-800 delay-200 {reveal}")
    };

    let methods = METHODS
        .iter()
        .enumerate()
        .map(|(index, method)| {
            let card_class = move || {
                let reveal = if title_in_view.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!(
                    "group bg-white/10 backdrop-blur-sm rounded-2xl p-6 hover:bg-white/20 transition-all duration-500 transform hover:-translate-y-3 hover:scale-105 hover:shadow-2xl {reveal}"
                )
            };
            view! {
                <a
                    href=method.link
                    target=if method.external { "_blank" } else { "_self" }
                    rel=if method.external { "noopener noreferrer" } else { "" }
                    class=card_class
                    style:transition-delay=format!("{}ms", 400 + index * 100)
                >
                    <div class="flex items-center space-x-4">
                        <div class=format!(
                            "w-12 h-12 bg-gradient-to-r {} rounded-xl flex items-center justify-center text-white text-xl transition-all duration-500 {}",
                            method.color,
                            method.icon_hover,
                        )>{method.icon}</div>
                        <div>
                            <h4 class="text-white font-semibold group-hover:text-blue-300 transition-colors duration-300">
                                {method.title}
                            </h4>
                            <p class="text-gray-300 text-sm group-hover:text-white transition-colors duration-300">
                                {method.value}
                            </p>
                        </div>
                    </div>
                </a>
            }
        })
        .collect_view();

    let stats_class = move || {
        let reveal = if title_in_view.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        };
        format!(
            "bg-white/10 backdrop-blur-sm rounded-2xl p-6 transition-all duration-800 delay-600 {reveal}"
        )
    };

    let form_class = move || {
        let reveal = if form_in_view.get() {
            "opacity-100 translate-x-0"
        } else {
            "opacity-0 translate-x-8"
        };
        format!(
            "bg-white/10 backdrop-blur-sm rounded-2xl p-8 transition-all duration-800 delay-400 {reveal}"
        )
    };

    let submit_class = move || {
        let pulse = if sending.get() { "animate-pulse" } else { "" };
        format!(
            "w-full bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white font-semibold py-4 px-8 rounded-lg transform transition-all duration-300 hover:-translate-y-1 hover:scale-105 hover:shadow-2xl disabled:opacity-50 disabled:cursor-not-allowed {pulse}"
        )
    };

    let footer_class = move || {
        let reveal = if form_in_view.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!(
            "mt-20 pt-8 border-t border-gray-700 text-center transition-all duration-800 delay-800 {reveal}"
        )
    };

    view! {
        <section class=section_class>
            // Background accents
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-blue-500/10 rounded-full animate-pulse"></div>
                <div
                    class="absolute -bottom-40 -left-40 w-80 h-80 bg-purple-500/10 rounded-full animate-pulse"
                    style:animation-delay="1s"
                ></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 relative z-10">
                <div node_ref=title_ref class=title_class>
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-4">
                        "Let's Build Something Amazing Together"
                    </h2>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto">
                        "I'm always excited to discuss new opportunities, collaborate on \
                         innovative projects, or simply connect with fellow developers and tech \
                         enthusiasts."
                    </p>
                    <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-600 mx-auto mt-4"></div>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    // Contact information
                    <div class=info_class>
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-6">"Get In Touch"</h3>
                            <p class="text-gray-300 text-lg leading-relaxed mb-8">
                                "Whether you're a recruiter looking for fresh talent, a fellow \
                                 developer interested in collaboration, or someone with an \
                                 exciting project idea, I'd love to hear from you. Let's connect \
                                 and explore how we can work together to create impactful digital \
                                 solutions."
                            </p>
                        </div>

                        <div class="grid sm:grid-cols-2 gap-6">{methods}</div>

                        // Quick stats
                        <div class=stats_class>
                            <h4 class="text-white font-semibold mb-4">"Quick Stats"</h4>
                            <div class="grid grid-cols-3 gap-4 text-center">
                                <div class="group cursor-pointer">
                                    <div class="text-2xl font-bold text-blue-400 group-hover:scale-125 transition-transform duration-300">
                                        "24h"
                                    </div>
                                    <div class="text-gray-400 text-sm group-hover:text-gray-300 transition-colors duration-300">
                                        "Response Time"
                                    </div>
                                </div>
                                <div class="group cursor-pointer">
                                    <div class="text-2xl font-bold text-purple-400 group-hover:scale-125 transition-transform duration-300">
                                        "100%"
                                    </div>
                                    <div class="text-gray-400 text-sm group-hover:text-gray-300 transition-colors duration-300">
                                        "Commitment"
                                    </div>
                                </div>
                                <div class="group cursor-pointer">
                                    <div class="text-2xl font-bold text-green-400 group-hover:scale-125 transition-transform duration-300">
                                        "15+"
                                    </div>
                                    <div class="text-gray-400 text-sm group-hover:text-gray-300 transition-colors duration-300">
                                        "Projects Done"
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Contact form
                    <div node_ref=form_ref class=form_class>
                        <h3 class="text-2xl font-bold text-white mb-6">"Send Me a Message"</h3>

                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid sm:grid-cols-2 gap-6">
                                {field_input(form, focused, FormField::Name, "text", "Your Name")}
                                {field_input(
                                    form,
                                    focused,
                                    FormField::Email,
                                    "email",
                                    "Email Address",
                                )}
                            </div>

                            {field_input(form, focused, FormField::Subject, "text", "Subject")}
                            {field_textarea(form, focused, FormField::Message, "Your Message")}

                            <button
                                type="submit"
                                prop:disabled=move || sending.get()
                                class=submit_class
                            >
                                <Show
                                    when=move || sending.get()
                                    fallback=|| view! { "🚀 Send Message" }
                                >
                                    <span class="flex items-center justify-center space-x-2">
                                        <svg class="animate-spin h-5 w-5" viewBox="0 0 24 24">
                                            <circle
                                                class="opacity-25"
                                                cx="12"
                                                cy="12"
                                                r="10"
                                                stroke="currentColor"
                                                stroke-width="4"
                                                fill="none"
                                            ></circle>
                                            <path
                                                class="opacity-75"
                                                fill="currentColor"
                                                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                                            ></path>
                                        </svg>
                                        <span>"Sending Message..."</span>
                                    </span>
                                </Show>
                            </button>
                        </form>

                        <div class="mt-6 text-center">
                            <p class="text-gray-400 text-sm">
                                "I typically respond within 24 hours. Looking forward to \
                                 connecting with you!"
                            </p>
                        </div>
                    </div>
                </div>

                // Footer
                <div class=footer_class>
                    <p class="text-gray-400">
                        "© 2024 Divy Kalathiya. Built with ❤️ using Leptos, Tailwind CSS, and \
                         lots of coffee."
                    </p>
                    <div class="flex justify-center space-x-6 mt-4">
                        <a
                            href="https://linkedin.com/in/divykalathiya"
                            class="text-gray-400 hover:text-blue-400 transition-all duration-300 transform hover:scale-110 hover:-translate-y-1"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href="https://github.com/divykalathiya"
                            class="text-gray-400 hover:text-white transition-all duration-300 transform hover:scale-110 hover:-translate-y-1"
                        >
                            "GitHub"
                        </a>
                        <a
                            href="mailto:divy.kalathiya@email.com"
                            class="text-gray-400 hover:text-green-400 transition-all duration-300 transform hover:scale-110 hover:-translate-y-1"
                        >
                            "Email"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
