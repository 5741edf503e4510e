//! Full-screen splash shown while the page boots.

use leptos::prelude::*;

/// Spinner, initials, and a shimmering load bar. Purely decorative; the app
/// shell swaps it out on a fixed timer.
#[component]
pub fn Preloader() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 flex items-center justify-center z-50">
            <div class="text-center">
                <div class="relative mb-8">
                    <div class="w-24 h-24 border-4 border-blue-500/30 rounded-full animate-spin">
                        <div class="absolute inset-4 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center animate-pulse">
                            <span class="text-white text-2xl font-bold">"DK"</span>
                        </div>
                    </div>
                </div>

                <div class="text-white text-lg font-medium animate-pulse">"Loading Portfolio..."</div>

                <div class="mt-4 w-48 h-1 bg-gray-700 rounded-full mx-auto overflow-hidden">
                    <div class="h-full bg-gradient-to-r from-blue-500 to-purple-600 rounded-full animate-pulse"></div>
                </div>
            </div>
        </div>
    }
}
