//! Site footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-primary-100 bg-white">
            <div class="max-w-7xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-primary-500">
                <div class="flex items-center gap-2">
                    <span>"🏋️"</span>
                    <span class="font-semibold text-primary-900">"FitMinds"</span>
                </div>
                <p>"Transform your body. Master your mind."</p>
                <p>"© 2025 FitMinds Fitness"</p>
            </div>
        </footer>
    }
}
