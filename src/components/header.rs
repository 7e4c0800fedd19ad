//! Public site navbar

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::AppState;

/// Navbar for the public pages (landing, login, registration)
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_auth = Signal::derive({
        let state = state.clone();
        move || state.is_authenticated()
    });
    let dashboard_href = {
        let state = state.clone();
        move || {
            state
                .role()
                .map(|r| r.dashboard_path())
                .unwrap_or_else(|| "/login".to_string())
        }
    };

    view! {
        <nav class="sticky top-0 z-50 border-b border-primary-100 bg-white">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                // Logo
                <a href="/" class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <span class="text-2xl">"🏋️"</span>
                    <span class="text-xl font-bold text-primary-950">"FitMinds"</span>
                </a>

                // Navigation
                <div class="hidden sm:flex items-center gap-6">
                    <a href="/" class="text-sm font-medium text-primary-900 hover:text-primary-600">
                        "Home"
                    </a>
                    <a href="/#plans" class="text-sm font-medium text-primary-700 hover:text-primary-600">
                        "Subscription Plans"
                    </a>
                    <a
                        href="/register-trainer"
                        class="text-sm font-medium text-primary-700 hover:text-primary-600"
                    >
                        "Work With Us"
                    </a>

                    {move || {
                        if is_auth.get() {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            let dashboard = dashboard_href();
                            view! {
                                <div class="flex items-center gap-2">
                                    <a href=dashboard class="btn btn-ghost">
                                        "Dashboard"
                                    </a>
                                    <button
                                        on:click=move |_| {
                                            state.clear_auth();
                                            navigate("/", Default::default());
                                        }
                                        class="btn btn-ghost"
                                    >
                                        "Sign Out"
                                    </button>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="flex items-center gap-2">
                                    <a href="/login" class="btn btn-ghost">
                                        "Login"
                                    </a>
                                    <a href="/register-member" class="btn btn-primary">
                                        "Register"
                                    </a>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
