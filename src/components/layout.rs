//! Dashboard shell: role-scoped sidebar plus page chrome

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::nav::nav_links;
use crate::state::AppState;
use crate::types::Role;

/// Per-role dashboard chrome wrapping the page content
#[component]
pub fn DashboardLayout(role: Role, children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let location = use_location();
    let sidebar_open = RwSignal::new(false);

    let user_name = {
        let state = state.clone();
        move || {
            state
                .user
                .get()
                .and_then(|u| u.name)
                .unwrap_or_else(|| "Account".to_string())
        }
    };
    let initial = {
        let user_name = user_name.clone();
        move || {
            user_name()
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_else(|| "U".to_string())
        }
    };

    let sign_out = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |_| {
            state.clear_auth();
            navigate("/", Default::default());
        }
    };

    view! {
        <div class="min-h-screen bg-primary-50 flex">
            // Mobile overlay
            <Show when=move || sidebar_open.get()>
                <div
                    class="fixed inset-0 z-40 bg-primary-900/50 lg:hidden"
                    on:click=move |_| sidebar_open.set(false)
                ></div>
            </Show>

            // Sidebar
            <aside class=move || format!(
                "fixed lg:static inset-y-0 left-0 z-50 w-64 bg-white border-r border-primary-200 \
                 transform transition-transform duration-200 lg:translate-x-0 {}",
                if sidebar_open.get() { "translate-x-0" } else { "-translate-x-full" }
            )>
                <div class="flex h-16 items-center gap-2 border-b border-primary-200 px-6">
                    <span class="text-xl">"🏋️"</span>
                    <span class="text-lg font-bold text-primary-900">"FitMinds"</span>
                </div>

                <div class="flex flex-col px-4 py-6 space-y-1 h-[calc(100vh-4rem)] overflow-y-auto">
                    {nav_links(role)
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            let active = {
                                let location = location.clone();
                                move || location.pathname.get() == href
                            };
                            view! {
                                <a
                                    href=href
                                    on:click=move |_| sidebar_open.set(false)
                                    class=move || format!(
                                        "flex items-center gap-3 px-4 py-3 text-sm font-medium rounded-md transition-colors {}",
                                        if active() {
                                            "bg-primary-50 text-primary-700"
                                        } else {
                                            "text-primary-600 hover:bg-primary-50 hover:text-primary-900"
                                        }
                                    )
                                >
                                    <span>{link.icon}</span>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}

                    <div class="mt-auto pt-6 border-t border-primary-200">
                        <button
                            on:click=sign_out
                            class="flex items-center gap-3 w-full px-4 py-3 text-sm font-medium rounded-md \
                                   text-red-600 hover:text-red-700 hover:bg-red-50 transition-colors"
                        >
                            <span>"🚪"</span>
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </aside>

            // Main content
            <div class="flex-1 flex flex-col min-h-0 overflow-hidden">
                <header class="flex h-16 items-center justify-between border-b border-primary-200 bg-white px-4 lg:px-8">
                    <button
                        on:click=move |_| sidebar_open.set(true)
                        class="text-primary-500 hover:text-primary-700 lg:hidden"
                    >
                        "☰"
                    </button>

                    <div class="flex items-center ml-auto gap-4">
                        <span class="text-sm font-medium text-primary-700 hidden md:block">
                            {user_name.clone()}
                        </span>
                        <div class="h-8 w-8 rounded-full bg-primary-100 flex items-center justify-center text-primary-700 font-bold">
                            {initial}
                        </div>
                    </div>
                </header>

                <main class="flex-1 overflow-y-auto p-4 lg:p-8">{children()}</main>
            </div>
        </div>
    }
}
