//! Login page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::state::AppState;

/// Sign-in form; redirects to the role's dashboard on success
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Already logged in: straight to the dashboard
    let navigate_for_redirect = navigate.clone();
    let state_for_redirect = state.clone();
    Effect::new(move |_| {
        if let Some(role) = state_for_redirect.role() {
            navigate_for_redirect(&role.dashboard_path(), Default::default());
        }
    });

    let navigate_for_submit = navigate.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get().trim().to_string();
        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();

        spawn_local(async move {
            state.is_loading.set(true);
            state.clear_error();

            let base = state.api_base.get_untracked();
            let result = api::login(&base, &email_val, &password_val).await;

            state.is_loading.set(false);

            match result {
                Ok(session) => {
                    // The resolved role comes straight from the login call;
                    // no storage re-read between write and redirect.
                    let dashboard = session.user.role.dashboard_path();
                    state.save_auth(&session);
                    navigate(&dashboard, Default::default());
                }
                Err(e) => state.set_error(e),
            }
        });
    };

    let error = state.error;
    let is_loading = state.is_loading;

    view! {
        <Title text="Sign in | FitMinds" />
        <div class="min-h-screen flex items-center justify-center bg-primary-50 py-12 px-4">
            <div class="max-w-md w-full space-y-8 bg-white p-8 rounded-xl shadow-lg border border-primary-100">
                <div class="text-center">
                    <span class="text-5xl">"🏋️"</span>
                    <h2 class="mt-6 text-3xl font-extrabold text-primary-950">"Sign in"</h2>
                    <p class="mt-2 text-sm text-primary-700">
                        "Enter your email and password to access your account."
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="space-y-4">
                        <input
                            type="email"
                            required=true
                            placeholder="Email address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            class="input w-full"
                        />
                        <input
                            type="password"
                            required=true
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            class="input w-full"
                        />
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="flex items-center gap-2 p-3 text-sm text-red-600 bg-red-50 rounded-md">
                            <span>"⚠"</span>
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="btn btn-primary w-full py-3"
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>

                    <div class="text-center text-sm space-x-4">
                        <a href="/register-member" class="text-primary-600 hover:underline">
                            "Register as Member"
                        </a>
                        <a href="/register-trainer" class="text-primary-600 hover:underline">
                            "Apply as Trainer"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
