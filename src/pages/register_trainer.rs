//! Trainer application page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::session::{self, BrowserStore};
use crate::state::AppState;
use crate::types::TrainerRegisterRequest;

const MIN_PASSWORD_LEN: usize = 8;

/// Trainer sign-up form; accounts land in the admin approval queue
#[component]
pub fn RegisterTrainerPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());
    let short_description = RwSignal::new(String::new());

    let state_for_submit = state.clone();
    let navigate_for_submit = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let data = TrainerRegisterRequest {
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get().trim().to_string(),
            specialization: specialization.get().trim().to_string(),
            short_description: short_description.get().trim().to_string(),
        };
        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();

        if data.password.len() < MIN_PASSWORD_LEN {
            state.set_error(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
            return;
        }

        spawn_local(async move {
            state.is_loading.set(true);
            state.clear_error();

            let base = state.api_base.get_untracked();
            let result = api::register_trainer(&base, &data).await;

            state.is_loading.set(false);

            match result {
                Ok(session) => {
                    session::clear_pending_invoice(&BrowserStore);
                    state.save_auth(&session);
                    navigate("/dashboard/trainer", Default::default());
                }
                Err(e) => state.set_error(e),
            }
        });
    };

    let error = state.error;
    let is_loading = state.is_loading;

    view! {
        <Title text="Trainer Application | FitMinds" />
        <div class="min-h-screen flex items-center justify-center bg-primary-50 py-12 px-4">
            <div class="max-w-md w-full space-y-8 bg-white p-8 rounded-xl shadow-lg border border-primary-100">
                <div class="text-center">
                    <span class="text-5xl">"🏋️"</span>
                    <h2 class="mt-6 text-3xl font-extrabold text-primary-950">
                        "Trainer Application"
                    </h2>
                    <p class="mt-2 text-sm text-primary-700">"Join our team of expert trainers."</p>
                </div>

                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-4">
                        <input
                            type="text"
                            required=true
                            placeholder="First Name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                            class="input w-full"
                        />
                        <input
                            type="text"
                            required=true
                            placeholder="Last Name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                            class="input w-full"
                        />
                    </div>
                    <input
                        type="email"
                        required=true
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <input
                        type="password"
                        required=true
                        minlength="8"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <div>
                        <label class="block text-sm font-medium text-primary-900 mb-1">
                            "Specialization"
                        </label>
                        <input
                            type="text"
                            required=true
                            placeholder="Specialization (e.g. Yoga, HIIT)"
                            prop:value=move || specialization.get()
                            on:input=move |ev| specialization.set(event_target_value(&ev))
                            class="input w-full"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-primary-900 mb-1">
                            "Short Description"
                        </label>
                        <input
                            type="text"
                            required=true
                            placeholder="Tell us about yourself"
                            prop:value=move || short_description.get()
                            on:input=move |ev| short_description.set(event_target_value(&ev))
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
                        {move || if is_loading.get() { "Submitting..." } else { "Submit Application" }}
                    </button>

                    <div class="text-center text-sm">
                        <a href="/login" class="text-primary-600 hover:underline">
                            "Already have an account? Login"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
