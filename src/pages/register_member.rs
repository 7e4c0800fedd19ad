//! Member registration page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::session::{self, BrowserStore};
use crate::state::AppState;
use crate::types::MemberRegisterRequest;

const MIN_PASSWORD_LEN: usize = 8;

/// Membership sign-up form
#[component]
pub fn RegisterMemberPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let emergency_contact = RwSignal::new(String::new());
    let dob = RwSignal::new(String::new());

    let state_for_submit = state.clone();
    let navigate_for_submit = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let data = MemberRegisterRequest {
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            emergency_contact: emergency_contact.get().trim().to_string(),
            dob: dob.get(),
        };
        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();

        // Advisory client-side check; the server validates authoritatively
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
            let result = api::register_member(&base, &data).await;

            state.is_loading.set(false);

            match result {
                Ok(session) => {
                    // A brand-new account cannot have an invoice in flight
                    session::clear_pending_invoice(&BrowserStore);
                    state.save_auth(&session);
                    navigate("/dashboard/member", Default::default());
                }
                Err(e) => state.set_error(e),
            }
        });
    };

    let error = state.error;
    let is_loading = state.is_loading;

    view! {
        <Title text="Become a Member | FitMinds" />
        <div class="min-h-screen flex items-center justify-center bg-primary-50 py-12 px-4">
            <div class="max-w-md w-full space-y-8 bg-white p-8 rounded-xl shadow-lg border border-primary-100">
                <div class="text-center">
                    <span class="text-5xl">"🏋️"</span>
                    <h2 class="mt-6 text-3xl font-extrabold text-primary-950">"Become a Member"</h2>
                    <p class="mt-2 text-sm text-primary-700">"Start your fitness journey today."</p>
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
                    <input
                        type="tel"
                        required=true
                        placeholder="Phone Number"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <input
                        type="text"
                        placeholder="Emergency Contact (Optional)"
                        prop:value=move || emergency_contact.get()
                        on:input=move |ev| emergency_contact.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <div>
                        <label class="block text-sm font-medium text-primary-900 mb-1">
                            "Date of Birth"
                        </label>
                        <input
                            type="date"
                            required=true
                            prop:value=move || dob.get()
                            on:input=move |ev| dob.set(event_target_value(&ev))
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
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
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
