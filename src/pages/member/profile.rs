//! Member profile panel

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api;
use crate::components::LoadingPanel;
use crate::state::AppState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let details = RwSignal::new(None::<serde_json::Value>);
    let loading = RwSignal::new(true);
    let failed = RwSignal::new(false);

    let editing = RwSignal::new(false);
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let save_error = RwSignal::new(None::<String>);

    {
        let state = state.clone();
        Effect::new(move |_| {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                match api::fetch_profile(&base, token.as_deref()).await {
                    Some(v) => details.set(Some(v)),
                    None => failed.set(true),
                }
                loading.set(false);
            });
        });
    }

    let field = move |key: &str| {
        details
            .get()
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "--".to_string())
    };

    let email = {
        let state = state.clone();
        move || state.user.get().map(|u| u.email).unwrap_or_default()
    };

    let start_edit = move || {
        let current = move |key: &str| {
            details
                .get_untracked()
                .as_ref()
                .and_then(|v| v.get(key))
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default()
        };
        phone.set(current("phoneNumber"));
        address.set(current("address"));
        save_error.set(None);
        editing.set(true);
    };
    let start_edit = StoredValue::new(start_edit);

    let state_for_save = state.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = state_for_save.clone();
        spawn_local(async move {
            saving.set(true);
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                saving.set(false);
                return;
            };
            // Merge the edited fields into the record the server gave us
            let mut body = details.get_untracked().unwrap_or_else(|| serde_json::json!({}));
            body["phoneNumber"] = serde_json::Value::String(phone.get_untracked());
            body["address"] = serde_json::Value::String(address.get_untracked());

            match api::update_profile(&base, &token, &body).await {
                Ok(updated) => {
                    details.set(Some(updated));
                    editing.set(false);
                }
                Err(e) => save_error.set(Some(e)),
            }
            saving.set(false);
        });
    };
    let on_save = StoredValue::new(on_save);

    view! {
        <Title text="Profile | FitMinds" />
        <div class="max-w-2xl space-y-6">
            <h1 class="text-2xl font-bold text-primary-950">"My Profile"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingPanel message="Loading profile..." /> }
            >
                <Show
                    when=move || !failed.get()
                    fallback=|| {
                        view! {
                            <div class="p-4 bg-red-50 text-red-700 rounded-lg">
                                "Could not load your profile details. Please try again later."
                            </div>
                        }
                    }
                >
                    <div class="bg-white rounded-xl shadow border border-primary-200 p-6 space-y-4">
                        <Show
                            when=move || !editing.get()
                            fallback=move || {
                                view! {
                                    <form
                                        class="space-y-4"
                                        on:submit=move |ev| on_save.with_value(|f| f(ev))
                                    >
                                        <div>
                                            <label class="block text-sm font-medium text-primary-900 mb-1">
                                                "Phone"
                                            </label>
                                            <input
                                                type="tel"
                                                prop:value=move || phone.get()
                                                on:input=move |ev| phone.set(event_target_value(&ev))
                                                class="input w-full"
                                            />
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-primary-900 mb-1">
                                                "Address"
                                            </label>
                                            <input
                                                type="text"
                                                prop:value=move || address.get()
                                                on:input=move |ev| address.set(event_target_value(&ev))
                                                class="input w-full"
                                            />
                                        </div>
                                        <Show when=move || save_error.get().is_some()>
                                            <div class="p-3 text-sm text-red-600 bg-red-50 rounded-md">
                                                {move || save_error.get().unwrap_or_default()}
                                            </div>
                                        </Show>
                                        <div class="flex gap-2">
                                            <button
                                                type="submit"
                                                disabled=move || saving.get()
                                                class="btn btn-primary"
                                            >
                                                {move || if saving.get() { "Saving..." } else { "Save" }}
                                            </button>
                                            <button
                                                type="button"
                                                class="btn btn-ghost"
                                                on:click=move |_| editing.set(false)
                                            >
                                                "Cancel"
                                            </button>
                                        </div>
                                    </form>
                                }
                            }
                        >
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <ProfileField label="First Name" value=Signal::derive(move || field("firstName")) />
                                <ProfileField label="Last Name" value=Signal::derive(move || field("lastName")) />
                                <ProfileField label="Email" value=Signal::derive(email.clone()) />
                                <ProfileField label="Phone" value=Signal::derive(move || field("phoneNumber")) />
                                <ProfileField label="Address" value=Signal::derive(move || field("address")) />
                                <ProfileField
                                    label="Emergency Contact"
                                    value=Signal::derive(move || field("emergencyContact"))
                                />
                            </div>
                            <button class="btn btn-ghost" on:click=move |_| start_edit.with_value(|f| f())>
                                "Edit Contact Details"
                            </button>
                        </Show>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn ProfileField(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm font-medium text-primary-700">{label}</p>
            <p class="text-primary-950">{value}</p>
        </div>
    }
}
