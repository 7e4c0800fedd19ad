//! Equipment inventory management

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoadingPanel;
use crate::state::AppState;
use crate::types::{Equipment, NewEquipmentRequest};

const STATUSES: [&str; 3] = ["Operational", "Under Maintenance", "Out of Order"];

#[component]
pub fn EquipmentPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let items = RwSignal::new(Vec::<Equipment>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let refresh = RwSignal::new(0u32);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    {
        let state = state.clone();
        Effect::new(move |_| {
            refresh.track();
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                let Some(token) = token else { return };
                loading.set(true);
                match api::fetch_equipment(&base, &token).await {
                    Ok(list) => {
                        items.set(list);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
        });
    }

    let state_for_add = state.clone();
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = state_for_add.clone();
        let item = NewEquipmentRequest {
            equipment_name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            status: STATUSES[0].to_string(),
        };
        if item.equipment_name.is_empty() {
            return;
        }
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                return;
            };
            match api::add_equipment(&base, &token, &item).await {
                Ok(()) => {
                    name.set(String::new());
                    description.set(String::new());
                    refresh.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let state_for_status = state.clone();
    let set_status = move |id: i64, status: String| {
        let state = state_for_status.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                return;
            };
            match api::update_equipment_status(&base, &token, id, &status).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    let set_status = StoredValue::new(set_status);

    let state_for_remove = state.clone();
    let remove = move |id: i64| {
        let state = state_for_remove.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                return;
            };
            match api::delete_equipment(&base, &token, id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    let remove = StoredValue::new(remove);

    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
                <h2 class="font-semibold text-primary-950 mb-4">"Add Equipment"</h2>
                <form class="flex flex-col md:flex-row gap-3" on:submit=on_add>
                    <input
                        type="text"
                        required=true
                        placeholder="Equipment name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        class="input flex-1"
                    />
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        class="input flex-1"
                    />
                    <button type="submit" class="btn btn-primary">
                        "Add"
                    </button>
                </form>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="p-3 text-sm text-red-600 bg-red-50 rounded-md">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
                <h2 class="font-semibold text-primary-950 mb-4">"Inventory"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingPanel message="Loading equipment..." /> }
                >
                    <Show
                        when=move || !items.get().is_empty()
                        fallback=|| {
                            view! { <p class="text-sm text-primary-700">"No equipment recorded yet."</p> }
                        }
                    >
                        <div class="divide-y divide-primary-100">
                            <For each=move || items.get() key=|e| e.id let:item>
                                {
                                    let id = item.id;
                                    view! {
                                        <div class="py-3 flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                                            <div>
                                                <p class="font-medium text-primary-950">{item.name.clone()}</p>
                                                <p class="text-sm text-primary-700">
                                                    {item.description.clone()}
                                                </p>
                                            </div>
                                            <div class="flex items-center gap-2">
                                                <select
                                                    class="input text-sm"
                                                    on:change=move |ev| {
                                                        set_status
                                                            .with_value(|f| f(id, event_target_value(&ev)))
                                                    }
                                                >
                                                    {STATUSES
                                                        .iter()
                                                        .map(|s| {
                                                            let s = *s;
                                                            let selected = item.status == s;
                                                            view! {
                                                                <option value=s selected=selected>
                                                                    {s}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                                <button
                                                    class="btn bg-red-600 hover:bg-red-700 text-white text-sm"
                                                    on:click=move |_| remove.with_value(|f| f(id))
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
