//! Facility room management

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoadingPanel;
use crate::state::AppState;
use crate::types::{FacilityRoom, NewRoomRequest};

#[component]
pub fn FacilitiesPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let rooms = RwSignal::new(Vec::<FacilityRoom>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let refresh = RwSignal::new(0u32);

    let room_name = RwSignal::new(String::new());
    let capacity = RwSignal::new(String::new());

    {
        let state = state.clone();
        Effect::new(move |_| {
            refresh.track();
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                let Some(token) = token else { return };
                loading.set(true);
                match api::fetch_facilities(&base, &token).await {
                    Ok(list) => {
                        rooms.set(list);
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
        let name = room_name.get_untracked().trim().to_string();
        let Ok(cap) = capacity.get_untracked().trim().parse::<u32>() else {
            error.set(Some("Capacity must be a whole number.".to_string()));
            return;
        };
        if name.is_empty() {
            return;
        }
        let room = NewRoomRequest {
            room_name: name,
            capacity: cap,
        };
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                return;
            };
            match api::add_facility(&base, &token, &room).await {
                Ok(()) => {
                    room_name.set(String::new());
                    capacity.set(String::new());
                    error.set(None);
                    refresh.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let state_for_remove = state.clone();
    let remove = move |id: i64| {
        let state = state_for_remove.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                return;
            };
            match api::delete_facility(&base, &token, id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    let remove = StoredValue::new(remove);

    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
                <h2 class="font-semibold text-primary-950 mb-4">"Add Room"</h2>
                <form class="flex flex-col md:flex-row gap-3" on:submit=on_add>
                    <input
                        type="text"
                        required=true
                        placeholder="Room name"
                        prop:value=move || room_name.get()
                        on:input=move |ev| room_name.set(event_target_value(&ev))
                        class="input flex-1"
                    />
                    <input
                        type="number"
                        required=true
                        min="1"
                        placeholder="Capacity"
                        prop:value=move || capacity.get()
                        on:input=move |ev| capacity.set(event_target_value(&ev))
                        class="input w-full md:w-40"
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
                <h2 class="font-semibold text-primary-950 mb-4">"Rooms"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingPanel message="Loading rooms..." /> }
                >
                    <Show
                        when=move || !rooms.get().is_empty()
                        fallback=|| {
                            view! { <p class="text-sm text-primary-700">"No rooms configured yet."</p> }
                        }
                    >
                        <div class="divide-y divide-primary-100">
                            <For each=move || rooms.get() key=|r| r.id let:room>
                                {
                                    let id = room.id;
                                    view! {
                                        <div class="py-3 flex items-center justify-between">
                                            <div>
                                                <p class="font-medium text-primary-950">
                                                    {room.room_name.clone()}
                                                </p>
                                                <p class="text-sm text-primary-700">
                                                    {format!("Capacity: {}", room.capacity)}
                                                </p>
                                            </div>
                                            <button
                                                class="btn bg-red-600 hover:bg-red-700 text-white text-sm"
                                                on:click=move |_| remove.with_value(|f| f(id))
                                            >
                                                "Remove"
                                            </button>
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
