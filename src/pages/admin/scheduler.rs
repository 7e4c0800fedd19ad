//! Class scheduling form

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;
use crate::types::{FacilityRoom, ScheduleClassRequest};

/// Combine the date and time form fields into an ISO-8601 timestamp
fn combine(date: &str, time: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(NaiveDateTime::new(date, time).format("%Y-%m-%dT%H:%M:%S").to_string())
}

#[component]
pub fn SchedulerPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let rooms = RwSignal::new(Vec::<FacilityRoom>::new());

    let class_name = RwSignal::new(String::new());
    let trainer_id = RwSignal::new(String::new());
    let room_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let max_capacity = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    {
        let state = state.clone();
        Effect::new(move |_| {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                let Some(token) = token else { return };
                match api::fetch_facilities(&base, &token).await {
                    Ok(list) => rooms.set(list),
                    Err(e) => tracing::warn!("room list unavailable: {e}"),
                }
            });
        });
    }

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = state_for_submit.clone();
        error.set(None);
        success.set(None);

        let Some(start) = combine(&date.get_untracked(), &start_time.get_untracked()) else {
            error.set(Some("Enter a valid date and start time.".to_string()));
            return;
        };
        let Some(end) = combine(&date.get_untracked(), &end_time.get_untracked()) else {
            error.set(Some("Enter a valid end time.".to_string()));
            return;
        };
        if end <= start {
            error.set(Some("End time must be after the start time.".to_string()));
            return;
        }
        let Ok(trainer) = trainer_id.get_untracked().trim().parse::<i64>() else {
            error.set(Some("Trainer ID must be a number.".to_string()));
            return;
        };
        let Ok(room) = room_id.get_untracked().trim().parse::<i64>() else {
            error.set(Some("Pick a room.".to_string()));
            return;
        };
        let Ok(capacity) = max_capacity.get_untracked().trim().parse::<u32>() else {
            error.set(Some("Capacity must be a whole number.".to_string()));
            return;
        };
        let Ok(fee) = price.get_untracked().trim().parse::<f64>() else {
            error.set(Some("Price must be a number.".to_string()));
            return;
        };

        let class = ScheduleClassRequest {
            class_name: class_name.get_untracked().trim().to_string(),
            trainer_id: trainer,
            room_id: room,
            start_time: start,
            end_time: end,
            max_capacity: capacity,
            price: fee,
        };

        spawn_local(async move {
            submitting.set(true);
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                submitting.set(false);
                return;
            };
            match api::schedule_class(&base, &token, &class).await {
                Ok(()) => {
                    success.set(Some(format!("{} scheduled.", class.class_name)));
                    class_name.set(String::new());
                }
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="bg-white rounded-xl shadow border border-primary-200 p-6 max-w-2xl">
            <h2 class="font-semibold text-primary-950 mb-4">"Schedule a Class"</h2>

            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <input
                        type="text"
                        required=true
                        placeholder="Class name"
                        prop:value=move || class_name.get()
                        on:input=move |ev| class_name.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <input
                        type="number"
                        required=true
                        min="1"
                        placeholder="Trainer ID"
                        prop:value=move || trainer_id.get()
                        on:input=move |ev| trainer_id.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <select
                        required=true
                        class="input w-full"
                        on:change=move |ev| room_id.set(event_target_value(&ev))
                    >
                        <option value="" disabled=true selected=true>
                            "Select a room"
                        </option>
                        {move || {
                            rooms
                                .get()
                                .into_iter()
                                .map(|room| {
                                    view! {
                                        <option value=room.id.to_string()>
                                            {format!("{} (cap {})", room.room_name, room.capacity)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <input
                        type="date"
                        required=true
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <input
                        type="time"
                        required=true
                        prop:value=move || start_time.get()
                        on:input=move |ev| start_time.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <input
                        type="time"
                        required=true
                        prop:value=move || end_time.get()
                        on:input=move |ev| end_time.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <input
                        type="number"
                        required=true
                        min="1"
                        placeholder="Max capacity"
                        prop:value=move || max_capacity.get()
                        on:input=move |ev| max_capacity.set(event_target_value(&ev))
                        class="input w-full"
                    />
                    <input
                        type="number"
                        required=true
                        min="0"
                        step="0.01"
                        placeholder="Price"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                        class="input w-full"
                    />
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="p-3 text-sm text-red-600 bg-red-50 rounded-md">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success.get().is_some()>
                    <div class="p-3 text-sm text-green-700 bg-green-50 rounded-md">
                        {move || success.get().unwrap_or_default()}
                    </div>
                </Show>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="btn btn-primary"
                >
                    {move || if submitting.get() { "Scheduling..." } else { "Schedule Class" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::combine;

    #[test]
    fn combines_date_and_time_into_iso() {
        assert_eq!(
            combine("2026-03-14", "18:30").as_deref(),
            Some("2026-03-14T18:30:00")
        );
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert_eq!(combine("14/03/2026", "18:30"), None);
        assert_eq!(combine("2026-03-14", "6pm"), None);
        assert_eq!(combine("", ""), None);
    }
}
