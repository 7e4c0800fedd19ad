//! Trainer dashboard landing panel

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::StatCard;
use crate::state::AppState;

struct SessionRow {
    time: &'static str,
    class_name: &'static str,
    room: &'static str,
}

const UPCOMING: [SessionRow; 3] = [
    SessionRow { time: "Today, 18:00", class_name: "HIIT Blast", room: "Main Floor" },
    SessionRow { time: "Tomorrow, 07:00", class_name: "Morning Yoga", room: "Studio A" },
    SessionRow { time: "Friday, 18:00", class_name: "HIIT Blast", room: "Main Floor" },
];

#[component]
pub fn TrainerOverviewPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let display_name = move || {
        state
            .user
            .get()
            .and_then(|u| u.name)
            .unwrap_or_else(|| "Trainer".to_string())
    };

    view! {
        <Title text="Trainer Dashboard | FitMinds" />
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-primary-950">
                    {move || format!("Welcome, {}!", display_name())}
                </h1>
                <p class="text-primary-700">"Here is what your week looks like."</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard icon="🏋️" label="Classes This Week" value="8".to_string() />
                <StatCard icon="👥" label="Active Clients" value="24".to_string() />
                <StatCard
                    icon="⭐"
                    label="Average Rating"
                    value="4.8".to_string()
                    hint="Based on member feedback"
                />
            </div>

            <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
                <h2 class="font-semibold text-primary-950 mb-4">"Upcoming Sessions"</h2>
                <div class="divide-y divide-primary-100">
                    {UPCOMING
                        .iter()
                        .map(|row| {
                            view! {
                                <div class="py-3 flex items-center justify-between">
                                    <div>
                                        <p class="font-medium text-primary-950">{row.class_name}</p>
                                        <p class="text-sm text-primary-700">{row.room}</p>
                                    </div>
                                    <span class="text-sm text-primary-700">{row.time}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
                <h2 class="font-semibold text-primary-950 mb-2">"Session Requests"</h2>
                <p class="text-sm text-primary-700">
                    "No pending requests. New member requests will appear here."
                </p>
            </div>
        </div>
    }
}
