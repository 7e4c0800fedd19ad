//! Attendance history panel

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Title text="Attendance | FitMinds" />
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-primary-950">"Attendance"</h1>
            <div class="bg-white rounded-xl shadow border border-primary-200 p-12 text-center">
                <span class="text-5xl">"🗓️"</span>
                <h2 class="mt-4 font-semibold text-primary-950">"No check-ins yet"</h2>
                <p class="mt-1 text-sm text-primary-700">
                    "Your gym check-ins will appear here once you start visiting."
                </p>
            </div>
        </div>
    }
}
