//! Dashboard stat card

use leptos::prelude::*;

/// Small labelled metric card used across the dashboards
#[component]
pub fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow border border-primary-200">
            <div class="flex items-center">
                <div class="p-3 rounded-full bg-primary-50 text-primary-600 text-xl">{icon}</div>
                <div class="ml-4">
                    <p class="text-sm font-medium text-primary-700">{label}</p>
                    <p class="text-2xl font-semibold text-primary-950">{value}</p>
                    {hint.map(|h| view! { <p class="text-xs text-primary-500">{h}</p> })}
                </div>
            </div>
        </div>
    }
}
