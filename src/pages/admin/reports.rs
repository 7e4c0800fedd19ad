//! Admin overview statistics and reports.
//!
//! Report endpoints fail quietly: a missing report collapses to an empty
//! section instead of blocking the rest of the portal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::StatCard;
use crate::state::AppState;
use crate::types::{AdminStats, ChurnRiskMember, TrainerPerformance};

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let stats = RwSignal::new(None::<AdminStats>);
    let churn = RwSignal::new(Vec::<ChurnRiskMember>::new());
    let performance = RwSignal::new(Vec::<TrainerPerformance>::new());

    {
        let state = state.clone();
        Effect::new(move |_| {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            let Some(token) = token else { return };

            // Each report is fetched independently
            {
                let (base, token) = (base.clone(), token.clone());
                spawn_local(async move {
                    match api::fetch_admin_stats(&base, &token).await {
                        Ok(s) => stats.set(Some(s)),
                        Err(e) => tracing::warn!("admin stats unavailable: {e}"),
                    }
                });
            }
            {
                let (base, token) = (base.clone(), token.clone());
                spawn_local(async move {
                    match api::fetch_churn_risk(&base, &token).await {
                        Ok(list) => churn.set(list),
                        Err(e) => tracing::warn!("churn report unavailable: {e}"),
                    }
                });
            }
            spawn_local(async move {
                match api::fetch_trainer_performance(&base, &token).await {
                    Ok(list) => performance.set(list),
                    Err(e) => tracing::warn!("performance report unavailable: {e}"),
                }
            });
        });
    }

    let members = move || {
        stats
            .get()
            .map(|s| s.total_members.to_string())
            .unwrap_or_else(|| "--".to_string())
    };
    let trainers = move || {
        stats
            .get()
            .map(|s| s.active_trainers.to_string())
            .unwrap_or_else(|| "--".to_string())
    };
    let occupancy = move || {
        stats
            .get()
            .map(|s| format!("{:.0}%", s.occupancy_rate))
            .unwrap_or_else(|| "--".to_string())
    };
    let revenue = move || {
        stats
            .get()
            .map(|s| format!("${:.0}", s.monthly_revenue))
            .unwrap_or_else(|| "--".to_string())
    };

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard icon="👥" label="Total Members" value=Signal::derive(members) />
                <StatCard icon="🏋️" label="Active Trainers" value=Signal::derive(trainers) />
                <StatCard icon="📊" label="Occupancy Rate" value=Signal::derive(occupancy) />
                <StatCard icon="💰" label="Monthly Revenue" value=Signal::derive(revenue) />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
                    <h2 class="font-semibold text-primary-950 mb-4">"Churn Risk"</h2>
                    <Show
                        when=move || !churn.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="text-sm text-primary-700">"No members flagged at risk."</p>
                            }
                        }
                    >
                        <div class="divide-y divide-primary-100">
                            <For each=move || churn.get() key=|m| m.member_id let:member>
                                <div class="py-3 flex items-center justify-between">
                                    <div>
                                        <p class="font-medium text-primary-950">
                                            {format!("{} {}", member.first_name, member.last_name)}
                                        </p>
                                        <p class="text-sm text-primary-700">{member.email.clone()}</p>
                                    </div>
                                    <span class="text-sm text-red-600">
                                        {format!("{} days absent", member.days_since_last_visit)}
                                    </span>
                                </div>
                            </For>
                        </div>
                    </Show>
                </div>

                <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
                    <h2 class="font-semibold text-primary-950 mb-4">"Trainer Performance"</h2>
                    <Show
                        when=move || !performance.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="text-sm text-primary-700">"No performance data yet."</p>
                            }
                        }
                    >
                        <div class="divide-y divide-primary-100">
                            <For
                                each=move || performance.get()
                                key=|t| t.trainer_name.clone()
                                let:trainer
                            >
                                <div class="py-3 flex items-center justify-between">
                                    <div>
                                        <p class="font-medium text-primary-950">
                                            {trainer.trainer_name.clone()}
                                        </p>
                                        <p class="text-sm text-primary-700">
                                            {format!("{} classes assigned", trainer.classes_assigned)}
                                        </p>
                                    </div>
                                    <span class="text-sm font-semibold text-primary-950">
                                        {format!("{:.1}", trainer.performance_score)}
                                    </span>
                                </div>
                            </For>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
