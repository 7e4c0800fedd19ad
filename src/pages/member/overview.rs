//! Member dashboard landing panel

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api;
use crate::components::StatCard;
use crate::state::AppState;
use crate::types::SubscriptionStatus;

#[component]
pub fn MemberOverviewPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let subscription = RwSignal::new(None::<SubscriptionStatus>);

    {
        let state = state.clone();
        Effect::new(move |_| {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                let Some(token) = token else { return };
                if let Ok(sub) = api::fetch_current_subscription(&base, &token).await {
                    subscription.set(Some(sub));
                }
            });
        });
    }

    let display_name = {
        let state = state.clone();
        move || {
            state
                .user
                .get()
                .and_then(|u| u.name)
                .unwrap_or_else(|| "Member".to_string())
        }
    };

    let plan_label = move || {
        subscription
            .get()
            .and_then(|s| s.plan)
            .unwrap_or_else(|| "None".to_string())
    };
    let status_label = move || {
        subscription
            .get()
            .map(|s| s.status)
            .unwrap_or_else(|| "Inactive".to_string())
    };
    let expires_label = move || {
        subscription
            .get()
            .and_then(|s| s.expires_at)
            .unwrap_or_else(|| "N/A".to_string())
    };
    let has_active = move || subscription.get().map(|s| s.is_active()).unwrap_or(false);

    view! {
        <Title text="Dashboard | FitMinds" />
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-primary-950">
                    {move || format!("Welcome back, {}!", display_name())}
                </h1>
                <p class="text-primary-700">"Here is a snapshot of your membership."</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard icon="📋" label="Current Plan" value=Signal::derive(plan_label) />
                <StatCard icon="✅" label="Status" value=Signal::derive(status_label) />
                <StatCard icon="📅" label="Expires" value=Signal::derive(expires_label) />
            </div>

            <Show when=move || !has_active()>
                <div class="bg-accent-50 border border-accent-200 rounded-xl p-6 flex items-center justify-between">
                    <div>
                        <h2 class="font-semibold text-primary-950">"No active membership"</h2>
                        <p class="text-sm text-primary-700">
                            "Pick a plan to unlock classes, facilities and trainer support."
                        </p>
                    </div>
                    <a href="/dashboard/member/purchase" class="btn btn-primary">
                        "Browse Plans"
                    </a>
                </div>
            </Show>
        </div>
    }
}
