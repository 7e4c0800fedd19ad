//! Plan purchase page: catalog, apply, and the pending-invoice banner

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::billing::{self, PLANS};
use crate::session::{self, BrowserStore};
use crate::state::AppState;
use crate::types::PendingInvoice;

#[component]
pub fn PurchasePlanPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let pending = RwSignal::new(session::load_pending_invoice(&BrowserStore));
    let error = RwSignal::new(None::<String>);
    let applying = RwSignal::new(false);

    // Reconcile the cached invoice against the server on entry. A payment
    // completed in another tab leaves a stale cache entry behind.
    {
        let state = state.clone();
        Effect::new(move |_| {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                let Some(token) = token else { return };
                let server = match api::fetch_current_subscription(&base, &token).await {
                    Ok(sub) => Some(sub),
                    // treated as no subscription; the cached invoice stands
                    Err(e) => {
                        tracing::warn!("subscription status unavailable: {e}");
                        None
                    }
                };
                let reconciled = billing::reconcile(server.as_ref(), pending.get_untracked());
                if reconciled.is_none() {
                    session::clear_pending_invoice(&BrowserStore);
                }
                pending.set(reconciled);
            });
        });
    }

    let state_for_select = state.clone();
    let on_select = move |plan_name: &'static str| {
        let state = state_for_select.clone();
        error.set(None);

        let amount = match billing::select_plan(pending.get_untracked().as_ref(), plan_name) {
            Ok(amount) => amount,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        spawn_local(async move {
            applying.set(true);
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                applying.set(false);
                return;
            };
            match api::apply_for_plan(&base, &token, plan_name).await {
                Ok(resp) => {
                    let invoice = PendingInvoice {
                        invoice_id: resp.invoice_id,
                        status: resp.status,
                        plan: plan_name.to_string(),
                        amount,
                    };
                    session::save_pending_invoice(&BrowserStore, &invoice);
                    pending.set(Some(invoice));
                }
                Err(e) => error.set(Some(e)),
            }
            applying.set(false);
        });
    };

    view! {
        <Title text="Purchase Plan | FitMinds" />
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-primary-950">"Membership Plans"</h1>
                <p class="text-primary-700">"Choose the plan that fits your goals."</p>
            </div>

            <Show when=move || pending.get().is_some()>
                <div class="bg-accent-50 border border-accent-200 rounded-xl p-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                    <div>
                        <h2 class="font-semibold text-primary-950">"Invoice awaiting payment"</h2>
                        <p class="text-sm text-primary-700">
                            {move || {
                                pending
                                    .get()
                                    .map(|inv| {
                                        format!("{} plan, ${} due.", inv.plan, inv.amount)
                                    })
                                    .unwrap_or_default()
                            }}
                        </p>
                    </div>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/dashboard/member/payment", Default::default())
                        }
                    >
                        "Pay Now"
                    </button>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="p-3 text-sm text-red-600 bg-red-50 rounded-md">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let name = plan.name;
                        let on_select = on_select.clone();
                        let card_class = if plan.popular {
                            "relative bg-white rounded-xl shadow-lg border-2 border-primary-600 p-6 flex flex-col"
                        } else {
                            "relative bg-white rounded-xl shadow border border-primary-200 p-6 flex flex-col"
                        };
                        view! {
                            <div class=card_class>
                                {plan
                                    .popular
                                    .then(|| {
                                        view! {
                                            <span class="absolute -top-3 left-1/2 -translate-x-1/2 bg-primary-600 text-white text-xs px-3 py-1 rounded-full">
                                                "Most Popular"
                                            </span>
                                        }
                                    })}
                                <h3 class="text-lg font-semibold text-primary-950">{plan.name}</h3>
                                <p class="mt-2">
                                    <span class="text-3xl font-bold text-primary-950">
                                        {format!("${}", plan.price)}
                                    </span>
                                    <span class="text-primary-700">{plan.period}</span>
                                </p>
                                <ul class="mt-4 space-y-2 flex-1">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|f| {
                                            view! {
                                                <li class="flex items-center gap-2 text-sm text-primary-700">
                                                    <span class="text-green-600">"✓"</span>
                                                    {*f}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <button
                                    class="btn btn-primary w-full mt-6"
                                    disabled=move || applying.get() || pending.get().is_some()
                                    on:click=move |_| on_select(name)
                                >
                                    {move || {
                                        if applying.get() { "Applying..." } else { "Select Plan" }
                                    }}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
