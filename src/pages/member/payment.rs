//! Simulated payment gateway for a pending invoice

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::api;
use crate::billing;
use crate::components::LoadingSpinner;
use crate::session::{self, BrowserStore};
use crate::state::AppState;
use crate::types::PaymentRequest;

const PAYMENT_METHODS: [&str; 3] = ["Bkash", "Card", "Cash"];

/// Gateway processing delay, in milliseconds
const GATEWAY_DELAY_MS: u32 = 1500;

#[component]
pub fn PaymentGatewayPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // The invoice is read from storage, not navigation state, so a reload
    // mid-checkout lands back on the same invoice.
    let invoice = RwSignal::new(session::load_pending_invoice(&BrowserStore));
    let method = RwSignal::new(PAYMENT_METHODS[0].to_string());
    let processing = RwSignal::new(false);
    let paid = RwSignal::new(false);
    let activated = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Cache miss fallback: the server's pending-invoice list is authoritative
    {
        let state = state.clone();
        Effect::new(move |_| {
            if invoice.get_untracked().is_some() {
                return;
            }
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                let Some(token) = token else { return };
                match api::fetch_pending_invoices(&base, &token).await {
                    Ok(list) => {
                        if let Some(inv) = list.into_iter().next() {
                            session::save_pending_invoice(&BrowserStore, &inv);
                            invoice.set(Some(inv));
                        }
                    }
                    Err(e) => tracing::warn!("pending invoice lookup failed: {e}"),
                }
            });
        });
    }

    let state_for_pay = state.clone();
    let navigate_for_pay = navigate.clone();
    let on_confirm = move || {
        let Some(inv) = invoice.get_untracked() else {
            return;
        };
        let state = state_for_pay.clone();
        let navigate = navigate_for_pay.clone();
        error.set(None);

        spawn_local(async move {
            processing.set(true);

            // Simulated gateway latency
            TimeoutFuture::new(GATEWAY_DELAY_MS).await;

            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                processing.set(false);
                return;
            };
            let payment = PaymentRequest {
                payment_id: inv.invoice_id.clone(),
                amount_paid: inv.amount,
                payment_method: method.get_untracked(),
                transaction_ref: format!("TXN-{}", Uuid::new_v4()),
            };

            match api::pay_invoice(&base, &token, &payment).await {
                Ok(_) => {
                    session::clear_pending_invoice(&BrowserStore);
                    invoice.set(None);
                    paid.set(true);

                    // The server owns the post-payment state; the success
                    // copy follows the re-fetched status, not the local one.
                    let server = match api::fetch_current_subscription(&base, &token).await {
                        Ok(sub) => Some(sub),
                        Err(e) => {
                            tracing::warn!("post-payment subscription re-fetch failed: {e}");
                            None
                        }
                    };
                    activated.set(billing::payment_settled(server.as_ref()));

                    TimeoutFuture::new(GATEWAY_DELAY_MS).await;
                    navigate("/dashboard/member", Default::default());
                }
                Err(e) => error.set(Some(e)),
            }
            processing.set(false);
        });
    };
    // holds the navigate closure, which is not Sync
    let on_confirm = StoredValue::new_local(on_confirm);

    view! {
        <Title text="Payment | FitMinds" />
        <div class="max-w-lg mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-primary-950">"Payment Gateway"</h1>

            <Show when=move || paid.get()>
                <div class="bg-white rounded-xl shadow border border-green-200 p-8 text-center">
                    <span class="text-5xl">"🎉"</span>
                    <h2 class="mt-4 font-semibold text-primary-950">"Payment successful!"</h2>
                    <p class="mt-1 text-sm text-primary-700">
                        {move || {
                            if activated.get() {
                                "Your membership is now active. Taking you back to your dashboard..."
                            } else {
                                "Your payment is being processed. Taking you back to your dashboard..."
                            }
                        }}
                    </p>
                </div>
            </Show>

            <Show when=move || !paid.get() && invoice.get().is_none()>
                <div class="bg-white rounded-xl shadow border border-primary-200 p-8 text-center">
                    <span class="text-5xl">"🤔"</span>
                    <h2 class="mt-4 font-semibold text-primary-950">"Nothing to pay"</h2>
                    <p class="mt-1 text-sm text-primary-700">
                        "There is no invoice awaiting payment on this account."
                    </p>
                    <a href="/dashboard/member/purchase" class="btn btn-primary mt-4 inline-block">
                        "Browse Plans"
                    </a>
                </div>
            </Show>

            <Show when=move || !paid.get() && invoice.get().is_some()>
                <div class="bg-white rounded-xl shadow border border-primary-200 p-6 space-y-6">
                    <div class="border-b border-primary-100 pb-4">
                        <p class="text-sm text-primary-700">"Invoice"</p>
                        {move || {
                            invoice
                                .get()
                                .map(|inv| {
                                    view! {
                                        <div class="flex justify-between items-baseline">
                                            <span class="font-semibold text-primary-950">
                                                {format!("{} Membership", inv.plan)}
                                            </span>
                                            <span class="text-2xl font-bold text-primary-950">
                                                {format!("${}", inv.amount)}
                                            </span>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-primary-900 mb-2">
                            "Payment Method"
                        </label>
                        <div class="flex gap-2">
                            {PAYMENT_METHODS
                                .iter()
                                .map(|m| {
                                    let m = *m;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if method.get() == m {
                                                    "flex-1 py-2 rounded-lg border-2 border-primary-600 bg-primary-50 text-primary-950 text-sm font-medium"
                                                } else {
                                                    "flex-1 py-2 rounded-lg border border-primary-200 text-primary-700 text-sm hover:bg-primary-50"
                                                }
                                            }
                                            on:click=move |_| method.set(m.to_string())
                                        >
                                            {m}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="p-3 text-sm text-red-600 bg-red-50 rounded-md">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        class="btn btn-primary w-full py-3 flex items-center justify-center gap-2"
                        disabled=move || processing.get()
                        on:click=move |_| on_confirm.with_value(|f| f())
                    >
                        <Show when=move || processing.get()>
                            <LoadingSpinner size="w-4 h-4" />
                        </Show>
                        {move || if processing.get() { "Processing..." } else { "Confirm Payment" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
