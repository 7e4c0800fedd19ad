//! Trainer application review queue

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LoadingPanel;
use crate::state::AppState;
use crate::types::PendingTrainer;

#[component]
pub fn PendingRequestsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let requests = RwSignal::new(Vec::<PendingTrainer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // Bumped after every review to trigger a re-fetch
    let refresh = RwSignal::new(0u32);

    {
        let state = state.clone();
        Effect::new(move |_| {
            refresh.track();
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked();
            spawn_local(async move {
                let Some(token) = token else { return };
                loading.set(true);
                match api::fetch_pending_trainers(&base, &token).await {
                    Ok(list) => {
                        requests.set(list);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
        });
    }

    let state_for_review = state.clone();
    let review = move |trainer_id: String, approve: bool| {
        let state = state_for_review.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let Some(token) = state.token.get_untracked() else {
                return;
            };
            match api::review_trainer(&base, &token, &trainer_id, approve).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    let review = StoredValue::new(review);

    view! {
        <div class="bg-white rounded-xl shadow border border-primary-200 p-6">
            <h2 class="font-semibold text-primary-950 mb-4">"Pending Trainer Applications"</h2>

            <Show when=move || error.get().is_some()>
                <div class="p-3 mb-4 text-sm text-red-600 bg-red-50 rounded-md">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingPanel message="Loading applications..." /> }
            >
                <Show
                    when=move || !requests.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-sm text-primary-700">"No applications waiting for review."</p>
                        }
                    }
                >
                    <div class="divide-y divide-primary-100">
                        <For
                            each=move || requests.get()
                            key=|t| t.trainer_id.clone()
                            let:trainer
                        >
                            {
                                let id_approve = trainer.trainer_id.clone();
                                let id_reject = trainer.trainer_id.clone();
                                view! {
                                    <div class="py-4 flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                                        <div>
                                            <p class="font-medium text-primary-950">
                                                {format!("{} {}", trainer.first_name, trainer.last_name)}
                                            </p>
                                            <p class="text-sm text-primary-700">{trainer.email.clone()}</p>
                                            <p class="text-sm text-primary-700">
                                                {format!(
                                                    "{} · {}",
                                                    trainer.specialization,
                                                    trainer.short_description,
                                                )}
                                            </p>
                                        </div>
                                        <div class="flex gap-2">
                                            <button
                                                class="btn bg-green-600 hover:bg-green-700 text-white text-sm"
                                                on:click=move |_| {
                                                    review.with_value(|r| r(id_approve.clone(), true))
                                                }
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                class="btn bg-red-600 hover:bg-red-700 text-white text-sm"
                                                on:click=move |_| {
                                                    review.with_value(|r| r(id_reject.clone(), false))
                                                }
                                            >
                                                "Reject"
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
    }
}
