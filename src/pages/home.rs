//! Public landing page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::billing::PLANS;

/// Marketing page with the plan catalog and a trainer-recruitment section
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="FitMinds | Transform Your Body" />
        <div class="flex flex-col">
            // Hero
            <section class="relative bg-gradient-to-br from-primary-50 via-white to-primary-100 py-32">
                <div class="max-w-7xl mx-auto px-4 text-center text-primary-950">
                    <h1 class="text-5xl md:text-7xl font-extrabold tracking-tight">
                        "Transform Your Body" <br />
                        <span class="text-primary-600">"Master Your Mind"</span>
                    </h1>
                    <p class="mt-6 text-xl text-primary-700 max-w-2xl mx-auto">
                        "Join the elite fitness community. Professional trainers, premium \
                         equipment, and a plan for every goal."
                    </p>
                    <div class="mt-10">
                        <a
                            href="/register-member"
                            class="inline-block px-8 py-4 bg-primary-600 hover:bg-primary-700 text-white \
                                   text-lg font-semibold rounded-full shadow-lg transition-colors"
                        >
                            "Get Started Now"
                        </a>
                    </div>
                </div>
            </section>

            // Plans
            <section id="plans" class="py-24 bg-white">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold text-primary-950">"Premium Memberships"</h2>
                        <p class="mt-4 text-primary-700">"Choose the plan that fits your ambition."</p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {PLANS
                            .iter()
                            .map(|plan| {
                                view! {
                                    <div class=format!(
                                        "relative flex flex-col p-6 bg-white rounded-2xl shadow-lg border {}",
                                        if plan.popular {
                                            "border-primary-500 ring-2 ring-primary-500/50"
                                        } else {
                                            "border-primary-200"
                                        },
                                    )>
                                        {plan
                                            .popular
                                            .then(|| {
                                                view! {
                                                    <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-4 py-1 \
                                                                 rounded-full bg-primary-500 text-white text-xs font-bold uppercase">
                                                        "Most Popular"
                                                    </span>
                                                }
                                            })}
                                        <h3 class="text-xl font-bold text-primary-950">{plan.name}</h3>
                                        <div class="mt-4 flex items-baseline text-primary-950">
                                            <span class="text-4xl font-extrabold">"$"{plan.price}</span>
                                            <span class="ml-1 text-xl font-semibold text-primary-500">
                                                {plan.period}
                                            </span>
                                        </div>
                                        <ul class="mt-6 flex-1 space-y-4">
                                            {plan
                                                .features
                                                .iter()
                                                .map(|feature| {
                                                    view! {
                                                        <li class="flex items-start gap-3 text-sm text-primary-600">
                                                            <span class="text-primary-500">"✓"</span>
                                                            {*feature}
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                        <a
                                            href="/register-member"
                                            class="mt-8 w-full py-2 text-center bg-primary-600 hover:bg-primary-700 \
                                                   text-white font-semibold rounded-lg transition-colors"
                                        >
                                            "Join Now"
                                        </a>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            // Trainer recruitment
            <section class="py-24 bg-primary-900 text-white">
                <div class="max-w-4xl mx-auto px-4 text-center">
                    <span class="text-4xl">"💼"</span>
                    <h2 class="mt-4 text-3xl font-bold">"Work With Us"</h2>
                    <p class="mt-4 text-primary-100 max-w-2xl mx-auto">
                        "Are you a certified trainer? Join our team of experts and grow your \
                         client base with FitMinds."
                    </p>
                    <a
                        href="/register-trainer"
                        class="mt-8 inline-block px-6 py-3 bg-white text-primary-900 rounded-full \
                               font-bold hover:bg-primary-50 transition-colors"
                    >
                        "Apply as Trainer"
                    </a>
                </div>
            </section>
        </div>
    }
}
