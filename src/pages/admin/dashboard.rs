//! Admin portal shell with its tab strip

use leptos::prelude::*;
use leptos_meta::Title;

use super::equipment::EquipmentPanel;
use super::facilities::FacilitiesPanel;
use super::pending_requests::PendingRequestsPanel;
use super::reports::ReportsPanel;
use super::scheduler::SchedulerPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Facilities,
    Equipment,
    Scheduling,
}

const TABS: [(AdminTab, &str); 4] = [
    (AdminTab::Overview, "Overview & Approvals"),
    (AdminTab::Facilities, "Facilities"),
    (AdminTab::Equipment, "Equipment"),
    (AdminTab::Scheduling, "Class Scheduling"),
];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let active = RwSignal::new(AdminTab::Overview);

    view! {
        <Title text="Admin Portal | FitMinds" />
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-primary-950">"Admin Portal"</h1>

            <div class="border-b border-primary-200 flex gap-1 overflow-x-auto">
                {TABS
                    .iter()
                    .map(|(tab, label)| {
                        let tab = *tab;
                        view! {
                            <button
                                class=move || {
                                    if active.get() == tab {
                                        "px-4 py-2 text-sm font-medium text-primary-950 border-b-2 border-primary-600 whitespace-nowrap"
                                    } else {
                                        "px-4 py-2 text-sm text-primary-700 hover:text-primary-950 whitespace-nowrap"
                                    }
                                }
                                on:click=move |_| active.set(tab)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match active.get() {
                AdminTab::Overview => {
                    view! {
                        <div class="space-y-6">
                            <ReportsPanel />
                            <PendingRequestsPanel />
                        </div>
                    }
                        .into_any()
                }
                AdminTab::Facilities => view! { <FacilitiesPanel /> }.into_any(),
                AdminTab::Equipment => view! { <EquipmentPanel /> }.into_any(),
                AdminTab::Scheduling => view! { <SchedulerPanel /> }.into_any(),
            }}
        </div>
    }
}
