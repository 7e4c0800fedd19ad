//! Weekly class timetable

use leptos::prelude::*;
use leptos_meta::Title;

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

struct ClassSlot {
    day: &'static str,
    time: &'static str,
    name: &'static str,
    trainer: &'static str,
    room: &'static str,
}

const TIMETABLE: [ClassSlot; 10] = [
    ClassSlot { day: "Monday", time: "07:00 - 08:00", name: "Morning Yoga", trainer: "Ayesha Rahman", room: "Studio A" },
    ClassSlot { day: "Monday", time: "18:00 - 19:00", name: "HIIT Blast", trainer: "Tanvir Ahmed", room: "Main Floor" },
    ClassSlot { day: "Tuesday", time: "08:00 - 09:00", name: "Spin Class", trainer: "Nadia Islam", room: "Cycle Room" },
    ClassSlot { day: "Wednesday", time: "07:00 - 08:00", name: "Strength Basics", trainer: "Tanvir Ahmed", room: "Weight Room" },
    ClassSlot { day: "Wednesday", time: "19:00 - 20:00", name: "Evening Pilates", trainer: "Ayesha Rahman", room: "Studio A" },
    ClassSlot { day: "Thursday", time: "18:00 - 19:00", name: "Boxing Fundamentals", trainer: "Rafiq Hossain", room: "Studio B" },
    ClassSlot { day: "Friday", time: "07:00 - 08:00", name: "Morning Yoga", trainer: "Ayesha Rahman", room: "Studio A" },
    ClassSlot { day: "Friday", time: "18:00 - 19:00", name: "HIIT Blast", trainer: "Tanvir Ahmed", room: "Main Floor" },
    ClassSlot { day: "Saturday", time: "10:00 - 11:00", name: "Family Fitness", trainer: "Nadia Islam", room: "Main Floor" },
    ClassSlot { day: "Sunday", time: "09:00 - 10:00", name: "Deep Stretch", trainer: "Rafiq Hossain", room: "Studio A" },
];

#[component]
pub fn ClassSchedulePage() -> impl IntoView {
    let selected_day = RwSignal::new("Monday");

    view! {
        <Title text="Class Schedule | FitMinds" />
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-primary-950">"Class Schedule"</h1>

            <div class="flex flex-wrap gap-2">
                {DAYS
                    .iter()
                    .map(|day| {
                        let day = *day;
                        view! {
                            <button
                                class=move || {
                                    if selected_day.get() == day {
                                        "px-4 py-2 rounded-full text-sm font-medium bg-primary-600 text-white"
                                    } else {
                                        "px-4 py-2 rounded-full text-sm font-medium bg-white text-primary-700 border border-primary-200 hover:bg-primary-50"
                                    }
                                }
                                on:click=move |_| selected_day.set(day)
                            >
                                {day}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {move || {
                    let day = selected_day.get();
                    let slots: Vec<_> = TIMETABLE.iter().filter(|s| s.day == day).collect();
                    if slots.is_empty() {
                        view! {
                            <p class="text-primary-700 col-span-2">"No classes scheduled for this day."</p>
                        }
                            .into_any()
                    } else {
                        slots
                            .into_iter()
                            .map(|slot| {
                                view! {
                                    <div class="bg-white rounded-xl shadow border border-primary-200 p-5">
                                        <div class="flex justify-between items-start">
                                            <h3 class="font-semibold text-primary-950">{slot.name}</h3>
                                            <span class="text-xs bg-primary-50 text-primary-700 px-2 py-1 rounded-full">
                                                {slot.time}
                                            </span>
                                        </div>
                                        <p class="mt-2 text-sm text-primary-700">
                                            {format!("Trainer: {}", slot.trainer)}
                                        </p>
                                        <p class="text-sm text-primary-700">
                                            {format!("Location: {}", slot.room)}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
