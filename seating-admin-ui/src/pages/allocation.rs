use chrono::NaiveDate;
use dioxus::prelude::*;
use seating::SeatSelection;
use seating::allocation::{AllocationConsole, FillTier, YEARS};
use seating::palette::ALLOCATION_LEGEND;
use shared_http::api::Session;

use crate::api::ApiClient;
use crate::widgets::placeholder::Placeholder;
use crate::widgets::seat_map::SeatMap;

const DATE_LABEL: &str = "%d %b %Y";

#[derive(Clone, PartialEq)]
enum Step {
    /// Dates for the current year, then stats.
    Reload,
    Stats,
    Run,
    OpenHall(String),
}

#[component]
pub fn Allocation() -> Element {
    let api = use_context::<ApiClient>();
    let mut console = use_signal(AllocationConsole::new);
    let mut busy = use_signal(|| false);
    let mut picked = use_signal(|| None::<SeatSelection>);

    let dispatch = use_callback(move |step: Step| {
        busy.set(true);
        let api = api.clone();
        let mut state = console.peek().clone();
        spawn(async move {
            let backend = api.backend();
            match step {
                Step::Reload => {
                    state.load_dates(backend).await;
                    state.load_stats(backend).await;
                }
                Step::Stats => state.load_stats(backend).await,
                Step::Run => state.run(backend).await,
                Step::OpenHall(name) => state.show_hall(backend, &name).await,
            }
            console.set(state);
            busy.set(false);
        });
    });

    use_hook(move || dispatch.call(Step::Reload));

    let current = console.read().clone();
    let date_value = current.date().map(|d| d.to_string()).unwrap_or_default();
    let session_value = current.session().to_string();
    let open_grid = current.open_grid();
    let dates: Vec<(String, String)> = current
        .unique_dates()
        .into_iter()
        .map(|d| (d.to_string(), d.format(DATE_LABEL).to_string()))
        .collect();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Seat Allocation" }
                p { class: "muted", "Allocate students to halls for an exam slot" }
            }

            div { class: "filter-bar",
                select {
                    value: "{current.year()}",
                    disabled: busy(),
                    onchange: move |e: Event<FormData>| {
                        if let Ok(year) = e.value().parse::<u8>() {
                            console.write().set_year(year);
                            dispatch.call(Step::Reload);
                        }
                    },
                    for year in YEARS {
                        option { key: "{year}", value: "{year}", "Year {year}" }
                    }
                }
                select {
                    value: "{date_value}",
                    disabled: busy() || current.exam_dates().is_empty(),
                    onchange: move |e: Event<FormData>| {
                        if let Ok(date) = e.value().parse::<NaiveDate>() {
                            console.write().select_date(date);
                            dispatch.call(Step::Stats);
                        }
                    },
                    for (value, label) in dates {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
                select {
                    value: "{session_value}",
                    disabled: busy() || current.date().is_none(),
                    onchange: move |e: Event<FormData>| {
                        if let Ok(session) = e.value().parse::<Session>() {
                            console.write().set_session(session);
                            dispatch.call(Step::Stats);
                        }
                    },
                    for session in current.sessions() {
                        option { key: "{session}", value: "{session}", "{session}" }
                    }
                }
                button {
                    class: "button",
                    disabled: busy(),
                    onclick: move |_| dispatch.call(Step::Run),
                    if busy() { "Working..." } else { "Run Allocation" }
                }
            }

            if let Some(message) = current.message() {
                p { class: "status-message", "{message}" }
            }

            if let Some(summary) = current.summary() {
                div { class: "stat-grid",
                    div { class: "stat-card",
                        span { class: "stat-value", "{summary.total_halls}" }
                        span { class: "stat-label", "Halls" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-value", "{summary.total_capacity}" }
                        span { class: "stat-label", "Capacity" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-value", "{summary.total_filled}" }
                        span { class: "stat-label", "Seated" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-value", "{summary.overall_percentage}%" }
                        span { class: "stat-label", "Filled" }
                    }
                }
            }

            div { class: "allocation-legend",
                for (dept, color) in ALLOCATION_LEGEND {
                    span { key: "{dept}", class: "legend-item",
                        span { class: "legend-dot", style: "background: {color};" }
                        "{dept}"
                    }
                }
            }

            if current.hall_cards().is_empty() {
                Placeholder {
                    glyph: "🪑",
                    title: "Nothing allocated",
                    hint: "Run allocation for this slot to fill the halls.",
                }
            } else {
                div { class: "hall-cards",
                    for hall in current.hall_cards() {
                        button {
                            key: "{hall.hall_id}",
                            class: format!("hall-card {}", FillTier::from_percentage(hall.percentage)),
                            disabled: busy(),
                            onclick: {
                                let name = hall.hall_name.clone();
                                move |_| {
                                    picked.set(None);
                                    dispatch.call(Step::OpenHall(name.clone()));
                                }
                            },
                            h3 { "{hall.hall_name}" }
                            p { class: "muted", "{hall.block}" }
                            div { class: "fill-bar",
                                div { class: "fill-bar-inner", style: "width: {hall.percentage}%;" }
                            }
                            p { "{hall.filled} / {hall.capacity} · {hall.percentage}%" }
                        }
                    }
                }
            }

            if let (Some(hall), Some(grid)) = (current.open_hall(), open_grid) {
                div { class: "modal-backdrop",
                    onclick: move |_| console.write().close_hall(),
                    div { class: "modal",
                        onclick: move |e| e.stop_propagation(),
                        div { class: "modal-header",
                            h2 { "{hall.hall.name}" }
                            span { class: "muted", "{hall.hall.block} · {hall.filled}/{hall.hall.capacity} seated" }
                            button {
                                class: "button ghost",
                                onclick: move |_| console.write().close_hall(),
                                "Close"
                            }
                        }
                        SeatMap {
                            grid,
                            on_select: move |selection| picked.set(Some(selection)),
                            show_legend: false,
                        }
                        if let Some(seat) = picked() {
                            p { class: "seat-detail",
                                "{seat.seat_code}: {seat.student.roll_no} · {seat.student.name}"
                                if let Some(dept) = &seat.student.department {
                                    " ({dept})"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
