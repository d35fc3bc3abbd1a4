use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use seating::exam_pass::ExamPass;
use seating::search::SEAT_SETTLE_DELAY;
use seating::{Load, Navigator, SeatSelection, SeatingBackend, StudentSearch};

use crate::Route;
use crate::api::ApiClient;
use crate::widgets::block_cards::BlockCards;
use crate::widgets::placeholder::Placeholder;
use crate::widgets::exam_pass::ExamPassCard;
use crate::widgets::seat_map::SeatMap;

/// Follows a load through to the seat grid. Responses that lost the race are
/// dropped inside the navigator.
async fn drive(api: ApiClient, mut view: Signal<Navigator>, load: Load, settle: bool) {
    let mut next = Some(load);
    while let Some(load) = next.take() {
        next = match load {
            Load::Halls { block, ticket } => {
                let result = api.backend().list_halls(Some(&block)).await;
                view.write().finish_select_block(ticket, result)
            }
            Load::Seats { hall, ticket } => {
                if settle {
                    TimeoutFuture::new(SEAT_SETTLE_DELAY.as_millis() as u32).await;
                }
                let result = api.backend().hall_seats(&hall).await;
                view.write().finish_select_hall(ticket, result);
                None
            }
        };
    }
}

#[component]
pub fn StudentPortal() -> Element {
    let api = use_context::<ApiClient>();
    let mut view = use_signal(Navigator::new);
    let mut search = use_signal(StudentSearch::new);
    let mut pass = use_signal(|| None::<ExamPass>);

    let init_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let ticket = view.write().begin_load_blocks();
            let result = init_api.backend().list_blocks().await;
            view.write().finish_load_blocks(ticket, result);
        })
    });

    let block_api = api.clone();
    let select_block = move |key: String| {
        pass.set(None);
        let load = view.write().begin_select_block(&key);
        spawn(drive(block_api.clone(), view, load, false));
    };

    let hall_api = api.clone();
    let select_hall = move |name: String| {
        pass.set(None);
        let load = view.write().begin_select_hall(&name);
        spawn(drive(hall_api.clone(), view, load, false));
    };

    let search_api = api.clone();
    let submit = move |e: FormEvent| {
        e.prevent_default();
        let Some((ticket, query)) = search.write().begin() else {
            return;
        };
        pass.set(None);
        let api = search_api.clone();
        spawn(async move {
            let result = api.backend().find_student(&query).await;
            let blocks = view.peek().blocks().to_vec();
            let target = search
                .write()
                .finish(ticket, result, &blocks)
                .and_then(|outcome| outcome.target().cloned());
            pass.set(search.peek().selected_student().cloned());

            if let Some(target) = target {
                let load = view.write().begin_focus(target);
                drive(api, view, load, true).await;
            }
        });
    };

    let on_seat = move |selection: SeatSelection| {
        let state = view.read();
        let Some(hall) = state.selected_hall() else {
            return;
        };
        let block = state
            .resolve_block(state.selected_block(), None)
            .map(|b| b.name.clone());
        pass.set(Some(ExamPass::from_selection(&selection, hall, block.as_deref())));
    };

    let nav_state = view.read();
    let cards = nav_state.block_cards();
    let halls = nav_state.halls().to_vec();
    let selected_hall = nav_state.selected_hall().map(String::from);
    let grid = nav_state.grid();
    let load_error = nav_state.last_error().map(|e| e.user_message());
    let has_block = nav_state.selected_block().is_some();
    drop(nav_state);

    let search_state = search.read();
    let searching = search_state.is_loading();
    let search_message = search_state.message();
    let query = search_state.query().to_string();
    drop(search_state);

    rsx! {
        div { class: "portal",
            header { class: "portal-header",
                h1 { "Find Your Exam Seat" }
                nav { class: "portal-links",
                    Link { to: Route::HallTicket {}, "Hall ticket" }
                    Link { to: Route::Dashboard {}, "Admin" }
                }
            }

            form { class: "search-bar", onsubmit: submit,
                input {
                    r#type: "text",
                    placeholder: "Register number or roll number",
                    value: "{query}",
                    oninput: move |e: Event<FormData>| search.write().set_query(e.value()),
                }
                button { class: "button", r#type: "submit", disabled: searching,
                    if searching { "Searching..." } else { "Search" }
                }
            }
            if let Some(message) = search_message.clone() {
                p { class: "search-message", "{message}" }
            }

            BlockCards { cards, on_select: select_block }

            if let Some(error) = load_error {
                p { class: "load-error", "Could not load data: {error}" }
            }

            if has_block {
                div { class: "hall-tabs",
                    for hall in halls {
                        button {
                            key: "{hall.id}",
                            class: if selected_hall.as_deref() == Some(hall.name.as_str()) { "hall-tab active" } else { "hall-tab" },
                            onclick: {
                                let name = hall.name.clone();
                                let mut select_hall = select_hall.clone();
                                move |_| select_hall(name.clone())
                            },
                            "{hall.name}"
                        }
                    }
                }
            }

            div { class: "portal-body",
                if selected_hall.is_some() {
                    SeatMap { grid, on_select: on_seat }
                } else {
                    Placeholder {
                        glyph: "🏫",
                        title: "Pick a block",
                        hint: "Choose a block and hall to see its seating, or search for a student.",
                    }
                }

                if let Some(current) = pass() {
                    ExamPassCard {
                        message: if current.is_seated() { None } else { search_message.clone() },
                        pass: current,
                        on_close: move |_| pass.set(None),
                    }
                }
            }
        }
    }
}
