use dioxus::prelude::*;
use seating::search::{HallTicketOutcome, NO_EXAMS_MESSAGE, lookup_hall_ticket};

use crate::Route;
use crate::api::ApiClient;

#[component]
pub fn HallTicket() -> Element {
    let api = use_context::<ApiClient>();
    let mut reg_no = use_signal(String::new);
    let mut outcome = use_signal(|| None::<HallTicketOutcome>);
    let mut loading = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();
        let query = reg_no.peek().clone();
        spawn(async move {
            loading.set(true);
            if let Some(result) = lookup_hall_ticket(api.backend(), &query).await {
                outcome.set(Some(result));
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "portal",
            header { class: "portal-header",
                h1 { "Hall Ticket" }
                nav { class: "portal-links",
                    Link { to: Route::StudentPortal {}, "Seat finder" }
                }
            }

            form { class: "search-bar", onsubmit: submit,
                input {
                    r#type: "text",
                    placeholder: "Register number",
                    value: "{reg_no}",
                    oninput: move |e: Event<FormData>| reg_no.set(e.value()),
                }
                button { class: "button", r#type: "submit", disabled: loading(),
                    if loading() { "Searching..." } else { "Search" }
                }
            }

            match outcome() {
                Some(HallTicketOutcome::Found(ticket)) => rsx! {
                    div { class: "ticket-card",
                        h2 { "{ticket.student.name}" }
                        p { class: "muted",
                            "{ticket.student.reg_no}"
                            if let Some(dept) = &ticket.student.dept {
                                " · {dept}"
                            }
                        }
                        if ticket.allotments.is_empty() {
                            p { class: "muted", "{NO_EXAMS_MESSAGE}" }
                        } else {
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Date" }
                                        th { "Session" }
                                        th { "Subject" }
                                        th { "Hall" }
                                        th { "Seat" }
                                    }
                                }
                                tbody {
                                    for exam in ticket.allotments.iter() {
                                        tr { key: "{exam.subject_code}-{exam.date}",
                                            td { "{exam.date}" }
                                            td { "{exam.session}" }
                                            td { "{exam.subject_code} · {exam.subject_name}" }
                                            td { "{exam.hall_name}" }
                                            td { class: "seat-code", "{exam.seat_number}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(other) => rsx! {
                    p { class: "search-message", "{other.message().unwrap_or_default()}" }
                },
                None => rsx! {},
            }
        }
    }
}
