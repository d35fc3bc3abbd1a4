use chrono::NaiveDate;
use dioxus::prelude::*;
use seating::SeatingBackend;
use seating::pagination::{EXAM_PAGE_SIZE, ExamFilter, Page};
use shared_http::api::Session;
use strum::IntoEnumIterator;

use crate::api::ApiClient;
use crate::widgets::placeholder::Placeholder;
use crate::widgets::pager::Pager;

const ALL_SESSIONS: &str = "all";

#[component]
pub fn Exams() -> Element {
    let api = use_context::<ApiClient>();
    let mut filter = use_signal(ExamFilter::default);
    let mut page = use_signal(|| Page::new(EXAM_PAGE_SIZE));

    let exams = use_resource(move || {
        let api = api.clone();
        let query = filter().query(&page());
        async move {
            api.backend().list_exams(&query).await.unwrap_or_else(|e| {
                warn!("Failed to load exams: {}", e);
                Vec::new()
            })
        }
    });

    let returned = exams.read().as_ref().map_or(0, Vec::len);
    let current = filter();
    let date_value = current.date.map(|d| d.to_string()).unwrap_or_default();
    let session_value = current
        .session
        .map(|s| s.to_string())
        .unwrap_or_else(|| ALL_SESSIONS.to_string());

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Exams" }
                p { class: "muted", "Timetable entries parsed from the uploaded PDFs" }
            }

            div { class: "filter-bar",
                input {
                    r#type: "text",
                    placeholder: "Subject code",
                    value: "{current.subject_code}",
                    onchange: move |e: Event<FormData>| {
                        filter.write().subject_code = e.value();
                        page.write().index = 0;
                    },
                }
                input {
                    r#type: "date",
                    value: "{date_value}",
                    onchange: move |e: Event<FormData>| {
                        filter.write().date = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d").ok();
                        page.write().index = 0;
                    },
                }
                select {
                    value: "{session_value}",
                    onchange: move |e: Event<FormData>| {
                        filter.write().session = e.value().parse::<Session>().ok();
                        page.write().index = 0;
                    },
                    option { value: ALL_SESSIONS, "All sessions" }
                    for session in Session::iter() {
                        option { key: "{session}", value: "{session}", "{session}" }
                    }
                }
            }

            match exams.read().as_ref() {
                None => rsx! { p { class: "muted", "Loading exams..." } },
                Some(exams) if exams.is_empty() => rsx! {
                    Placeholder {
                        glyph: "🗓️",
                        title: "No exams found",
                        hint: "Upload timetable PDFs or clear the filters.",
                    }
                },
                Some(exams) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Session" }
                                th { "Subject Code" }
                                th { "Subject" }
                            }
                        }
                        tbody {
                            for exam in exams.iter() {
                                tr { key: "{exam.id}",
                                    td { "{exam.date}" }
                                    td {
                                        span { class: "session-badge", "{exam.session}" }
                                    }
                                    td { class: "mono", "{exam.subject_code}" }
                                    td { "{exam.subject_name}" }
                                }
                            }
                        }
                    }
                },
            }

            Pager {
                page: page(),
                returned,
                on_change: move |next| page.set(next),
            }
        }
    }
}
