use dioxus::prelude::*;
use seating::SeatingBackend;
use seating::pagination::{Page, STUDENT_PAGE_SIZE, StudentFilter};

use crate::api::ApiClient;
use crate::widgets::placeholder::Placeholder;
use crate::widgets::pager::Pager;

const SUBJECT_SEPARATOR: &str = ", ";

#[component]
pub fn Students() -> Element {
    let api = use_context::<ApiClient>();
    let mut filter = use_signal(StudentFilter::default);
    let mut draft = use_signal(StudentFilter::default);
    let mut page = use_signal(|| Page::new(STUDENT_PAGE_SIZE));

    let rows = use_resource(move || {
        let api = api.clone();
        let query = filter().query(&page());
        async move {
            api.backend().list_students(&query).await.unwrap_or_else(|e| {
                warn!("Failed to load students: {}", e);
                Vec::new()
            })
        }
    });

    let apply = move |e: FormEvent| {
        e.prevent_default();
        filter.set(draft());
        page.write().index = 0;
    };

    let returned = rows.read().as_ref().map_or(0, Vec::len);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Students" }
                p { class: "muted", "Registered students and their subjects" }
            }

            form { class: "filter-bar", onsubmit: apply,
                input {
                    r#type: "text",
                    placeholder: "Search name or register number",
                    value: "{draft.read().search}",
                    oninput: move |e: Event<FormData>| draft.write().search = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Department",
                    value: "{draft.read().department}",
                    oninput: move |e: Event<FormData>| draft.write().department = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Subject code",
                    value: "{draft.read().subject_code}",
                    oninput: move |e: Event<FormData>| draft.write().subject_code = e.value(),
                }
                button { class: "button", r#type: "submit", "Filter" }
            }

            match rows.read().as_ref() {
                None => rsx! { p { class: "muted", "Loading students..." } },
                Some(rows) if rows.is_empty() => rsx! {
                    Placeholder {
                        glyph: "🎓",
                        title: "No students found",
                        hint: "Upload student list PDFs or adjust the filters.",
                    }
                },
                Some(rows) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Reg No" }
                                th { "Name" }
                                th { "Department" }
                                th { "Year" }
                                th { "Subjects" }
                            }
                        }
                        tbody {
                            for student in rows.iter() {
                                tr { key: "{student.id}",
                                    td { class: "mono", "{student.reg_no}" }
                                    td { "{student.name}" }
                                    td { "{student.department.clone().unwrap_or_default()}" }
                                    td { "{student.year.clone().unwrap_or_default()}" }
                                    td { class: "mono", "{student.subjects_registered.join(SUBJECT_SEPARATOR)}" }
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
