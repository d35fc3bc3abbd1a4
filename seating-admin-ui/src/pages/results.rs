use dioxus::prelude::*;
use seating::ReportKind;
use seating::allotment::load_results;

use crate::api::ApiClient;
use crate::widgets::placeholder::Placeholder;

#[component]
pub fn Results() -> Element {
    let api = use_context::<ApiClient>();
    let excel_url = api.report_url(ReportKind::Excel);
    let pdf_url = api.report_url(ReportKind::Pdf);
    let rows = use_resource(move || {
        let api = api.clone();
        async move { load_results(api.backend()).await }
    });

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Allotment Results" }
                div { class: "header-actions",
                    a { class: "button", href: "{excel_url}", "Download Excel" }
                    a { class: "button secondary", href: "{pdf_url}", "Download PDF" }
                }
            }

            match rows.read().as_ref() {
                None => rsx! { p { class: "muted", "Loading results..." } },
                Some(rows) if rows.is_empty() => rsx! {
                    Placeholder {
                        glyph: "📋",
                        title: "No allotments yet",
                        hint: "Run the allotment to generate seat assignments.",
                    }
                },
                Some(rows) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Reg No" }
                                th { "Student Name" }
                                th { "Subject" }
                                th { "Date" }
                                th { "Hall" }
                                th { "Seat" }
                            }
                        }
                        tbody {
                            for row in rows.iter() {
                                tr { key: "{row.id}",
                                    td { "{row.student_reg}" }
                                    td { "{row.student_name}" }
                                    td { class: "mono", "{row.exam_subject}" }
                                    td { "{row.exam_date}" }
                                    td { "{row.hall_name}" }
                                    td { class: "seat-code", "{row.seat_number}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
