use dioxus::prelude::*;
use seating::exam_pass::ExamPass;

#[component]
pub fn ExamPassCard(pass: ExamPass, message: Option<String>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "exam-pass",
            div { class: "exam-pass-header",
                h3 { "Exam Pass" }
                button { class: "icon-button", onclick: move |_| on_close.call(()), "✕" }
            }
            dl { class: "exam-pass-body",
                dt { "Name" }
                dd { "{pass.name}" }
                dt { "Register No" }
                dd { "{pass.reg_no}" }
                dt { "Roll No" }
                dd { "{pass.roll_no}" }
                if let Some(department) = &pass.department {
                    dt { "Department" }
                    dd { "{department}" }
                }
                if let Some(year) = pass.year_of_study {
                    dt { "Year" }
                    dd { "{year}" }
                }
                if let Some(block) = &pass.block {
                    dt { "Block" }
                    dd { "{block}" }
                }
                if let Some(hall) = &pass.hall {
                    dt { "Hall" }
                    dd { "{hall}" }
                }
                if let Some(code) = &pass.seat_code {
                    dt { "Seat" }
                    dd { class: "seat-code", "{code}" }
                }
                if let Some(line) = pass.seat_line() {
                    dt { "Position" }
                    dd { "{line}" }
                }
            }
            if let Some(message) = message {
                p { class: "exam-pass-note", "{message}" }
            }
        }
    }
}
