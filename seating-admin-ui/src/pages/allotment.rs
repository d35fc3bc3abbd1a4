use dioxus::prelude::*;
use seating::SeatingBackend;
use seating::allotment::AllotmentRun;

use crate::api::ApiClient;

#[component]
pub fn Allotment() -> Element {
    let api = use_context::<ApiClient>();
    let mut run = use_signal(AllotmentRun::default);

    let start = move |_| {
        let api = api.clone();
        run.write().begin();
        spawn(async move {
            let result = api.backend().run_allotment().await;
            run.write().finish(result);
        });
    };

    let state = run.read().clone();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Run Allotment" }
                p { class: "muted", "Execute the automatic seat allocation for every scheduled slot" }
            }

            div { class: "action-card",
                h2 { "Ready to generate the seating plan?" }
                button { class: "button", disabled: state.is_running(), onclick: start,
                    if state.is_running() { "Processing..." } else { "Start Allotment" }
                }
            }

            if !state.log().is_empty() {
                div { class: "log-panel",
                    h3 { "Execution log" }
                    for (i, line) in state.log().iter().enumerate() {
                        div { key: "{i}", class: "log-line", "{line}" }
                    }
                }
            }
        }
    }
}
