use dioxus::prelude::*;
use seating::BackendHealth;

use crate::api::ApiClient;

/// Sidebar light for the seating server; offers a recheck once it is down.
#[component]
pub fn ServerStatus() -> Element {
    let api = use_context::<ApiClient>();
    let gateway = api.gateway_url().to_string();
    let mut health = use_resource(move || {
        let api = api.clone();
        async move { api.check_health().await }
    });
    let state = health.read().clone().unwrap_or_default();

    rsx! {
        div { class: "backend-health", title: "{gateway}",
            span { class: "status-dot {state.tone()}" }
            small { "{state}" }
            if state.is_offline() {
                button {
                    class: "icon-button",
                    title: "Check again",
                    onclick: move |_| health.restart(),
                    "↻"
                }
            }
        }
    }
}
