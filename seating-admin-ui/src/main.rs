use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

mod api;
mod config;
mod pages;
mod widgets;

use pages::{
    Allocation, Allotment, Dashboard, Exams, HallTicket, Halls, Results, StudentPortal, Students,
    Upload,
};
use widgets::sidebar::Sidebar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    StudentPortal {},
    #[route("/hall-ticket")]
    HallTicket {},
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            Dashboard {},
            #[route("/upload")]
            Upload {},
            #[route("/students")]
            Students {},
            #[route("/exams")]
            Exams {},
            #[route("/halls")]
            Halls {},
            #[route("/allotment")]
            Allotment {},
            #[route("/results")]
            Results {},
            #[route("/allocation")]
            Allocation {},
        #[end_layout]
    #[end_nest]
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api_client = use_hook(api::ApiClient::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match api_client {
            Ok(client) => rsx! {
                Portal { client }
            },
            Err(e) => rsx! {
                div { class: "config-error",
                    h1 { "Portal is misconfigured" }
                    p { "{e.user_message()}" }
                    p { "Set SEATING_GATEWAY_URL to the gateway address and reload." }
                }
            },
        }
    }
}

#[component]
fn Portal(client: api::ApiClient) -> Element {
    use_context_provider(|| client);

    rsx! {
        ToastProvider { Router::<Route> {} }
    }
}

/// Admin pages share the sidebar.
#[component]
fn AdminLayout() -> Element {
    rsx! {
        div { class: "admin-shell",
            Sidebar {}
            main { class: "admin-main", Outlet::<Route> {} }
        }
    }
}
