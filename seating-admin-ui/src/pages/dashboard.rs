use dioxus::prelude::*;
use seating::dashboard::DashboardStats;

use crate::Route;
use crate::api::ApiClient;

#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let stats = use_resource(move || {
        let api = api.clone();
        async move { DashboardStats::load(api.backend()).await }
    });
    let loading = stats.read().is_none();
    let counts = (*stats.read()).unwrap_or_default();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Dashboard" }
                p { class: "muted", "Overview of halls, students and scheduled exams" }
            }

            div { class: "stat-grid",
                StatCard { label: "Exam Halls".to_string(), value: counts.halls, loading, to: Route::Halls {} }
                StatCard { label: "Students".to_string(), value: counts.students, loading, to: Route::Students {} }
                StatCard { label: "Exams".to_string(), value: counts.exams, loading, to: Route::Exams {} }
            }

            div { class: "quick-actions",
                h2 { "Quick actions" }
                Link { to: Route::Upload {}, class: "button", "Upload PDFs" }
                Link { to: Route::Allocation {}, class: "button", "Allocate seats" }
                Link { to: Route::Results {}, class: "button secondary", "View results" }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: u64, loading: bool, to: Route) -> Element {
    rsx! {
        Link { to, class: "stat-card",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value",
                if loading { "…" } else { "{value}" }
            }
        }
    }
}
