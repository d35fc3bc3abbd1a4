use crate::Route;
use crate::widgets::server_status::ServerStatus;
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let item = |segment: &str| {
        if current_path.trim_end_matches('/').ends_with(segment) {
            "nav-item active"
        } else {
            "nav-item"
        }
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "Exam Seating" }
                span { class: "sidebar-subtitle", "Admin console" }
            }
            nav { class: "sidebar-nav",
                Link { to: Route::Dashboard {}, class: item("/admin"), "Dashboard" }
                Link { to: Route::Upload {}, class: item("/upload"), "Upload" }
                Link { to: Route::Students {}, class: item("/students"), "Students" }
                Link { to: Route::Exams {}, class: item("/exams"), "Exams" }
                Link { to: Route::Halls {}, class: item("/halls"), "Halls" }
                Link { to: Route::Allocation {}, class: item("/allocation"), "Allocation" }
                Link { to: Route::Allotment {}, class: item("/allotment"), "Run Allotment" }
                Link { to: Route::Results {}, class: item("/results"), "Results" }
            }
            div { class: "sidebar-footer",
                Link { to: Route::StudentPortal {}, class: "nav-item", "Student portal" }
                ServerStatus {}
            }
        }
    }
}
