use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub count: Option<usize>,
}

#[component]
pub fn Tabs(items: Vec<TabItem>, active_tab: String, on_tab_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "tabs",
            for item in items {
                button {
                    key: "{item.id}",
                    class: if item.id == active_tab { "tab active" } else { "tab" },
                    onclick: {
                        let id = item.id.clone();
                        move |_| on_tab_change.call(id.clone())
                    },
                    "{item.label}"
                    if let Some(count) = item.count {
                        span { class: "tab-count", " {count}" }
                    }
                }
            }
        }
    }
}
