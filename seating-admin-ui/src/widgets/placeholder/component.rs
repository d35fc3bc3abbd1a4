use dioxus::prelude::*;

/// Stands in for a list or grid with nothing to show.
#[component]
pub fn Placeholder(
    glyph: &'static str,
    title: &'static str,
    hint: &'static str,
    on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        section { class: "placeholder",
            span { class: "placeholder-glyph", aria_hidden: "true", "{glyph}" }
            strong { "{title}" }
            p { class: "placeholder-hint", "{hint}" }
            if let Some(retry) = on_retry {
                button {
                    class: "button secondary",
                    onclick: move |_| retry.call(()),
                    "Reload"
                }
            }
        }
    }
}
