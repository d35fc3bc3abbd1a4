use dioxus::prelude::*;
use seating::pagination::{PAGE_SIZES, Page};

#[component]
pub fn Pager(page: Page, returned: usize, on_change: EventHandler<Page>) -> Element {
    rsx! {
        div { class: "pager",
            span { class: "pager-range", "{page.showing(returned)}" }
            select {
                value: "{page.size}",
                onchange: move |e: Event<FormData>| {
                    if let Ok(size) = e.value().parse::<u32>() {
                        let mut next = page;
                        next.set_size(size);
                        on_change.call(next);
                    }
                },
                for size in PAGE_SIZES {
                    option { key: "{size}", value: "{size}", selected: size == page.size, "{size} / page" }
                }
            }
            button {
                class: "button secondary",
                disabled: !page.has_previous(),
                onclick: move |_| {
                    let mut next = page;
                    next.previous();
                    on_change.call(next);
                },
                "Previous"
            }
            button {
                class: "button secondary",
                disabled: !page.has_next(returned),
                onclick: move |_| {
                    let mut next = page;
                    next.next();
                    on_change.call(next);
                },
                "Next"
            }
        }
    }
}
