use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use seating::halls::HallAdmin;

use crate::api::ApiClient;
use crate::widgets::placeholder::Placeholder;

#[derive(Clone, Copy, PartialEq)]
enum Action {
    Refresh,
    Create,
    Delete(i64),
}

#[component]
pub fn Halls() -> Element {
    let api = use_context::<ApiClient>();
    let toaster = use_toast();
    let mut admin = use_signal(HallAdmin::new);
    let mut busy = use_signal(|| false);

    // Work on a copy so no signal guard lives across the request.
    let dispatch = use_callback(move |action: Action| {
        if busy() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        let mut state = admin.peek().clone();
        spawn(async move {
            let ok = match action {
                Action::Refresh => {
                    state.refresh(api.backend()).await;
                    true
                }
                Action::Create => state.create(api.backend()).await,
                Action::Delete(id) => state.delete(api.backend(), id).await,
            };
            match (action, ok) {
                (Action::Create, true) => toaster.success(
                    "Hall created".to_string(),
                    ToastOptions::new().duration(Duration::from_secs(2)).permanent(false),
                ),
                (Action::Delete(_), true) => toaster.success(
                    "Hall deleted".to_string(),
                    ToastOptions::new().duration(Duration::from_secs(2)).permanent(false),
                ),
                _ => {}
            }
            // Only a successful create clears the form; otherwise keep what was typed meanwhile.
            if !(action == Action::Create && ok) {
                state.form = admin.peek().form.clone();
            }
            admin.set(state);
            busy.set(false);
        });
    });

    use_hook(move || dispatch.call(Action::Refresh));

    let current = admin.read().clone();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Halls" }
                p { class: "muted", "Examination halls and their seating capacity" }
            }

            form {
                class: "hall-form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    dispatch.call(Action::Create);
                },
                input {
                    r#type: "text",
                    placeholder: "Hall name (e.g. CT 12)",
                    value: "{current.form.name}",
                    oninput: move |e: Event<FormData>| admin.write().form.name = e.value(),
                }
                input {
                    r#type: "number",
                    min: "1",
                    placeholder: "Capacity",
                    value: "{current.form.capacity}",
                    oninput: move |e: Event<FormData>| admin.write().form.capacity = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Block key (optional)",
                    value: "{current.form.block_key}",
                    oninput: move |e: Event<FormData>| admin.write().form.block_key = e.value(),
                }
                button { class: "button", r#type: "submit", disabled: busy(), "Add Hall" }
            }

            if let Some(message) = current.message() {
                p { class: "status-message error", "{message}" }
            }

            if current.halls().is_empty() {
                Placeholder {
                    glyph: "🏛️",
                    title: "No halls yet",
                    hint: "Add a hall above or reload the list.",
                    on_retry: move |_| dispatch.call(Action::Refresh),
                }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Block" }
                            th { "Capacity" }
                            th {}
                        }
                    }
                    tbody {
                        for hall in current.halls().iter() {
                            tr { key: "{hall.id}",
                                td { "{hall.name}" }
                                td { "{hall.block.clone().unwrap_or_default()}" }
                                td { "{hall.capacity}" }
                                td {
                                    button {
                                        class: "button danger",
                                        disabled: busy(),
                                        onclick: {
                                            let id = hall.id;
                                            move |_| dispatch.call(Action::Delete(id))
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
