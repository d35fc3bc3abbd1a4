use dioxus::prelude::*;
use seating::upload::{self, UploadFile, UploadKind, progress_message};
use strum::IntoEnumIterator;

use crate::api::ApiClient;
use crate::widgets::tabs::{TabItem, Tabs};

#[component]
pub fn Upload() -> Element {
    let mut active_tab = use_signal(|| UploadKind::Timetable.to_string());

    let tabs: Vec<TabItem> = UploadKind::iter()
        .map(|kind| TabItem {
            id: kind.to_string(),
            label: kind.title().to_string(),
            count: None,
        })
        .collect();
    let kind = UploadKind::iter()
        .find(|kind| kind.to_string() == active_tab())
        .unwrap_or(UploadKind::Timetable);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Upload Data" }
                p { class: "muted", "Upload timetable and student list PDFs to populate the database" }
            }

            Tabs {
                items: tabs,
                active_tab: active_tab(),
                on_tab_change: move |tab_id| active_tab.set(tab_id),
            }

            UploadPanel { key: "{kind}", kind }
        }
    }
}

#[component]
fn UploadPanel(kind: UploadKind) -> Element {
    let api = use_context::<ApiClient>();
    let mut files = use_signal(Vec::<UploadFile>::new);
    let mut status = use_signal(|| None::<(bool, String)>);
    let mut uploading = use_signal(|| false);

    let pick = move |e: Event<FormData>| {
        spawn(async move {
            let mut picked = Vec::new();
            for file in e.files() {
                match file.read_bytes().await {
                    Ok(bytes) => picked.push(UploadFile::new(file.name(), bytes.to_vec())),
                    Err(_) => warn!("Could not read {}", file.name()),
                }
            }
            files.set(picked);
            status.set(None);
        });
    };

    let send = move |_| {
        let api = api.clone();
        let picked = files.peek().clone();
        if picked.is_empty() {
            return;
        }
        status.set(Some((true, progress_message(&picked))));
        uploading.set(true);
        spawn(async move {
            if let Some(outcome) = upload::upload(api.backend(), kind, picked).await {
                info!("{} upload finished: {}", kind, outcome.message());
                status.set(Some((outcome.is_success(), outcome.message())));
                if outcome.is_success() {
                    files.set(Vec::new());
                }
            }
            uploading.set(false);
        });
    };

    let picked = files.read().clone();

    rsx! {
        div { class: "upload-panel",
            h2 { "{kind.title()}" }
            label { class: "drop-zone",
                input {
                    r#type: "file",
                    accept: ".pdf",
                    multiple: true,
                    disabled: uploading(),
                    onchange: pick,
                }
                span { "Click to select PDF files" }
            }

            if !picked.is_empty() {
                ul { class: "file-list",
                    for file in picked.iter() {
                        li { key: "{file.name}",
                            span { "{file.name}" }
                            span { class: "muted", " {file.bytes.len() / 1024} KB" }
                        }
                    }
                }
            }

            button {
                class: "button",
                disabled: picked.is_empty() || uploading(),
                onclick: send,
                if uploading() { "Uploading..." } else { "Upload {picked.len()} file(s)" }
            }

            if let Some((ok, message)) = status() {
                p { class: if ok { "status-message success" } else { "status-message error" }, "{message}" }
            }
        }
    }
}
