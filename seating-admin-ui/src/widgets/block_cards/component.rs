use dioxus::prelude::*;
use seating::navigation::BlockCard;

#[component]
pub fn BlockCards(cards: Vec<BlockCard>, on_select: EventHandler<String>) -> Element {
    rsx! {
        div { class: "block-cards",
            for card in cards {
                button {
                    key: "{card.key}",
                    class: if card.active { "block-card active" } else { "block-card" },
                    style: "--block-color: {card.color};",
                    onclick: {
                        let key = card.key.clone();
                        move |_| on_select.call(key.clone())
                    },
                    div { class: "block-icon", "{card.icon}" }
                    div { class: "block-name", "{card.name}" }
                    div { class: "block-meta", "{card.hall_count} halls" }
                    if card.total > 0 {
                        div { class: "block-fill",
                            div { class: "block-fill-bar", style: "width: {card.percentage}%;" }
                        }
                        div { class: "block-meta", "{card.filled}/{card.total} seated ({card.percentage}%)" }
                    }
                }
            }
        }
    }
}
