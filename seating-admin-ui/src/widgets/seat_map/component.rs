use dioxus::prelude::*;
use seating::{SeatGrid, SeatSelection};

/// Seat grid for one hall. Occupied seats are clickable.
#[component]
pub fn SeatMap(grid: SeatGrid, on_select: EventHandler<SeatSelection>, show_legend: Option<bool>) -> Element {
    let columns = grid.layout().row_width();

    rsx! {
        div { class: "seat-map",
            if let Some((expected, actual)) = grid.capacity_mismatch() {
                p { class: "seat-map-warning",
                    "This hall lists {actual} seats for a capacity of {expected}."
                }
            }
            div { class: "seat-grid", style: "grid-template-columns: repeat({columns}, 1fr);",
                for (cell, selection) in grid.cells().iter().map(|c| (c, grid.select(c.index))) {
                    button {
                        key: "{cell.index}",
                        class: if cell.highlighted { "seat highlighted" } else if cell.is_empty() { "seat empty" } else { "seat" },
                        style: "{cell.style.css()}",
                        title: "{cell.code}",
                        disabled: selection.is_none(),
                        onclick: move |_| {
                            if let Some(selection) = selection.clone() {
                                on_select.call(selection);
                            }
                        },
                        span { class: "seat-label", "{cell.label}" }
                        span { class: "seat-code", "{cell.code}" }
                    }
                }
            }
            if show_legend.unwrap_or(true) {
                div { class: "seat-legend",
                    for swatch in SeatGrid::legend() {
                        span { key: "{swatch.key}", class: "legend-item",
                            span { class: "legend-dot", style: "{swatch.style.css()}" }
                            "{swatch.key.to_uppercase()}"
                        }
                    }
                }
            }
        }
    }
}
