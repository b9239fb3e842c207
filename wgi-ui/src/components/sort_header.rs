//! Clickable table header cell showing the active sort direction.

use dioxus::prelude::*;
use wgi_data::explorer::{SortConfig, SortKey};

#[component]
pub fn SortHeader(column: SortKey, config: SortConfig, on_sort: EventHandler<SortKey>) -> Element {
    let arrow = config.indicator(column).unwrap_or("");
    let label = column.label();
    let weight = if config.key == column { "bold" } else { "normal" };

    rsx! {
        th {
            style: "cursor: pointer; user-select: none; text-align: left; padding: 8px; font-weight: {weight};",
            onclick: move |_| on_sort.call(column),
            "{label} {arrow}"
        }
    }
}
