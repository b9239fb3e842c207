//! Spinner shown while a dataset or the boundaries are fetched.

use dioxus::prelude::*;

/// `compact` drops the padding so the spinner fits the map side panel.
#[component]
pub fn LoadingSpinner(
    #[props(default = "Memuat data...".to_string())] message: String,
    #[props(default = false)] compact: bool,
) -> Element {
    let padding = if compact { "4px 0" } else { "40px 0" };

    rsx! {
        div {
            role: "status",
            style: "display: flex; justify-content: center; align-items: center; gap: 10px; padding: {padding}; font-size: 14px;",
            span { class: "wgi-spinner" }
            span { style: "opacity: 0.75;", "{message}" }
        }
    }
}
