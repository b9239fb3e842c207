//! Placeholder shown when there is nothing to display.

use dioxus::prelude::*;

#[component]
pub fn EmptyState(title: String, #[props(default = String::new())] hint: String) -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 48px 16px; opacity: 0.75;",
            div { style: "font-size: 40px; margin-bottom: 8px;", "🗂️" }
            h4 { style: "margin: 0 0 6px 0; font-size: 18px;", "{title}" }
            if !hint.is_empty() {
                p { style: "margin: 0; font-size: 14px;", "{hint}" }
            }
        }
    }
}
