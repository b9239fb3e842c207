//! Inline alert for failed loads.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ErrorDisplay(
    #[props(default = "Terjadi kesalahan".to_string())] title: String,
    message: String,
) -> Element {
    let theme = use_context::<AppState>().theme();

    rsx! {
        div {
            role: "alert",
            style: "display: flex; gap: 10px; align-items: flex-start; padding: 12px 16px; margin-bottom: 16px; border-left: 4px solid {theme.error}; border-radius: 8px; background: {theme.paper}; color: {theme.text};",
            span { style: "color: {theme.error}; font-weight: 700;", "⚠" }
            div {
                div { style: "font-weight: 600; color: {theme.error};", "{title}" }
                div { style: "font-size: 13px; color: {theme.text_secondary};", "{message}" }
            }
        }
    }
}
