//! Province search input.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SearchBox(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "Cari provinsi...".to_string())] placeholder: String,
) -> Element {
    let theme = use_context::<AppState>().theme();

    rsx! {
        input {
            r#type: "search",
            value: "{value}",
            placeholder: "{placeholder}",
            style: "width: 100%; box-sizing: border-box; padding: 8px 12px; border-radius: 8px; border: 1px solid {theme.divider}; background: {theme.paper}; color: {theme.text};",
            oninput: move |evt: Event<FormData>| oninput.call(evt.value()),
        }
    }
}
