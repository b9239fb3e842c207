//! Base-map provider buttons.

use dioxus::prelude::*;
use wgi_core::assets::{TileProvider, TILE_PROVIDERS};

#[component]
pub fn TileProviderPicker(selected: String, on_select: EventHandler<&'static TileProvider>) -> Element {
    let buttons: Vec<(&'static TileProvider, &'static str, &'static str)> = TILE_PROVIDERS
        .iter()
        .map(|p| {
            if p.name == selected {
                (p, p.color, "#ffffff")
            } else {
                (p, "transparent", p.color)
            }
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 6px;",
            for (provider, background, color) in buttons {
                button {
                    key: "{provider.name}",
                    style: "padding: 6px 10px; border-radius: 16px; border: 1px solid {provider.color}; background: {background}; color: {color}; font-size: 12px; cursor: pointer;",
                    onclick: move |_| on_select.call(provider),
                    "{provider.name}"
                }
            }
        }
    }
}
