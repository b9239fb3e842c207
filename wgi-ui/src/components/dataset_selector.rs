//! Dropdown selector for choosing a BPS dataset.

use crate::state::{AppState, DatasetState};
use dioxus::prelude::*;

/// Dataset dropdown selector.
/// Reads the manifest from `DatasetState` and updates `selected` on change.
/// The first option is an empty placeholder so "no dataset" stays selectable.
#[component]
pub fn DatasetSelector() -> Element {
    let app = use_context::<AppState>();
    let mut state = use_context::<DatasetState>();
    let options: Vec<(String, String)> = state
        .datasets
        .read()
        .iter()
        .map(|d| (d.id.clone(), d.label()))
        .collect();
    let selected = (state.selected)();
    let theme = app.theme();

    let handle_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("[WGI] dataset selected: {}", value);
        state.selected.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "dataset-select",
                style: "font-weight: bold; font-size: 13px; color: {theme.text_secondary};",
                "Pilih Dataset"
            }
            select {
                id: "dataset-select",
                style: "padding: 8px; border-radius: 8px; border: 1px solid {theme.divider}; background: {theme.paper}; color: {theme.text};",
                onchange: handle_change,
                disabled: (state.loading)(),
                option { value: "", selected: selected.is_empty(), "-- Pilih dataset --" }
                for (id, label) in options {
                    option {
                        value: "{id}",
                        selected: id == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
