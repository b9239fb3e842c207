//! Choropleth legend overlay.

use crate::state::AppState;
use dioxus::prelude::*;
use wgi_data::choropleth::LegendEntry;
use wgi_utils::format::format_number;

/// Props for MapLegend
#[derive(Props, Clone, PartialEq)]
pub struct MapLegendProps {
    /// Dataset name shown as the legend title
    pub title: String,
    /// Rows from highest to lowest bucket
    pub entries: Vec<LegendEntry>,
    pub year: String,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn MapLegend(props: MapLegendProps) -> Element {
    let theme = use_context::<AppState>().theme();
    let card = theme.card_style();
    let on_close = props.on_close;
    let rows: Vec<(LegendEntry, String)> = props
        .entries
        .iter()
        .map(|e| {
            let range = format!("{} - {}", format_number(e.lower), format_number(e.upper));
            (e.clone(), range)
        })
        .collect();

    rsx! {
        div {
            style: "{card} position: absolute; right: 16px; bottom: 24px; z-index: 1000; padding: 12px 14px; min-width: 200px; font-size: 12px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                strong { "{props.title}" }
                button {
                    style: "border: none; background: transparent; color: {theme.text}; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            for (entry, range) in rows {
                div {
                    key: "{entry.label}",
                    style: "display: flex; align-items: center; gap: 8px; margin: 3px 0;",
                    span {
                        style: "display: inline-block; width: 18px; height: 12px; border-radius: 2px; background: {entry.color};",
                    }
                    span { style: "flex: 1;", "{entry.label}" }
                    span {
                        style: "color: {theme.text_secondary};",
                        "{range}"
                    }
                }
            }
            div {
                style: "margin-top: 8px; color: {theme.text_secondary};",
                "Sumber: BPS, {props.year}"
            }
        }
    }
}
