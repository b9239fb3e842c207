//! Side panel describing the clicked province.

use crate::state::AppState;
use dioxus::prelude::*;
use wgi_utils::format::format_number;

/// Year shown when no dataset is selected.
pub const DEFAULT_INFO_YEAR: &str = "2021";
/// Dataset label shown when no dataset is selected.
pub const NO_DATASET_LABEL: &str = "Data tidak tersedia";

/// The clicked province and the dataset it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionInfo {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub year: String,
    pub dataset: String,
}

impl RegionInfo {
    /// Build from a click, filling the dataset fields with their defaults
    /// when nothing is selected.
    pub fn new(name: String, value: f64, dataset: Option<(&str, &str, &str)>) -> Self {
        let (dataset, year, unit) = dataset.unwrap_or((NO_DATASET_LABEL, DEFAULT_INFO_YEAR, ""));
        Self {
            name,
            value,
            unit: unit.to_string(),
            year: year.to_string(),
            dataset: dataset.to_string(),
        }
    }
}

#[component]
pub fn RegionInfoPanel(info: RegionInfo, on_close: EventHandler<()>) -> Element {
    let theme = use_context::<AppState>().theme();
    let card = theme.card_style();
    let value = format_number(info.value);

    rsx! {
        div {
            style: "{card} padding: 16px; margin-top: 12px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h4 { style: "margin: 0; color: {theme.primary};", "{info.name}" }
                button {
                    style: "border: none; background: transparent; color: {theme.text}; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            p { style: "margin: 8px 0 4px 0; font-size: 13px; color: {theme.text_secondary};", "{info.dataset}" }
            p {
                style: "margin: 0; font-size: 22px; font-weight: bold;",
                "{value} "
                span { style: "font-size: 13px; font-weight: normal;", "{info.unit}" }
            }
            p { style: "margin: 4px 0 0 0; font-size: 12px; color: {theme.text_secondary};", "Tahun {info.year}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_info_defaults() {
        let info = RegionInfo::new("Bali".to_string(), 0.0, None);
        assert_eq!(info.year, "2021");
        assert_eq!(info.dataset, "Data tidak tersedia");
        assert!(info.unit.is_empty());

        let info = RegionInfo::new("Bali".to_string(), 4.3, Some(("IPM", "2020", "Indeks")));
        assert_eq!(info.dataset, "IPM");
        assert_eq!(info.year, "2020");
        assert_eq!(info.unit, "Indeks");
    }
}
