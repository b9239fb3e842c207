//! Title row of an explorer chart card.

use crate::state::AppState;
use dioxus::prelude::*;

/// Caption under a chart title: the unit first, then any note.
pub fn caption(unit: &str, note: &str) -> String {
    match (unit.is_empty(), note.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("Satuan: {}", unit),
        (true, false) => note.to_string(),
        (false, false) => format!("Satuan: {} · {}", unit, note),
    }
}

#[component]
pub fn ChartHeader(
    title: String,
    #[props(default = String::new())] unit: String,
    #[props(default = String::new())] note: String,
) -> Element {
    let theme = use_context::<AppState>().theme();
    let caption = caption(&unit, &note);

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: baseline; gap: 8px; margin-bottom: 10px; padding-bottom: 8px; border-bottom: 1px solid {theme.divider};",
            h3 { style: "margin: 0; font-size: 16px; color: {theme.text};", "{title}" }
            if !caption.is_empty() {
                span { style: "font-size: 12px; color: {theme.text_secondary};", "{caption}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption() {
        assert_eq!(caption("", ""), "");
        assert_eq!(caption("%", ""), "Satuan: %");
        assert_eq!(caption("", "Simulasi 7 tahun"), "Simulasi 7 tahun");
        assert_eq!(caption("Jiwa", "Data BPS"), "Satuan: Jiwa · Data BPS");
    }
}
