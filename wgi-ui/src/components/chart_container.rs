//! Mount point for a D3 chart.

use dioxus::prelude::*;

/// Empty element D3 draws into. The JS side sizes the SVG to the element's
/// width, so only the height is fixed here.
#[component]
pub fn ChartContainer(
    /// DOM id passed to the render call
    id: String,
    /// Accessible name of the chart, e.g. "Grafik batang nilai provinsi"
    label: String,
    #[props(default = 360)] height: u32,
) -> Element {
    rsx! {
        figure {
            style: "margin: 0; width: 100%;",
            div {
                id: "{id}",
                role: "img",
                aria_label: "{label}",
                style: "width: 100%; height: {height}px; overflow: hidden;",
            }
        }
    }
}
