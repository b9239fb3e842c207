//! Layer opacity slider, 0.1 to 1.0.

use dioxus::prelude::*;

#[component]
pub fn OpacitySlider(value: f64, on_change: EventHandler<f64>) -> Element {
    let percent = (value * 100.0).round() as i64;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                style: "font-size: 13px; font-weight: bold;",
                "Opasitas Layer: {percent}%"
            }
            input {
                r#type: "range",
                min: "0.1",
                max: "1",
                step: "0.1",
                value: "{value}",
                oninput: move |evt: Event<FormData>| {
                    if let Ok(v) = evt.value().parse::<f64>() {
                        on_change.call(v.clamp(0.1, 1.0));
                    }
                },
            }
        }
    }
}
