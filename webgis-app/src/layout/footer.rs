use crate::Route;
use dioxus::prelude::*;
use wgi_ui::state::AppState;
use wgi_utils::dates::current_year;

pub const CONTACT_ADDRESS: &str = "Jl. Dieng Atas, Kab. Malang";
pub const CONTACT_EMAIL: &str = "info@webgis-indonesia.com";

#[component]
pub fn Footer() -> Element {
    let theme = use_context::<AppState>().theme();
    let year = current_year();
    let link_style = format!("color: {}; text-decoration: none;", theme.text_secondary);

    rsx! {
        footer {
            style: "background: {theme.paper}; border-top: 1px solid {theme.divider}; padding: 32px 16px 16px 16px; margin-top: 32px;",
            div {
                style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px;",
                div {
                    h4 { style: "margin: 0 0 8px 0; color: {theme.primary};", "WebGIS Indonesia" }
                    p {
                        style: "margin: 0; font-size: 14px; color: {theme.text_secondary};",
                        "Platform visualisasi data spasial untuk eksplorasi data statistik wilayah Indonesia."
                    }
                }
                div {
                    h4 { style: "margin: 0 0 8px 0;", "Tautan" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px;",
                        for (route, label) in Route::nav_items() {
                            Link { to: route, style: "{link_style}", "{label}" }
                        }
                    }
                }
                div {
                    h4 { style: "margin: 0 0 8px 0;", "Kontak" }
                    p { style: "margin: 0 0 4px 0; font-size: 14px; color: {theme.text_secondary};", "{CONTACT_ADDRESS}" }
                    a { href: "mailto:{CONTACT_EMAIL}", style: "{link_style} font-size: 14px;", "{CONTACT_EMAIL}" }
                }
            }
            p {
                style: "text-align: center; margin: 24px 0 0 0; font-size: 13px; color: {theme.text_secondary};",
                "© {year} WebGIS Indonesia. Semua hak dilindungi."
            }
        }
    }
}
