//! Project description, technology stack and data sources.

use dioxus::prelude::*;
use wgi_ui::state::AppState;

const TECHNOLOGIES: [(&str, &str); 6] = [
    ("Rust + WebAssembly", "Seluruh logika aplikasi dikompilasi ke WASM"),
    ("Dioxus", "Komponen UI reaktif dan routing"),
    ("Leaflet", "Peta interaktif dan layer GeoJSON"),
    ("D3.js", "Grafik batang, donat dan garis"),
    ("GeoJSON", "Batas wilayah provinsi"),
    ("CSV", "Format data statistik per provinsi"),
];

const DATA_SOURCES: [(&str, &str, &str); 3] = [
    (
        "Badan Pusat Statistik (BPS)",
        "https://www.bps.go.id/",
        "Sumber utama data statistik kependudukan, ekonomi dan sosial.",
    ),
    (
        "Portal Satu Data Indonesia",
        "https://data.go.id/",
        "Portal data terbuka pemerintah Indonesia.",
    ),
    (
        "Geoportal Indonesia",
        "https://tanahair.indonesia.go.id/portal-web",
        "Data geospasial resmi batas wilayah administrasi.",
    ),
];

#[component]
pub fn About() -> Element {
    let theme = use_context::<AppState>().theme();
    let card = theme.card_style();

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 48px 16px;",
            h1 { style: "margin: 0 0 16px 0; color: {theme.primary};", "Tentang WebGIS Indonesia" }
            p {
                style: "font-size: 16px; line-height: 1.7; color: {theme.text_secondary};",
                "WebGIS Indonesia adalah aplikasi sistem informasi geografis berbasis web untuk memvisualisasikan data statistik "
                "provinsi di Indonesia. Pengguna dapat memilih dataset BPS, melihat sebarannya pada peta choropleth, "
                "serta membandingkan dan mengunduh data melalui halaman eksplorasi."
            }

            h2 { style: "margin: 32px 0 16px 0;", "Teknologi" }
            div {
                class: "wgi-grid",
                for (name, description) in TECHNOLOGIES {
                    div {
                        key: "{name}",
                        style: "{card} padding: 16px;",
                        strong { style: "color: {theme.primary};", "{name}" }
                        p { style: "margin: 6px 0 0 0; font-size: 14px; color: {theme.text_secondary};", "{description}" }
                    }
                }
            }

            h2 { style: "margin: 32px 0 16px 0;", "Sumber Data" }
            for (name, url, description) in DATA_SOURCES {
                div {
                    key: "{name}",
                    style: "{card} padding: 16px; margin-bottom: 12px;",
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "font-weight: 600; color: {theme.primary}; text-decoration: none;",
                        "{name}"
                    }
                    p { style: "margin: 6px 0 0 0; font-size: 14px; color: {theme.text_secondary};", "{description}" }
                }
            }
        }
    }
}
