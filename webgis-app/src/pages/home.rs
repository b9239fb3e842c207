//! Landing page: hero, feature cards and headline statistics.

use crate::Route;
use dioxus::prelude::*;
use wgi_ui::state::AppState;

struct FeatureCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    /// Opens the map rather than the explorer
    map: bool,
}

const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        icon: "🗺️",
        title: "Peta Interaktif",
        description: "Jelajahi data statistik per provinsi melalui peta choropleth yang interaktif.",
        map: true,
    },
    FeatureCard {
        icon: "📊",
        title: "Analisis Data",
        description: "Bandingkan nilai antar provinsi dengan tabel, peringkat dan grafik.",
        map: false,
    },
    FeatureCard {
        icon: "🛰️",
        title: "Data Spasial",
        description: "Batas wilayah provinsi dalam format GeoJSON yang dipadukan dengan data BPS.",
        map: true,
    },
    FeatureCard {
        icon: "📈",
        title: "Tren & Perbandingan",
        description: "Lihat tren historis provinsi teratas dan unduh data dalam format CSV.",
        map: false,
    },
];

impl FeatureCard {
    fn route(&self) -> Route {
        if self.map {
            Route::MapPage {}
        } else {
            Route::Explorer {}
        }
    }
}

const STATS: [(&str, &str); 3] = [("34", "Provinsi"), ("514", "Kabupaten/Kota"), ("50+", "Dataset")];

#[component]
pub fn Home() -> Element {
    let theme = use_context::<AppState>().theme();
    let card = theme.card_style();

    rsx! {
        section {
            style: "background: {theme.hero_gradient}; padding: 72px 16px; text-align: center;",
            h1 {
                style: "margin: 0 0 16px 0; font-size: 40px; color: {theme.primary};",
                "WebGIS Indonesia"
            }
            p {
                style: "max-width: 680px; margin: 0 auto 32px auto; font-size: 18px; color: {theme.text_secondary};",
                "Visualisasi dan eksplorasi data statistik Badan Pusat Statistik untuk seluruh provinsi di Indonesia."
            }
            div {
                style: "display: flex; gap: 12px; justify-content: center; flex-wrap: wrap;",
                Link {
                    to: Route::MapPage {},
                    style: "padding: 12px 24px; border-radius: 24px; background: {theme.primary_gradient}; color: #ffffff; text-decoration: none; font-weight: 600;",
                    "Buka Peta"
                }
                Link {
                    to: Route::Explorer {},
                    style: "padding: 12px 24px; border-radius: 24px; border: 2px solid {theme.primary}; color: {theme.primary}; text-decoration: none; font-weight: 600;",
                    "Eksplorasi Data"
                }
            }
        }

        section {
            style: "max-width: 1200px; margin: 0 auto; padding: 48px 16px;",
            h2 { style: "text-align: center; margin: 0 0 32px 0;", "Fitur Utama" }
            div {
                class: "wgi-grid",
                for feature in FEATURES.iter() {
                    Link {
                        key: "{feature.title}",
                        to: feature.route(),
                        style: "{card} padding: 24px; text-decoration: none; display: block;",
                        div { style: "font-size: 36px; margin-bottom: 12px;", "{feature.icon}" }
                        h3 { style: "margin: 0 0 8px 0; color: {theme.primary};", "{feature.title}" }
                        p { style: "margin: 0; font-size: 14px; color: {theme.text_secondary};", "{feature.description}" }
                    }
                }
            }
        }

        section {
            style: "max-width: 1200px; margin: 0 auto; padding: 0 16px 48px 16px;",
            div {
                style: "{card} padding: 32px; display: flex; justify-content: space-around; flex-wrap: wrap; gap: 24px;",
                for (value, label) in STATS {
                    div {
                        key: "{label}",
                        style: "text-align: center;",
                        div { style: "font-size: 36px; font-weight: 700; color: {theme.primary};", "{value}" }
                        div { style: "color: {theme.text_secondary};", "{label}" }
                    }
                }
            }
        }
    }
}
