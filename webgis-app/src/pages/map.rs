//! Interactive choropleth map of the provinces.
//!
//! Boundaries and the dataset manifest are fetched once on mount. Selecting a
//! dataset fetches its CSV, joins the values into the GeoJSON by province
//! name, colors each feature and hands the result to Leaflet. Tile provider
//! and opacity changes are applied to the live map without a redraw.

use dioxus::prelude::*;
use futures::StreamExt;
use std::collections::HashMap;
use wgi_core::assets::{default_tile_provider, AssetPaths, TileProvider};
use wgi_core::geo::{parse_geojson, FeatureCollection};
use wgi_core::observation::{parse_observations_csv, province_values};
use wgi_data::choropleth::{color_scale, legend, style_features, LegendEntry};
use wgi_ui::components::{
    DatasetSelector, ErrorDisplay, LoadingSpinner, MapLegend, OpacitySlider, RegionInfo,
    RegionInfoPanel, TileProviderPicker,
};
use wgi_ui::fetch::{fetch_text, fetch_text_prefer_gz};
use wgi_ui::js_bridge::{self, MapOptions};
use wgi_ui::state::{settle_fetch, AppState, DatasetState, FetchSettle};

/// Leaflet container DOM id.
const MAP_ID: &str = "wgi-choropleth-map";

/// Initial fill opacity of the province layer.
const DEFAULT_OPACITY: f64 = 0.7;

#[component]
pub fn MapPage() -> Element {
    let theme = use_context::<AppState>().theme();
    let datasets = use_context_provider(DatasetState::new);
    let paths = AssetPaths::default();

    let mut boundaries = use_signal(|| None::<FeatureCollection>);
    let mut geo_error = use_signal(|| None::<String>);
    let mut values = use_signal(HashMap::<String, f64>::new);
    let mut loading_values = use_signal(|| false);
    let mut provider = use_signal(|| *default_tile_provider());
    let mut opacity = use_signal(|| DEFAULT_OPACITY);
    let mut legend_entries = use_signal(Vec::<LegendEntry>::new);
    let mut legend_open = use_signal(|| true);
    let mut drawer_open = use_signal(|| true);
    let mut region = use_signal(|| None::<RegionInfo>);

    // Region clicks arrive from a JS callback; signals are only written here.
    let clicks = use_coroutine(move |mut rx: UnboundedReceiver<(String, f64)>| async move {
        while let Some((name, value)) = rx.next().await {
            let dataset = datasets.selected_dataset();
            let info = RegionInfo::new(
                name,
                value,
                dataset
                    .as_ref()
                    .map(|d| (d.name.as_str(), d.year.as_str(), d.unit.as_str())),
            );
            region.set(Some(info));
        }
    });

    // Mount: bridge, click handler, manifest and boundaries
    let manifest_url = paths.manifest_url();
    let geojson_url = paths.geojson_url();
    use_effect(move || {
        js_bridge::init_bridge();
        let tx = clicks.tx();
        js_bridge::on_region_click(move |name, value| {
            if let Err(e) = tx.unbounded_send((name, value)) {
                log::warn!("[WGI] region click dropped: {}", e);
            }
        });

        let manifest_url = manifest_url.clone();
        spawn(async move {
            datasets.load_manifest(&manifest_url).await;
        });

        let geojson_url = geojson_url.clone();
        spawn(async move {
            match fetch_text_prefer_gz(&geojson_url)
                .await
                .and_then(|text| parse_geojson(&text))
            {
                Ok(collection) => {
                    log::info!("[WGI] loaded {} province boundaries", collection.features.len());
                    boundaries.set(Some(collection));
                }
                Err(e) => {
                    log::error!("[WGI] failed to load boundaries: {}", e);
                    geo_error.set(Some(format!("Gagal memuat batas wilayah: {}", e)));
                }
            }
        });
    });

    // Dataset selection: fetch the CSV, last selection wins
    use_effect(move || {
        let selected = datasets.selected_dataset();
        region.set(None);
        let Some(dataset) = selected else {
            values.set(HashMap::new());
            loading_values.set(false);
            return;
        };
        let url = paths.dataset_url(&dataset);
        loading_values.set(true);
        spawn(async move {
            let result = fetch_text(&url)
                .await
                .and_then(|text| parse_observations_csv(&text));
            let settle = settle_fetch(&datasets.selected.peek(), &dataset.id);
            match settle {
                FetchSettle::Apply => {}
                FetchSettle::DiscardKeepLoading => return,
                FetchSettle::DiscardClearLoading => {
                    loading_values.set(false);
                    return;
                }
            }
            match result {
                Ok(rows) => values.set(province_values(&rows)),
                Err(e) => {
                    log::error!("[WGI] failed to load {}: {}", url, e);
                    values.set(HashMap::new());
                }
            }
            loading_values.set(false);
        });
    });

    // Redraw the choropleth whenever boundaries, values or the dataset change
    use_effect(move || {
        let Some(collection) = boundaries.read().clone() else {
            return;
        };
        let dataset = datasets.selected_dataset();
        let mut joined = collection.with_values(&values.read());
        let indicator = dataset.as_ref().map(|d| &d.indicator);
        let range = style_features(&mut joined, indicator);

        let entries = match (indicator, range) {
            (Some(indicator), Some(range)) => legend(&color_scale(Some(indicator)), &range),
            _ => Vec::new(),
        };
        legend_entries.set(entries);

        let json = match joined.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("[WGI] could not serialize boundaries: {}", e);
                return;
            }
        };
        let tile = *provider.peek();
        let options = MapOptions {
            provider: &tile,
            opacity: *opacity.peek(),
            unit: dataset.as_ref().map(|d| d.unit.as_str()).unwrap_or(""),
            year: dataset.as_ref().map(|d| d.year.as_str()).unwrap_or(""),
            dataset_name: dataset.as_ref().map(|d| d.name.as_str()).unwrap_or(""),
        };
        js_bridge::render_choropleth(MAP_ID, &json, &options);
    });

    use_effect(move || {
        let tile = provider();
        js_bridge::set_tile_provider(MAP_ID, &tile);
    });

    use_effect(move || {
        js_bridge::set_layer_opacity(MAP_ID, opacity());
    });

    use_drop(|| js_bridge::destroy_map(MAP_ID));

    let selected = datasets.selected_dataset();
    let card = theme.card_style();
    let layout_style = if drawer_open() {
        ""
    } else {
        "grid-template-columns: 1fr;"
    };
    let drawer_label = if drawer_open() {
        "Sembunyikan Panel"
    } else {
        "Tampilkan Panel"
    };
    let error = (datasets.error_msg)().or_else(|| geo_error());
    let legend_title = selected.as_ref().map(|d| d.name.clone()).unwrap_or_default();
    let legend_year = selected.as_ref().map(|d| d.year.clone()).unwrap_or_default();
    let show_legend = selected.is_some() && !legend_entries.read().is_empty();

    rsx! {
        div {
            style: "max-width: 1400px; margin: 0 auto; padding: 16px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h2 { style: "margin: 0;", "Peta Interaktif" }
                button {
                    style: "padding: 6px 14px; border-radius: 16px; border: 1px solid {theme.primary}; background: transparent; color: {theme.primary}; cursor: pointer;",
                    onclick: move |_| drawer_open.toggle(),
                    "{drawer_label}"
                }
            }

            if let Some(err) = error {
                ErrorDisplay { message: err }
            }

            div {
                class: "wgi-drawer-layout",
                style: "{layout_style}",
                if drawer_open() {
                    aside {
                        style: "{card} padding: 16px; display: flex; flex-direction: column; gap: 16px; align-self: start;",
                        DatasetSelector {}
                        if loading_values() {
                            LoadingSpinner { compact: true }
                        }
                        div {
                            h4 { style: "margin: 0 0 8px 0; font-size: 13px;", "Peta Dasar" }
                            TileProviderPicker {
                                selected: provider().name.to_string(),
                                on_select: move |p: &'static TileProvider| provider.set(*p),
                            }
                        }
                        OpacitySlider {
                            value: opacity(),
                            on_change: move |v| opacity.set(v),
                        }
                        if let Some(info) = region() {
                            RegionInfoPanel {
                                info,
                                on_close: move |_| region.set(None),
                            }
                        }
                    }
                }
                div {
                    style: "position: relative;",
                    if boundaries.read().is_none() && geo_error().is_none() {
                        LoadingSpinner { message: "Memuat peta...".to_string() }
                    }
                    div {
                        id: MAP_ID,
                        style: "height: 70vh; min-height: 480px; width: 100%; border-radius: 12px; overflow: hidden;",
                    }
                    if show_legend && legend_open() {
                        MapLegend {
                            title: legend_title,
                            entries: legend_entries(),
                            year: legend_year,
                            on_close: move |_| legend_open.set(false),
                        }
                    } else if show_legend {
                        button {
                            style: "position: absolute; right: 16px; bottom: 24px; z-index: 1000; padding: 6px 12px; border-radius: 16px; border: none; background: {theme.primary}; color: #ffffff; cursor: pointer;",
                            onclick: move |_| legend_open.set(true),
                            "Tampilkan Legenda"
                        }
                    }
                }
            }
        }
    }
}
