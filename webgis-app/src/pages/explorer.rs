//! Data explorer: ranked province table, charts and CSV export.

use dioxus::prelude::*;
use wgi_core::assets::AssetPaths;
use wgi_core::geo::parse_geojson;
use wgi_core::observation::{parse_observations_csv, ProvinceObservation, Trend};
use wgi_core::province::PROVINCES;
use wgi_data::charts::{
    bar_chart_data, donut_chart_data, line_chart_data, BAR_CHART_TOP, DONUT_CHART_TOP,
};
use wgi_data::explorer::{ExplorerTab, ExplorerView, Pagination, SortConfig, SortKey, ViewMode};
use wgi_data::export::{download_file_name, to_csv};
use wgi_data::ranking::rank_observations;
use wgi_data::synth::{historical_series, HistorySeries};
use wgi_ui::components::{
    ChartContainer, ChartHeader, DatasetSelector, EmptyState, ErrorDisplay, LoadingSpinner,
    PaginationBar, SearchBox, SortHeader,
};
use wgi_ui::fetch::{fetch_text, fetch_text_prefer_gz};
use wgi_ui::js_bridge::{self, ChartConfig};
use wgi_ui::state::{settle_fetch, AppState, DatasetState, FetchSettle};
use wgi_ui::theme::Theme;
use wgi_utils::format::format_number;

/// Chart container DOM element IDs used by D3.js to render into.
const BAR_CHART_ID: &str = "explorer-bar-chart";
const DONUT_CHART_ID: &str = "explorer-donut-chart";
const LINE_CHART_ID: &str = "explorer-line-chart";

/// Slice and series colors.
const CHART_PALETTE: [&str; 5] = ["#3a7bd5", "#f07b3f", "#2ecc71", "#9b59b6", "#f39c12"];

const CSV_MIME: &str = "text/csv;charset=utf-8;";

#[component]
pub fn Explorer() -> Element {
    let theme = use_context::<AppState>().theme();
    let datasets = use_context_provider(DatasetState::new);
    let paths = AssetPaths::default();

    let mut rows = use_signal(Vec::<ProvinceObservation>::new);
    let mut history = use_signal(Vec::<HistorySeries>::new);
    let mut province_count = use_signal(|| PROVINCES.len());
    let mut loading_rows = use_signal(|| false);
    let mut search = use_signal(String::new);
    let mut sort = use_signal(SortConfig::default);
    let mut pagination = use_signal(Pagination::default);
    let mut view_mode = use_signal(|| ViewMode::Table);
    let mut tab = use_signal(|| ExplorerTab::Data);
    let mut refresh = use_signal(|| 0u32);

    // Mount: manifest and province list
    let manifest_url = paths.manifest_url();
    let geojson_url = paths.geojson_url();
    use_effect(move || {
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
                Ok(collection) => province_count.set(collection.province_names().len()),
                Err(e) => log::warn!("[WGI] province list unavailable, using built-in: {}", e),
            }
        });
    });

    // Dataset selection or refresh: fetch, rank, simulate history
    use_effect(move || {
        let selected = datasets.selected_dataset();
        let _ = refresh();
        let first = pagination.peek().first_page();
        pagination.set(first);
        let Some(dataset) = selected else {
            rows.set(Vec::new());
            history.set(Vec::new());
            loading_rows.set(false);
            return;
        };
        let url = paths.dataset_url(&dataset);
        loading_rows.set(true);
        spawn(async move {
            let result = fetch_text(&url)
                .await
                .and_then(|text| parse_observations_csv(&text));
            let settle = settle_fetch(&datasets.selected.peek(), &dataset.id);
            match settle {
                FetchSettle::Apply => {}
                FetchSettle::DiscardKeepLoading => return,
                FetchSettle::DiscardClearLoading => {
                    loading_rows.set(false);
                    return;
                }
            }
            match result {
                Ok(raw) => {
                    let ranked = rank_observations(&raw, &dataset.id);
                    let year = dataset
                        .year_number()
                        .unwrap_or_else(wgi_utils::dates::current_year);
                    history.set(historical_series(&ranked, year, &dataset.id));
                    log::info!("[WGI] {} rows for {}", ranked.len(), dataset.name);
                    rows.set(ranked);
                }
                Err(e) => {
                    log::error!("[WGI] failed to load {}: {}", url, e);
                    rows.set(Vec::new());
                    history.set(Vec::new());
                }
            }
            loading_rows.set(false);
        });
    });

    let view = use_memo(move || {
        ExplorerView::derive(&rows.read(), &search.read(), sort(), pagination())
    });

    // Charts follow the current view while the chart tab is open
    use_effect(move || {
        if tab() != ExplorerTab::Chart {
            return;
        }
        let view = view.read();
        if view.is_empty() {
            return;
        }
        js_bridge::init_bridge();
        let unit = datasets
            .selected_dataset()
            .map(|d| d.unit)
            .unwrap_or_default();
        js_bridge::render_bar_chart(
            BAR_CHART_ID,
            &bar_chart_data(&view.rows, BAR_CHART_TOP),
            &ChartConfig {
                color: Some(CHART_PALETTE[0]),
                unit: &unit,
                ..Default::default()
            },
        );
        js_bridge::render_donut_chart(
            DONUT_CHART_ID,
            &donut_chart_data(&view.rows, DONUT_CHART_TOP),
            &ChartConfig {
                colors: &CHART_PALETTE,
                unit: &unit,
                ..Default::default()
            },
        );
        js_bridge::render_line_chart(
            LINE_CHART_ID,
            &line_chart_data(&history.read()),
            &ChartConfig {
                colors: &CHART_PALETTE,
                unit: &unit,
                ..Default::default()
            },
        );
    });

    use_drop(|| {
        for id in [BAR_CHART_ID, DONUT_CHART_ID, LINE_CHART_ID] {
            js_bridge::destroy_chart(id);
        }
    });

    let download = move |_: MouseEvent| {
        let Some(dataset) = datasets.selected_dataset() else {
            return;
        };
        match to_csv(&view.read().rows) {
            Ok(csv) => js_bridge::download_text(&download_file_name(&dataset), &csv, CSV_MIME),
            Err(e) => log::error!("[WGI] CSV export failed: {}", e),
        }
    };

    let selected = datasets.selected_dataset();
    let card = theme.card_style();
    let current = view();
    let total = current.rows.len();
    let unit = selected.as_ref().map(|d| d.unit.clone()).unwrap_or_default();
    let has_dataset = selected.is_some();

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 24px 16px;",
            h2 { style: "margin: 0 0 4px 0;", "Eksplorasi Data" }
            p {
                style: "margin: 0 0 16px 0; color: {theme.text_secondary};",
                "Data statistik BPS untuk {province_count} provinsi di Indonesia."
            }

            if let Some(err) = (datasets.error_msg)() {
                ErrorDisplay { message: err }
            }

            div {
                style: "{card} padding: 16px; display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; align-items: end; margin-bottom: 16px;",
                DatasetSelector {}
                SearchBox {
                    value: search(),
                    oninput: move |term: String| {
                        search.set(term);
                        let first = pagination.peek().first_page();
                        pagination.set(first);
                    },
                }
                div {
                    style: "display: flex; gap: 8px; flex-wrap: wrap;",
                    ToggleButton {
                        label: "Tabel",
                        active: view_mode() == ViewMode::Table,
                        onclick: move |_| view_mode.set(ViewMode::Table),
                    }
                    ToggleButton {
                        label: "Kartu",
                        active: view_mode() == ViewMode::Grid,
                        onclick: move |_| view_mode.set(ViewMode::Grid),
                    }
                    ToggleButton {
                        label: "Muat Ulang",
                        active: false,
                        disabled: !has_dataset,
                        onclick: move |_| refresh += 1,
                    }
                    ToggleButton {
                        label: "Unduh CSV",
                        active: false,
                        disabled: !has_dataset || total == 0,
                        onclick: download,
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; margin-bottom: 12px;",
                ToggleButton {
                    label: "Data",
                    active: tab() == ExplorerTab::Data,
                    onclick: move |_| tab.set(ExplorerTab::Data),
                }
                ToggleButton {
                    label: "Grafik",
                    active: tab() == ExplorerTab::Chart,
                    onclick: move |_| tab.set(ExplorerTab::Chart),
                }
            }

            if !has_dataset {
                EmptyState {
                    title: "Pilih dataset".to_string(),
                    hint: "Pilih dataset untuk menampilkan data per provinsi.".to_string(),
                }
            } else if loading_rows() {
                LoadingSpinner {}
            } else if current.is_empty() {
                EmptyState {
                    title: "Data tidak ditemukan".to_string(),
                    hint: "Coba kata kunci pencarian lain.".to_string(),
                }
            } else if tab() == ExplorerTab::Chart {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",
                    div {
                        style: "{card} padding: 16px;",
                        ChartHeader { title: format!("{} Provinsi Teratas", BAR_CHART_TOP), unit: unit.clone() }
                        ChartContainer { id: BAR_CHART_ID.to_string(), label: "Grafik batang nilai provinsi teratas".to_string(), height: 380 }
                    }
                    div {
                        style: "{card} padding: 16px;",
                        ChartHeader { title: "Distribusi 5 Provinsi".to_string(), unit: unit.clone() }
                        ChartContainer { id: DONUT_CHART_ID.to_string(), label: "Grafik donat distribusi provinsi".to_string(), height: 320 }
                    }
                    div {
                        style: "{card} padding: 16px; grid-column: 1 / -1;",
                        ChartHeader { title: "Tren Historis".to_string(), unit: unit.clone(), note: "Simulasi 7 tahun, 5 provinsi teratas".to_string() }
                        ChartContainer { id: LINE_CHART_ID.to_string(), label: "Grafik garis tren historis".to_string(), height: 380 }
                    }
                }
            } else {
                div {
                    style: "{card} padding: 16px;",
                    if view_mode() == ViewMode::Table {
                        DataTable {
                            rows: current.page_rows.clone(),
                            sort: sort(),
                            unit: unit.clone(),
                            on_sort: move |key: SortKey| {
                                let next = sort.peek().request(key);
                                sort.set(next);
                            },
                        }
                    } else {
                        DataGrid { rows: current.page_rows.clone(), unit: unit.clone() }
                    }
                    PaginationBar {
                        pagination: pagination(),
                        total,
                        on_change: move |p| pagination.set(p),
                    }
                }
            }
        }
    }
}

#[component]
fn ToggleButton(
    label: &'static str,
    active: bool,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let theme = use_context::<AppState>().theme();
    let (background, color) = if active {
        (theme.primary, "#ffffff")
    } else {
        ("transparent", theme.primary)
    };

    rsx! {
        button {
            style: "padding: 6px 14px; border-radius: 16px; border: 1px solid {theme.primary}; background: {background}; color: {color}; cursor: pointer;",
            disabled,
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

/// A row with its display strings resolved.
struct RowDisplay {
    province: String,
    rank: usize,
    value: String,
    year: String,
    trend: String,
    trend_color: &'static str,
    change: String,
}

impl RowDisplay {
    fn new(row: &ProvinceObservation, theme: &Theme) -> Self {
        let (arrow, trend_color) = match row.trend {
            Trend::Up => ("▲", theme.success),
            Trend::Down => ("▼", theme.error),
        };
        Self {
            province: row.province.clone(),
            rank: row.rank,
            value: format_number(row.value),
            year: row.year.clone(),
            trend: format!("{} {}", arrow, row.trend.label()),
            trend_color,
            change: format!("{}%", format_number(row.change)),
        }
    }
}

#[component]
fn DataTable(
    rows: Vec<ProvinceObservation>,
    sort: SortConfig,
    unit: String,
    on_sort: EventHandler<SortKey>,
) -> Element {
    let theme = use_context::<AppState>().theme();
    let rows: Vec<RowDisplay> = rows.iter().map(|r| RowDisplay::new(r, &theme)).collect();

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        style: "border-bottom: 2px solid {theme.divider};",
                        SortHeader { column: SortKey::Rank, config: sort, on_sort }
                        SortHeader { column: SortKey::Province, config: sort, on_sort }
                        SortHeader { column: SortKey::Value, config: sort, on_sort }
                        th { style: "text-align: left; padding: 8px;", "Tahun" }
                        th { style: "text-align: left; padding: 8px;", "Trend" }
                        SortHeader { column: SortKey::Change, config: sort, on_sort }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.rank}",
                            style: "border-bottom: 1px solid {theme.divider};",
                            td { style: "padding: 8px;", "#{row.rank}" }
                            td { style: "padding: 8px; font-weight: 600;", "{row.province}" }
                            td { style: "padding: 8px;", "{row.value} {unit}" }
                            td { style: "padding: 8px;", "{row.year}" }
                            td { style: "padding: 8px; color: {row.trend_color};", "{row.trend}" }
                            td { style: "padding: 8px;", "{row.change}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DataGrid(rows: Vec<ProvinceObservation>, unit: String) -> Element {
    let theme = use_context::<AppState>().theme();
    let rows: Vec<RowDisplay> = rows.iter().map(|r| RowDisplay::new(r, &theme)).collect();

    rsx! {
        div {
            class: "wgi-grid",
            for row in rows {
                div {
                    key: "{row.rank}",
                    style: "border: 1px solid {theme.divider}; border-radius: 10px; padding: 14px;",
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center;",
                        strong { "{row.province}" }
                        span {
                            style: "background: {theme.primary}; color: #ffffff; border-radius: 12px; padding: 2px 8px; font-size: 12px;",
                            "#{row.rank}"
                        }
                    }
                    div {
                        style: "font-size: 22px; font-weight: 700; margin: 10px 0 4px 0; color: {theme.primary};",
                        "{row.value}"
                        span { style: "font-size: 12px; font-weight: normal; margin-left: 4px;", "{unit}" }
                    }
                    div {
                        style: "font-size: 13px; color: {row.trend_color};",
                        "{row.trend} {row.change} · {row.year}"
                    }
                }
            }
        }
    }
}
