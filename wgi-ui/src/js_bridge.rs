//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and D3.js chart functions live in `assets/js/*.js` and are
//! embedded at compile time. They are evaluated as globals (no ES modules)
//! once both `L` and `d3` are present, then promoted to `window.*`. Every
//! render call polls until the bridge is ready and its container exists.

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wgi_core::assets::TileProvider;

// Embed all bridge JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static DOWNLOAD_JS: &str = include_str!("../assets/js/download.js");

/// Global functions promoted to `window` after evaluation.
const EXPORTED_FUNCTIONS: [&str; 13] = [
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "wgiEscape",
    "wgiFormat",
    "renderChoropleth",
    "setTileProvider",
    "setLayerOpacity",
    "destroyMap",
    "renderBarChart",
    "renderDonutChart",
    "renderLineChart",
    "downloadText",
];

/// Window property holding the Rust region-click callback.
const REGION_CLICK_HANDLER: &str = "__wgiRegionClick";

/// Poll attempts (100 ms apart) before a pending call is abandoned.
const MAX_POLLS: u32 = 300;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WGI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Encode a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Evaluate the bridge scripts once Leaflet and D3 have loaded.
///
/// Safe to call on every mount; the scripts are only evaluated once per page.
pub fn init_bridge() {
    let all_js = [
        TOOLTIP_JS,
        CHOROPLETH_MAP_JS,
        BAR_CHART_JS,
        DONUT_CHART_JS,
        LINE_CHART_JS,
        DOWNLOAD_JS,
    ]
    .join("\n");

    let promote = EXPORTED_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__wgiBridgeReady || window.__wgiBridgeLoading) return;
            window.__wgiBridgeLoading = true;
            window.__wgiBridgeScripts = {scripts};
            var waitForLibs = setInterval(function() {{
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {{
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__wgiBridgeScripts);
                    delete window.__wgiBridgeScripts;
                    {promote}
                    window.__wgiBridgeReady = true;
                    console.log('WGI bridge initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
    );
    let _ = js_sys::eval(&init_js);
}

/// Call `window.{function}(args...)` once the bridge is ready and the DOM
/// element `container_id` exists. `args` must already be JS literals.
fn call_when_ready(function: &str, container_id: &str, args: &[String]) {
    let id = js_string(container_id);
    let arg_list = args.join(", ");
    call_js(&format!(
        r#"
        (function() {{
            var tries = 0;
            var poll = setInterval(function() {{
                if (++tries > {MAX_POLLS}) {{
                    clearInterval(poll);
                    console.warn('[WGI] gave up waiting for {function}');
                    return;
                }}
                if (window.__wgiBridgeReady &&
                    typeof window.{function} === 'function' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({arg_list});
                    }} catch(e) {{ console.error('[WGI] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Options passed along with the GeoJSON to the map.
#[derive(Debug, Clone, Serialize)]
pub struct MapOptions<'a> {
    pub provider: &'a TileProvider,
    pub opacity: f64,
    pub unit: &'a str,
    pub year: &'a str,
    #[serde(rename = "datasetName")]
    pub dataset_name: &'a str,
}

/// Draw (or redraw) the choropleth layer. Features must carry `fill_color`,
/// `wgi_name` and `value_label` properties.
pub fn render_choropleth(container_id: &str, geojson_json: &str, options: &MapOptions) {
    let options_json = serde_json::to_string(options).unwrap_or_default();
    call_when_ready(
        "renderChoropleth",
        container_id,
        &[
            js_string(container_id),
            js_string(geojson_json),
            js_string(&options_json),
        ],
    );
}

/// Swap the base-map tile layer.
pub fn set_tile_provider(container_id: &str, provider: &TileProvider) {
    let provider_json = serde_json::to_string(provider).unwrap_or_default();
    call_when_ready(
        "setTileProvider",
        container_id,
        &[js_string(container_id), js_string(&provider_json)],
    );
}

/// Change the fill opacity of the province layer.
pub fn set_layer_opacity(container_id: &str, opacity: f64) {
    call_when_ready(
        "setLayerOpacity",
        container_id,
        &[js_string(container_id), format!("{}", opacity)],
    );
}

/// Register the handler invoked with `(province, value)` when a region is clicked.
///
/// The closure is leaked into `window`; registering again replaces the
/// previous handler.
pub fn on_region_click<F>(handler: F)
where
    F: FnMut(String, f64) + 'static,
{
    let closure = Closure::<dyn FnMut(String, f64)>::new(handler);
    if let Some(window) = web_sys::window() {
        if let Err(e) = js_sys::Reflect::set(
            &window,
            &JsValue::from_str(REGION_CLICK_HANDLER),
            closure.as_ref(),
        ) {
            log::warn!("[WGI] failed to register region click handler: {:?}", e);
        }
    }
    closure.forget();
}

/// Chart colors and unit label.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    #[serde(skip_serializing_if = "no_colors")]
    pub colors: &'a [&'a str],
    pub unit: &'a str,
}

fn no_colors(colors: &&[&str]) -> bool {
    colors.is_empty()
}

fn render_chart<T: Serialize>(function: &str, container_id: &str, data: &T, config: &ChartConfig) {
    let data_json = serde_json::to_string(data).unwrap_or_default();
    let config_json = serde_json::to_string(config).unwrap_or_default();
    call_when_ready(
        function,
        container_id,
        &[
            js_string(container_id),
            js_string(&data_json),
            js_string(&config_json),
        ],
    );
}

/// Render a bar chart from `[{label, value}]`.
pub fn render_bar_chart<T: Serialize>(container_id: &str, data: &T, config: &ChartConfig) {
    render_chart("renderBarChart", container_id, data, config);
}

/// Render a donut chart from `[{label, value}]`.
pub fn render_donut_chart<T: Serialize>(container_id: &str, data: &T, config: &ChartConfig) {
    render_chart("renderDonutChart", container_id, data, config);
}

/// Render a multi-series line chart from `[{name, points: [{x, y}]}]`.
pub fn render_line_chart<T: Serialize>(container_id: &str, data: &T, config: &ChartConfig) {
    render_chart("renderLineChart", container_id, data, config);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

/// Tear down the Leaflet map bound to a container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyMap === 'function') window.destroyMap({});",
        js_string(container_id)
    ));
}

/// Offer `content` to the user as a file download.
pub fn download_text(file_name: &str, content: &str, mime: &str) {
    call_js(&format!(
        "if (typeof window.downloadText === 'function') window.downloadText({}, {}, {});",
        js_string(file_name),
        js_string(content),
        js_string(mime)
    ));
}
