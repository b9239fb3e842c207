//! Page chrome: app bar, footer and the shell that hosts every route.

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;

use crate::Route;
use dioxus::prelude::*;
use wgi_ui::state::AppState;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const D3_JS: &str = "https://d3js.org/d3.v7.min.js";

/// Breakpoint rules that inline styles cannot express.
const SHELL_CSS: &str = r#"
.wgi-nav-links { display: flex; gap: 4px; }
.wgi-menu-button { display: none; }
.wgi-drawer-layout { display: grid; grid-template-columns: 320px 1fr; gap: 16px; }
.wgi-spinner { width: 18px; height: 18px; border: 3px solid rgba(58, 123, 213, 0.25); border-top-color: #3a7bd5; border-radius: 50%; animation: wgi-spin 0.8s linear infinite; }
@keyframes wgi-spin { to { transform: rotate(360deg); } }
.wgi-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; }
@media (max-width: 900px) {
  .wgi-nav-links { display: none; }
  .wgi-menu-button { display: inline-block; }
  .wgi-drawer-layout { grid-template-columns: 1fr; }
}
"#;

/// Layout wrapping every route with the header and footer.
#[component]
pub fn Shell() -> Element {
    let state = use_context_provider(AppState::new);
    let theme = state.theme();

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        document::Script { src: D3_JS }
        style { {SHELL_CSS} }
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; background: {theme.background}; color: {theme.text}; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; transition: background 0.3s;",
            Header {}
            main {
                style: "flex: 1; width: 100%; box-sizing: border-box;",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
