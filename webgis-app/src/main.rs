//! WebGIS Indonesia
//!
//! Single-page Dioxus 0.7 app with four routes:
//! - `/` landing page
//! - `/map` Leaflet choropleth of the 34 provinces
//! - `/explorer` BPS dataset table, charts and CSV export
//! - `/about` project description and data sources
//!
//! Data flow:
//! 1. Static assets (`data/bps/datasets.json`, per-dataset CSVs and
//!    `data/indonesia.geojson`) are served next to the WASM bundle from
//!    `public/`, as produced by `wgi-cli`.
//! 2. Pages fetch them on mount and on dataset selection.
//! 3. Leaflet and D3.js are loaded from CDNs in the shell; the render
//!    functions in `wgi_ui::js_bridge` wait for them.

mod layout;
mod pages;

use dioxus::prelude::*;
use layout::Shell;
use pages::{About, Explorer, Home, MapPage, NotFound};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/map")]
        MapPage {},
        #[route("/explorer")]
        Explorer {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Navigation entries shown in the header, in order.
    pub fn nav_items() -> [(Route, &'static str); 4] {
        [
            (Route::Home {}, "Beranda"),
            (Route::MapPage {}, "Peta Interaktif"),
            (Route::Explorer {}, "Eksplorasi Data"),
            (Route::About {}, "Tentang"),
        ]
    }
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::MapPage {}.to_string(), "/map");
        assert_eq!(Route::Explorer {}.to_string(), "/explorer");
        assert_eq!(Route::About {}.to_string(), "/about");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/peta/lama".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!("/explorer".parse::<Route>().unwrap(), Route::Explorer {});
    }
}
