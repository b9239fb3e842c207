//! Static asset locations and base-map tile providers.

use crate::dataset::DatasetDescriptor;
use serde::Serialize;

/// Default base path of the data directory, relative to the deployed site.
pub const DEFAULT_DATA_BASE: &str = "./data";

/// Relative paths of every static asset the site fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub base: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            base: DEFAULT_DATA_BASE.to_string(),
        }
    }
}

impl AssetPaths {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/bps/datasets.json`
    pub fn manifest_url(&self) -> String {
        format!("{}/bps/datasets.json", self.base)
    }

    /// `{base}/indonesia.geojson`
    pub fn geojson_url(&self) -> String {
        format!("{}/indonesia.geojson", self.base)
    }

    pub fn dataset_url(&self, dataset: &DatasetDescriptor) -> String {
        dataset.csv_url(&self.base)
    }
}

/// A base-map imagery source for the map page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileProvider {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
    #[serde(rename = "maxZoom")]
    pub max_zoom: u8,
    /// Accent color of the provider's button.
    pub color: &'static str,
}

pub static TILE_PROVIDERS: [TileProvider; 5] = [
    TileProvider {
        name: "OpenStreetMap",
        url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        max_zoom: 19,
        color: "#3a7bd5",
    },
    TileProvider {
        name: "OpenTopoMap",
        url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> contributors",
        max_zoom: 17,
        color: "#2ecc71",
    },
    TileProvider {
        name: "ESRI World Imagery",
        url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "&copy; <a href=\"https://www.esri.com\">Esri</a>",
        max_zoom: 19,
        color: "#34495e",
    },
    TileProvider {
        name: "CartoDB Dark",
        url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        attribution: "&copy; <a href=\"https://carto.com\">CartoDB</a> contributors",
        max_zoom: 19,
        color: "#1a1a2e",
    },
    TileProvider {
        name: "CartoDB Voyager",
        url: "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png",
        attribution: "&copy; <a href=\"https://carto.com\">CartoDB</a> contributors",
        max_zoom: 19,
        color: "#4a69bd",
    },
];

/// Provider shown when the map first opens.
pub fn default_tile_provider() -> &'static TileProvider {
    &TILE_PROVIDERS[0]
}

/// Look up a provider by its display name.
pub fn tile_provider(name: &str) -> Option<&'static TileProvider> {
    TILE_PROVIDERS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::default_manifest;

    #[test]
    fn test_asset_urls() {
        let paths = AssetPaths::default();
        assert_eq!(paths.manifest_url(), "./data/bps/datasets.json");
        assert_eq!(paths.geojson_url(), "./data/indonesia.geojson");

        let datasets = default_manifest().unwrap();
        let custom = AssetPaths::new("/webgis/data/");
        assert_eq!(
            custom.dataset_url(&datasets[1]),
            "/webgis/data/bps/2_produk_domestik_regional_bruto.csv"
        );
    }

    #[test]
    fn test_tile_providers() {
        assert_eq!(default_tile_provider().name, "OpenStreetMap");
        assert_eq!(tile_provider("OpenTopoMap").map(|p| p.max_zoom), Some(17));
        assert!(tile_provider("Google").is_none());
    }
}
