use serde::{Deserialize, Serialize};
use std::fmt;
use wgi_utils::format::slug;

/// Embedded default manifest of the BPS datasets shipped with the site.
pub static DEFAULT_MANIFEST_JSON: &str = include_str!("../../fixtures/datasets.json");

/// Statistical indicator category of a dataset. Drives the choropleth palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Indicator {
    Ketenagakerjaan,
    Demografi,
    Ekonomi,
    Sosial,
    Kemiskinan,
    Other(String),
}

impl Indicator {
    pub fn as_str(&self) -> &str {
        match self {
            Indicator::Ketenagakerjaan => "Ketenagakerjaan",
            Indicator::Demografi => "Demografi",
            Indicator::Ekonomi => "Ekonomi",
            Indicator::Sosial => "Sosial",
            Indicator::Kemiskinan => "Kemiskinan",
            Indicator::Other(s) => s.as_str(),
        }
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Indicator::Other(String::new())
    }
}

impl From<String> for Indicator {
    fn from(s: String) -> Self {
        match s.trim() {
            "Ketenagakerjaan" => Indicator::Ketenagakerjaan,
            "Demografi" => Indicator::Demografi,
            "Ekonomi" => Indicator::Ekonomi,
            "Sosial" => Indicator::Sosial,
            "Kemiskinan" => Indicator::Kemiskinan,
            _ => Indicator::Other(s),
        }
    }
}

impl From<Indicator> for String {
    fn from(i: Indicator) -> Self {
        i.as_str().to_string()
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `datasets.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub id: String,
    pub name: String,
    /// Reference year, kept as the string the manifest carries.
    pub year: String,
    #[serde(default)]
    pub indicator: Indicator,
    #[serde(default)]
    pub unit: String,
}

impl DatasetDescriptor {
    /// Reference year as a number, if the manifest value parses.
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    /// CSV file name for this dataset, e.g. `3_tingkat_pengangguran_terbuka.csv`.
    pub fn csv_file_name(&self) -> String {
        format!("{}_{}.csv", self.id, slug(&self.name))
    }

    /// URL of the dataset CSV relative to the data base path.
    pub fn csv_url(&self, base: &str) -> String {
        format!("{}/bps/{}", base.trim_end_matches('/'), self.csv_file_name())
    }

    /// Label used in dataset drop-downs.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.year)
    }
}

/// Parse a dataset manifest (JSON array of descriptors).
pub fn parse_manifest(json: &str) -> anyhow::Result<Vec<DatasetDescriptor>> {
    let datasets: Vec<DatasetDescriptor> = serde_json::from_str(json)?;
    log::info!("[WGI] manifest: {} datasets", datasets.len());
    Ok(datasets)
}

/// The manifest embedded at compile time.
pub fn default_manifest() -> anyhow::Result<Vec<DatasetDescriptor>> {
    parse_manifest(DEFAULT_MANIFEST_JSON)
}

/// Look up a dataset by id.
pub fn find_dataset<'a>(datasets: &'a [DatasetDescriptor], id: &str) -> Option<&'a DatasetDescriptor> {
    datasets.iter().find(|d| d.id == id)
}
