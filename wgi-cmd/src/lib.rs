//! Command implementations for the WGI CLI.
//!
//! Produces the static assets the web app reads (dataset manifest,
//! per-dataset CSVs, province boundaries) and checks them offline.

use clap::Subcommand;

pub mod generate;
pub mod geojson;
pub mod summary;

/// Public mirror of the Indonesia province boundaries.
pub const DEFAULT_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/superpikar/indonesia-geojson/master/indonesia.geojson";

#[derive(Subcommand)]
pub enum Command {
    /// Write the built-in dataset manifest to <output>/bps/datasets.json
    Manifest {
        /// Data directory served next to the web app (e.g. webgis-app/public/data)
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Write one simulated `province,value,year` CSV per manifest dataset
    Simulate {
        /// Data directory served next to the web app
        #[arg(short = 'o', long)]
        output: String,

        /// RNG seed; defaults to the current time
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Download the province boundaries GeoJSON
    Geojson {
        /// Data directory served next to the web app
        #[arg(short = 'o', long)]
        output: String,

        /// Source URL
        #[arg(long, default_value = DEFAULT_GEOJSON_URL)]
        url: String,

        /// Also write a gzip-compressed copy (indonesia.geojson.gz)
        #[arg(long)]
        gzip: bool,
    },

    /// Print the ranking and choropleth class of every province for a dataset
    Summary {
        /// Data directory containing bps/datasets.json and the dataset CSVs
        #[arg(short = 'd', long)]
        data_dir: String,

        /// Dataset id from the manifest
        #[arg(long)]
        dataset: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Manifest { output } => generate::write_manifest(&output),
        Command::Simulate { output, seed } => generate::write_simulated(&output, seed),
        Command::Geojson { output, url, gzip } => {
            geojson::download_geojson(&output, &url, gzip).await
        }
        Command::Summary { data_dir, dataset } => summary::run_summary(&data_dir, &dataset),
    }
}
