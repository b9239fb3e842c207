//! Province boundary download.

use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use wgi_core::geo::parse_geojson;

pub const GEOJSON_FILE: &str = "indonesia.geojson";

/// gzip-compress `bytes`.
pub fn gzip(bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Download the boundaries from `url` into `<output>/indonesia.geojson`,
/// optionally with a `.gz` copy next to it.
pub async fn download_geojson(output: &str, url: &str, compress: bool) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()?;

    info!("Downloading {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("{} returned {}", url, response.status());
    }
    let body = response.text().await?;

    let collection = parse_geojson(&body)?;
    let names = collection.province_names();
    info!("{} features, {} named provinces", collection.features.len(), names.len());

    let dir = Path::new(output);
    fs::create_dir_all(dir)?;
    let path = dir.join(GEOJSON_FILE);
    fs::write(&path, &body)?;
    info!("Wrote {} ({} bytes)", path.display(), body.len());

    if compress {
        let gz = gzip(body.as_bytes())?;
        let gz_path = dir.join(format!("{}.gz", GEOJSON_FILE));
        fs::write(&gz_path, &gz)?;
        info!("Wrote {} ({} bytes)", gz_path.display(), gz.len());
    }
    Ok(())
}
