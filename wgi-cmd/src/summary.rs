//! Offline check of a generated data directory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use wgi_core::assets::AssetPaths;
use wgi_core::dataset::{find_dataset, parse_manifest, DatasetDescriptor};
use wgi_core::geo::parse_geojson;
use wgi_core::observation::{parse_observations_csv, ProvinceObservation};
use wgi_data::choropleth::{bucket, ValueRange, BUCKET_LABELS};
use wgi_data::ranking::rank_observations;
use wgi_utils::format::format_number;

/// One line per province: rank, name, value with unit and choropleth class.
pub fn summary_lines(dataset: &DatasetDescriptor, rows: &[ProvinceObservation]) -> Vec<String> {
    let range = ValueRange::from_values(rows.iter().map(|r| r.value));
    rows.iter()
        .map(|r| {
            let class = match range {
                Some(range) if r.value != 0.0 => BUCKET_LABELS[bucket(r.value, &range)],
                _ => BUCKET_LABELS[0],
            };
            format!(
                "{:>3}. {:<28} {:>14} {:<16} {}",
                r.rank,
                r.province,
                format_number(r.value),
                dataset.unit,
                class
            )
        })
        .collect()
}

/// Provinces present in the dataset but absent from the boundaries.
pub fn unmatched_provinces(rows: &[ProvinceObservation], boundary_names: &[String]) -> Vec<String> {
    let known: HashSet<&str> = boundary_names.iter().map(String::as_str).collect();
    rows.iter()
        .filter(|r| !known.contains(r.province.as_str()))
        .map(|r| r.province.clone())
        .collect()
}

pub fn run_summary(data_dir: &str, dataset_id: &str) -> anyhow::Result<()> {
    let base = Path::new(data_dir);
    let paths = AssetPaths::new(data_dir);

    let manifest = fs::read_to_string(base.join("bps").join("datasets.json"))?;
    let datasets = parse_manifest(&manifest)?;
    let dataset = find_dataset(&datasets, dataset_id)
        .ok_or_else(|| anyhow::anyhow!("dataset '{}' is not in the manifest", dataset_id))?;

    let csv_path = paths.dataset_url(dataset);
    let raw = parse_observations_csv(&fs::read_to_string(&csv_path)?)?;
    let rows = rank_observations(&raw, &dataset.id);

    println!("{} ({}), {} provinsi", dataset.name, dataset.year, rows.len());
    for line in summary_lines(dataset, &rows) {
        println!("{}", line);
    }

    let geojson_path = base.join("indonesia.geojson");
    if geojson_path.exists() {
        let collection = parse_geojson(&fs::read_to_string(&geojson_path)?)?;
        let missing = unmatched_provinces(&rows, &collection.province_names());
        if missing.is_empty() {
            log::info!("All provinces match the boundaries");
        } else {
            log::warn!("No boundary for: {}", missing.join(", "));
        }
    } else {
        log::info!("{} not found, skipping boundary check", geojson_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgi_core::dataset::default_manifest;
    use wgi_core::observation::RawObservation;

    fn raw(province: &str, value: f64) -> RawObservation {
        RawObservation {
            province: province.to_string(),
            value,
            year: "2021".to_string(),
        }
    }

    #[test]
    fn test_summary_lines() {
        let dataset = default_manifest().unwrap().remove(2);
        let rows = rank_observations(&[raw("Bali", 5.0), raw("Papua", 25.0), raw("Aceh", 0.0)], "3");
        let lines = summary_lines(&dataset, &rows);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Papua"));
        assert!(lines[0].ends_with("Sangat Tinggi"));
        assert!(lines[1].ends_with("Sangat Rendah"));
        assert!(lines[2].contains("Aceh"));
        assert!(lines[2].ends_with("Sangat Rendah"));
    }

    #[test]
    fn test_unmatched_provinces() {
        let rows = rank_observations(&[raw("Bali", 1.0), raw("Papua Barat Daya", 2.0)], "1");
        let names = vec!["Bali".to_string(), "Papua".to_string()];
        assert_eq!(unmatched_provinces(&rows, &names), vec!["Papua Barat Daya"]);
    }
}
