//! Manifest and simulated dataset CSV generation.

use chrono::Local;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};
use wgi_core::dataset::{default_manifest, DatasetDescriptor, DEFAULT_MANIFEST_JSON};
use wgi_core::observation::{RawObservation, PROVINCE_COLUMN, VALUE_COLUMN, YEAR_COLUMN};
use wgi_core::province::PROVINCES;
use wgi_data::synth::round2;

/// Range of simulated values, `[MIN, MAX)`.
pub const SIMULATED_MIN: f64 = 10.0;
pub const SIMULATED_MAX: f64 = 100.0;

fn bps_dir(output: &str) -> anyhow::Result<PathBuf> {
    let dir = Path::new(output).join("bps");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write the built-in manifest to `<output>/bps/datasets.json`.
pub fn write_manifest(output: &str) -> anyhow::Result<()> {
    let datasets = default_manifest()?;
    let path = bps_dir(output)?.join("datasets.json");
    fs::write(&path, DEFAULT_MANIFEST_JSON)?;
    info!("Wrote {} datasets to {}", datasets.len(), path.display());
    Ok(())
}

/// One uniformly drawn value per province for `dataset`.
pub fn simulated_rows(dataset: &DatasetDescriptor, rng: &mut StdRng) -> Vec<RawObservation> {
    PROVINCES
        .iter()
        .map(|province| RawObservation {
            province: province.to_string(),
            value: round2(rng.random_range(SIMULATED_MIN..SIMULATED_MAX)),
            year: dataset.year.clone(),
        })
        .collect()
}

/// Serialize rows as a dataset CSV with a `province,value,year` header.
pub fn rows_to_csv(rows: &[RawObservation]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([PROVINCE_COLUMN, VALUE_COLUMN, YEAR_COLUMN])?;
    for row in rows {
        wtr.write_record([row.province.as_str(), &row.value.to_string(), row.year.as_str()])?;
    }
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// Write the manifest and a simulated CSV for every dataset in it.
pub fn write_simulated(output: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(|| Local::now().timestamp_millis() as u64);
    info!("Simulating datasets with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    write_manifest(output)?;
    let dir = bps_dir(output)?;
    for dataset in default_manifest()? {
        let rows = simulated_rows(&dataset, &mut rng);
        let path = dir.join(dataset.csv_file_name());
        fs::write(&path, rows_to_csv(&rows)?)?;
        info!("Wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgi_core::observation::parse_observations_csv;

    fn dataset() -> DatasetDescriptor {
        default_manifest().unwrap().remove(0)
    }

    #[test]
    fn test_simulated_rows() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = simulated_rows(&dataset(), &mut rng);
        assert_eq!(rows.len(), 34);
        for row in &rows {
            assert!(row.value >= SIMULATED_MIN && row.value <= SIMULATED_MAX);
            assert_eq!(round2(row.value), row.value);
            assert_eq!(row.year, "2020");
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = simulated_rows(&dataset(), &mut StdRng::seed_from_u64(42));
        let b = simulated_rows(&dataset(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_csv_reads_back() {
        let rows = simulated_rows(&dataset(), &mut StdRng::seed_from_u64(1));
        let csv = rows_to_csv(&rows).unwrap();
        assert!(csv.starts_with("province,value,year\n"));
        assert_eq!(parse_observations_csv(&csv).unwrap(), rows);
    }

    #[test]
    fn test_write_simulated() {
        let dir = std::env::temp_dir().join(format!("wgi-simulate-{}", std::process::id()));
        let output = dir.to_string_lossy().to_string();
        write_simulated(&output, Some(3)).unwrap();

        let bps = dir.join("bps");
        assert!(bps.join("datasets.json").exists());
        for dataset in default_manifest().unwrap() {
            assert!(bps.join(dataset.csv_file_name()).exists());
        }
        fs::remove_dir_all(&dir).unwrap();
    }
}
