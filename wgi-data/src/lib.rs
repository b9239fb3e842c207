//! Data processing for WebGIS Indonesia.
//!
//! Turns parsed dataset rows and GeoJSON into what the map and the data
//! explorer render: choropleth colors, ranked rows, filtered/sorted/paged
//! views, chart payloads and CSV exports.

pub mod charts;
pub mod choropleth;
pub mod explorer;
pub mod ranking;
pub mod synth;

/// CSV export of the explorer table.
pub mod export {
    use wgi_core::dataset::DatasetDescriptor;
    use wgi_core::observation::ProvinceObservation;
    use wgi_utils::format::underscore_whitespace;

    /// Header row of an exported table.
    pub const EXPORT_HEADER: [&str; 6] =
        ["Provinsi", "Nilai", "Tahun", "Trend", "Perubahan", "Peringkat"];

    /// Serialize rows (in their displayed order) to CSV.
    pub fn to_csv(rows: &[ProvinceObservation]) -> anyhow::Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(EXPORT_HEADER)?;
        for r in rows {
            wtr.write_record([
                r.province.clone(),
                r.value.to_string(),
                r.year.clone(),
                r.trend.label().to_string(),
                r.change.to_string(),
                r.rank.to_string(),
            ])?;
        }
        let bytes = wtr.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Download name, e.g. `Tingkat_Pengangguran_Terbuka_2021.csv`.
    pub fn download_file_name(dataset: &DatasetDescriptor) -> String {
        format!("{}_{}.csv", underscore_whitespace(&dataset.name), dataset.year)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use wgi_core::dataset::default_manifest;
        use wgi_core::observation::Trend;

        #[test]
        fn test_to_csv() {
            let rows = vec![
                ProvinceObservation {
                    province: "DKI Jakarta".to_string(),
                    value: 8.5,
                    year: "2021".to_string(),
                    trend: Trend::Up,
                    change: 1.25,
                    rank: 1,
                },
                ProvinceObservation {
                    province: "Bali, Nusa".to_string(),
                    value: 5.0,
                    year: "2021".to_string(),
                    trend: Trend::Down,
                    change: 0.0,
                    rank: 2,
                },
            ];
            let csv = to_csv(&rows).unwrap();
            let lines: Vec<&str> = csv.lines().collect();
            assert_eq!(lines[0], "Provinsi,Nilai,Tahun,Trend,Perubahan,Peringkat");
            assert_eq!(lines[1], "DKI Jakarta,8.5,2021,Naik,1.25,1");
            assert_eq!(lines[2], "\"Bali, Nusa\",5,2021,Turun,0,2");
        }

        #[test]
        fn test_download_file_name() {
            let datasets = default_manifest().unwrap();
            assert_eq!(
                download_file_name(&datasets[2]),
                "Tingkat_Pengangguran_Terbuka_2021.csv"
            );
        }
    }
}
