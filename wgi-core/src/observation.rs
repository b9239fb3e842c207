use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Column headers of a dataset CSV.
pub const PROVINCE_COLUMN: &str = "province";
pub const VALUE_COLUMN: &str = "value";
pub const YEAR_COLUMN: &str = "year";

/// A single `province,value,year` row as read from a dataset CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub province: String,
    pub value: f64,
    pub year: String,
}

/// Direction of change for a province relative to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Indonesian label used in tables and CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Naik",
            Trend::Down => "Turun",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A province row in the data explorer, with derived trend and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceObservation {
    pub province: String,
    pub value: f64,
    pub year: String,
    pub trend: Trend,
    /// Percent change, always non-negative; direction is carried by `trend`.
    pub change: f64,
    /// 1-based rank by value, highest value first.
    pub rank: usize,
}

/// Column positions resolved from the CSV header row.
struct ColumnIndex {
    province: usize,
    value: usize,
    year: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let province = find(PROVINCE_COLUMN)
            .ok_or_else(|| anyhow::anyhow!("missing '{}' column", PROVINCE_COLUMN))?;
        let value = find(VALUE_COLUMN)
            .ok_or_else(|| anyhow::anyhow!("missing '{}' column", VALUE_COLUMN))?;
        Ok(Self {
            province,
            value,
            year: find(YEAR_COLUMN),
        })
    }
}

/// Parse a dataset CSV. Columns are located by header name, so their order
/// and any extra columns do not matter. Blank lines are ignored and rows
/// whose value is not a finite number (`-`, `NaN`, `inf`) are skipped.
///
/// ```
/// use wgi_core::observation::parse_observations_csv;
/// let rows = parse_observations_csv("province,value,year\nBali,4.3,2021\n").unwrap();
/// assert_eq!(rows[0].province, "Bali");
/// ```
pub fn parse_observations_csv(csv_data: &str) -> anyhow::Result<Vec<RawObservation>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let province = record.get(columns.province).unwrap_or("").trim();
        let value_str = record.get(columns.value).unwrap_or("").trim();
        let year = columns
            .year
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim();

        match value_str.parse::<f64>() {
            Ok(value) if value.is_finite() && !province.is_empty() => rows.push(RawObservation {
                province: province.to_string(),
                value,
                year: year.to_string(),
            }),
            _ => {
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("[WGI] observations: skipped {} unparseable rows", skipped);
    }
    Ok(rows)
}

/// Map of province name to value. A province listed twice keeps its last value.
pub fn province_values(rows: &[RawObservation]) -> HashMap<String, f64> {
    rows.iter()
        .map(|r| (r.province.clone(), r.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let csv = "province,value,year\nAceh,6.3,2021\nBali,5.37,2021\n";
        let rows = parse_observations_csv(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].province, "Bali");
        assert_eq!(rows[1].value, 5.37);
        assert_eq!(rows[1].year, "2021");
    }

    #[test]
    fn test_parse_reordered_columns_and_blank_lines() {
        let csv = "year,source,value,province\n2020,BPS,10.5,Papua\n\n2020,BPS,20,Riau\n\n";
        let rows = parse_observations_csv(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].province, "Papua");
        assert_eq!(rows[0].value, 10.5);
        assert_eq!(rows[1].province, "Riau");
    }

    #[test]
    fn test_parse_crlf_and_missing_year_column() {
        let csv = "province,value\r\nJambi,1.5\r\n";
        let rows = parse_observations_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, "");
    }

    #[test]
    fn test_parse_skips_non_numeric_values() {
        let csv = "province,value,year\nAceh,-,2021\nBali,7,2021\n";
        let rows = parse_observations_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].province, "Bali");
    }

    #[test]
    fn test_parse_skips_non_finite_values() {
        let csv = "province,value,year\nAceh,NaN,2021\nBali,5,2021\nRiau,inf,2021\nJambi,-infinity,2021\n";
        let rows = parse_observations_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].province, "Bali");
        assert_eq!(rows[0].value, 5.0);
    }

    #[test]
    fn test_parse_missing_value_header_is_error() {
        let csv = "province,amount\nAceh,1\n";
        assert!(parse_observations_csv(csv).is_err());
    }

    #[test]
    fn test_province_values_last_wins() {
        let csv = "province,value,year\nAceh,1,2021\nAceh,2,2021\n";
        let rows = parse_observations_csv(csv).unwrap();
        let values = province_values(&rows);
        assert_eq!(values.len(), 1);
        assert_eq!(values["Aceh"], 2.0);
    }

    #[test]
    fn test_trend_labels() {
        assert_eq!(Trend::Up.label(), "Naik");
        assert_eq!(Trend::Down.to_string(), "Turun");
    }
}
