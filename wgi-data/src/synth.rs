//! Synthetic trend, change and history values.
//!
//! The BPS extracts carry a single year per dataset, so the explorer's trend
//! arrows, percent change and seven-year history are simulated. Every value
//! comes from a `StdRng` seeded by dataset id and province, which keeps a
//! refresh of the same dataset stable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use wgi_core::observation::{ProvinceObservation, Trend};
use wgi_utils::dates::trailing_years;

/// Years shown in the history chart, including the dataset year.
pub const HISTORY_YEARS: usize = 7;

/// Provinces (highest ranked first) shown in the history chart.
pub const HISTORY_PROVINCES: usize = 5;

/// Stable 64-bit FNV-1a hash used to seed the per-province RNG.
fn seed_for(key: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    key.bytes()
        .fold(OFFSET, |hash, b| (hash ^ b as u64).wrapping_mul(PRIME))
}

fn rng_for(dataset_id: &str, province: &str, stream: &str) -> StdRng {
    StdRng::seed_from_u64(seed_for(&format!("{}:{}:{}", dataset_id, province, stream)))
}

/// Round to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Trend direction and percent change (`0..10`, two decimals) for a province.
pub fn trend_and_change(dataset_id: &str, province: &str) -> (Trend, f64) {
    let mut rng = rng_for(dataset_id, province, "trend");
    let trend = if rng.random::<f64>() > 0.5 {
        Trend::Up
    } else {
        Trend::Down
    };
    let change = round2(rng.random::<f64>() * 10.0);
    (trend, change)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySeries {
    pub province: String,
    pub values: Vec<HistoryPoint>,
}

/// Simulated history for the top provinces by rank. The dataset year keeps
/// the observed value; the other years vary it by a factor in `[0.7, 1.3)`.
pub fn historical_series(
    rows: &[ProvinceObservation],
    selected_year: i32,
    dataset_id: &str,
) -> Vec<HistorySeries> {
    let mut top: Vec<&ProvinceObservation> = rows.iter().collect();
    top.sort_by_key(|r| r.rank);

    top.into_iter()
        .take(HISTORY_PROVINCES)
        .map(|row| {
            let mut rng = rng_for(dataset_id, &row.province, "history");
            let values = trailing_years(selected_year, HISTORY_YEARS)
                .into_iter()
                .map(|year| {
                    let value = if year == selected_year {
                        row.value
                    } else {
                        round2(row.value * (0.7 + rng.random::<f64>() * 0.6))
                    };
                    HistoryPoint { year, value }
                })
                .collect();
            HistorySeries {
                province: row.province.clone(),
                values,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(province: &str, value: f64, rank: usize) -> ProvinceObservation {
        ProvinceObservation {
            province: province.to_string(),
            value,
            year: "2021".to_string(),
            trend: Trend::Up,
            change: 0.0,
            rank,
        }
    }

    #[test]
    fn test_trend_and_change_is_deterministic() {
        let a = trend_and_change("3", "Bali");
        let b = trend_and_change("3", "Bali");
        assert_eq!(a, b);
        assert!(a.1 >= 0.0 && a.1 < 10.0);
        assert_eq!(round2(a.1), a.1);
    }

    #[test]
    fn test_trend_varies_across_provinces() {
        let trends: std::collections::HashSet<Trend> = wgi_core::province::PROVINCES
            .iter()
            .map(|p| trend_and_change("1", p).0)
            .collect();
        assert_eq!(trends.len(), 2);
    }

    #[test]
    fn test_historical_series_shape() {
        let rows: Vec<ProvinceObservation> = (1..=8)
            .map(|i| row(&format!("P{}", i), 100.0 - i as f64, i))
            .rev()
            .collect();
        let history = historical_series(&rows, 2021, "3");
        assert_eq!(history.len(), HISTORY_PROVINCES);
        assert_eq!(history[0].province, "P1");
        for series in &history {
            assert_eq!(series.values.len(), HISTORY_YEARS);
            assert_eq!(series.values[0].year, 2015);
            assert_eq!(series.values[6].year, 2021);
        }
        let p1 = &history[0];
        assert_eq!(p1.values[6].value, 99.0);
        for point in &p1.values[..6] {
            assert!(point.value >= 99.0 * 0.7 - 0.01 && point.value <= 99.0 * 1.3 + 0.01);
        }
    }

    #[test]
    fn test_historical_series_fewer_rows_than_top() {
        let rows = vec![row("Aceh", 5.0, 1), row("Bali", 4.0, 2)];
        assert_eq!(historical_series(&rows, 2020, "1").len(), 2);
        assert!(historical_series(&[], 2020, "1").is_empty());
    }
}
