//! Serializable payloads for the D3.js charts of the explorer.

use crate::synth::HistorySeries;
use serde::Serialize;
use wgi_core::observation::ProvinceObservation;

/// Bars in the comparison chart.
pub const BAR_CHART_TOP: usize = 10;

/// Slices in the distribution chart.
pub const DONUT_CHART_TOP: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: i32,
    pub y: f64,
}

fn top_values(rows: &[ProvinceObservation], n: usize) -> Vec<LabelledValue> {
    rows.iter()
        .take(n)
        .map(|r| LabelledValue {
            label: r.province.clone(),
            value: r.value,
        })
        .collect()
}

/// First `n` rows of the current (sorted) view as bars.
pub fn bar_chart_data(rows: &[ProvinceObservation], n: usize) -> Vec<LabelledValue> {
    top_values(rows, n)
}

/// First `n` rows of the current view as donut slices.
pub fn donut_chart_data(rows: &[ProvinceObservation], n: usize) -> Vec<LabelledValue> {
    top_values(rows, n)
        .into_iter()
        .filter(|v| v.value.is_finite() && v.value > 0.0)
        .collect()
}

pub fn line_chart_data(history: &[HistorySeries]) -> Vec<LineSeries> {
    history
        .iter()
        .map(|s| LineSeries {
            name: s.province.clone(),
            points: s
                .values
                .iter()
                .map(|p| LinePoint { x: p.year, y: p.value })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::HistoryPoint;
    use wgi_core::observation::Trend;

    fn rows(n: usize) -> Vec<ProvinceObservation> {
        (0..n)
            .map(|i| ProvinceObservation {
                province: format!("P{}", i),
                value: (n - i) as f64,
                year: "2021".to_string(),
                trend: Trend::Up,
                change: 1.0,
                rank: i + 1,
            })
            .collect()
    }

    #[test]
    fn test_bar_chart_takes_first_rows() {
        let data = bar_chart_data(&rows(34), BAR_CHART_TOP);
        assert_eq!(data.len(), 10);
        assert_eq!(data[0].label, "P0");
        assert_eq!(bar_chart_data(&rows(3), BAR_CHART_TOP).len(), 3);
    }

    #[test]
    fn test_donut_skips_non_positive() {
        let mut r = rows(5);
        r[1].value = 0.0;
        let data = donut_chart_data(&r, DONUT_CHART_TOP);
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn test_line_chart_json_shape() {
        let history = vec![HistorySeries {
            province: "Bali".to_string(),
            values: vec![HistoryPoint { year: 2020, value: 1.5 }],
        }];
        let json = serde_json::to_string(&line_chart_data(&history)).unwrap();
        assert_eq!(json, r#"[{"name":"Bali","points":[{"x":2020,"y":1.5}]}]"#);
    }
}
