//! Choropleth coloring: min/max normalization into a five-step color scale.

use serde::Serialize;
use serde_json::Value;
use wgi_core::dataset::Indicator;
use wgi_core::geo::FeatureCollection;
use wgi_utils::format::format_number;

/// Number of color steps in every scale.
pub const BUCKETS: usize = 5;

/// Feature property receiving the computed fill color.
pub const FILL_COLOR_PROPERTY: &str = "fill_color";

/// Display name and formatted value read by the map popup.
pub const NAME_LABEL_PROPERTY: &str = "wgi_name";
pub const VALUE_LABEL_PROPERTY: &str = "value_label";

pub type ColorScale = [&'static str; BUCKETS];

/// Flat scale used before any dataset is selected.
pub const UNSELECTED_SCALE: ColorScale = ["#3a7bd5"; BUCKETS];

/// Legend labels from the lowest bucket to the highest.
pub const BUCKET_LABELS: [&str; BUCKETS] =
    ["Sangat Rendah", "Rendah", "Sedang", "Tinggi", "Sangat Tinggi"];

/// Palette for a dataset's indicator; `None` means no dataset is selected.
pub fn color_scale(indicator: Option<&Indicator>) -> ColorScale {
    match indicator {
        None => UNSELECTED_SCALE,
        Some(Indicator::Ketenagakerjaan) => ["#f9ffef", "#c5e8b3", "#7aca7a", "#309c54", "#0d472d"],
        Some(Indicator::Demografi) => ["#e4e6f5", "#b6b4d8", "#9381b8", "#7b559e", "#5e2c8a"],
        Some(Indicator::Ekonomi) => ["#ffffcc", "#c7e9b4", "#7fcdbb", "#41b6c4", "#225ea8"],
        Some(Indicator::Sosial) => ["#feebe2", "#fcc5c0", "#fa9fb5", "#f768a1", "#ae017e"],
        Some(Indicator::Kemiskinan) => ["#fff7bc", "#fee391", "#fec44f", "#fe9929", "#cc4c02"],
        Some(Indicator::Other(_)) => ["#edf8fb", "#b3cde3", "#8c96c6", "#8856a7", "#810f7c"],
    }
}

/// Values that take part in scaling: non-zero and finite. A zero value means
/// "no data" for a province.
fn has_data(value: f64) -> bool {
    value != 0.0 && value.is_finite()
}

/// Min and max over the provinces that have data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| has_data(*v))
            .fold(None, |acc, v| match acc {
                None => Some(ValueRange { min: v, max: v }),
                Some(r) => Some(ValueRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }

    /// Width of the range; a degenerate range counts as 1.
    pub fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }

    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Bucket index in `0..BUCKETS` for a value.
pub fn bucket(value: f64, range: &ValueRange) -> usize {
    let scaled = (range.normalize(value) * BUCKETS as f64).floor();
    if scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(BUCKETS - 1)
    }
}

/// Fill color for a value. Provinces without data get the lowest color.
pub fn fill_color(value: f64, scale: &ColorScale, range: Option<&ValueRange>) -> &'static str {
    match range {
        Some(r) if has_data(value) => scale[bucket(value, r)],
        _ => scale[0],
    }
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: &'static str,
    pub lower: f64,
    pub upper: f64,
}

/// Legend rows from the highest bucket down, as the map shows them.
pub fn legend(scale: &ColorScale, range: &ValueRange) -> Vec<LegendEntry> {
    let step = (range.max - range.min) / BUCKETS as f64;
    (0..BUCKETS)
        .rev()
        .map(|i| LegendEntry {
            color: scale[i],
            label: BUCKET_LABELS[i],
            lower: range.min + step * i as f64,
            upper: if i == BUCKETS - 1 {
                range.max
            } else {
                range.min + step * (i + 1) as f64
            },
        })
        .collect()
}

/// Write `fill_color` and the popup labels into every feature of an already
/// value-joined collection and return the range used, if any province had data.
pub fn style_features(
    collection: &mut FeatureCollection,
    indicator: Option<&Indicator>,
) -> Option<ValueRange> {
    let scale = color_scale(indicator);
    let range = ValueRange::from_values(collection.features.iter().map(|f| f.value()));
    for feature in collection.features.iter_mut() {
        let color = if indicator.is_some() {
            fill_color(feature.value(), &scale, range.as_ref())
        } else {
            scale[0]
        };
        let name = feature.name().unwrap_or("-").to_string();
        let value_label = format_number(feature.value());
        feature.set_property(FILL_COLOR_PROPERTY, Value::from(color));
        feature.set_property(NAME_LABEL_PROPERTY, Value::from(name));
        feature.set_property(VALUE_LABEL_PROPERTY, Value::from(value_label));
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wgi_core::geo::parse_geojson;

    fn range(min: f64, max: f64) -> ValueRange {
        ValueRange { min, max }
    }

    #[test]
    fn test_range_ignores_zero_and_nan() {
        let r = ValueRange::from_values(vec![0.0, 5.0, f64::NAN, 2.0, 9.0]).unwrap();
        assert_eq!(r, range(2.0, 9.0));
        assert!(ValueRange::from_values(vec![0.0, 0.0]).is_none());
    }

    #[test]
    fn test_bucket_bounds() {
        let r = range(10.0, 60.0);
        assert_eq!(bucket(10.0, &r), 0);
        assert_eq!(bucket(19.9, &r), 0);
        assert_eq!(bucket(20.0, &r), 1);
        assert_eq!(bucket(35.0, &r), 2);
        assert_eq!(bucket(59.9, &r), 4);
        assert_eq!(bucket(60.0, &r), 4);
        // outside the range clamps
        assert_eq!(bucket(-100.0, &r), 0);
        assert_eq!(bucket(1000.0, &r), 4);
    }

    #[test]
    fn test_single_value_range() {
        let r = range(7.0, 7.0);
        assert_eq!(r.span(), 1.0);
        assert_eq!(bucket(7.0, &r), 0);
    }

    #[test]
    fn test_fill_color_without_data() {
        let scale = color_scale(Some(&Indicator::Ekonomi));
        let r = range(1.0, 2.0);
        assert_eq!(fill_color(0.0, &scale, Some(&r)), "#ffffcc");
        assert_eq!(fill_color(2.0, &scale, None), "#ffffcc");
        assert_eq!(fill_color(2.0, &scale, Some(&r)), "#225ea8");
    }

    #[test]
    fn test_color_scales() {
        assert_eq!(color_scale(None), UNSELECTED_SCALE);
        assert_eq!(color_scale(Some(&Indicator::Kemiskinan))[4], "#cc4c02");
        assert_eq!(
            color_scale(Some(&Indicator::Other("Pendidikan".to_string())))[0],
            "#edf8fb"
        );
    }

    #[test]
    fn test_legend_is_descending_and_covers_range() {
        let scale = color_scale(Some(&Indicator::Sosial));
        let entries = legend(&scale, &range(0.5, 10.5));
        assert_eq!(entries.len(), BUCKETS);
        assert_eq!(entries[0].label, "Sangat Tinggi");
        assert_eq!(entries[0].color, scale[4]);
        assert_eq!(entries[0].upper, 10.5);
        assert_eq!(entries[4].label, "Sangat Rendah");
        assert_eq!(entries[4].lower, 0.5);
        assert_eq!(entries[4].upper, 2.5);
    }

    #[test]
    fn test_style_features() {
        let fc = parse_geojson(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"state": "A"}, "geometry": null},
                {"type": "Feature", "properties": {"state": "B"}, "geometry": null},
                {"type": "Feature", "properties": {"state": "C"}, "geometry": null}
            ]}"#,
        )
        .unwrap();
        let values = HashMap::from([("A".to_string(), 10.0), ("B".to_string(), 20.0)]);
        let mut joined = fc.with_values(&values);
        let r = style_features(&mut joined, Some(&Indicator::Demografi)).unwrap();
        assert_eq!(r, range(10.0, 20.0));

        let colors: Vec<&str> = joined
            .features
            .iter()
            .map(|f| {
                f.properties.as_ref().unwrap()[FILL_COLOR_PROPERTY]
                    .as_str()
                    .unwrap()
            })
            .collect();
        assert_eq!(colors, vec!["#e4e6f5", "#5e2c8a", "#e4e6f5"]);

        let props = joined.features[1].properties.as_ref().unwrap();
        assert_eq!(props[NAME_LABEL_PROPERTY], "B");
        assert_eq!(props[VALUE_LABEL_PROPERTY], "20");
    }

    #[test]
    fn test_style_features_without_dataset() {
        let mut fc = parse_geojson(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"state": "A", "value": 3}, "geometry": null}
            ]}"#,
        )
        .unwrap();
        style_features(&mut fc, None);
        assert_eq!(
            fc.features[0].properties.as_ref().unwrap()[FILL_COLOR_PROPERTY],
            "#3a7bd5"
        );
    }
}
