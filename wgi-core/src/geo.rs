//! GeoJSON province boundaries.
//!
//! Geometry is kept as an opaque `serde_json::Value`; only the feature
//! properties are interpreted. The map bridge receives the collection back
//! as JSON with `value` (and later styling) injected into the properties.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};

/// Property keys that may hold the province name, in lookup order.
pub const NAME_PROPERTIES: [&str; 5] = ["state", "Propinsi", "PROVINSI", "name", "NAME_1"];

/// Property key receiving the joined dataset value.
pub const VALUE_PROPERTY: &str = "value";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Feature {
    /// Province name of this feature, if any known name property is set.
    pub fn name(&self) -> Option<&str> {
        let props = self.properties.as_ref()?;
        NAME_PROPERTIES
            .iter()
            .find_map(|key| props.get(*key).and_then(Value::as_str))
    }

    /// The injected dataset value, `0` when absent.
    pub fn value(&self) -> f64 {
        self.properties
            .as_ref()
            .and_then(|p| p.get(VALUE_PROPERTY))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    pub fn set_property(&mut self, key: &str, value: Value) {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeatureCollection {
    /// Copy of this collection with each feature's `value` property set from
    /// `values` by province name. Provinces without data get `0`.
    pub fn with_values(&self, values: &HashMap<String, f64>) -> FeatureCollection {
        let mut joined = self.clone();
        let mut matched = 0usize;
        for feature in joined.features.iter_mut() {
            let value = feature
                .name()
                .and_then(|n| values.get(n))
                .copied()
                .filter(|v| v.is_finite());
            if value.is_some() {
                matched += 1;
            }
            feature.set_property(VALUE_PROPERTY, Value::from(value.unwrap_or(0.0)));
        }
        log::info!(
            "[WGI] geo: joined values into {}/{} features",
            matched,
            joined.features.len()
        );
        joined
    }

    /// Sorted, de-duplicated province names.
    pub fn province_names(&self) -> Vec<String> {
        self.features
            .iter()
            .filter_map(|f| f.name())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse a GeoJSON `FeatureCollection`.
pub fn parse_geojson(text: &str) -> anyhow::Result<FeatureCollection> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    if collection.kind != "FeatureCollection" {
        anyhow::bail!("expected a FeatureCollection, found '{}'", collection.kind);
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"state": "Bali"},
             "geometry": {"type": "Polygon", "coordinates": [[[115.0,-8.1],[115.7,-8.1],[115.7,-8.8],[115.0,-8.1]]]}},
            {"type": "Feature", "properties": {"state": "Aceh"},
             "geometry": {"type": "Polygon", "coordinates": [[[95.0,5.5],[97.0,5.5],[97.0,3.0],[95.0,5.5]]]}},
            {"type": "Feature", "properties": {"Propinsi": "Papua"}, "geometry": null},
            {"type": "Feature", "properties": null, "geometry": null}
        ]
    }"#;

    #[test]
    fn test_parse_and_names() {
        let fc = parse_geojson(SAMPLE).unwrap();
        assert_eq!(fc.features.len(), 4);
        assert_eq!(fc.features[0].name(), Some("Bali"));
        assert_eq!(fc.features[2].name(), Some("Papua"));
        assert_eq!(fc.features[3].name(), None);
        assert_eq!(fc.province_names(), vec!["Aceh", "Bali", "Papua"]);
    }

    #[test]
    fn test_with_values_injects_zero_for_unmatched() {
        let fc = parse_geojson(SAMPLE).unwrap();
        let values = HashMap::from([
            ("Bali".to_string(), 4.5),
            ("Papua".to_string(), f64::NAN),
        ]);
        let joined = fc.with_values(&values);
        assert_eq!(joined.features[0].value(), 4.5);
        assert_eq!(joined.features[1].value(), 0.0);
        assert_eq!(joined.features[2].value(), 0.0);
        assert_eq!(joined.features[3].value(), 0.0);
        // source collection is untouched
        assert!(fc.features[0].properties.as_ref().unwrap().get("value").is_none());
    }

    #[test]
    fn test_geometry_survives_round_trip() {
        let fc = parse_geojson(SAMPLE).unwrap();
        let out = fc.to_json().unwrap();
        let back = parse_geojson(&out).unwrap();
        assert_eq!(back.features[0].geometry, fc.features[0].geometry);
    }

    #[test]
    fn test_not_a_feature_collection() {
        assert!(parse_geojson(r#"{"type": "Feature", "features": []}"#).is_err());
    }
}
