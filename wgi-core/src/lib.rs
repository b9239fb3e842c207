//! Core types for WebGIS Indonesia.
//!
//! - `dataset`: the static dataset manifest and CSV file naming
//! - `observation`: per-province CSV rows and ranked observations
//! - `geo`: GeoJSON province boundaries and value injection
//! - `assets`: relative asset paths and base-map tile providers
//! - `province`: the 34 province names used by the BPS datasets

pub mod assets;
pub mod dataset;
pub mod geo;
pub mod observation;
pub mod province;
