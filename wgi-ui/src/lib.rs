//! Shared Dioxus components and Leaflet/D3.js bridge for WebGIS Indonesia.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the map and chart JS via `js_sys::eval()`
//! - `fetch`: static asset retrieval (plain or gzip-compressed)
//! - `state`: reactive `AppState` / `DatasetState` with Dioxus Signals
//! - `theme`: light and dark palettes
//! - `components`: reusable RSX components (selectors, panels, pagination, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
pub mod theme;
