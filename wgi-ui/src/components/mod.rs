//! Reusable Dioxus RSX components for WGI pages.

mod chart_container;
mod chart_header;
mod dataset_selector;
mod empty_state;
mod error_display;
mod loading_spinner;
mod map_legend;
mod opacity_slider;
mod pagination_bar;
mod region_info_panel;
mod search_box;
mod sort_header;
mod tile_provider_picker;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dataset_selector::DatasetSelector;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_legend::MapLegend;
pub use opacity_slider::OpacitySlider;
pub use pagination_bar::PaginationBar;
pub use region_info_panel::{RegionInfo, RegionInfoPanel};
pub use search_box::SearchBox;
pub use sort_header::SortHeader;
pub use tile_provider_picker::TileProviderPicker;
